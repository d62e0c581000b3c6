use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Color, Point, Rect};
use crate::foundation::error::SceneResult;
use crate::paint::blur::blur_rgba8_premul;
use crate::paint::composite::{add_in_place, add_region, over_in_place};
use crate::paint::gradient::Gradient;

/// How a layer is combined with what is already on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeMode {
    /// Normal alpha compositing.
    #[default]
    SourceOver,
    /// Additive blending; never darkens the destination.
    Lighter,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Fill or stroke source.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Gradient(Gradient),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Self::Solid(c)
    }
}

impl From<Gradient> for Paint {
    fn from(g: Gradient) -> Self {
        Self::Gradient(g)
    }
}

impl From<&Gradient> for Paint {
    fn from(g: &Gradient) -> Self {
        Self::Gradient(g.clone())
    }
}

/// Everything a draw call inherits from the context.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawState {
    /// Logical-space transform, applied before the device scale.
    pub transform: Affine,
    /// Multiplier for every paint's alpha, `0.0..=1.0`.
    pub global_alpha: f64,
    pub composite: CompositeMode,
    /// Gaussian blur radius in logical pixels; `0.0` disables the filter.
    pub blur_px: f64,
    pub line_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            global_alpha: 1.0,
            composite: CompositeMode::SourceOver,
            blur_px: 0.0,
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct LayerKey {
    composite: CompositeMode,
    blur_px: f64,
}

enum LayerTarget {
    /// Draws rasterized together, source-over each other.
    Raster(vello_cpu::RenderContext),
    /// Each draw is rasterized on its own and summed into this buffer.
    Additive(vello_cpu::Pixmap),
}

struct Batch {
    key: LayerKey,
    target: LayerTarget,
}

enum DrawOp<'a> {
    Fill(&'a BezPath),
    Stroke(&'a BezPath),
}

/// Immediate-mode 2D drawing context over a premultiplied RGBA8 pixmap.
///
/// Consecutive draws that share a composite mode and blur radius go into one transparent
/// layer; the layer is blurred (if requested) and composited onto the target when the mode
/// or radius changes, or when the context is finished. In a [`CompositeMode::Lighter`] layer
/// every draw is added to the others, so overlapping light accumulates.
pub struct DrawContext<'s> {
    target: &'s mut vello_cpu::Pixmap,
    width: u16,
    height: u16,
    device_scale: f64,
    batch: Option<Batch>,
    state: DrawState,
    stack: Vec<DrawState>,
    layers: usize,
}

impl<'s> DrawContext<'s> {
    pub(crate) fn new(target: &'s mut vello_cpu::Pixmap, device_scale: f64) -> Self {
        let width = target.width();
        let height = target.height();
        Self {
            target,
            width,
            height,
            device_scale,
            batch: None,
            state: DrawState::default(),
            stack: Vec::new(),
            layers: 0,
        }
    }

    /// Current drawing state.
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    /// Number of saved states not yet restored.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Run `f` with a saved copy of the drawing state, restoring it afterwards.
    ///
    /// The state is restored even when `f` fails.
    pub fn scoped<R>(
        &mut self,
        f: impl FnOnce(&mut Self) -> SceneResult<R>,
    ) -> SceneResult<R> {
        self.stack.push(self.state.clone());
        let out = f(self);
        if let Some(saved) = self.stack.pop() {
            self.state = saved;
        }
        out
    }

    pub fn set_global_alpha(&mut self, alpha: f64) {
        if alpha.is_finite() {
            self.state.global_alpha = alpha.clamp(0.0, 1.0);
        }
    }

    pub fn set_composite(&mut self, mode: CompositeMode) {
        self.state.composite = mode;
    }

    /// Blur subsequent draws by `px` logical pixels. Non-finite or negative values disable it.
    pub fn set_blur(&mut self, px: f64) {
        self.state.blur_px = if px.is_finite() { px.max(0.0) } else { 0.0 };
    }

    pub fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
    }

    pub fn set_line_join(&mut self, join: LineJoin) {
        self.state.line_join = join;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.state.transform = self.state.transform * Affine::translate((dx, dy));
    }

    /// Rotate subsequent geometry by `radians` (clockwise in y-down space).
    pub fn rotate(&mut self, radians: f64) {
        self.state.transform = self.state.transform * Affine::rotate(radians);
    }

    pub fn scale(&mut self, s: f64) {
        self.state.transform = self.state.transform * Affine::scale(s);
    }

    pub fn set_transform(&mut self, transform: Affine) {
        self.state.transform = transform;
    }

    pub fn fill(&mut self, path: &BezPath, paint: impl Into<Paint>) -> SceneResult<()> {
        self.draw(paint.into(), DrawOp::Fill(path))
    }

    pub fn stroke(&mut self, path: &BezPath, paint: impl Into<Paint>) -> SceneResult<()> {
        self.draw(paint.into(), DrawOp::Stroke(path))
    }

    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) -> SceneResult<()> {
        self.fill(&rect.to_path(0.1), paint)
    }

    pub fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        paint: impl Into<Paint>,
    ) -> SceneResult<()> {
        self.fill_ellipse(center, radius, radius, paint)
    }

    pub fn fill_ellipse(
        &mut self,
        center: Point,
        rx: f64,
        ry: f64,
        paint: impl Into<Paint>,
    ) -> SceneResult<()> {
        if !(rx > 0.0 && ry > 0.0) {
            return Ok(());
        }
        let path = kurbo::Ellipse::new(center, (rx, ry), 0.0).to_path(0.1);
        self.fill(&path, paint)
    }

    pub fn stroke_line(&mut self, p0: Point, p1: Point, paint: impl Into<Paint>) -> SceneResult<()> {
        let mut path = BezPath::new();
        path.move_to(p0);
        path.line_to(p1);
        self.stroke(&path, paint)
    }

    /// Composite any pending layer and return how many layers reached the target.
    pub fn finish(mut self) -> SceneResult<usize> {
        self.flush_batch()?;
        Ok(self.layers)
    }

    fn draw(&mut self, paint: Paint, op: DrawOp<'_>) -> SceneResult<()> {
        let alpha = self.state.global_alpha;
        if alpha <= 0.0 {
            return Ok(());
        }
        let transform = Affine::scale(self.device_scale) * self.state.transform;
        let stroke = self.cpu_stroke();
        let (w, h) = (self.width, self.height);

        match self.batch_target()? {
            LayerTarget::Raster(ctx) => {
                rasterize(ctx, transform, &paint, alpha, &stroke, &op);
            }
            LayerTarget::Additive(acc) => {
                let Some((x0, y0, tw, th)) = device_bounds(transform, &stroke, &op, w, h) else {
                    return Ok(());
                };
                let mut ctx = vello_cpu::RenderContext::new(tw, th);
                let local = Affine::translate((-f64::from(x0), -f64::from(y0))) * transform;
                rasterize(&mut ctx, local, &paint, alpha, &stroke, &op);
                ctx.flush();

                let mut tile = vello_cpu::Pixmap::new(tw, th);
                ctx.render_to_pixmap(&mut tile);
                add_region(
                    acc.data_as_u8_slice_mut(),
                    usize::from(w),
                    tile.data_as_u8_slice(),
                    usize::from(tw),
                    (usize::from(x0), usize::from(y0)),
                )?;
            }
        }
        Ok(())
    }

    fn cpu_stroke(&self) -> vello_cpu::kurbo::Stroke {
        use vello_cpu::kurbo::{Cap, Join};

        let cap = match self.state.line_cap {
            LineCap::Butt => Cap::Butt,
            LineCap::Round => Cap::Round,
            LineCap::Square => Cap::Square,
        };
        let join = match self.state.line_join {
            LineJoin::Miter => Join::Miter,
            LineJoin::Round => Join::Round,
            LineJoin::Bevel => Join::Bevel,
        };
        vello_cpu::kurbo::Stroke::new(self.state.line_width)
            .with_caps(cap)
            .with_join(join)
    }

    fn batch_target(&mut self) -> SceneResult<&mut LayerTarget> {
        let key = LayerKey {
            composite: self.state.composite,
            blur_px: self.state.blur_px,
        };
        if self.batch.as_ref().is_some_and(|b| b.key != key) {
            self.flush_batch()?;
        }
        let (w, h) = (self.width, self.height);
        let batch = self.batch.get_or_insert_with(|| Batch {
            key,
            target: match key.composite {
                CompositeMode::SourceOver => {
                    LayerTarget::Raster(vello_cpu::RenderContext::new(w, h))
                }
                CompositeMode::Lighter => LayerTarget::Additive(vello_cpu::Pixmap::new(w, h)),
            },
        });
        Ok(&mut batch.target)
    }

    fn flush_batch(&mut self) -> SceneResult<()> {
        let Some(batch) = self.batch.take() else {
            return Ok(());
        };

        let layer = match batch.target {
            LayerTarget::Raster(mut ctx) => {
                let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
                ctx.flush();
                ctx.render_to_pixmap(&mut layer);
                layer
            }
            LayerTarget::Additive(acc) => acc,
        };

        let sigma = batch.key.blur_px * self.device_scale;
        let blurred;
        let src = if sigma >= 0.5 {
            blurred = blur_rgba8_premul(
                layer.data_as_u8_slice(),
                u32::from(self.width),
                u32::from(self.height),
                sigma,
            )?;
            blurred.as_slice()
        } else {
            layer.data_as_u8_slice()
        };

        let dst = self.target.data_as_u8_slice_mut();
        match batch.key.composite {
            CompositeMode::SourceOver => over_in_place(dst, src, 1.0)?,
            CompositeMode::Lighter => add_in_place(dst, src)?,
        }
        self.layers += 1;
        tracing::trace!(
            layer = self.layers,
            composite = ?batch.key.composite,
            sigma,
            "composited layer"
        );
        Ok(())
    }
}

fn rasterize(
    ctx: &mut vello_cpu::RenderContext,
    transform: Affine,
    paint: &Paint,
    alpha: f64,
    stroke: &vello_cpu::kurbo::Stroke,
    op: &DrawOp<'_>,
) {
    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    match paint {
        Paint::Solid(c) => ctx.set_paint(c.fade(alpha).to_cpu()),
        Paint::Gradient(g) => ctx.set_paint(g.to_cpu(alpha)),
    }
    match op {
        DrawOp::Fill(path) => ctx.fill_path(&bezpath_to_cpu(path)),
        DrawOp::Stroke(path) => {
            ctx.set_stroke(stroke.clone());
            ctx.stroke_path(&bezpath_to_cpu(path));
        }
    }
}

/// Pixel-aligned device rectangle `(x, y, width, height)` a draw can touch, clipped to the
/// canvas. `None` when nothing of it is visible.
fn device_bounds(
    transform: Affine,
    stroke: &vello_cpu::kurbo::Stroke,
    op: &DrawOp<'_>,
    width: u16,
    height: u16,
) -> Option<(u16, u16, u16, u16)> {
    let (path, pad) = match op {
        DrawOp::Fill(path) => (*path, 1.0),
        DrawOp::Stroke(path) => {
            // Frobenius norm bounds the largest stretch of the linear part.
            let [a, b, c, d, _, _] = transform.as_coeffs();
            let stretch = (a * a + b * b + c * c + d * d).sqrt();
            let reach = stroke.width * 0.5 * stroke.miter_limit.max(1.0);
            (*path, reach * stretch + 1.0)
        }
    };
    let mut device = path.clone();
    device.apply_affine(transform);
    let bounds = device.bounding_box().inflate(pad, pad);
    let canvas = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));

    let x0 = bounds.x0.max(canvas.x0).floor();
    let y0 = bounds.y0.max(canvas.y0).floor();
    let x1 = bounds.x1.min(canvas.x1).ceil();
    let y1 = bounds.y1.min(canvas.y1).ceil();
    if !(x1 > x0 && y1 > y0) {
        return None;
    }
    Some((x0 as u16, y0 as u16, (x1 - x0) as u16, (y1 - y0) as u16))
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use crate::paint::gradient::point_to_cpu;
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/paint/context.rs"]
mod tests;
