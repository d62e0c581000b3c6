use crate::foundation::core::{BezPath, Color, Point, SceneSize};
use crate::foundation::error::SceneResult;
use crate::foundation::math::Rng64;
use crate::paint::context::{DrawContext, LineCap};

pub const LAYER_COUNT: u32 = 8;

const TRUNK: Color = Color::rgba(0, 0, 0, 0.08);

/// One depth slice of the silhouette field. Layer 0 is the farthest.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ForestLayer {
    pub index: u32,
    /// `index / LAYER_COUNT`.
    pub depth: f64,
    pub base_y: f64,
    pub tree_count: u32,
    pub color: Color,
    /// Nominal tree height before the per-tree random factor.
    pub tree_height: f64,
    /// Vertical subdivisions of a tree; `detail - 1` branch pairs are drawn.
    pub detail: u32,
    pub branch_alpha: f32,
    /// Horizontal jitter bound; tree positions vary by up to this much either way.
    pub jitter: f64,
}

impl ForestLayer {
    pub fn new(index: u32, size: SceneSize) -> Self {
        let depth = f64::from(index) / f64::from(LAYER_COUNT);
        let i = index as u8;
        Self {
            index,
            depth,
            base_y: size.h() * (0.55 + depth * 0.25),
            tree_count: 22 + index * 4,
            color: Color::rgba(
                40 + i * 18,
                80 + i * 24,
                60 + i * 18,
                0.45 - index as f32 * 0.04,
            ),
            tree_height: size.h() * (0.16 + depth * 0.12),
            detail: index + 2,
            branch_alpha: 0.1 * (index + 1) as f32 / LAYER_COUNT as f32,
            jitter: 20.0 * size.unit(),
        }
    }

    /// All layers, far to near.
    pub fn all(size: SceneSize) -> Vec<Self> {
        (0..LAYER_COUNT).map(|i| Self::new(i, size)).collect()
    }
}

pub(crate) fn paint_forest(
    ctx: &mut DrawContext<'_>,
    size: SceneSize,
    rng: &mut Rng64,
) -> SceneResult<()> {
    for layer in ForestLayer::all(size) {
        let spacing = size.w() / f64::from(layer.tree_count);
        for j in 0..layer.tree_count {
            let x = spacing * f64::from(j) + rng.range(-layer.jitter, layer.jitter);
            let h = layer.tree_height * rng.range(0.8, 1.3);
            paint_tree(ctx, Point::new(x, layer.base_y), h, &layer)?;
        }
    }
    Ok(())
}

fn paint_tree(
    ctx: &mut DrawContext<'_>,
    base: Point,
    h: f64,
    layer: &ForestLayer,
) -> SceneResult<()> {
    let Point { x, y } = base;
    let top = Point::new(x, y - h);
    let silhouette = crown(base, h);

    ctx.scoped(|ctx| {
        ctx.fill(&silhouette, layer.color)?;

        ctx.set_line_cap(LineCap::Round);
        ctx.set_line_width((h * 0.015).max(1.0));
        ctx.stroke_line(base, top, TRUNK)?;

        let branch = Color::rgba(8, 14, 10, layer.branch_alpha);
        let detail = f64::from(layer.detail);
        for k in 1..layer.detail {
            let t = f64::from(k) / detail;
            let by = y - h * t;
            let len = h * 0.25 * (1.0 - t);

            let mut pair = BezPath::new();
            pair.move_to((x, by));
            pair.line_to((x - len, by - len * 0.2));
            pair.move_to((x, by));
            pair.line_to((x + len, by - len * 0.2));

            ctx.set_line_width((h * 0.006 * (1.0 - t)).max(0.6));
            ctx.stroke(&pair, branch)?;
        }
        Ok(())
    })
}

/// Narrow spire from `base` up to `h` above it, bulging `0.1h` each side.
fn crown(base: Point, h: f64) -> BezPath {
    let Point { x, y } = base;
    let top = Point::new(x, y - h);

    let mut path = BezPath::new();
    path.move_to(base);
    path.quad_to(Point::new(x - h * 0.1, y - h * 0.4), top);
    path.quad_to(Point::new(x + h * 0.1, y - h * 0.4), base);
    path
}
