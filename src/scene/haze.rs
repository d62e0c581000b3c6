use crate::foundation::core::{Color, Point, Rect, SceneSize};
use crate::foundation::error::SceneResult;
use crate::foundation::math::Rng64;
use crate::paint::context::DrawContext;
use crate::paint::gradient::Gradient;

pub const BAND_COUNT: u32 = 4;
pub const FOG_BLOB_COUNT: u32 = 220;
const FOG_ALPHA: f64 = 0.08;

const FOREGROUND_ALPHA: f64 = 0.45;
pub(crate) const FOREGROUND_STOPS: [(f32, Color); 2] = [
    (0.0, Color::rgba(255, 255, 255, 0.14)),
    (1.0, Color::rgba(255, 255, 255, 0.04)),
];

/// A blurred horizontal mist band.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HazeBand {
    pub rect: Rect,
    pub top_color: Color,
    pub bottom_color: Color,
    pub blur: f64,
}

impl HazeBand {
    pub fn new(index: u32, size: SceneSize) -> Self {
        let i = f64::from(index);
        let tint = |a: f64| Color::rgba(220, 245, 255, a as f32);
        let top = size.h() * (0.5 + i * 0.08);
        Self {
            rect: Rect::new(0.0, top, size.w(), top + size.h() * 0.2),
            top_color: tint(0.02 + i * 0.04),
            bottom_color: tint(0.1 - i * 0.015),
            blur: (40.0 - i * 8.0) * size.unit(),
        }
    }

    pub fn all(size: SceneSize) -> Vec<Self> {
        (0..BAND_COUNT).map(|i| Self::new(i, size)).collect()
    }
}

/// The soft mist laid over the lower part of the finished picture.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ForegroundHaze {
    pub rect: Rect,
    pub blur: f64,
    pub alpha: f64,
}

impl ForegroundHaze {
    pub fn for_size(size: SceneSize) -> Self {
        let top = size.h() * 0.66;
        Self {
            rect: Rect::new(0.0, top, size.w(), (top + size.h() * 0.4).min(size.h())),
            blur: 32.0 * size.unit(),
            alpha: FOREGROUND_ALPHA,
        }
    }
}

pub(crate) fn paint_haze(
    ctx: &mut DrawContext<'_>,
    size: SceneSize,
    rng: &mut Rng64,
) -> SceneResult<()> {
    ctx.scoped(|ctx| {
        for band in HazeBand::all(size) {
            // Every band shares one ramp over the lower half of the canvas.
            let ramp = Gradient::linear(Point::new(0.0, size.h() * 0.5), Point::new(0.0, size.h()))
                .with_stops(&[(0.0, band.top_color), (1.0, band.bottom_color)])?;
            ctx.set_blur(band.blur);
            ctx.fill_rect(band.rect, ramp)?;
        }
        Ok(())
    })?;

    let unit = size.unit();
    ctx.scoped(|ctx| {
        ctx.set_global_alpha(FOG_ALPHA);
        for _ in 0..FOG_BLOB_COUNT {
            let x = rng.range(0.0, size.w());
            let y = rng.range(size.h() * 0.45, size.h() * 0.85);
            let r = rng.range(40.0, 160.0) * unit;
            let center = Point::new(x, y);
            let blob = Gradient::concentric(center, 0.0, r).with_stops(&[
                (0.0, Color::rgba(255, 255, 255, 0.16)),
                (1.0, Color::rgba(255, 255, 255, 0.0)),
            ])?;
            ctx.fill_circle(center, r, blob)?;
        }
        Ok(())
    })
}

pub(crate) fn paint_foreground_haze(
    ctx: &mut DrawContext<'_>,
    size: SceneSize,
    _rng: &mut Rng64,
) -> SceneResult<()> {
    let fg = ForegroundHaze::for_size(size);
    let ramp = Gradient::linear(Point::new(0.0, fg.rect.y0), Point::new(0.0, size.h()))
        .with_stops(&FOREGROUND_STOPS)?;

    ctx.scoped(|ctx| {
        ctx.set_blur(fg.blur);
        ctx.set_global_alpha(fg.alpha);
        ctx.fill_rect(fg.rect, ramp)
    })
}
