use std::f64::consts::TAU;

use crate::foundation::core::{Color, Point, SceneSize};
use crate::foundation::error::SceneResult;
use crate::foundation::math::Rng64;
use crate::paint::context::{CompositeMode, DrawContext};
use crate::paint::gradient::Gradient;

pub const SPARKLE_COUNT: u32 = 320;
pub const STREAK_COUNT: u32 = 160;

pub(crate) const STREAK_STOPS: [(f32, Color); 4] = [
    (0.0, Color::rgba(255, 202, 120, 0.0)),
    (0.28, Color::rgba(255, 227, 160, 0.2)),
    (0.7, Color::rgba(255, 255, 255, 0.08)),
    (1.0, Color::rgba(255, 215, 130, 0.0)),
];

/// Additive sparkles and light streaks drifting around the figures.
pub(crate) fn paint_ambient_glow(
    ctx: &mut DrawContext<'_>,
    size: SceneSize,
    rng: &mut Rng64,
) -> SceneResult<()> {
    let (w, h, u) = (size.w(), size.h(), size.unit());

    ctx.scoped(|ctx| {
        ctx.set_composite(CompositeMode::Lighter);

        for _ in 0..SPARKLE_COUNT {
            let x = rng.range(w * 0.2, w * 0.8);
            let y = rng.range(h * 0.1, h * 0.6);
            let r = rng.range(1.5, 5.3) * u;
            let alpha = rng.range(0.35, 0.65) as f32;
            ctx.fill_circle(Point::new(x, y), r, Color::rgba(248, 244, 219, alpha))?;
        }

        ctx.set_line_width(1.6 * u);
        for _ in 0..STREAK_COUNT {
            let start = Point::new(rng.range(w * 0.24, w * 0.76), rng.range(h * 0.2, h * 0.8));
            let len = rng.range(24.0, 144.0) * u;
            let (sin, cos) = rng.range(0.0, TAU).sin_cos();
            let end = Point::new(start.x + cos * len, start.y + sin * len);
            let ramp = Gradient::linear(start, end).with_stops(&STREAK_STOPS)?;
            ctx.stroke_line(start, end, ramp)?;
        }
        Ok(())
    })
}
