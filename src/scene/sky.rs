use crate::foundation::core::{Color, Point, Rect, SceneSize};
use crate::foundation::error::SceneResult;
use crate::foundation::math::Rng64;
use crate::paint::context::DrawContext;
use crate::paint::gradient::Gradient;

/// Dawn ramp from the warm horizon glow at the top down to night blue.
pub(crate) const SKY_STOPS: [(f32, Color); 5] = [
    (0.0, Color::hex(0xfcd38f)),
    (0.25, Color::hex(0xf8b26b)),
    (0.5, Color::hex(0xe67a51)),
    (0.75, Color::hex(0x562c36)),
    (1.0, Color::hex(0x0f172a)),
];

pub(crate) const VIGNETTE_STOPS: [(f32, Color); 2] = [
    (0.0, Color::rgba(0, 0, 0, 0.0)),
    (1.0, Color::rgba(5, 6, 12, 0.45)),
];

/// Two-circle darkening ramp over the sky.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Vignette {
    pub inner_center: Point,
    pub inner_radius: f64,
    pub outer_center: Point,
    pub outer_radius: f64,
}

impl Vignette {
    pub fn for_size(size: SceneSize) -> Self {
        Self {
            inner_center: size.frac(0.48, 0.55),
            inner_radius: size.w() * 0.1,
            outer_center: size.frac(0.5, 0.5),
            outer_radius: size.w() * 0.75,
        }
    }
}

pub(crate) fn paint_sky(
    ctx: &mut DrawContext<'_>,
    size: SceneSize,
    _rng: &mut Rng64,
) -> SceneResult<()> {
    let full = Rect::new(0.0, 0.0, size.w(), size.h());

    let sky = Gradient::linear(Point::ZERO, Point::new(0.0, size.h())).with_stops(&SKY_STOPS)?;
    ctx.fill_rect(full, sky)?;

    let v = Vignette::for_size(size);
    let vignette = Gradient::radial(v.inner_center, v.inner_radius, v.outer_center, v.outer_radius)
        .with_stops(&VIGNETTE_STOPS)?;
    ctx.fill_rect(full, vignette)
}
