use crate::foundation::core::{Color, Point, SceneSize};
use crate::foundation::error::SceneResult;
use crate::foundation::math::Rng64;
use crate::paint::context::{CompositeMode, DrawContext};
use crate::paint::gradient::Gradient;
use crate::scene::figure;

pub(crate) const HALO_STOPS: [(f32, Color); 4] = [
    (0.0, Color::rgba(255, 255, 255, 0.9)),
    (0.35, Color::rgba(255, 223, 176, 0.42)),
    (0.72, Color::rgba(254, 202, 87, 0.16)),
    (1.0, Color::rgba(255, 255, 255, 0.0)),
];

/// Ring of light behind the central figure's head.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HaloLayout {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// Halo centre relative to the figure anchor, reference pixels: just above the head.
const HEAD_OFFSET: (f64, f64) = (12.0, -134.0);

impl HaloLayout {
    pub fn for_size(size: SceneSize) -> Self {
        let u = size.unit();
        let a = figure::anchor(size);
        Self {
            center: Point::new(a.x + HEAD_OFFSET.0 * u, a.y + HEAD_OFFSET.1 * u),
            inner_radius: 84.0 * u,
            outer_radius: 160.0 * u,
        }
    }
}

pub(crate) fn paint_halo(
    ctx: &mut DrawContext<'_>,
    size: SceneSize,
    _rng: &mut Rng64,
) -> SceneResult<()> {
    let halo = HaloLayout::for_size(size);
    let ramp = Gradient::concentric(halo.center, halo.inner_radius, halo.outer_radius)
        .with_stops(&HALO_STOPS)?;

    ctx.scoped(|ctx| {
        ctx.set_composite(CompositeMode::Lighter);
        ctx.fill_circle(halo.center, halo.outer_radius, ramp)
    })
}
