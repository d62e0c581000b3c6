use std::f64::consts::TAU;

use crate::foundation::core::{Affine, BezPath, Color, Point, SceneSize};
use crate::foundation::error::SceneResult;
use crate::foundation::math::Rng64;
use crate::paint::context::{CompositeMode, DrawContext};
use crate::paint::gradient::Gradient;

pub const BEAM_COUNT: u32 = 80;

pub(crate) const DISC_STOPS: [(f32, Color); 3] = [
    (0.0, Color::rgba(255, 230, 180, 0.95)),
    (0.5, Color::rgba(255, 198, 120, 0.75)),
    (1.0, Color::rgba(255, 170, 90, 0.0)),
];

pub(crate) const BEAM_STOPS: [(f32, Color); 3] = [
    (0.0, Color::rgba(255, 220, 160, 0.32)),
    (0.4, Color::rgba(255, 220, 160, 0.12)),
    (1.0, Color::rgba(255, 220, 160, 0.0)),
];

/// Placement of the sun disc and the fan of beams around it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LightLayout {
    pub center: Point,
    /// Radius where the disc ramp starts.
    pub core_radius: f64,
    pub radius: f64,
    pub beam_count: u32,
    /// Rotation between consecutive beams, radians.
    pub beam_step: f64,
    pub beam_length: f64,
    /// Half-width of a beam at its root; the far end is four times wider.
    pub beam_half_width: f64,
}

impl LightLayout {
    pub fn for_size(size: SceneSize) -> Self {
        let radius = size.w() * 0.12;
        Self {
            center: size.frac(0.58, 0.35),
            core_radius: radius * 0.1,
            radius,
            beam_count: BEAM_COUNT,
            beam_step: TAU / f64::from(BEAM_COUNT),
            beam_length: size.w() * 0.65,
            beam_half_width: size.w() * 0.005,
        }
    }

    /// Local frame of each beam around the centre; every frame turns one `beam_step`
    /// further than the previous one.
    pub fn beam_frames(self) -> impl Iterator<Item = Affine> {
        let turn = Affine::rotate(self.beam_step);
        std::iter::successors(Some(turn), move |frame| Some(*frame * turn))
            .take(self.beam_count as usize)
    }
}

pub(crate) fn paint_light_source(
    ctx: &mut DrawContext<'_>,
    size: SceneSize,
    _rng: &mut Rng64,
) -> SceneResult<()> {
    let l = LightLayout::for_size(size);
    let disc = Gradient::concentric(l.center, l.core_radius, l.radius).with_stops(&DISC_STOPS)?;

    ctx.scoped(|ctx| {
        ctx.set_composite(CompositeMode::Lighter);
        ctx.fill_circle(l.center, l.radius, disc)
    })
}

pub(crate) fn paint_light_beams(
    ctx: &mut DrawContext<'_>,
    size: SceneSize,
    _rng: &mut Rng64,
) -> SceneResult<()> {
    let l = LightLayout::for_size(size);
    let hw = l.beam_half_width;
    let len = l.beam_length;

    let mut wedge = BezPath::new();
    wedge.move_to((0.0, -hw));
    wedge.line_to((len, -hw * 4.0));
    wedge.line_to((len, hw * 4.0));
    wedge.line_to((0.0, hw));
    wedge.close_path();

    // Beam gradients live in the rotated frame, so one ramp serves every wedge.
    let ramp = Gradient::linear(Point::ZERO, Point::new(len, 0.0)).with_stops(&BEAM_STOPS)?;

    ctx.scoped(|ctx| {
        ctx.translate(l.center.x, l.center.y);
        let origin = ctx.state().transform;
        for frame in l.beam_frames() {
            ctx.set_transform(origin * frame);
            ctx.fill(&wedge, &ramp)?;
        }
        Ok(())
    })
}
