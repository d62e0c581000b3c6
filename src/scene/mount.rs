//! The tiger the central figure rides.
//!
//! Geometry is authored in reference pixels relative to the anchor at `(0.38W, 0.72H)`;
//! the painter translates to the anchor and scales by the scene unit.

use crate::foundation::core::{BezPath, Color, Point, SceneSize};
use crate::foundation::error::SceneResult;
use crate::foundation::math::Rng64;
use crate::paint::context::{DrawContext, LineCap, LineJoin};
use crate::paint::gradient::Gradient;

pub const BACK_STRIPES: u32 = 12;
pub const HEAD_STRIPES: u32 = 5;

/// Angle ranges, degrees, stripes are sampled from.
pub(crate) const BACK_STRIPE_DEG: (f64, f64) = (-110.0, -88.0);
pub(crate) const HEAD_STRIPE_DEG: (f64, f64) = (-155.0, -143.0);

pub(crate) const BODY_STOPS: [(f32, Color); 3] = [
    (0.0, Color::hex(0xf59f0b)),
    (0.4, Color::hex(0xf97316)),
    (1.0, Color::hex(0xb45309)),
];

const SHADOW: Color = Color::rgba(0, 0, 0, 0.45);
const PALE: Color = Color::hex(0xf8d19b);
const LIMB: Color = Color::hex(0xf97316);
const INK: Color = Color::rgba(34, 14, 2, 0.88);
const EYE: Color = Color::hex(0x130607);
const GLINT: Color = Color::hex(0xffe8c6);

pub fn anchor(size: SceneSize) -> Point {
    size.frac(0.38, 0.72)
}

pub(crate) fn paint_mount(
    ctx: &mut DrawContext<'_>,
    size: SceneSize,
    rng: &mut Rng64,
) -> SceneResult<()> {
    let a = anchor(size);
    let unit = size.unit();

    ctx.scoped(|ctx| {
        ctx.translate(a.x, a.y);
        ctx.scale(unit);

        ctx.scoped(|ctx| {
            ctx.set_blur(2.0 * unit);
            ctx.fill_ellipse(Point::new(120.0, 26.0), 210.0, 48.0, SHADOW)
        })?;

        paint_body(ctx)?;
        paint_markings(ctx, rng)?;
        paint_face(ctx)
    })
}

fn paint_body(ctx: &mut DrawContext<'_>) -> SceneResult<()> {
    let fur = Gradient::linear(Point::new(0.0, -140.0), Point::new(360.0, 80.0))
        .with_stops(&BODY_STOPS)?;

    let mut body = BezPath::new();
    body.move_to((0.0, 0.0));
    body.curve_to((120.0, -180.0), (340.0, -150.0), (360.0, 0.0));
    body.curve_to((380.0, 60.0), (280.0, 86.0), (100.0, 90.0));
    body.curve_to((-40.0, 80.0), (-30.0, 20.0), (0.0, 0.0));
    body.close_path();
    ctx.fill(&body, fur)?;

    let mut chest = BezPath::new();
    chest.move_to((40.0, -40.0));
    chest.quad_to((80.0, 20.0), (40.0, 50.0));
    chest.quad_to((10.0, 26.0), (40.0, -40.0));
    ctx.fill(&chest, PALE)?;

    let mut muzzle = BezPath::new();
    muzzle.move_to((260.0, -126.0));
    muzzle.quad_to((330.0, -180.0), (360.0, -80.0));
    muzzle.quad_to((338.0, -56.0), (312.0, -46.0));
    muzzle.quad_to((282.0, -36.0), (260.0, -46.0));
    muzzle.close_path();
    ctx.fill(&muzzle, PALE)?;

    let mut hind = BezPath::new();
    hind.move_to((-10.0, 0.0));
    hind.quad_to((-32.0, 52.0), (16.0, 90.0));
    hind.quad_to((48.0, 100.0), (34.0, 54.0));
    hind.close_path();
    ctx.fill(&hind, LIMB)?;

    let mut fore = BezPath::new();
    fore.move_to((290.0, -20.0));
    fore.quad_to((340.0, 30.0), (324.0, 88.0));
    fore.quad_to((286.0, 82.0), (278.0, 10.0));
    fore.close_path();
    ctx.fill(&fore, LIMB)
}

fn paint_markings(ctx: &mut DrawContext<'_>, rng: &mut Rng64) -> SceneResult<()> {
    ctx.set_line_cap(LineCap::Round);
    ctx.set_line_join(LineJoin::Round);
    ctx.set_line_width(6.0);

    let mut spine = BezPath::new();
    spine.move_to((40.0, -62.0));
    spine.quad_to((160.0, -42.0), (260.0, -124.0));
    ctx.stroke(&spine, INK)?;

    ctx.set_line_width(5.0);
    for s in stripes(rng) {
        let (sin, cos) = s.angle_deg.to_radians().sin_cos();
        let end = Point::new(s.start.x + cos * s.len, s.start.y + sin * s.len);
        ctx.stroke_line(s.start, end, INK)?;
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Stripe {
    pub start: Point,
    pub len: f64,
    pub angle_deg: f64,
}

/// Back stripes along the flank, then head stripes toward the muzzle.
pub(crate) fn stripes(rng: &mut Rng64) -> Vec<Stripe> {
    let back = (0..BACK_STRIPES).map(f64::from).map(|i| Stripe {
        start: Point::new(60.0 + i * 22.0, -12.0 - i * 8.0),
        len: 65.0,
        angle_deg: rng.range(BACK_STRIPE_DEG.0, BACK_STRIPE_DEG.1),
    });
    let mut out: Vec<Stripe> = back.collect();
    out.extend((0..HEAD_STRIPES).map(f64::from).map(|i| Stripe {
        start: Point::new(260.0 + i * 14.0, -60.0 - i * 10.0),
        len: 60.0,
        angle_deg: rng.range(HEAD_STRIPE_DEG.0, HEAD_STRIPE_DEG.1),
    }));
    out
}

fn paint_face(ctx: &mut DrawContext<'_>) -> SceneResult<()> {
    ctx.fill_circle(Point::new(326.0, -96.0), 12.0, EYE)?;
    ctx.fill_circle(Point::new(322.0, -96.0), 5.0, GLINT)?;

    let mut mouth = BezPath::new();
    mouth.move_to((332.0, -70.0));
    mouth.quad_to((316.0, -64.0), (302.0, -58.0));
    ctx.set_line_width(4.0);
    ctx.stroke(&mouth, EYE)
}
