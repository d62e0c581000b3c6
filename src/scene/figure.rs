//! The robed saint seated on the tiger, holding a staff topped by a trefoil emblem.

use crate::foundation::core::{BezPath, Color, Point, SceneSize};
use crate::foundation::error::SceneResult;
use crate::foundation::math::Rng64;
use crate::paint::context::{DrawContext, LineCap};
use crate::paint::gradient::Gradient;

pub(crate) const ROBE_STOPS: [(f32, Color); 4] = [
    (0.0, Color::hex(0xff7f11)),
    (0.4, Color::hex(0xff8f1f)),
    (0.74, Color::hex(0xf97316)),
    (1.0, Color::hex(0xb45309)),
];

const SKIN: Color = Color::hex(0xfce1c3);
const SAFFRON: Color = Color::hex(0xff8f1f);
const HAIR: Color = Color::hex(0x3f1d0b);
const LIPS: Color = Color::hex(0x2e160b);
const ASH: Color = Color::hex(0xcbd5f5);
const SANDAL: Color = Color::hex(0xe2e8f0);
const ARM: Color = Color::hex(0xfed7aa);
const GOLD: Color = Color::hex(0xfde68a);
const STAFF: Color = Color::hex(0xfcd38f);
const FERRULE: Color = Color::hex(0xf59e0b);
const EMBLEM: Color = Color::hex(0xf1c076);

/// Horizontal offset of the staff from the anchor, reference pixels.
const STAFF_X: f64 = 180.0;
const STAFF_TOP: f64 = -220.0;

pub fn anchor(size: SceneSize) -> Point {
    size.frac(0.47, 0.48)
}

pub(crate) fn paint_central_figure(
    ctx: &mut DrawContext<'_>,
    size: SceneSize,
    _rng: &mut Rng64,
) -> SceneResult<()> {
    let a = anchor(size);
    ctx.scoped(|ctx| {
        ctx.translate(a.x, a.y);
        ctx.scale(size.unit());

        paint_robe(ctx)?;
        paint_head(ctx)?;
        ctx.set_line_cap(LineCap::Round);
        paint_staff(ctx)?;
        paint_arms(ctx)
    })
}

fn paint_robe(ctx: &mut DrawContext<'_>) -> SceneResult<()> {
    let cloth = Gradient::linear(Point::new(-60.0, -140.0), Point::new(120.0, 260.0))
        .with_stops(&ROBE_STOPS)?;

    let mut robe = BezPath::new();
    robe.move_to((0.0, -60.0));
    robe.curve_to((-150.0, 120.0), (-60.0, 260.0), (60.0, 260.0));
    robe.curve_to((210.0, 190.0), (120.0, 0.0), (60.0, -50.0));
    robe.quad_to((20.0, -120.0), (0.0, -60.0));
    robe.close_path();
    ctx.fill(&robe, cloth)
}

fn paint_head(ctx: &mut DrawContext<'_>) -> SceneResult<()> {
    ctx.fill_ellipse(Point::new(12.0, -140.0), 46.0, 58.0, SKIN)?;

    let mut hood = BezPath::new();
    hood.move_to((-42.0, -158.0));
    hood.quad_to((10.0, -220.0), (62.0, -152.0));
    hood.quad_to((72.0, -112.0), (52.0, -68.0));
    hood.quad_to((-18.0, -118.0), (-42.0, -158.0));
    hood.close_path();
    ctx.fill(&hood, SAFFRON)?;

    let mut beard = BezPath::new();
    beard.move_to((-10.0, -148.0));
    beard.quad_to((12.0, -110.0), (32.0, -148.0));
    beard.quad_to((12.0, -140.0), (-10.0, -148.0));
    beard.close_path();
    ctx.fill(&beard, HAIR)?;

    ctx.set_line_width(4.0);
    ctx.stroke_line(Point::new(-4.0, -128.0), Point::new(-2.0, -110.0), HAIR)?;
    ctx.stroke_line(Point::new(32.0, -128.0), Point::new(30.0, -108.0), HAIR)?;

    ctx.scoped(|ctx| {
        ctx.set_line_cap(LineCap::Round);
        ctx.set_line_width(6.0);
        let mut smile = BezPath::new();
        smile.move_to((4.0, -104.0));
        smile.quad_to((18.0, -96.0), (32.0, -104.0));
        ctx.stroke(&smile, LIPS)?;

        ctx.set_line_width(12.0);
        ctx.stroke_line(Point::new(6.0, -128.0), Point::new(8.0, -114.0), ASH)?;
        ctx.set_line_width(18.0);
        ctx.stroke_line(Point::new(6.0, -130.0), Point::new(-8.0, -130.0), SANDAL)
    })
}

fn paint_staff(ctx: &mut DrawContext<'_>) -> SceneResult<()> {
    let tip = Point::new(STAFF_X, STAFF_TOP);

    ctx.set_line_width(24.0);
    ctx.stroke_line(tip, Point::new(STAFF_X, 54.0), STAFF)?;
    ctx.set_line_width(10.0);
    ctx.stroke_line(Point::new(STAFF_X, STAFF_TOP + 4.0), Point::new(STAFF_X, 50.0), GOLD)?;

    ctx.scoped(|ctx| {
        ctx.set_line_cap(LineCap::Butt);
        ctx.set_line_width(14.0);
        ctx.stroke_line(Point::new(STAFF_X, 60.0), Point::new(STAFF_X - 8.0, 76.0), FERRULE)
    })?;

    // Trefoil: a straight centre prong flanked by two curved ones.
    ctx.set_line_width(8.0);
    ctx.stroke_line(tip, Point::new(STAFF_X, STAFF_TOP - 42.0), EMBLEM)?;
    for side in [-1.0, 1.0] {
        let mut prong = BezPath::new();
        prong.move_to(tip);
        prong.quad_to(
            (STAFF_X + side * 24.0, STAFF_TOP - 12.0),
            (STAFF_X + side * 20.0, STAFF_TOP - 32.0),
        );
        ctx.stroke(&prong, EMBLEM)?;
    }

    let mut blade = BezPath::new();
    blade.move_to(tip);
    blade.quad_to((STAFF_X + 22.0, STAFF_TOP + 20.0), (STAFF_X, STAFF_TOP + 40.0));
    blade.quad_to(Point::new(STAFF_X - 28.0, STAFF_TOP + 20.0), tip);
    blade.close_path();
    ctx.fill(&blade, STAFF)
}

fn paint_arms(ctx: &mut DrawContext<'_>) -> SceneResult<()> {
    let mut forearm = BezPath::new();
    forearm.move_to((-56.0, 72.0));
    forearm.quad_to((8.0, 56.0), (-16.0, -10.0));
    ctx.set_line_width(20.0);
    ctx.stroke(&forearm, ARM)?;

    let mut bangle = BezPath::new();
    bangle.move_to((-64.0, 56.0));
    bangle.quad_to((-16.0, 20.0), (-18.0, -28.0));
    ctx.set_line_width(14.0);
    ctx.stroke(&bangle, GOLD)?;

    let mut garland = BezPath::new();
    garland.move_to((110.0, 64.0));
    garland.quad_to((84.0, 36.0), (92.0, -20.0));
    ctx.set_line_width(18.0);
    ctx.stroke(&garland, GOLD)
}
