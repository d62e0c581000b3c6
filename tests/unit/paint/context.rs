use super::*;

fn pixel(pixmap: &vello_cpu::Pixmap, x: usize, y: usize) -> [u8; 4] {
    let w = usize::from(pixmap.width());
    let i = (y * w + x) * 4;
    let d = pixmap.data_as_u8_slice();
    [d[i], d[i + 1], d[i + 2], d[i + 3]]
}

fn close(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tol)
}

#[test]
fn default_state_is_identity_source_over() {
    let mut pixmap = vello_cpu::Pixmap::new(4, 4);
    let ctx = DrawContext::new(&mut pixmap, 1.0);
    assert_eq!(ctx.state(), &DrawState::default());
    assert_eq!(ctx.save_depth(), 0);
}

#[test]
fn scoped_restores_state_even_on_error() {
    let mut pixmap = vello_cpu::Pixmap::new(4, 4);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    let before = ctx.state().clone();

    let res: SceneResult<()> = ctx.scoped(|c| {
        c.set_global_alpha(0.25);
        c.set_composite(CompositeMode::Lighter);
        c.translate(10.0, 0.0);
        assert_eq!(c.save_depth(), 1);
        Err(crate::foundation::error::SceneError::render("boom"))
    });

    assert!(res.is_err());
    assert_eq!(ctx.state(), &before);
    assert_eq!(ctx.save_depth(), 0);
}

#[test]
fn opaque_fill_covers_target() {
    let mut pixmap = vello_cpu::Pixmap::new(4, 4);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    ctx.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgb(255, 0, 0))
        .unwrap();
    assert_eq!(ctx.finish().unwrap(), 1);
    assert!(close(pixel(&pixmap, 2, 2), [255, 0, 0, 255], 1));
}

#[test]
fn device_scale_maps_logical_to_physical() {
    let mut pixmap = vello_cpu::Pixmap::new(8, 8);
    let mut ctx = DrawContext::new(&mut pixmap, 2.0);
    ctx.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), Color::rgb(0, 0, 255))
        .unwrap();
    ctx.finish().unwrap();
    assert!(close(pixel(&pixmap, 3, 3), [0, 0, 255, 255], 1));
    assert_eq!(pixel(&pixmap, 6, 6), [0, 0, 0, 0]);
}

#[test]
fn global_alpha_scales_paint() {
    let mut pixmap = vello_cpu::Pixmap::new(4, 4);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    ctx.set_global_alpha(0.5);
    ctx.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgb(255, 255, 255))
        .unwrap();
    ctx.finish().unwrap();
    let px = pixel(&pixmap, 1, 1);
    assert!(px[3].abs_diff(128) <= 2, "{px:?}");
}

#[test]
fn zero_alpha_draws_nothing() {
    let mut pixmap = vello_cpu::Pixmap::new(4, 4);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    ctx.set_global_alpha(0.0);
    ctx.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgb(255, 255, 255))
        .unwrap();
    assert_eq!(ctx.finish().unwrap(), 0);
    assert_eq!(pixel(&pixmap, 1, 1), [0, 0, 0, 0]);
}

#[test]
fn lighter_never_darkens() {
    let mut pixmap = vello_cpu::Pixmap::new(4, 4);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    ctx.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgb(100, 120, 140))
        .unwrap();
    ctx.set_composite(CompositeMode::Lighter);
    ctx.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgba(0, 0, 0, 0.8))
        .unwrap();
    ctx.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgba(50, 10, 0, 1.0))
        .unwrap();
    assert_eq!(ctx.finish().unwrap(), 2);

    let px = pixel(&pixmap, 2, 2);
    assert!(close(px, [150, 130, 140, 255], 2), "{px:?}");
}

#[test]
fn overlapping_lighter_draws_add_up() {
    let mut pixmap = vello_cpu::Pixmap::new(4, 4);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    ctx.set_composite(CompositeMode::Lighter);
    let full = Rect::new(0.0, 0.0, 4.0, 4.0);
    ctx.fill_rect(full, Color::rgb(100, 0, 0)).unwrap();
    ctx.fill_rect(full, Color::rgb(100, 0, 0)).unwrap();
    assert_eq!(ctx.finish().unwrap(), 1);

    let px = pixel(&pixmap, 1, 1);
    assert!(close(px, [200, 0, 0, 255], 2), "{px:?}");
}

#[test]
fn overlapping_translucent_sparkles_saturate_alpha() {
    let mut pixmap = vello_cpu::Pixmap::new(16, 16);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    ctx.set_composite(CompositeMode::Lighter);
    let sparkle = Color::rgba(248, 244, 219, 0.5);
    ctx.fill_circle(Point::new(8.0, 8.0), 6.0, sparkle).unwrap();
    ctx.fill_circle(Point::new(8.0, 8.0), 6.0, sparkle).unwrap();
    ctx.finish().unwrap();

    let px = pixel(&pixmap, 8, 8);
    assert!(px[3] >= 253, "{px:?}");
    assert_eq!(pixel(&pixmap, 0, 0), [0, 0, 0, 0]);
}

#[test]
fn lighter_tiles_land_where_the_shape_is() {
    let mut pixmap = vello_cpu::Pixmap::new(16, 16);
    let mut ctx = DrawContext::new(&mut pixmap, 2.0);
    ctx.set_composite(CompositeMode::Lighter);
    ctx.translate(4.0, 0.0);
    ctx.fill_rect(Rect::new(0.0, 2.0, 2.0, 4.0), Color::rgb(0, 90, 0))
        .unwrap();
    ctx.fill_rect(Rect::new(1.0, 2.0, 3.0, 4.0), Color::rgb(0, 90, 0))
        .unwrap();
    ctx.set_line_width(1.0);
    ctx.stroke_line(Point::new(-4.0, 7.0), Point::new(20.0, 7.0), Color::rgb(0, 0, 60))
        .unwrap();
    ctx.finish().unwrap();

    // Device x 8..12 and 10..14 overlap on 10..12; rows 4..8.
    assert!(close(pixel(&pixmap, 9, 5), [0, 90, 0, 255], 2));
    assert!(close(pixel(&pixmap, 11, 5), [0, 180, 0, 255], 2));
    assert!(close(pixel(&pixmap, 13, 5), [0, 90, 0, 255], 2));
    assert_eq!(pixel(&pixmap, 5, 5), [0, 0, 0, 0]);
    // The stroke runs off both edges of the canvas and is clipped, not dropped.
    assert!(close(pixel(&pixmap, 0, 14), [0, 0, 60, 255], 2));
    assert!(close(pixel(&pixmap, 15, 13), [0, 0, 60, 255], 2));
}

#[test]
fn mode_changes_split_layers() {
    let mut pixmap = vello_cpu::Pixmap::new(4, 4);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    let r = Rect::new(0.0, 0.0, 1.0, 1.0);
    ctx.fill_rect(r, Color::rgb(1, 1, 1)).unwrap();
    ctx.fill_rect(r, Color::rgb(2, 2, 2)).unwrap();
    ctx.set_blur(2.0);
    ctx.fill_rect(r, Color::rgb(3, 3, 3)).unwrap();
    ctx.set_blur(0.0);
    ctx.fill_rect(r, Color::rgb(4, 4, 4)).unwrap();
    assert_eq!(ctx.finish().unwrap(), 3);
}

#[test]
fn blur_spreads_beyond_shape() {
    let mut pixmap = vello_cpu::Pixmap::new(32, 32);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    ctx.set_blur(4.0);
    ctx.fill_rect(Rect::new(12.0, 12.0, 20.0, 20.0), Color::rgb(255, 255, 255))
        .unwrap();
    ctx.finish().unwrap();

    assert!(pixel(&pixmap, 9, 16)[3] > 0);
    assert!(pixel(&pixmap, 16, 16)[3] < 255);
}

#[test]
fn setters_ignore_unusable_values() {
    let mut pixmap = vello_cpu::Pixmap::new(2, 2);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    ctx.set_global_alpha(f64::NAN);
    ctx.set_line_width(-3.0);
    ctx.set_blur(f64::INFINITY);
    assert_eq!(ctx.state().global_alpha, 1.0);
    assert_eq!(ctx.state().line_width, 1.0);
    assert_eq!(ctx.state().blur_px, 0.0);
    ctx.set_global_alpha(3.0);
    assert_eq!(ctx.state().global_alpha, 1.0);
}

#[test]
fn stroke_line_paints_along_segment() {
    let mut pixmap = vello_cpu::Pixmap::new(16, 16);
    let mut ctx = DrawContext::new(&mut pixmap, 1.0);
    ctx.set_line_width(4.0);
    ctx.set_line_cap(LineCap::Round);
    ctx.stroke_line(Point::new(2.0, 8.0), Point::new(14.0, 8.0), Color::rgb(0, 255, 0))
        .unwrap();
    ctx.finish().unwrap();
    assert!(close(pixel(&pixmap, 8, 8), [0, 255, 0, 255], 2));
    assert_eq!(pixel(&pixmap, 8, 1), [0, 0, 0, 0]);
}
