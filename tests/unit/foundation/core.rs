use super::*;

#[test]
fn default_size_is_design_canvas() {
    let s = SceneSize::default();
    assert_eq!((s.width, s.height), (1600, 900));
    assert_eq!(s.unit(), 1.0);
}

#[test]
fn unit_follows_the_tighter_axis() {
    assert_eq!(SceneSize::new(800, 450).unit(), 0.5);
    assert_eq!(SceneSize::new(3200, 900).unit(), 1.0);
    assert_eq!(SceneSize::new(1600, 0).unit(), 0.0);
}

#[test]
fn frac_maps_fractions_to_logical_points() {
    let p = SceneSize::new(1000, 500).frac(0.58, 0.35);
    assert!((p.x - 580.0).abs() < 1e-9);
    assert!((p.y - 175.0).abs() < 1e-9);
}

#[test]
fn device_scale_rejects_unusable_values() {
    assert!(DeviceScale::new(0.0).is_err());
    assert!(DeviceScale::new(-2.0).is_err());
    assert!(DeviceScale::new(f64::NAN).is_err());
    assert_eq!(DeviceScale::or_one(f64::INFINITY), DeviceScale::ONE);
    assert_eq!(DeviceScale::or_one(2.0).get(), 2.0);
}

#[test]
fn device_scale_truncates_physical_size() {
    let s = DeviceScale::new(1.25).unwrap();
    assert_eq!(s.physical(1601), 2001);
    assert_eq!(s.physical(0), 0);
}

#[test]
fn hex_colors_unpack_channels() {
    let c = Color::hex(0xfcd38f);
    assert_eq!((c.r, c.g, c.b), (0xfc, 0xd3, 0x8f));
    assert_eq!(c.a, 1.0);
}

#[test]
fn premul_scales_channels_by_alpha() {
    assert_eq!(Color::rgb(10, 20, 30).to_premul_rgba8(), [10, 20, 30, 255]);
    assert_eq!(Color::rgba(255, 255, 255, 0.0).to_premul_rgba8(), [0, 0, 0, 0]);
    let half = Color::rgba(200, 100, 0, 0.5).to_premul_rgba8();
    assert_eq!(half[3], 128);
    assert_eq!(half[0], 100);
}

#[test]
fn fade_multiplies_alpha_and_clamps() {
    let c = Color::rgba(1, 2, 3, 0.5).fade(0.5);
    assert!((c.a - 0.25).abs() < 1e-6);
    assert_eq!(Color::rgb(1, 2, 3).fade(4.0).a, 1.0);
}
