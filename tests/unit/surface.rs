use super::*;
use crate::foundation::core::{Color, Rect};

#[test]
fn new_surface_is_empty_and_unavailable() {
    let mut s = Surface::new();
    assert!(s.is_empty());
    assert!(s.data().is_empty());
    assert!(matches!(
        s.context_2d(),
        Err(SceneError::SurfaceUnavailable(_))
    ));
}

#[test]
fn configure_truncates_physical_size() {
    let mut s = Surface::new();
    s.configure(SceneSize::new(801, 451), DeviceScale::new(1.5).unwrap());
    assert_eq!(s.physical_size(), (1201, 676));
    assert_eq!(s.logical_size(), SceneSize::new(801, 451));
    assert_eq!(s.data().len(), 1201 * 676 * 4);
}

#[test]
fn oversized_surface_has_no_context() {
    let mut s = Surface::new();
    s.configure(SceneSize::new(70_000, 10), DeviceScale::ONE);
    assert_eq!(s.physical_size(), (70_000, 10));
    assert!(!s.is_empty());
    let err = s.context_2d().err().unwrap();
    assert!(matches!(err, SceneError::SurfaceUnavailable(_)));
    assert!(err.to_string().contains("70000x10"));
}

#[test]
fn reconfigure_discards_content() {
    let mut s = Surface::new();
    s.configure(SceneSize::new(4, 4), DeviceScale::ONE);
    {
        let mut ctx = s.context_2d().unwrap();
        ctx.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::rgb(9, 9, 9))
            .unwrap();
        ctx.finish().unwrap();
    }
    assert_eq!(s.pixel(1, 1).unwrap()[3], 255);

    s.configure(SceneSize::new(4, 4), DeviceScale::ONE);
    assert_eq!(s.pixel(1, 1), Some([0, 0, 0, 0]));
    assert_eq!(s.pixel(4, 0), None);
}

#[test]
fn straight_alpha_export_unpremultiplies() {
    let mut s = Surface::new();
    s.configure(SceneSize::new(2, 1), DeviceScale::ONE);
    {
        let mut ctx = s.context_2d().unwrap();
        ctx.fill_rect(Rect::new(0.0, 0.0, 2.0, 1.0), Color::rgba(255, 0, 0, 0.5))
            .unwrap();
        ctx.finish().unwrap();
    }
    let straight = s.to_rgba8_straight();
    assert_eq!(straight.len(), 8);
    assert!(straight[0] >= 250, "{straight:?}");
    assert!(straight[3].abs_diff(128) <= 2);
}
