use super::*;
use crate::foundation::core::{Color, DeviceScale, Rect, SceneSize};

fn filled(size: SceneSize, color: Color) -> Surface {
    let mut s = Surface::new();
    s.configure(size, DeviceScale::ONE);
    let mut ctx = s.context_2d().unwrap();
    ctx.fill_rect(Rect::new(0.0, 0.0, size.w(), size.h()), color)
        .unwrap();
    ctx.finish().unwrap();
    s
}

#[test]
fn export_without_surface_is_not_ready() {
    let mut target = InMemoryTarget::new();
    let out = export_portrait(None, &mut target).unwrap();
    assert_eq!(out, ExportOutcome::NotReady);
    assert!(target.saves().is_empty());
}

#[test]
fn export_of_empty_surface_saves_nothing() {
    let mut target = InMemoryTarget::new();
    let surface = Surface::new();
    let out = export_portrait(Some(&surface), &mut target).unwrap();
    assert_eq!(out, ExportOutcome::Empty);
    assert!(target.saves().is_empty());
}

#[test]
fn png_round_trips_straight_pixels() {
    let surface = filled(SceneSize::new(3, 2), Color::rgb(12, 200, 99));
    let png = encode_png(&surface).unwrap();
    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    let px = img.get_pixel(1, 1).0;
    assert!(px[0].abs_diff(12) <= 1 && px[1].abs_diff(200) <= 1 && px[2].abs_diff(99) <= 1);
    assert_eq!(px[3], 255);
}

#[test]
fn export_saves_once_under_fixed_name() {
    let surface = filled(SceneSize::new(4, 4), Color::rgb(1, 2, 3));
    let mut target = InMemoryTarget::new();
    let out = export_portrait(Some(&surface), &mut target).unwrap();

    assert_eq!(target.saves().len(), 1);
    let (name, bytes) = &target.saves()[0];
    assert_eq!(name, PORTRAIT_FILENAME);
    assert_eq!(out, ExportOutcome::Saved { bytes: bytes.len() });
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn directory_target_writes_file() {
    let dir = std::env::temp_dir().join(format!(
        "devotional-scene-export-{}",
        std::process::id()
    ));
    let mut target = DirectoryTarget::new(&dir);
    target.save("a.png", b"abc").unwrap();

    let path = dir.join("a.png");
    assert_eq!(target.written(), &[path.clone()]);
    assert_eq!(std::fs::read(&path).unwrap(), b"abc");
    let _ = std::fs::remove_dir_all(&dir);
}
