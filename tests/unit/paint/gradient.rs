use super::*;

#[test]
fn stops_keep_insertion_order() {
    let g = Gradient::linear(Point::ZERO, Point::new(0.0, 10.0))
        .with_stops(&[
            (0.0, Color::hex(0x000000)),
            (0.5, Color::hex(0x808080)),
            (0.5, Color::hex(0x909090)),
            (1.0, Color::hex(0xffffff)),
        ])
        .unwrap();
    let offsets: Vec<f32> = g.stops().iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.5, 0.5, 1.0]);
    assert_eq!(g.stops()[2].color, Color::hex(0x909090));
}

#[test]
fn decreasing_offset_is_rejected() {
    let mut g = Gradient::linear(Point::ZERO, Point::new(1.0, 0.0));
    g.add_stop(0.6, Color::TRANSPARENT).unwrap();
    let err = g.add_stop(0.4, Color::TRANSPARENT).unwrap_err();
    assert!(err.to_string().contains("precedes"));
    assert_eq!(g.stops().len(), 1);
}

#[test]
fn offsets_outside_unit_interval_are_rejected() {
    let mut g = Gradient::concentric(Point::ZERO, 0.0, 5.0);
    assert!(g.add_stop(-0.1, Color::TRANSPARENT).is_err());
    assert!(g.add_stop(1.5, Color::TRANSPARENT).is_err());
    assert!(g.add_stop(f32::NAN, Color::TRANSPARENT).is_err());
    assert!(g.stops().is_empty());
}

#[test]
fn concentric_shares_the_center() {
    let c = Point::new(3.0, 4.0);
    let g = Gradient::concentric(c, 1.0, 9.0);
    match g.kind {
        GradientKind::Radial {
            start_center,
            start_radius,
            end_center,
            end_radius,
        } => {
            assert_eq!(start_center, c);
            assert_eq!(end_center, c);
            assert_eq!((start_radius, end_radius), (1.0, 9.0));
        }
        GradientKind::Linear { .. } => panic!("expected radial"),
    }
}
