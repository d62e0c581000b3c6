use super::*;

#[test]
fn reference_size_matches_reference_drawing() {
    let l = SceneLayout::for_size(SceneSize::default());
    assert_eq!(l.unit, 1.0);
    assert_eq!(l.light.center, Point::new(1600.0 * 0.58, 900.0 * 0.35));
    assert_eq!(l.light.radius, 1600.0 * 0.12);
    assert_eq!(l.light.beam_count, 80);
    assert_eq!(l.halo.inner_radius, 84.0);
    assert_eq!(l.halo.outer_radius, 160.0);
    assert_eq!(l.halo.center.x, 1600.0 * 0.47 + 12.0);
    assert_eq!(l.forest.len(), 8);
    assert_eq!(l.haze_bands.len(), 4);
    assert_eq!((l.fog_blobs, l.sparkles, l.streaks), (220, 320, 160));
}

#[test]
fn layout_is_a_pure_function_of_size() {
    let size = SceneSize::new(1280, 720);
    assert_eq!(SceneLayout::for_size(size), SceneLayout::for_size(size));
}

#[test]
fn layout_scales_with_the_tighter_axis() {
    let half = SceneLayout::for_size(SceneSize::new(800, 450));
    assert_eq!(half.unit, 0.5);
    assert_eq!(half.halo.outer_radius, 80.0);
    assert_eq!(half.forest[0].jitter, 10.0);

    let tall = SceneLayout::for_size(SceneSize::new(800, 900));
    assert_eq!(tall.unit, 0.5);
}

#[test]
fn gradient_offsets_are_sorted_and_bounded() {
    let l = SceneLayout::for_size(SceneSize::default());
    assert_eq!(l.gradient_offsets["sky"], vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(l.gradient_offsets["robe"], vec![0.0, 0.4, 0.74, 1.0]);
    for (name, offsets) in &l.gradient_offsets {
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]), "{name}");
        assert!(offsets.iter().all(|o| (0.0..=1.0).contains(o)), "{name}");
    }
}

#[test]
fn layout_serializes_to_json() {
    let json = serde_json::to_value(SceneLayout::for_size(SceneSize::default())).unwrap();
    assert_eq!(json["size"]["width"], 1600);
    assert!(json["forest"].as_array().is_some_and(|a| a.len() == 8));
    assert!(json["gradient_offsets"]["halo"].is_array());
}
