use super::*;

#[test]
fn same_seed_same_sequence() {
    let mut a = Rng64::new(7);
    let mut b = Rng64::new(7);
    for _ in 0..32 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn stage_streams_differ() {
    let mut a = Rng64::for_stage(42, 0);
    let mut b = Rng64::for_stage(42, 1);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn unit_interval_and_range_bounds() {
    let mut r = Rng64::new(123);
    for _ in 0..1000 {
        let v = r.next_f64_01();
        assert!((0.0..1.0).contains(&v));
        let w = r.range(-20.0, 20.0);
        assert!((-20.0..20.0).contains(&w));
    }
}

#[test]
fn ambient_seeds_do_not_repeat_back_to_back() {
    assert_ne!(ambient_seed(), ambient_seed());
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 128), 128);
}
