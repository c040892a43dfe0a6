use super::*;

#[test]
fn endpoints_are_exact() {
    assert_eq!(ease(0.0), 0.0);
    assert_eq!(ease(1.0), 1.0);
    assert_eq!(ease(0.5), 0.5);
}

#[test]
fn out_of_range_input_is_clamped() {
    assert_eq!(ease(-3.0), 0.0);
    assert_eq!(ease(7.5), 1.0);
    assert_eq!(ease(f64::NAN), 0.0);
    assert_eq!(ease(f64::INFINITY), 0.0);
}

#[test]
fn monotonic_over_samples() {
    let mut prev = ease(0.0);
    for i in 1..=100 {
        let cur = ease(f64::from(i) / 100.0);
        assert!(cur >= prev, "ease decreased at sample {i}");
        prev = cur;
    }
}

#[test]
fn symmetric_about_midpoint() {
    for i in 0..=100 {
        let t = f64::from(i) / 100.0;
        assert!((ease(t) + ease(1.0 - t) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn slope_vanishes_at_both_ends() {
    let h = 1e-6;
    assert!(ease(h) / h < 1e-4);
    assert!((1.0 - ease(1.0 - h)) / h < 1e-4);
}
