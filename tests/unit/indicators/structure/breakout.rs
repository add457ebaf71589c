//! Unit tests for extremum breakout detection

use xiaofeilun::indicators::structure::calculate_breakout;

#[test]
fn test_breakout_requires_lookback_plus_current() {
    assert!(calculate_breakout(&[1.0; 6], 6).is_none());
    assert!(calculate_breakout(&[1.0; 7], 6).is_some());
}

#[test]
fn test_breakout_excludes_current_sample() {
    let values = [50.0, 101.0, 102.0, 103.0, 104.0, 99.0, 98.0, 97.0];
    let b = calculate_breakout(&values, 6).unwrap();
    assert_eq!(b.current, 97.0);
    assert_eq!(b.min_prev, 98.0);
    assert_eq!(b.max_prev, 104.0);
    assert!(b.is_new_low);
    assert!(!b.is_new_high);
}

#[test]
fn test_breakout_is_strict() {
    // Touching the previous low or high is not a breakout
    let low = calculate_breakout(&[5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 5.0], 6).unwrap();
    assert!(!low.is_new_low);
    let high = calculate_breakout(&[5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 10.0], 6).unwrap();
    assert!(!high.is_new_high);
}

#[test]
fn test_flat_series_never_breaks_out() {
    let b = calculate_breakout(&[42.0; 20], 6).unwrap();
    assert!(!b.is_new_low && !b.is_new_high);
}
