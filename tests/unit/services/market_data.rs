//! Unit tests for the price history range selection

use xiaofeilun::services::market_data::{range_for_days, DEFAULT_RANGE};

#[test]
fn test_missing_days_uses_default_range() {
    assert_eq!(range_for_days(None), DEFAULT_RANGE);
    assert_eq!(DEFAULT_RANGE, "2y");
}

#[test]
fn test_short_lookbacks_never_drop_below_two_years() {
    assert_eq!(range_for_days(Some(0)), "2y");
    assert_eq!(range_for_days(Some(300)), "2y");
    assert_eq!(range_for_days(Some(730)), "2y");
}

#[test]
fn test_long_lookbacks_widen_the_range() {
    assert_eq!(range_for_days(Some(731)), "5y");
    assert_eq!(range_for_days(Some(3000)), "10y");
    assert_eq!(range_for_days(Some(10_000)), "max");
}
