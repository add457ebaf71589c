//! Extremum breakout detection against a preceding lookback window

/// Min/max of the `lookback` samples preceding the latest one, with strict breakout flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakout {
    pub current: f64,
    pub min_prev: f64,
    pub max_prev: f64,
    pub is_new_low: bool,
    pub is_new_high: bool,
}

/// Compare the last sample against the `lookback` samples immediately before it.
///
/// The latest sample is excluded from the window, so a flat series never breaks out.
/// Returns `None` unless at least `lookback + 1` samples exist.
pub fn calculate_breakout(values: &[f64], lookback: usize) -> Option<Breakout> {
    if lookback == 0 || values.len() < lookback + 1 {
        return None;
    }

    let (prev, current) = values.split_at(values.len() - 1);
    let current = current[0];
    let window = &prev[prev.len() - lookback..];

    let min_prev = window.iter().copied().fold(f64::INFINITY, f64::min);
    let max_prev = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(Breakout {
        current,
        min_prev,
        max_prev,
        is_new_low: current < min_prev,
        is_new_high: current > max_prev,
    })
}
