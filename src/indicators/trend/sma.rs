//! SMA (Simple Moving Average) indicator

/// Arithmetic mean of the most recent `period` samples.
///
/// Returns `None` when fewer than `period` samples exist or `period` is zero.
pub fn calculate_sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }

    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

