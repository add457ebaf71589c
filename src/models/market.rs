/// Daily closing prices for one resolved symbol, oldest first.
///
/// Only finite samples are retained; provider gaps are accepted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub symbol: String,
    pub closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, closes: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            closes: closes.into_iter().filter(|v| v.is_finite()).collect(),
        }
    }

    /// Build from raw provider samples, dropping nulls and non-finite values.
    pub fn from_raw(symbol: impl Into<String>, raw: Vec<Option<f64>>) -> Self {
        Self::new(symbol, raw.into_iter().flatten().collect())
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn last(&self) -> Option<f64> {
        self.closes.last().copied()
    }
}
