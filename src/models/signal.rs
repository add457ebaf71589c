use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Buy => write!(f, "buy"),
            Recommendation::Sell => write!(f, "sell"),
            Recommendation::Hold => write!(f, "hold"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakoutSignals {
    pub is_first7_low: bool,
    pub is_first7_high: bool,
}

/// Result of the 200-day trend / 7-day breakout rule for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSignal {
    pub symbol: String,
    pub current_price: f64,
    pub sma200: Option<f64>,
    pub is_up_trend: bool,
    pub recent7: Vec<f64>,
    pub min_prev6: f64,
    pub max_prev6: f64,
    pub signals: BreakoutSignals,
    pub recommendation: Recommendation,
    pub explanation: String,
}
