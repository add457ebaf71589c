//! Trend-signal engine: 200-day SMA trend filter with a 7-day extremum breakout.

use crate::error::StrategyError;
use crate::indicators::structure::calculate_breakout;
use crate::indicators::trend::calculate_sma;
use crate::models::market::PriceSeries;
use crate::models::signal::{BreakoutSignals, Recommendation, TrendSignal};

pub const SMA_PERIOD: usize = 200;
pub const RECENT_WINDOW: usize = 7;
pub const BREAKOUT_LOOKBACK: usize = RECENT_WINDOW - 1;
/// Minimum history accepted from the price provider: the SMA period plus a lookback margin.
pub const MIN_HISTORY: usize = 210;

pub const BUY_EXPLANATION: &str = "多头规则触发：价格在200日均线上方且今日首次创7日新低，逢低买入。";
pub const SELL_EXPLANATION: &str = "空头规则触发：今日首次创7日新高，逢高卖出。";
pub const HOLD_EXPLANATION: &str = "未满足买入/卖出触发条件，建议观望。";

pub struct TrendSignalEngine;

impl TrendSignalEngine {
    /// Evaluate the fixed buy/sell/hold rule on a close-price series.
    ///
    /// Priority order: uptrend with a fresh 7-day low buys, else a fresh 7-day
    /// high sells regardless of trend, else hold.
    pub fn evaluate(series: &PriceSeries) -> Result<TrendSignal, StrategyError> {
        let closes = &series.closes;
        let breakout = calculate_breakout(closes, BREAKOUT_LOOKBACK)
            .ok_or(StrategyError::InsufficientHistory { got: closes.len() })?;

        let current_price = breakout.current;
        let sma200 = calculate_sma(closes, SMA_PERIOD);
        let is_up_trend = sma200.is_some_and(|sma| current_price > sma);
        let recent7 = closes[closes.len() - RECENT_WINDOW..].to_vec();

        let signals = BreakoutSignals {
            is_first7_low: breakout.is_new_low,
            is_first7_high: breakout.is_new_high,
        };
        let recommendation = Self::classify(is_up_trend, signals);

        Ok(TrendSignal {
            symbol: series.symbol.clone(),
            current_price,
            sma200,
            is_up_trend,
            recent7,
            min_prev6: breakout.min_prev,
            max_prev6: breakout.max_prev,
            signals,
            recommendation,
            explanation: Self::explain(recommendation).to_string(),
        })
    }

    pub fn classify(is_up_trend: bool, signals: BreakoutSignals) -> Recommendation {
        if is_up_trend && signals.is_first7_low {
            Recommendation::Buy
        } else if signals.is_first7_high {
            Recommendation::Sell
        } else {
            Recommendation::Hold
        }
    }

    pub fn explain(recommendation: Recommendation) -> &'static str {
        match recommendation {
            Recommendation::Buy => BUY_EXPLANATION,
            Recommendation::Sell => SELL_EXPLANATION,
            Recommendation::Hold => HOLD_EXPLANATION,
        }
    }
}
