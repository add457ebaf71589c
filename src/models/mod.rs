//! Request-scoped data models shared by the pipelines and the HTTP layer.

pub mod market;
pub mod news;
pub mod signal;

pub use market::PriceSeries;
pub use news::{NewsItem, NewsResult, NewsSource};
pub use signal::{BreakoutSignals, Recommendation, TrendSignal};
