//! News aggregation pipeline.

pub mod aggregator;
pub mod feed;

pub use aggregator::{NewsAggregator, MAX_ITEMS};
pub use feed::{GoogleNewsRssFetcher, NewsSourceFetcher};
