//! Market structure indicators: extremum breakouts

pub mod breakout;

pub use breakout::*;
