//! Xiaofeilun: a financial-chat backend.
//!
//! Routes user queries to LLM chat, multi-source news aggregation, or a
//! rule-based trend signal for A-share symbols.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod intent;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
