//! Signal evaluation.

pub mod engine;

pub use engine::*;
