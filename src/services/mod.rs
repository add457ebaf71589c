//! External collaborators and the pipelines built on them.

pub mod llm;
pub mod market_data;
pub mod news;
pub mod symbol;
