//! Playground recommendations
//!
//! A validated venue catalog and the engine that filters, scores and ranks
//! venues for a weather input and location.

pub mod catalog;
pub mod engine;

pub use catalog::PlaygroundCatalog;
pub use engine::{PlaygroundEngine, category_allowed};
