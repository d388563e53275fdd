//! Clothing recommendations
//!
//! Static reference tables, temperature bands and the engine that turns a
//! validated weather input into an ordered list of items.

pub mod bands;
pub mod catalog;
pub mod engine;

pub use bands::{RiskFraming, TemperatureBand, band_for};
pub use engine::{AccessoryDraw, ClothingEngine};
