//! Rebound Odds - rebound threshold probabilities for player props
//!
//! This library provides:
//! - Poisson rate estimation from historical box scores
//! - P(total rebounds ≥ threshold) by convolving offensive and defensive rebounds
//! - Fair decimal/American odds and quarter-Kelly stake sizing
//! - CSV loading of per-athlete game logs
//!
//! # Example
//!
//! ```no_run
//! use rebound_odds::data::IndexedGameLogs;
//! use rebound_odds::engine::Engine;
//!
//! let logs = IndexedGameLogs::load("data/box_scores.csv").unwrap();
//! let engine = Engine::new(logs);
//!
//! let eval = engine.evaluate("Domantas Sabonis", 12, Some(-115.0)).unwrap();
//! println!("P(TRB >= 12) = {:.3}", eval.probability.probability);
//! ```

pub mod core;
pub mod data;
pub mod engine;
pub mod models;

// API-specific modules (only available with api feature)
#[cfg(feature = "api")]
pub mod error;

// Re-export commonly used types
pub use crate::core::{EngineError, OddsResult, ProbabilityResult, RateParameters, StakeResult};
pub use data::{GameLogEntry, GameLogSource, IndexedGameLogs, LoadError};
pub use engine::{evaluate_log, Engine};
pub use models::{Evaluation, GamePoint};
