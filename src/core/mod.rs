//! Core business logic modules

pub mod error;
pub mod kelly;
pub mod odds;
pub mod probability;
pub mod rates;

// Re-export commonly used types
pub use error::EngineError;
pub use kelly::{calculate_kelly_fraction, stake, StakeResult};
pub use odds::{american_to_decimal, net_payout, to_odds, OddsResult};
pub use probability::{
    evaluate, max_trb_considered, poisson_pmf, threshold_probability, ProbabilityResult,
};
pub use rates::{estimate_rates, RateParameters};
