//! Kelly Criterion Stake Sizing
//!
//! Stake recommendation for a sportsbook quote given the model probability.
//!
//! The Kelly criterion formula:
//!     f* = (b*p - q) / b
//!
//! Where:
//!     f* = fraction of bankroll to bet
//!     b = net payout per unit staked, derived from the American quote
//!     p = model probability of the rebound threshold being met
//!     q = 1 - p
//!
//! The recommendation is damped to a quarter of full Kelly and reported as a
//! percentage of bankroll.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::odds::net_payout;

/// Fraction of full Kelly applied to the recommendation
pub const KELLY_MULTIPLIER: f64 = 0.25;

/// Stake recommendation for a quoted price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StakeResult {
    pub sportsbook_american_odds: f64,
    pub net_payout: f64,            // b
    pub implied_probability: f64,   // 1 / (1 + b)
    pub expected_value: f64,        // b*p - q per unit staked
    pub kelly_fraction: f64,        // Full Kelly
    pub quarter_kelly_percent: f64, // % of bankroll
}

impl StakeResult {
    /// Stake amount for a bankroll, zero when the edge is negative
    pub fn stake_amount(&self, bankroll: f64) -> f64 {
        (bankroll * self.quarter_kelly_percent / 100.0).max(0.0)
    }

    /// Whether the quote offers positive expected value
    pub fn is_value_bet(&self) -> bool {
        self.kelly_fraction > 0.0
    }
}

/// Full Kelly fraction for net payout `b`
///
/// Can be negative when the quote offers no edge.
///
/// # Examples
/// ```
/// use rebound_odds::core::kelly::calculate_kelly_fraction;
/// let kelly = calculate_kelly_fraction(0.6, 1.0);
/// assert!((kelly - 0.2).abs() < 1e-12);
/// ```
pub fn calculate_kelly_fraction(probability: f64, net_payout: f64) -> f64 {
    let q = 1.0 - probability;
    (net_payout * probability - q) / net_payout
}

/// Quarter-Kelly stake recommendation for a sportsbook American quote
pub fn stake(probability: f64, sportsbook_american_odds: f64) -> Result<StakeResult, EngineError> {
    let b = net_payout(sportsbook_american_odds)?;
    let q = 1.0 - probability;
    let kelly = calculate_kelly_fraction(probability, b);

    Ok(StakeResult {
        sportsbook_american_odds,
        net_payout: b,
        implied_probability: 1.0 / (1.0 + b),
        expected_value: b * probability - q,
        kelly_fraction: kelly,
        quarter_kelly_percent: kelly * KELLY_MULTIPLIER * 100.0,
    })
}
