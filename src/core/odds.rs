//! Fair odds conversion
//!
//! Decimal odds are the reciprocal of the model probability. American odds
//! follow the usual convention:
//!     decimal > 2   =>  +(decimal - 1) * 100
//!     decimal <= 2  =>  -100 / (decimal - 1)
//!
//! A decimal price of exactly 2.0 is quoted as -100, not +100.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Fair odds implied by a probability, without bookmaker margin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsResult {
    pub decimal_odds: f64,
    pub american_odds: f64,
}

/// Convert a model probability into fair decimal and American odds
///
/// # Examples
/// ```
/// use rebound_odds::core::odds::to_odds;
/// let odds = to_odds(0.25).unwrap();
/// assert_eq!(odds.decimal_odds, 4.0);
/// assert_eq!(odds.american_odds, 300.0);
/// ```
pub fn to_odds(probability: f64) -> Result<OddsResult, EngineError> {
    if probability == 0.0 {
        return Err(EngineError::UndefinedOdds);
    }

    let decimal_odds = 1.0 / probability;
    let american_odds = if decimal_odds > 2.0 {
        (decimal_odds - 1.0) * 100.0
    } else {
        -100.0 / (decimal_odds - 1.0)
    };

    Ok(OddsResult {
        decimal_odds,
        american_odds,
    })
}

/// Net payout per unit staked (B) for an American quote
///
/// `+150` pays 1.5 per unit, `-150` pays 0.667 per unit.
pub fn net_payout(american_odds: f64) -> Result<f64, EngineError> {
    if american_odds == 0.0 || !american_odds.is_finite() {
        return Err(EngineError::InvalidOdds(american_odds));
    }

    let payout = if american_odds > 0.0 {
        (american_odds + 100.0) / 100.0 - 1.0
    } else {
        let abs = american_odds.abs();
        (abs + 100.0) / abs - 1.0
    };
    Ok(payout)
}

/// Decimal price for an American quote (total return per unit staked)
pub fn american_to_decimal(american_odds: f64) -> Result<f64, EngineError> {
    Ok(net_payout(american_odds)? + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_odds_is_reciprocal() {
        for &p in &[0.01, 0.1, 0.25, 0.3, 0.5, 0.7, 0.999, 1.0] {
            let odds = to_odds(p).unwrap();
            assert_eq!(odds.decimal_odds, 1.0 / p);
        }
    }

    #[test]
    fn test_underdog_is_positive() {
        let odds = to_odds(0.2).unwrap();
        assert!((odds.decimal_odds - 5.0).abs() < 1e-12);
        assert!((odds.american_odds - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_favourite_is_negative() {
        let odds = to_odds(0.75).unwrap();
        // decimal 1.333.., american -300
        assert!((odds.american_odds + 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_even_money_takes_negative_branch() {
        let odds = to_odds(0.5).unwrap();
        assert_eq!(odds.decimal_odds, 2.0);
        assert_eq!(odds.american_odds, -100.0);
    }

    #[test]
    fn test_zero_probability_is_undefined() {
        assert_eq!(to_odds(0.0), Err(EngineError::UndefinedOdds));
    }

    #[test]
    fn test_net_payout() {
        assert!((net_payout(150.0).unwrap() - 1.5).abs() < 1e-12);
        assert!((net_payout(-150.0).unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((net_payout(100.0).unwrap() - 1.0).abs() < 1e-12);
        assert!((net_payout(-100.0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_quote_is_invalid() {
        assert_eq!(net_payout(0.0), Err(EngineError::InvalidOdds(0.0)));
        assert!(net_payout(f64::NAN).is_err());
        assert!(american_to_decimal(f64::INFINITY).is_err());
    }

    #[test]
    fn test_american_to_decimal() {
        assert!((american_to_decimal(300.0).unwrap() - 4.0).abs() < 1e-12);
        assert!((american_to_decimal(-200.0).unwrap() - 1.5).abs() < 1e-12);
    }
}
