//! Per-game Poisson rate estimation from a historical game log

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::data::GameLogEntry;

/// Mean per-game offensive and defensive rebound rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateParameters {
    pub lambda_orb: f64,
    pub lambda_drb: f64,
}

/// Estimate Poisson rates as sample means of `or` and `dr`.
///
/// Missing values are dropped per field: an entry without `or` still counts
/// towards the `dr` mean.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rebound_odds::core::rates::estimate_rates;
/// use rebound_odds::data::GameLogEntry;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let log = vec![GameLogEntry::new(date, Some(2), Some(5), Some(7))];
/// let rates = estimate_rates(&log).unwrap();
/// assert_eq!(rates.lambda_orb, 2.0);
/// ```
pub fn estimate_rates(log: &[GameLogEntry]) -> Result<RateParameters, EngineError> {
    let lambda_orb =
        mean(log.iter().filter_map(|e| e.or)).ok_or(EngineError::InsufficientData { field: "or" })?;
    let lambda_drb =
        mean(log.iter().filter_map(|e| e.dr)).ok_or(EngineError::InsufficientData { field: "dr" })?;

    Ok(RateParameters {
        lambda_orb,
        lambda_drb,
    })
}

fn mean(values: impl Iterator<Item = u32>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v as f64, n + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(or: Option<u32>, dr: Option<u32>) -> GameLogEntry {
        GameLogEntry::new(NaiveDate::default(), or, dr, None)
    }

    #[test]
    fn test_rates_are_sample_means() {
        let log = vec![
            entry(Some(3), Some(6)),
            entry(Some(4), Some(7)),
            entry(Some(5), Some(8)),
        ];
        let rates = estimate_rates(&log).unwrap();

        assert!((rates.lambda_orb - 4.0).abs() < 1e-12);
        assert!((rates.lambda_drb - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_values_dropped_per_field() {
        let log = vec![
            entry(None, Some(10)),
            entry(Some(2), None),
            entry(Some(4), Some(6)),
        ];
        let rates = estimate_rates(&log).unwrap();

        // or: (2 + 4) / 2, dr: (10 + 6) / 2
        assert!((rates.lambda_orb - 3.0).abs() < 1e-12);
        assert!((rates.lambda_drb - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_or_missing_is_insufficient() {
        let log = vec![entry(None, Some(5)), entry(None, Some(7))];
        assert_eq!(
            estimate_rates(&log),
            Err(EngineError::InsufficientData { field: "or" })
        );
    }

    #[test]
    fn test_all_dr_missing_is_insufficient() {
        let log = vec![entry(Some(1), None)];
        assert_eq!(
            estimate_rates(&log),
            Err(EngineError::InsufficientData { field: "dr" })
        );
    }

    #[test]
    fn test_empty_log_is_insufficient() {
        assert!(matches!(
            estimate_rates(&[]),
            Err(EngineError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_zero_rates_are_valid() {
        let log = vec![entry(Some(0), Some(0)), entry(Some(0), Some(0))];
        let rates = estimate_rates(&log).unwrap();
        assert_eq!(rates.lambda_orb, 0.0);
        assert_eq!(rates.lambda_drb, 0.0);
    }
}
