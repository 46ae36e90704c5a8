use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{OddsResult, ProbabilityResult, RateParameters, StakeResult};

/// One point of the rebounds-over-time chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamePoint {
    pub date: NaiveDate,
    pub rebs: Option<u32>,
    pub met_threshold: bool,
}

/// Full result of one evaluation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub athlete: String,
    pub threshold: u32,
    pub rates: RateParameters,
    pub probability: ProbabilityResult,
    pub odds: OddsResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stake: Option<StakeResult>,
    pub series: Vec<GamePoint>,
}

impl Evaluation {
    /// Share of games with a recorded total that met the threshold
    pub fn hit_rate(&self) -> Option<f64> {
        let recorded = self.series.iter().filter(|p| p.rebs.is_some()).count();
        if recorded == 0 {
            return None;
        }
        let met = self.series.iter().filter(|p| p.met_threshold).count();
        Some(met as f64 / recorded as f64)
    }
}

/// Evaluation request
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub athlete: String,
    pub threshold: i64,
    #[serde(default)]
    pub sportsbook_odds: Option<f64>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub athletes_loaded: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
