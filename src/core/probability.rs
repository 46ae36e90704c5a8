//! Threshold probability for total rebounds
//!
//! Total rebounds are modelled as the sum of two independent Poisson
//! variables:
//!     TRB = ORB + DRB,  ORB ~ Poisson(λ_orb),  DRB ~ Poisson(λ_drb)
//!
//! P(TRB ≥ threshold) is computed by explicit convolution over the truncated
//! support [threshold, max_trb] where
//!     max_trb = round(1.75 × max historical rebounds)
//!
//! The truncation is an approximation of the infinite tail and is kept as-is
//! so results stay numerically identical to the reference model. Because
//! ORB + DRB ~ Poisson(λ_orb + λ_drb), a regularized-gamma survival function
//! could later replace the truncated sum.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::rates::{estimate_rates, RateParameters};
use crate::data::GameLogEntry;

/// Multiplier applied to the largest observed rebound total
pub const TAIL_MULTIPLIER: f64 = 1.75;

/// Probability of reaching a rebound threshold
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityResult {
    pub probability: f64,
    pub max_trb_considered: u32,
}

/// Poisson probability mass p(k; λ) = e^(−λ) λ^k / k!
///
/// Built as a running product so large `k` never overflows `k!`.
pub fn poisson_pmf(k: u32, lambda: f64) -> f64 {
    (1..=k).fold((-lambda).exp(), |p, i| p * lambda / i as f64)
}

/// pmf values for k in 0..=max_k
fn pmf_table(lambda: f64, max_k: u32) -> Vec<f64> {
    let mut table = Vec::with_capacity(max_k as usize + 1);
    let mut p = (-lambda).exp();
    table.push(p);
    for i in 1..=max_k {
        p = p * lambda / i as f64;
        table.push(p);
    }
    table
}

/// Upper truncation bound: round(1.75 × max present `rebs`), ties to even
pub fn max_trb_considered(log: &[GameLogEntry]) -> Result<u32, EngineError> {
    let max_rebs = log
        .iter()
        .filter_map(|e| e.rebs)
        .max()
        .ok_or(EngineError::InsufficientData { field: "rebs" })?;

    Ok((TAIL_MULTIPLIER * max_rebs as f64).round_ties_even() as u32)
}

/// P(ORB + DRB ≥ threshold) restricted to [threshold, max_trb]
///
/// Returns 0 when `threshold > max_trb` (empty sum).
pub fn threshold_probability(rates: &RateParameters, threshold: u32, max_trb: u32) -> f64 {
    if threshold > max_trb {
        return 0.0;
    }

    let orb_pmf = pmf_table(rates.lambda_orb, max_trb);
    let drb_pmf = pmf_table(rates.lambda_drb, max_trb);

    (threshold..=max_trb)
        .map(|trb| {
            let trb = trb as usize;
            (0..=trb)
                .map(|orb| orb_pmf[orb] * drb_pmf[trb - orb])
                .sum::<f64>()
        })
        .sum()
}

/// Estimate rates from the log and compute P(TRB ≥ threshold).
///
/// `threshold` is expected to be ≥ 1; callers validate it.
pub fn evaluate(log: &[GameLogEntry], threshold: u32) -> Result<ProbabilityResult, EngineError> {
    let rates = estimate_rates(log)?;
    let max_trb = max_trb_considered(log)?;

    Ok(ProbabilityResult {
        probability: threshold_probability(&rates, threshold, max_trb),
        max_trb_considered: max_trb,
    })
}
