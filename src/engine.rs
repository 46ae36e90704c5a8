//! Evaluation pipeline: game log -> rates -> probability -> odds -> stake

use tracing::debug;

use crate::core::{self, EngineError, ProbabilityResult};
use crate::data::{GameLogEntry, GameLogSource};
use crate::models::{Evaluation, GamePoint};

/// Runs evaluations against an injected game log source
///
/// Holds no mutable state, so one engine can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Engine<S> {
    source: S,
}

impl<S: GameLogSource> Engine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Evaluate a rebound threshold for an athlete
    ///
    /// The stake stage only runs when a sportsbook quote is given.
    pub fn evaluate(
        &self,
        athlete: &str,
        threshold: u32,
        sportsbook_odds: Option<f64>,
    ) -> Result<Evaluation, EngineError> {
        let log = self
            .source
            .get_log(athlete)
            .ok_or_else(|| EngineError::UnknownAthlete(athlete.to_string()))?;

        evaluate_log(athlete, log, threshold, sportsbook_odds)
    }
}

/// Run the full pipeline over one athlete's log
pub fn evaluate_log(
    athlete: &str,
    log: &[GameLogEntry],
    threshold: u32,
    sportsbook_odds: Option<f64>,
) -> Result<Evaluation, EngineError> {
    let rates = core::estimate_rates(log)?;
    let max_trb = core::max_trb_considered(log)?;
    let probability = ProbabilityResult {
        probability: core::threshold_probability(&rates, threshold, max_trb),
        max_trb_considered: max_trb,
    };
    let odds = core::to_odds(probability.probability)?;
    let stake = sportsbook_odds
        .map(|quote| core::stake(probability.probability, quote))
        .transpose()?;

    debug!(
        athlete,
        threshold,
        probability = probability.probability,
        max_trb = probability.max_trb_considered,
        "Evaluated rebound threshold"
    );

    Ok(Evaluation {
        athlete: athlete.to_string(),
        threshold,
        rates,
        probability,
        odds,
        stake,
        series: chart_series(log, threshold),
    })
}

/// Per-game totals with a flag for games that met the threshold
pub fn chart_series(log: &[GameLogEntry], threshold: u32) -> Vec<GamePoint> {
    log.iter()
        .map(|g| GamePoint {
            date: g.date,
            rebs: g.rebs,
            met_threshold: g.rebs.is_some_and(|r| r >= threshold),
        })
        .collect()
}
