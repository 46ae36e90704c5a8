use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::AppState;
use rebound_odds::error::{
    validate_american_odds, validate_athlete, validate_threshold, AppError,
};
use rebound_odds::models::EvaluateRequest;

/// Evaluate a rebound threshold for one athlete
pub async fn evaluate_threshold(
    state: web::Data<Arc<AppState>>,
    req: web::Json<EvaluateRequest>,
) -> Result<HttpResponse, AppError> {
    // Validate request
    validate_athlete(&req.athlete)?;
    let threshold = validate_threshold(req.threshold)?;
    if let Some(odds) = req.sportsbook_odds {
        validate_american_odds(odds)?;
    }

    let evaluation = state
        .engine
        .evaluate(&req.athlete, threshold, req.sportsbook_odds)?;

    info!(
        "Evaluated {} >= {}: p={:.4}",
        evaluation.athlete, threshold, evaluation.probability.probability
    );

    Ok(HttpResponse::Ok().json(evaluation))
}
