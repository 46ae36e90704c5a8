use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::core::EngineError;
use crate::models::ErrorResponse;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Invalid request data
    ValidationError(String),
    /// Evaluation stopped at a pipeline stage
    EngineError(EngineError),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::EngineError(err) => write!(f, "Evaluation error: {}", err),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        AppError::EngineError(err)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::EngineError(EngineError::InvalidOdds(_)) => StatusCode::BAD_REQUEST,
            AppError::EngineError(EngineError::UnknownAthlete(_)) => StatusCode::NOT_FOUND,
            AppError::EngineError(EngineError::InsufficientData { .. })
            | AppError::EngineError(EngineError::UndefinedOdds) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AppError::ValidationError(msg) => ("validation_error", msg.clone()),
            AppError::EngineError(err) => {
                let code = match err {
                    EngineError::InsufficientData { .. } => "insufficient_data",
                    EngineError::UndefinedOdds => "undefined_odds",
                    EngineError::InvalidOdds(_) => "invalid_odds",
                    EngineError::UnknownAthlete(_) => "unknown_athlete",
                };
                (code, err.to_string())
            }
            AppError::InternalError(msg) => ("internal_error", msg.clone()),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: error_code.to_string(),
            message,
        })
    }
}

/// Validation functions
pub fn validate_athlete(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Athlete name must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_threshold(threshold: i64) -> Result<u32, AppError> {
    if threshold < 1 {
        return Err(AppError::ValidationError(format!(
            "Threshold must be a positive integer, got {}",
            threshold
        )));
    }
    u32::try_from(threshold).map_err(|_| {
        AppError::ValidationError(format!("Threshold too large, got {}", threshold))
    })
}

pub fn validate_american_odds(odds: f64) -> Result<(), AppError> {
    if odds == 0.0 || !odds.is_finite() {
        return Err(AppError::ValidationError(format!(
            "American odds must be a non-zero number, got {}",
            odds
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_athlete() {
        assert!(validate_athlete("Big Man").is_ok());
        assert!(validate_athlete("").is_err());
        assert!(validate_athlete("   ").is_err());
    }

    #[test]
    fn test_validate_threshold_valid() {
        assert_eq!(validate_threshold(1).unwrap(), 1);
        assert_eq!(validate_threshold(12).unwrap(), 12);
    }

    #[test]
    fn test_validate_threshold_invalid() {
        assert!(validate_threshold(0).is_err());
        assert!(validate_threshold(-3).is_err());
        assert!(validate_threshold(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_american_odds() {
        assert!(validate_american_odds(-110.0).is_ok());
        assert!(validate_american_odds(250.0).is_ok());
        assert!(validate_american_odds(0.0).is_err());
        assert!(validate_american_odds(f64::NAN).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::ValidationError("test error".to_string());
        assert!(err.to_string().contains("Validation error"));

        let err = AppError::from(EngineError::UndefinedOdds);
        assert!(err.to_string().contains("undefined"));
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(EngineError::InvalidOdds(0.0)).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(EngineError::UnknownAthlete("x".to_string())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(EngineError::InsufficientData { field: "or" }).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(EngineError::UndefinedOdds).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::InternalError("".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
