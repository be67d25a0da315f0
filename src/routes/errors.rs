use actix_web::{error::{self, ResponseError}, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::core::ModelError;
use crate::models::ErrorResponse;

/// Failure while serving a prediction
///
/// Every variant is a server error: malformed input is not negotiated with
/// the caller, the request simply fails.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Invalid JSON: {0}")]
    Payload(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

impl PredictionError {
    fn kind(&self) -> &'static str {
        match self {
            PredictionError::Payload(_) => "invalid_json",
            PredictionError::InvalidInput(_) => "invalid_input",
            PredictionError::Model(_) => "model_error",
        }
    }
}

impl ResponseError for PredictionError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::error!("JSON payload error on {}: {}", req.path(), err);
    PredictionError::Payload(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_is_server_error() {
        let errors = [
            PredictionError::Payload("eof".to_string()),
            PredictionError::InvalidInput("empty".to_string()),
            PredictionError::Model(ModelError::FeatureCountMismatch { expected: 15, actual: 3 }),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_model_error_message() {
        let err = PredictionError::from(ModelError::FeatureCountMismatch { expected: 15, actual: 3 });
        assert_eq!(err.to_string(), "Model error: expected 15 features, got 3");
    }
}
