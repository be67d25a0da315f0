use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::Predictor;
use crate::models::{PredictRequest, PredictResponse};
use crate::routes::errors::PredictionError;

/// Liveness message returned by `GET /`
pub const LIVENESS_MESSAGE: &str = "Loan Approval Prediction API is running!";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
}

/// Configure prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(home))
        .route("/predict", web::post().to(predict));
}

/// Liveness endpoint
async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

/// Predict endpoint
///
/// POST /predict
///
/// Request body:
/// ```json
/// { "features": [0.0, 1.0, ...] }
/// ```
///
/// Response body:
/// ```json
/// { "loan_approval": "Approved" }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> Result<HttpResponse, PredictionError> {
    if let Err(errors) = req.validate() {
        tracing::error!("Validation failed for predict request: {}", errors);
        return Err(PredictionError::InvalidInput(errors.to_string()));
    }

    let decision = state.predictor.predict(&req.features).map_err(|e| {
        tracing::error!("Prediction failed for {} features: {}", req.features.len(), e);
        PredictionError::from(e)
    })?;

    tracing::info!("Prediction: {}", decision);

    Ok(HttpResponse::Ok().json(PredictResponse { loan_approval: decision }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogisticRegression, ModelArtifact};
    use actix_web::{http::StatusCode, test, App};

    fn state() -> AppState {
        let model = ModelArtifact::LogisticRegression(LogisticRegression {
            coefficients: vec![1.0, 1.0],
            intercept: 0.0,
        });
        AppState {
            predictor: Arc::new(Predictor::new(model, None).unwrap()),
        }
    }

    #[actix_web::test]
    async fn test_home_returns_liveness() {
        let app = test::init_service(App::new().configure(configure)).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, LIVENESS_MESSAGE.as_bytes());
    }

    #[actix_web::test]
    async fn test_predict_approved() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(serde_json::json!({ "features": [2.0, 3.0] }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["loan_approval"], "Approved");
    }
}
