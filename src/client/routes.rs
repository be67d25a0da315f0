use actix_web::{error, web, HttpRequest, HttpResponse, Responder};
use std::collections::HashMap;

use crate::client::form::{parse_features, INVALID_INPUT_MESSAGE};
use crate::client::render::render_page;
use crate::services::PredictionClient;

/// Form app state shared across all handlers
#[derive(Clone)]
pub struct ClientState {
    pub api: PredictionClient,
}

/// Configure form routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(handle_form_payload_error));
    cfg.service(
        web::resource("/")
            .route(web::get().to(show_form))
            .route(web::post().to(submit_form)),
    );
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Handle form payload errors
///
/// A body that is not urlencoded carries no fields, so it gets the same page
/// as a submission with missing fields.
pub fn handle_form_payload_error(err: error::UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Form payload error on {}: {}", req.path(), err);
    error::InternalError::from_response(
        err,
        html(render_page(&HashMap::new(), Some(INVALID_INPUT_MESSAGE))),
    )
    .into()
}

async fn show_form() -> impl Responder {
    html(render_page(&HashMap::new(), None))
}

/// Parse the submitted form and forward it to the prediction API
///
/// Invalid input never reaches the API. API and connection failures are
/// rendered inline; nothing is retried.
async fn submit_form(
    state: web::Data<ClientState>,
    form: web::Form<HashMap<String, String>>,
) -> impl Responder {
    let values = form.into_inner();

    let features = match parse_features(&values) {
        Ok(features) => features,
        Err(e) => {
            tracing::info!("Rejected form submission: {}", e);
            return html(render_page(&values, Some(INVALID_INPUT_MESSAGE)));
        }
    };

    let prediction = match state.api.predict(features).await {
        Ok(decision) => {
            tracing::info!("Prediction API answered: {}", decision);
            decision
        }
        Err(e) => {
            tracing::error!("Prediction request to {} failed: {}", state.api.endpoint(), e);
            e.to_string()
        }
    };

    html(render_page(&values, Some(&prediction)))
}
