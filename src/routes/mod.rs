// Route exports
pub mod errors;
pub mod predict;

use actix_web::web;

pub use errors::{handle_json_payload_error, PredictionError};
pub use predict::{AppState, LIVENESS_MESSAGE};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(predict::configure);
}

/// JSON extractor config that turns payload errors into `PredictionError`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}
