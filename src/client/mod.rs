//! Form front end for the prediction API

pub mod form;
pub mod render;
pub mod routes;

use actix_web::web;

pub use form::{parse_features, FormError, FEATURE_COUNT, FEATURE_NAMES, INVALID_INPUT_MESSAGE};
pub use render::{escape_html, render_page};
pub use routes::ClientState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(routes::configure);
}
