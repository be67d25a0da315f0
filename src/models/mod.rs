// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Decision, FeatureVector, Label};
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, PredictResponse};
