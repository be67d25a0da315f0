//! Loan Approval - prediction API and form client for a pre-trained classifier
//!
//! The API loads a model artifact (and optionally a scaler) once at startup
//! and answers `POST /predict` with an approval decision. The form app
//! collects feature values from a browser and forwards them to the API.

pub mod client;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{Classifier, ModelArtifact, ModelError, Predictor, ScalerArtifact};
pub use models::{Decision, FeatureVector, PredictRequest, PredictResponse};
pub use services::{load_predictor, ArtifactError, ClientError, PredictionClient};
