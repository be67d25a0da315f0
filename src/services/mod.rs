// Service exports
pub mod artifacts;
pub mod prediction_client;

pub use artifacts::{load_model, load_predictor, load_scaler, ArtifactError};
pub use prediction_client::{ClientError, PredictionClient};
