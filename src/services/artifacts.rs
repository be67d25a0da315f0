use std::fs;
use std::path::Path;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::{ModelArtifact, ModelError, Predictor, ScalerArtifact};

/// Errors that can occur while loading artifacts from disk
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let display = path.display().to_string();
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: display.clone(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: display,
        source,
    })
}

/// Load and validate a model artifact
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<ModelArtifact, ArtifactError> {
    let model: ModelArtifact = read_json(path.as_ref())?;
    model.validate()?;

    tracing::debug!("Loaded {} model from {}", model.kind(), path.as_ref().display());

    Ok(model)
}

/// Load and validate a scaler artifact
pub fn load_scaler<P: AsRef<Path>>(path: P) -> Result<ScalerArtifact, ArtifactError> {
    let scaler: ScalerArtifact = read_json(path.as_ref())?;
    scaler.validate()?;

    tracing::debug!("Loaded scaler ({} features) from {}", scaler.n_features(), path.as_ref().display());

    Ok(scaler)
}

/// Load the model and, when a path is configured, the scaler that precedes it
pub fn load_predictor<P: AsRef<Path>>(
    model_path: P,
    scaler_path: Option<P>,
) -> Result<Predictor, ArtifactError> {
    let model = load_model(model_path)?;
    let scaler = scaler_path.map(load_scaler).transpose()?;

    Ok(Predictor::new(model, scaler)?)
}
