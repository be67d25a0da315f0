use serde::{Deserialize, Serialize};

use crate::core::classifier::{check_shape, ModelError};
use crate::models::FeatureVector;

/// Serialized feature scaler, tagged by `kind`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerArtifact {
    Standard(StandardScaler),
}

impl ScalerArtifact {
    pub fn n_features(&self) -> usize {
        match self {
            ScalerArtifact::Standard(scaler) => scaler.mean.len(),
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            ScalerArtifact::Standard(scaler) => scaler.validate(),
        }
    }

    pub fn transform(&self, features: &[f64]) -> Result<FeatureVector, ModelError> {
        match self {
            ScalerArtifact::Standard(scaler) => scaler.transform(features),
        }
    }
}

/// Standardizes features as `(x - mean) / scale`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn validate(&self) -> Result<(), ModelError> {
        if self.mean.is_empty() {
            return Err(ModelError::InvalidArtifact("scaler has no features".to_string()));
        }
        if self.mean.len() != self.scale.len() {
            return Err(ModelError::InvalidArtifact(format!(
                "scaler mean has {} entries but scale has {}",
                self.mean.len(),
                self.scale.len()
            )));
        }
        Ok(())
    }

    pub fn transform(&self, features: &[f64]) -> Result<FeatureVector, ModelError> {
        check_shape(self.mean.len(), features)?;

        Ok(features
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| {
                // constant features were fit with zero variance
                let scale = if *scale == 0.0 { 1.0 } else { *scale };
                (x - mean) / scale
            })
            .collect())
    }
}
