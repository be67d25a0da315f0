use crate::core::classifier::{Classifier, ModelArtifact, ModelError};
use crate::core::scaler::ScalerArtifact;
use crate::models::Decision;

/// Loaded model plus optional scaler, evaluated as a single pipeline
///
/// Built once at startup and shared read-only across request handlers.
#[derive(Debug, Clone)]
pub struct Predictor {
    model: ModelArtifact,
    scaler: Option<ScalerArtifact>,
}

impl Predictor {
    /// Assemble a pipeline, checking that both artifacts agree on feature count
    pub fn new(model: ModelArtifact, scaler: Option<ScalerArtifact>) -> Result<Self, ModelError> {
        model.validate()?;

        if let Some(scaler) = &scaler {
            scaler.validate()?;
            if scaler.n_features() != model.n_features() {
                return Err(ModelError::ScalerMismatch {
                    model: model.n_features(),
                    scaler: scaler.n_features(),
                });
            }
        }

        Ok(Self { model, scaler })
    }

    pub fn n_features(&self) -> usize {
        self.model.n_features()
    }

    pub fn model_kind(&self) -> &'static str {
        self.model.kind()
    }

    pub fn has_scaler(&self) -> bool {
        self.scaler.is_some()
    }

    /// Scale (when a scaler is loaded) and classify a raw feature vector
    pub fn predict(&self, features: &[f64]) -> Result<Decision, ModelError> {
        let label = match &self.scaler {
            Some(scaler) => {
                let scaled = scaler.transform(features)?;
                self.model.predict(&scaled)?
            }
            None => self.model.predict(features)?,
        };

        Ok(Decision::from(label))
    }
}
