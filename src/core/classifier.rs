use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::forest::RandomForest;
use crate::core::linear::LogisticRegression;
use crate::models::Label;

/// Errors raised while evaluating or assembling model artifacts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("expected {expected} features, got {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("scaler expects {scaler} features but model expects {model}")]
    ScalerMismatch { model: usize, scaler: usize },

    #[error("invalid artifact: {0}")]
    InvalidArtifact(String),
}

/// A trained binary classifier over fixed-length feature vectors
pub trait Classifier {
    /// Number of features the classifier was trained on
    fn n_features(&self) -> usize;

    /// Predict the class label for a single feature vector
    fn predict(&self, features: &[f64]) -> Result<Label, ModelError>;
}

/// Reject vectors whose length disagrees with what an artifact was fit on
#[inline]
pub fn check_shape(expected: usize, features: &[f64]) -> Result<(), ModelError> {
    if features.len() != expected {
        return Err(ModelError::FeatureCountMismatch {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}

/// Serialized model document, tagged by `kind`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    RandomForest(RandomForest),
    LogisticRegression(LogisticRegression),
}

impl ModelArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::RandomForest(_) => "random_forest",
            ModelArtifact::LogisticRegression(_) => "logistic_regression",
        }
    }

    /// Check the internal consistency of a freshly deserialized artifact
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            ModelArtifact::RandomForest(forest) => forest.validate(),
            ModelArtifact::LogisticRegression(model) => model.validate(),
        }
    }
}

impl Classifier for ModelArtifact {
    fn n_features(&self) -> usize {
        match self {
            ModelArtifact::RandomForest(forest) => forest.n_features(),
            ModelArtifact::LogisticRegression(model) => model.n_features(),
        }
    }

    fn predict(&self, features: &[f64]) -> Result<Label, ModelError> {
        match self {
            ModelArtifact::RandomForest(forest) => forest.predict(features),
            ModelArtifact::LogisticRegression(model) => model.predict(features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_shape() {
        assert!(check_shape(3, &[1.0, 2.0, 3.0]).is_ok());
        assert_eq!(
            check_shape(3, &[1.0]),
            Err(ModelError::FeatureCountMismatch { expected: 3, actual: 1 })
        );
    }

    #[test]
    fn test_artifact_tagged_by_kind() {
        let json = r#"{"kind": "logistic_regression", "coefficients": [1.0, -1.0], "intercept": 0.0}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();

        assert_eq!(artifact.kind(), "logistic_regression");
        assert_eq!(artifact.n_features(), 2);
        assert_eq!(artifact.predict(&[2.0, 1.0]).unwrap(), Label::Positive);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"kind": "svm", "weights": []}"#;
        assert!(serde_json::from_str::<ModelArtifact>(json).is_err());
    }
}
