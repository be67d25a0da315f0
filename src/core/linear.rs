use serde::{Deserialize, Serialize};

use crate::core::classifier::{check_shape, Classifier, ModelError};
use crate::models::Label;

/// Linear classifier: label 1 when `coefficients . x + intercept > 0`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LogisticRegression {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::InvalidArtifact(
                "logistic regression has no coefficients".to_string(),
            ));
        }
        Ok(())
    }

    /// Raw linear score (log-odds of the positive class)
    pub fn decision_function(&self, features: &[f64]) -> Result<f64, ModelError> {
        check_shape(self.coefficients.len(), features)?;

        Ok(self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept)
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn predict(&self, features: &[f64]) -> Result<Label, ModelError> {
        let score = self.decision_function(features)?;
        Ok(if score > 0.0 { Label::Positive } else { Label::Negative })
    }
}
