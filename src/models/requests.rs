use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::FeatureVector;

/// Request to score a single feature vector
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(length(min = 1))]
    pub features: FeatureVector,
}
