// Inference pipeline exports
pub mod classifier;
pub mod forest;
pub mod linear;
pub mod predictor;
pub mod scaler;

pub use classifier::{check_shape, Classifier, ModelArtifact, ModelError};
pub use forest::{DecisionTree, Node, RandomForest};
pub use linear::LogisticRegression;
pub use predictor::Predictor;
pub use scaler::{ScalerArtifact, StandardScaler};
