use serde::{Deserialize, Serialize};

use crate::core::classifier::{check_shape, Classifier, ModelError};
use crate::models::Label;

/// Number of classes every leaf distribution must carry
const N_CLASSES: usize = 2;

/// A single node of a fitted decision tree
///
/// Split nodes send a sample left when `x[feature] <= threshold`.
/// Leaf nodes hold per-class sample counts (or weights).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

/// Decision tree stored as a flat node array, root at index 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
}

impl DecisionTree {
    /// Children must come after their parent, so traversal always terminates.
    fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::InvalidArtifact("tree has no nodes".to_string()));
        }

        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split { feature, left, right, .. } => {
                    if *feature >= n_features {
                        return Err(ModelError::InvalidArtifact(format!(
                            "node {} splits on feature {} but model has {} features",
                            index, feature, n_features
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(ModelError::InvalidArtifact(format!(
                                "node {} has invalid child index {}",
                                index, child
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if value.len() != N_CLASSES {
                        return Err(ModelError::InvalidArtifact(format!(
                            "leaf {} has {} class values, expected {}",
                            index,
                            value.len(),
                            N_CLASSES
                        )));
                    }
                    if value.iter().any(|v| *v < 0.0) || value.iter().sum::<f64>() <= 0.0 {
                        return Err(ModelError::InvalidArtifact(format!(
                            "leaf {} has no positive class weight",
                            index
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Walk from the root to the leaf that `features` falls into
    ///
    /// Errors instead of looping or panicking on a tree that never went
    /// through `validate`.
    fn leaf(&self, features: &[f64]) -> Result<&[f64], ModelError> {
        let mut index = 0;
        loop {
            let node = self.nodes.get(index).ok_or_else(|| {
                ModelError::InvalidArtifact(format!("node index {} out of range", index))
            })?;

            match node {
                Node::Split { feature, threshold, left, right } => {
                    let x = features.get(*feature).ok_or(ModelError::FeatureCountMismatch {
                        expected: feature + 1,
                        actual: features.len(),
                    })?;
                    let next = if x <= threshold { *left } else { *right };
                    if next <= index {
                        return Err(ModelError::InvalidArtifact(format!(
                            "node {} has invalid child index {}",
                            index, next
                        )));
                    }
                    index = next;
                }
                Node::Leaf { value } => return Ok(value),
            }
        }
    }

    /// Class probabilities at the leaf reached by `features`
    pub fn predict_proba(&self, features: &[f64]) -> Result<[f64; N_CLASSES], ModelError> {
        let value = self.leaf(features)?;
        let total: f64 = value.iter().sum();
        if value.len() != N_CLASSES || total <= 0.0 {
            return Err(ModelError::InvalidArtifact(
                "leaf has no usable class distribution".to_string(),
            ));
        }
        Ok([value[0] / total, value[1] / total])
    }
}

/// Ensemble of decision trees; the predicted class is the argmax of the
/// averaged per-tree class probabilities, ties going to class 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.n_features == 0 {
            return Err(ModelError::InvalidArtifact("forest has zero features".to_string()));
        }
        if self.trees.is_empty() {
            return Err(ModelError::InvalidArtifact("forest has no trees".to_string()));
        }

        self.trees
            .iter()
            .try_for_each(|tree| tree.validate(self.n_features))
    }

    pub fn predict_proba(&self, features: &[f64]) -> Result<[f64; N_CLASSES], ModelError> {
        check_shape(self.n_features, features)?;
        if self.trees.is_empty() {
            return Err(ModelError::InvalidArtifact("forest has no trees".to_string()));
        }

        let mut proba = [0.0; N_CLASSES];
        for tree in &self.trees {
            let tree_proba = tree.predict_proba(features)?;
            proba[0] += tree_proba[0];
            proba[1] += tree_proba[1];
        }

        let n_trees = self.trees.len() as f64;
        Ok([proba[0] / n_trees, proba[1] / n_trees])
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<Label, ModelError> {
        let proba = self.predict_proba(features)?;
        // first maximum wins
        let class = if proba[1] > proba[0] { 1 } else { 0 };
        Ok(Label::from_index(class))
    }
}
