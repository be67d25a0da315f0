use serde::{Deserialize, Serialize};

/// Ordered numeric input to the classifier.
///
/// The service never names the positions; their order is a contract with the
/// model artifact that was loaded at startup.
pub type FeatureVector = Vec<f64>;

/// Binary class label produced by a classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    pub fn from_index(index: usize) -> Self {
        if index == 1 {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

/// Loan decision derived from the model's binary output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Approved => "Approved",
            Decision::Rejected => "Rejected",
        }
    }
}

impl From<Label> for Decision {
    fn from(label: Label) -> Self {
        match label {
            Label::Positive => Decision::Approved,
            Label::Negative => Decision::Rejected,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
