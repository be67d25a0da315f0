use std::collections::HashMap;
use thiserror::Error;

use crate::models::FeatureVector;

/// Number of inputs the form collects
pub const FEATURE_COUNT: usize = 15;

/// Form field names, in the order the model expects them
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "feature_1", "feature_2", "feature_3", "feature_4", "feature_5",
    "feature_6", "feature_7", "feature_8", "feature_9", "feature_10",
    "feature_11", "feature_12", "feature_13", "feature_14", "feature_15",
];

/// Human-readable label shown beside each field
pub const FEATURE_LABELS: [&str; FEATURE_COUNT] = [
    "No of Dependents",
    "Education",
    "Self Employed",
    "Income Annum",
    "Loan Amount",
    "Loan Term",
    "Cibil Score",
    "Residential Assets Value",
    "Commercial Assets Value",
    "Luxury Assets Value",
    "Bank Asset Value",
    "Total Assets",
    "Debt To Income",
    "Loan To Assets",
    "Cibil Bucket",
];

/// Message shown when any field fails to parse
pub const INVALID_INPUT_MESSAGE: &str = "Error: Please enter valid numbers for all fields";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("field {0} is missing")]
    Missing(&'static str),

    #[error("field {field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
}

/// Parse every named field as `f64`, in form order
pub fn parse_features(form: &HashMap<String, String>) -> Result<FeatureVector, FormError> {
    FEATURE_NAMES
        .iter()
        .map(|&field| {
            let raw = form.get(field).ok_or(FormError::Missing(field))?;
            raw.trim().parse::<f64>().map_err(|_| FormError::NotANumber {
                field,
                value: raw.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> HashMap<String, String> {
        FEATURE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), format!("{}.5", i)))
            .collect()
    }

    #[test]
    fn test_names_and_labels_align() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_LABELS.len());
        assert_eq!(FEATURE_NAMES[0], "feature_1");
        assert_eq!(FEATURE_NAMES[14], "feature_15");
    }

    #[test]
    fn test_parse_preserves_field_order() {
        let features = parse_features(&full_form()).unwrap();
        assert_eq!(features.len(), FEATURE_COUNT);
        assert_eq!(features[0], 0.5);
        assert_eq!(features[14], 14.5);
    }

    #[test]
    fn test_parse_accepts_surrounding_whitespace_and_exponents() {
        let mut form = full_form();
        form.insert("feature_3".to_string(), "  42 ".to_string());
        form.insert("feature_4".to_string(), "1e3".to_string());

        let features = parse_features(&form).unwrap();
        assert_eq!(features[2], 42.0);
        assert_eq!(features[3], 1000.0);
    }

    #[test]
    fn test_parse_rejects_text() {
        let mut form = full_form();
        form.insert("feature_7".to_string(), "abc".to_string());

        assert_eq!(
            parse_features(&form),
            Err(FormError::NotANumber { field: "feature_7", value: "abc".to_string() })
        );
    }

    #[test]
    fn test_parse_rejects_missing_and_empty() {
        let mut form = full_form();
        form.remove("feature_15");
        assert_eq!(parse_features(&form), Err(FormError::Missing("feature_15")));

        let mut form = full_form();
        form.insert("feature_1".to_string(), String::new());
        assert!(parse_features(&form).is_err());
    }
}
