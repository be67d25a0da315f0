use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::models::PredictRequest;

/// Errors that can occur when calling the prediction API
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API Error: {0}")]
    Api(u16),

    #[error("Connection Error: {0}")]
    Connection(#[from] reqwest::Error),
}

/// HTTP client for the prediction service
///
/// No timeout and no retries: a call either returns the service's answer or
/// surfaces the first failure.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    endpoint: String,
    client: Client,
}

impl PredictionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a feature vector and return the `loan_approval` value
    ///
    /// A 200 response without a `loan_approval` key yields `"Error"`; a
    /// non-string value is returned in its JSON form.
    pub async fn predict(&self, features: Vec<f64>) -> Result<String, ClientError> {
        let request = PredictRequest { features };

        tracing::debug!("Posting {} features to {}", request.features.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Prediction API returned {}", status);
            return Err(ClientError::Api(status.as_u16()));
        }

        let json: Value = response.json().await?;

        Ok(decision_text(&json))
    }
}

fn decision_text(json: &Value) -> String {
    match json.get("loan_approval") {
        Some(Value::String(decision)) => decision.clone(),
        Some(other) => other.to_string(),
        None => "Error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PredictionClient::new("http://localhost:8080/predict");
        assert_eq!(client.endpoint(), "http://localhost:8080/predict");
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::Api(StatusCode::INTERNAL_SERVER_ERROR.as_u16());
        assert_eq!(err.to_string(), "API Error: 500");
    }

    #[test]
    fn test_decision_text() {
        assert_eq!(decision_text(&serde_json::json!({"loan_approval": "Rejected"})), "Rejected");
        assert_eq!(decision_text(&serde_json::json!({"loan_approval": 1})), "1");
        assert_eq!(decision_text(&serde_json::json!({"loan_approval": null})), "null");
        assert_eq!(decision_text(&serde_json::json!({"result": "Approved"})), "Error");
    }
}
