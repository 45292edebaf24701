//! Blocking HTTP client for the relay's `POST /check-symptoms`.

use serde::{Deserialize, Serialize};
use symptom_core::AnalysisResult;

use crate::form::{RelayClient, GENERIC_FAILURE};

#[derive(Serialize)]
struct CheckSymptomsReq<'a> {
    symptoms: &'a str,
}

#[derive(Deserialize)]
struct ErrorRes {
    error: String,
}

pub struct HttpRelayClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpRelayClient {
    /// `base_url` is the relay server root, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/check-symptoms", base_url.trim_end_matches('/')),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RelayClient for HttpRelayClient {
    fn check_symptoms(&self, symptoms: &str) -> Result<AnalysisResult, String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&CheckSymptomsReq { symptoms })
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    format!("Could not reach the symptom service at {}", self.endpoint)
                } else {
                    GENERIC_FAILURE.to_string()
                }
            })?;

        if response.status().is_success() {
            return response
                .json::<AnalysisResult>()
                .map_err(|_| GENERIC_FAILURE.to_string());
        }

        Err(response
            .json::<ErrorRes>()
            .map(|body| body.error)
            .unwrap_or_else(|_| GENERIC_FAILURE.to_string()))
    }
}
