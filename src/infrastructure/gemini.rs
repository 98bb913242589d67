//! Gemini generative-language client

use crate::domain::coach::TradeCoach;
use crate::error::{ProtradeError, Result};
use crate::infrastructure::Config;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, with its parts joined
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

/// Blocking client for the `generateContent` endpoint
pub struct GeminiCoach {
    client: reqwest::blocking::Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiCoach {
    /// Build a client from config. Returns `None` when no API key is set.
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        let Some(api_key) = config.api_key() else {
            log::warn!(
                "API key not found in environment variable {}",
                config.api_key_env
            );
            return Ok(None);
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProtradeError::Ai(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Some(GeminiCoach {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        }))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base, self.model
        )
    }
}

impl TradeCoach for GeminiCoach {
    fn request(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        log::debug!("Requesting feedback from {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| ProtradeError::Ai(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtradeError::Ai(format!(
                "Service returned status {}",
                status
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| ProtradeError::Ai(format!("Malformed response: {}", e)))?;

        Ok(parsed.text())
    }
}
