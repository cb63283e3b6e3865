//! GeminiApiAgent - Direct REST API implementation for Gemini.
//!
//! This agent calls the Gemini REST API directly.
//! Configuration priority: secret.json in the config directory > environment
//! variables (`API_KEY_GEMINI`, then `GEMINI_API_KEY`).

use crate::agent::ModelAgent;
use async_trait::async_trait;
use finchat_core::error::{FinchatError, Result};
use finchat_infrastructure::SecretStorage;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Remediation text shown when no API key can be resolved.
pub const MISSING_KEY_HELP: &str = "No se encontró la clave de API de Gemini. Colócala en el archivo secret.json del directorio de configuración ({\"gemini\": {\"api_key\": \"...\"}}) o en la variable de entorno API_KEY_GEMINI.";

/// Agent implementation that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiApiAgent {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiApiAgent {
    /// Creates a new agent with the provided API key and model.
    ///
    /// The HTTP client carries a hard request timeout so a hung call can
    /// never hang the interaction indefinitely.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FinchatError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Loads configuration from secret.json or environment variables.
    ///
    /// Priority:
    /// 1. secret.json in the finchat config directory
    /// 2. Environment variables (`API_KEY_GEMINI`, then `GEMINI_API_KEY`)
    ///
    /// Model name defaults to `gemini-1.5-flash` if not specified.
    ///
    /// # Returns
    ///
    /// - `Err(FinchatError::ConfigMissing)`: No key anywhere; the message
    ///   carries remediation instructions and is meant for the user
    pub fn try_from_env(timeout: Duration) -> Result<Self> {
        if let Ok(storage) = SecretStorage::new() {
            if let Ok(secret_config) = storage.load() {
                if let Some(gemini_config) = secret_config.gemini {
                    let model = gemini_config
                        .model_name
                        .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
                    return Self::new(gemini_config.api_key, model, timeout);
                }
            }
        }

        let api_key = env::var("API_KEY_GEMINI")
            .or_else(|_| env::var("GEMINI_API_KEY"))
            .map_err(|_| FinchatError::config_missing(MISSING_KEY_HELP))?;

        let model = env::var("GEMINI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.into());
        Self::new(api_key, model, timeout)
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            BASE_URL,
            model = self.model,
            api_key = self.api_key
        );

        let response = self.client.post(url).json(body).send().await.map_err(|err| {
            FinchatError::external_call(format!("Gemini API request failed: {err}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            FinchatError::external_call(format!("Failed to parse Gemini response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl ModelAgent for GeminiApiAgent {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.model, chars = prompt.len(), "sending prompt");
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            FinchatError::external_call("Gemini API returned no text in the response candidates")
        })
}

fn map_http_error(status: StatusCode, body: String) -> FinchatError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    FinchatError::external_call(format!("HTTP {}: {message}", status.as_u16()))
}
