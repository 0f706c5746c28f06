//! Gemini (`generateContent`) API client module
//!
//! Builds the fixed-shape thread request and performs the single outbound call.
//! Successful response bodies are returned as the exact text received.

use reqwest::Client;
use serde::de::IgnoredAny;
use serde_json::{Value, json};
use tracing::{debug, info};
use url::Url;

use super::prompt::{SYSTEM_PROMPT, build_user_query};
use crate::core::config::AppConfig;
use crate::errors::{RelayError, describe_chain};

/// Builds the `generateContent` payload for an article URL.
///
/// The payload enables the `google_search` tool so the model can read the
/// article, and carries [`SYSTEM_PROMPT`] as the system instruction.
#[must_use]
pub fn build_payload(article_url: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": build_user_query(article_url) }] }],
        "tools": [{ "google_search": {} }],
        "systemInstruction": { "parts": [{ "text": SYSTEM_PROMPT }] },
    })
}

/// Pulls `error.message` out of a Gemini error body, if there is one.
#[must_use]
pub fn upstream_error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    parsed
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(std::string::ToString::to_string)
}

/// Gemini API client scoped to a single invocation.
///
/// The underlying HTTP client is dropped together with this value.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model_name: String,
    api_base: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`RelayError::MissingApiKey`] when no key is configured, or
    /// [`RelayError::Upstream`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, RelayError> {
        let api_key = config
            .google_api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(RelayError::MissingApiKey)?
            .to_string();

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            RelayError::Upstream(format!(
                "falha ao criar o cliente HTTP: {}",
                describe_chain(&e.without_url())
            ))
        })?;

        Ok(Self {
            http,
            api_key,
            model_name: config.gemini_model.clone(),
            api_base: config.gemini_api_base.clone(),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Full `generateContent` URL, key included as the `key` query parameter.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Upstream`] if the configured base does not form a
    /// valid URL.
    pub fn endpoint(&self) -> Result<Url, RelayError> {
        let raw = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model_name
        );
        let mut url =
            Url::parse(&raw).map_err(|e| RelayError::Upstream(format!("endpoint inválido: {e}")))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Sends `payload` and returns the upstream body text unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Upstream`] on transport failure, a non-2xx status,
    /// an unreadable body, or a body that is not JSON.
    pub async fn generate_content(&self, payload: &Value) -> Result<String, RelayError> {
        let url = self.endpoint()?;

        #[cfg(feature = "debug-logs")]
        debug!("Gemini payload:\n{}", payload);

        info!(model = %self.model_name, "Calling Gemini generateContent");

        let response = self.http.post(url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = match upstream_error_message(&error_text) {
                Some(message) => format!("{status}: {message}"),
                None => status.to_string(),
            };
            return Err(RelayError::Upstream(detail));
        }

        let body = response.text().await?;
        serde_json::from_str::<IgnoredAny>(&body)?;

        debug!(bytes = body.len(), "Gemini response received");
        Ok(body)
    }

    /// Builds the thread payload for `article_url` and sends it.
    ///
    /// # Errors
    ///
    /// See [`GeminiClient::generate_content`].
    pub async fn generate_thread(&self, article_url: &str) -> Result<String, RelayError> {
        self.generate_content(&build_payload(article_url)).await
    }
}
