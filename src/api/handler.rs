//! API Lambda handler for the thread relay.
//!
//! This module handles:
//! - Method dispatch (CORS preflight, POST only)
//! - Request validation (`url` in the JSON body)
//! - Forwarding the thread request to Gemini and passing the answer back

use super::{helpers, parsing};
use crate::ai::GeminiClient;
use crate::core::config::AppConfig;
use crate::errors::RelayError;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Fails the invocation only when the environment configuration itself is
/// unreadable; every request-level failure is returned as a proxy response.
#[tracing::instrument(level = "info", skip(event), fields(correlation_id = %Uuid::new_v4()))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    Ok(handle_request(&config, &event.payload).await)
}

/// Handles one proxy event against an explicit configuration.
///
/// Always yields a proxy response: 200 with the upstream body, or an
/// `{"error": ...}` body with 400, 405 or 500.
pub async fn handle_request(config: &AppConfig, payload: &Value) -> Value {
    match relay(config, payload).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                RelayError::Upstream(detail) => {
                    error!(detail = %detail, "Erro ao chamar a API do Google");
                }
                RelayError::MissingApiKey => {
                    error!("A variável de ambiente GOOGLE_API_KEY não está configurada");
                }
                RelayError::MissingUrl | RelayError::MethodNotAllowed => {
                    warn!(status = e.status_code(), "Rejected request: {}", e);
                }
            }
            helpers::from_error(&e)
        }
    }
}

async fn relay(config: &AppConfig, payload: &Value) -> Result<Value, RelayError> {
    // Direct invocations carry no method and are treated as POST
    let method = parsing::get_method(payload).unwrap_or_else(|| "POST".to_string());

    if let Some(trace_id) = payload
        .get("headers")
        .and_then(|h| parsing::get_header_value(h, "X-Amzn-Trace-Id"))
    {
        info!(method = %method, xray_trace_id = %trace_id, "Relay request received");
    } else {
        info!(method = %method, "Relay request received");
    }

    match method.as_str() {
        "OPTIONS" => return Ok(helpers::preflight()),
        "POST" => {}
        _ => return Err(RelayError::MethodNotAllowed),
    }

    let body = parsing::parse_body(payload);
    let article_url = parsing::extract_article_url(body.as_ref())?;

    let client = GeminiClient::from_config(config)?;
    info!(article_url = %article_url, model = %client.model_name(), "Generating thread");

    let upstream_body = client.generate_thread(&article_url).await?;

    info!("Thread generated, passing upstream response through");
    Ok(helpers::ok_json_raw(upstream_body))
}
