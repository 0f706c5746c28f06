/// Thread Relay - a Lambda function that turns a news article link into an X
/// (Twitter) thread by relaying it to Google's Gemini API.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (Function URL / API Gateway proxy events) for serverless execution
/// - reqwest for the single outbound `generateContent` call
/// - Tokio for async runtime
///
/// The upstream JSON is passed back to the caller unmodified; failures are
/// translated into `{"error": ...}` bodies with 400, 405 or 500 status codes.
///
/// # Example
///
/// ```no_run
/// use thread_relay::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() {
///     thread_relay::setup_logging();
///
///     let config = AppConfig::with_api_key(Some("dummy_key".to_string()));
///     let event = serde_json::json!({
///         "requestContext": { "http": { "method": "POST" } },
///         "body": r#"{"url":"https://example.com/article"}"#,
///     });
///
///     let response = thread_relay::api::handle_request(&config, &event).await;
///     println!("{}", response["statusCode"]);
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;

pub use errors::RelayError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`).
/// Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// thread_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
