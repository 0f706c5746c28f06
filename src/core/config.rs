use std::env;
use std::time::Duration;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Missing keys are reported per request rather than at startup.
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    /// `None` leaves the upstream call unbounded.
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let request_timeout = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_timeout_secs(&raw)?),
            _ => None,
        };

        Ok(Self {
            google_api_key: env::var("GOOGLE_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            gemini_model: env::var("GEMINI_MODEL")
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .ok()
                .filter(|b| !b.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            request_timeout,
        })
    }

    /// Config pointing at the public Gemini endpoint with the given key.
    #[must_use]
    pub fn with_api_key(api_key: Option<String>) -> Self {
        Self {
            google_api_key: api_key,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            request_timeout: None,
        }
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration, String> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("GEMINI_TIMEOUT_SECS: {e}"))?;
    if secs == 0 {
        return Err("GEMINI_TIMEOUT_SECS: must be greater than zero".to_string());
    }
    Ok(Duration::from_secs(secs))
}
