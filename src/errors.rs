use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("URL não fornecida")]
    MissingUrl,

    #[error(
        "Chave de API não configurada no servidor. Verifique as variáveis de ambiente na Vercel."
    )]
    MissingApiKey,

    #[error("Erro de comunicação com a API do Google: {0}")]
    Upstream(String),

    #[error("Método não permitido")]
    MethodNotAllowed,
}

impl RelayError {
    /// HTTP status code returned to the caller for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::MissingUrl => 400,
            RelayError::MethodNotAllowed => 405,
            RelayError::MissingApiKey | RelayError::Upstream(_) => 500,
        }
    }
}

// The request URL carries the API key as a query parameter, so it is stripped
// before the error text can reach a log line or a response body.
impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::Upstream(describe_chain(&error.without_url()))
    }
}

/// Joins an error with its `source()` chain, e.g.
/// `error sending request: operation timed out`.
#[must_use]
pub fn describe_chain(error: &dyn StdError) -> String {
    let mut detail = error.to_string();
    let mut last = detail.clone();
    let mut cause = error.source();
    while let Some(inner) = cause {
        let text = inner.to_string();
        if !text.is_empty() && text != last {
            detail.push_str(": ");
            detail.push_str(&text);
            last = text;
        }
        cause = inner.source();
    }
    detail
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::Upstream(format!("resposta inválida: {error}"))
    }
}
