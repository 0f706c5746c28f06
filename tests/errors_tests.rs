use std::error::Error;
use std::fmt;
use thread_relay::errors::{RelayError, describe_chain};

#[test]
fn test_relay_error_implements_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    let error = RelayError::MissingUrl;
    assert_error(&error);
}

#[test]
fn test_relay_error_display() {
    assert_eq!(format!("{}", RelayError::MissingUrl), "URL não fornecida");
    assert_eq!(
        format!("{}", RelayError::MissingApiKey),
        "Chave de API não configurada no servidor. Verifique as variáveis de ambiente na Vercel."
    );
    assert_eq!(
        format!("{}", RelayError::Upstream("connection refused".to_string())),
        "Erro de comunicação com a API do Google: connection refused"
    );
    assert_eq!(
        format!("{}", RelayError::MethodNotAllowed),
        "Método não permitido"
    );
}

#[test]
fn test_relay_error_status_codes() {
    assert_eq!(RelayError::MissingUrl.status_code(), 400);
    assert_eq!(RelayError::MethodNotAllowed.status_code(), 405);
    assert_eq!(RelayError::MissingApiKey.status_code(), 500);
    assert_eq!(RelayError::Upstream(String::new()).status_code(), 500);
}

#[test]
fn test_relay_error_from_conversions() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let relay_err: RelayError = json_err.into();

    match relay_err {
        RelayError::Upstream(msg) => assert!(msg.starts_with("resposta inválida")),
        _ => panic!("Unexpected error type"),
    }

    // Only checks that the reqwest conversion exists
    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> RelayError {
        RelayError::from(err)
    }
}

#[derive(Debug)]
struct Layer {
    text: &'static str,
    inner: Option<Box<Layer>>,
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl Error for Layer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

#[test]
fn test_describe_chain_joins_causes() {
    let err = Layer {
        text: "error sending request",
        inner: Some(Box::new(Layer {
            text: "client error (Connect)",
            inner: Some(Box::new(Layer {
                text: "operation timed out",
                inner: None,
            })),
        })),
    };

    assert_eq!(
        describe_chain(&err),
        "error sending request: client error (Connect): operation timed out"
    );
}

#[test]
fn test_describe_chain_skips_repeated_and_empty_causes() {
    let err = Layer {
        text: "operation timed out",
        inner: Some(Box::new(Layer {
            text: "operation timed out",
            inner: Some(Box::new(Layer {
                text: "",
                inner: None,
            })),
        })),
    };

    assert_eq!(describe_chain(&err), "operation timed out");

    let single = Layer {
        text: "error decoding response body",
        inner: None,
    };
    assert_eq!(describe_chain(&single), "error decoding response body");
}
