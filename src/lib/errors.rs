use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
}

impl AppError {
    /// HTTP status carried by `Http` errors, `None` for local failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Display-ready text for screens. `Config` messages are already written
    /// for the user; HTTP bodies are flattened from the API error format
    /// (either a `detail` string or a map of field names to message lists).
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(message) => message.clone(),
            AppError::Http { message, .. } => flatten_api_error(message),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Erro de configuração: {message}"),
            AppError::Network(message) => write!(formatter, "Erro de rede: {message}"),
            AppError::Timeout(message) => write!(formatter, "Tempo esgotado: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Falha na requisição ({status}): {message}")
            }
            AppError::Parse(message) => write!(formatter, "Erro na resposta: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Erro na requisição: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Flattens an API error body into one line of user-facing text. Non-JSON
/// bodies are returned as-is.
fn flatten_api_error(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    let serde_json::Value::Object(map) = value else {
        return body.to_string();
    };

    if let Some(detail) = map.get("detail").and_then(|detail| detail.as_str()) {
        return detail.to_string();
    }
    if let Some(error) = map.get("error").and_then(|error| error.as_str()) {
        return error.to_string();
    }

    let mut parts = Vec::new();
    for (field, messages) in &map {
        let text = match messages {
            serde_json::Value::Array(list) => list
                .iter()
                .filter_map(|entry| entry.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        parts.push(format!("{field}: {text}"));
    }

    if parts.is_empty() {
        body.to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn user_message_unwraps_config_errors() {
        let error = AppError::Config("Email e senha são obrigatórios.".to_string());
        assert_eq!(error.user_message(), "Email e senha são obrigatórios.");
    }

    #[test]
    fn user_message_extracts_detail_from_http_bodies() {
        let error = AppError::Http {
            status: 401,
            message: r#"{"detail":"No active account found with the given credentials"}"#
                .to_string(),
        };
        assert_eq!(
            error.user_message(),
            "No active account found with the given credentials"
        );
    }

    #[test]
    fn user_message_flattens_field_errors() {
        let error = AppError::Http {
            status: 400,
            message: r#"{"email":["Usuário com este email já existe."]}"#.to_string(),
        };
        assert_eq!(
            error.user_message(),
            "email: Usuário com este email já existe."
        );
    }

    #[test]
    fn user_message_passes_through_plain_bodies() {
        let error = AppError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(error.user_message(), "Internal Server Error");
    }

    #[test]
    fn status_is_only_set_for_http_errors() {
        assert_eq!(
            AppError::Http {
                status: 403,
                message: String::new()
            }
            .status(),
            Some(403)
        );
        assert_eq!(AppError::Network("offline".to_string()).status(), None);
    }
}
