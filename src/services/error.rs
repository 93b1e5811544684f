// ============================================================================
// API ERROR - Taxonomía de fallos del cliente HTTP
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Fallo de transporte (sin respuesta del servidor)
    #[error("Network error: {0}")]
    Network(String),

    /// 401: ya se limpió la sesión y se forzó la navegación al login
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Cualquier otra respuesta no-2xx
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }

    /// Mensaje del servidor, si lo hubo (para formularios)
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } | ApiError::Unauthorized(message) => Some(message),
            _ => None,
        }
    }
}

/// Extrae el mensaje de error de un body DRF:
/// `detail` → `message` → `non_field_errors[0]` → primer error de campo → texto plano
pub fn extract_error_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "Unknown error".to_string();
    }

    let value: serde_json::Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(_) => return trimmed.to_string(),
    };

    let Some(object) = value.as_object() else {
        return first_text(&value).unwrap_or_else(|| trimmed.to_string());
    };

    for key in ["detail", "message", "non_field_errors"] {
        if let Some(text) = object.get(key).and_then(first_text) {
            return text;
        }
    }

    object
        .iter()
        .find_map(|(field, errors)| first_text(errors).map(|text| format!("{}: {}", field, text)))
        .unwrap_or_else(|| trimmed.to_string())
}

fn first_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_detail_first() {
        assert_eq!(
            extract_error_message(r#"{"detail": "Not found.", "message": "ignored"}"#),
            "Not found."
        );
        assert_eq!(extract_error_message(r#"{"message": "Flight is full"}"#), "Flight is full");
    }

    #[test]
    fn extracts_non_field_and_field_errors() {
        assert_eq!(
            extract_error_message(
                r#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#
            ),
            "Unable to log in with provided credentials."
        );
        assert_eq!(
            extract_error_message(r#"{"username": ["A user with that username already exists."]}"#),
            "username: A user with that username already exists."
        );
        assert_eq!(extract_error_message(r#"["Pod already booked"]"#), "Pod already booked");
    }

    #[test]
    fn falls_back_to_raw_text() {
        assert_eq!(extract_error_message("  "), "Unknown error");
        assert_eq!(extract_error_message("<h1>Bad Gateway</h1>"), "<h1>Bad Gateway</h1>");
        assert_eq!(extract_error_message(r#"{"count": 3}"#), r#"{"count": 3}"#);
    }

    #[test]
    fn status_accessor() {
        assert_eq!(ApiError::Unauthorized("x".into()).status(), Some(401));
        assert_eq!(
            ApiError::Status { status: 404, message: "Not found.".into() }.status(),
            Some(404)
        );
        assert_eq!(ApiError::Network("offline".into()).status(), None);
        assert_eq!(
            ApiError::Status { status: 400, message: "bad".into() }.to_string(),
            "HTTP 400: bad"
        );
    }
}
