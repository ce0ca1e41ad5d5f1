//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del core de tracking
//! y los helpers para construirlos.

use thiserror::Error;

use crate::models::graphql::GraphQlError;

/// Errores principales del core de tracking
#[derive(Error, Debug)]
pub enum TrackingError {
    /// Local, pre-dispatch. Never causes a network call.
    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    /// Non-success HTTP status from the GraphQL endpoint.
    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// Connection, TLS or body-read failure below the HTTP layer.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP succeeded but the server reported operation-level errors.
    /// `message` is `errors[0].message`; the full list is kept for diagnostics.
    #[error("GraphQL operation '{operation}' failed: {message}")]
    GraphQl {
        operation: String,
        message: String,
        errors: Vec<GraphQlError>,
    },

    /// Response payload did not match the expected entity shape.
    #[error("Failed to decode response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Resultado tipado para operaciones que pueden fallar
pub type TrackingResult<T> = Result<T, TrackingError>;

/// Helper para crear errores de validación
pub fn validation_error(field: &str, message: &str) -> TrackingError {
    TrackingError::Validation {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Helper para crear errores de campo requerido ausente
pub fn missing_field_error(field: &str) -> TrackingError {
    validation_error(field, "is required")
}

impl TrackingError {
    /// True cuando el error se produjo antes de tocar la red.
    pub fn is_local(&self) -> bool {
        matches!(self, TrackingError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_field() {
        let err = validation_error("origin_date", "must match YYYY-MM-DD");
        let msg = err.to_string();
        assert!(msg.contains("origin_date"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(err.is_local());
    }

    #[test]
    fn test_transport_error_carries_status_and_body() {
        let err = TrackingError::Transport {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502: bad gateway");
        assert!(!err.is_local());
    }
}
