//! Envolvente genérica de respuestas GraphQL
//!
//! Toda respuesta del servidor sigue la forma `{data?, errors?}`;
//! estos tipos la representan sin interpretar el payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::errors::{TrackingError, TrackingResult};

/// Posición dentro del documento reportada por el servidor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// Un error de operación tal como lo devuelve el servidor GraphQL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<GraphQlErrorLocation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Envolvente `{data?, errors?}` de una respuesta GraphQL
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphQlEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlEnvelope {
    /// Convierte un array `errors` no vacío en un error tipado,
    /// etiquetado con el nombre de la operación que falló.
    pub fn into_checked(self, operation: &str) -> TrackingResult<Self> {
        if let Some(first) = self.errors.first() {
            return Err(TrackingError::GraphQl {
                operation: operation.to_string(),
                message: first.message.clone(),
                errors: self.errors,
            });
        }
        Ok(self)
    }
}
