//! Configuración del endpoint GraphQL
//!
//! El par endpoint/API key pertenece al colaborador de setup externo; el
//! core lo recibe como valor explícito y solo lo lee, nunca lo muta.

use anyhow::Context;
use std::env;

/// Par endpoint/API key contra el que se ejecuta cada operación
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// URL absoluta del endpoint GraphQL
    pub endpoint: String,
    /// API key opaca, enviada como header en cada request
    pub api_key: String,
}

impl ApiConfig {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Cargar configuración desde variables de entorno
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint = env::var("TRACKING_API_URL").context("TRACKING_API_URL must be set")?;
        let api_key = env::var("TRACKING_API_KEY").context("TRACKING_API_KEY must be set")?;
        Ok(Self { endpoint, api_key })
    }
}
