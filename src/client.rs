//! Cliente HTTP para el API GraphQL de tracking
//!
//! Este módulo contiene el transporte: un POST por operación con el
//! documento y las variables en el body y la API key en un header. Sin
//! retries, sin caché, sin de-duplicación de requests concurrentes.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::models::graphql::GraphQlEnvelope;
use crate::operations::Operation;
use crate::utils::errors::{TrackingError, TrackingResult};

/// Header que transporta la API key
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Body `{"query", "variables"}` de un request GraphQL
#[derive(Debug, Serialize)]
struct GraphQlRequestBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Value>,
}

/// Seam de transporte: ejecuta una operación del catálogo y devuelve la
/// envolvente cruda. Los tests lo sustituyen por un mock que registra
/// las llamadas.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    async fn execute(
        &self,
        config: &ApiConfig,
        operation: &Operation,
    ) -> TrackingResult<GraphQlEnvelope>;
}

/// Transporte reqwest contra el endpoint configurado
pub struct GraphQlClient {
    http: reqwest::Client,
}

impl GraphQlClient {
    /// Crear nuevo cliente HTTP
    pub fn new() -> TrackingResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self { http })
    }

    /// Ejecuta un documento arbitrario contra el endpoint. Una única
    /// tentativa; la política de retry es del caller.
    pub async fn execute_document(
        &self,
        config: &ApiConfig,
        document: &str,
        variables: Option<&Value>,
    ) -> TrackingResult<GraphQlEnvelope> {
        let response = self
            .http
            .post(&config.endpoint)
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, &config.api_key)
            .json(&GraphQlRequestBody {
                query: document,
                variables,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TrackingError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphQlEnvelope = response.json().await?;
        Ok(envelope)
    }
}

#[async_trait]
impl GraphQlTransport for GraphQlClient {
    async fn execute(
        &self,
        config: &ApiConfig,
        operation: &Operation,
    ) -> TrackingResult<GraphQlEnvelope> {
        let variables = operation.variables()?;
        self.execute_document(config, operation.document(), variables.as_ref())
            .await
    }
}
