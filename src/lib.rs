//! Core de tracking de equipaje sobre GraphQL
//!
//! Cliente para el seguimiento de equipaje aéreo a través de journeys
//! multi-etapa (p. ej. transferencia vuelo-crucero), respaldado por un API
//! GraphQL remoto. El crate cubre el transporte, el catálogo de
//! operaciones, el modelo de dominio, el orquestador de requests y la
//! normalización de respuestas; la capa de presentación y la persistencia
//! de credenciales quedan fuera.

pub mod client;
pub mod config;
pub mod dto;
pub mod models;
pub mod operations;
pub mod services;
pub mod utils;

pub use client::{GraphQlClient, GraphQlTransport, API_KEY_HEADER};
pub use config::ApiConfig;
pub use dto::{BagTrackingData, TrackingMode};
pub use models::{GraphQlEnvelope, GraphQlError, TrackedBag, TrackingPoint};
pub use operations::{Operation, ResponseShape};
pub use services::TrackingService;
pub use utils::errors::{TrackingError, TrackingResult};
