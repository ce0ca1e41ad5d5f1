//! Servicios del core de tracking
//!
//! Orquestación de requests y normalización de respuestas.

pub mod normalizer;
pub mod tracking_service;

pub use normalizer::{normalize, normalize_single};
pub use tracking_service::TrackingService;
