//! Configuración del entorno.

pub mod environment;

pub use environment::ApiConfig;
