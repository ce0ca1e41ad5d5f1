//! Vehículos de transporte de equipaje.

use serde::{Deserialize, Serialize};

/// Vehículo registrado para un journey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub journey: Option<String>,
}
