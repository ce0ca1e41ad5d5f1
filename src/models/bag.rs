//! Proyección ligera de bag usada por los datos de muestra.

use serde::{Deserialize, Serialize};

/// Proyección devuelta por `getTenBags` (datos de demo/prueba)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bag {
    pub flight_no: String,
    pub scheduled_date: String,
    pub bag_tag_no: String,
    #[serde(default)]
    pub bag_tag_last_five: Option<String>,
    #[serde(default)]
    pub bag_status: Option<String>,
    #[serde(default)]
    pub bag_journey: Option<String>,
    #[serde(default)]
    pub last_process_ts: Option<String>,
}
