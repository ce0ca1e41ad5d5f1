//! DTOs de entrada para operaciones de tracking
//!
//! Los tipos `*Input` serializan exactamente las variables que acepta cada
//! operación GraphQL; los opcionales ausentes se omiten del wire en lugar
//! de enviarse como `null`.

use serde::{Deserialize, Serialize};

/// Modo de envío de un formulario de tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingMode {
    /// Arranca el journey de un equipaje (`startTrackingPointJourney`)
    Start,
    /// Registra un tracking point adicional (`saveTrackingPoint`)
    Update,
}

/// Campos capturados por el formulario de tracking.
///
/// Which fields are required depends on the submission mode; see
/// `TrackingService::submit_tracking`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BagTrackingData {
    pub bag_tag_number: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub journey: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub origin_date: Option<String>,
    #[serde(default)]
    pub destination_date: Option<String>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
}

/// Metadatos de una imagen a asociar en el upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageInput {
    pub name: String,
    #[serde(rename = "type")]
    pub image_type: String,
}

/// Un equipaje dentro de una operación multi-bag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagInput {
    pub bag_tag_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
}

impl BagInput {
    pub fn new(bag_tag_no: impl Into<String>) -> Self {
        Self {
            bag_tag_no: bag_tag_no.into(),
            origin: None,
            origin_date: None,
            destination: None,
            destination_date: None,
            vehicle_number: None,
        }
    }
}

/// Imagen asociada a la identidad completa de un equipaje
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagImageInput {
    pub bag_tag_no: String,
    pub journey: String,
    pub origin: String,
    pub origin_date: String,
    pub destination: String,
    pub destination_date: String,
    pub name: String,
    #[serde(rename = "type")]
    pub image_type: String,
}

/// Variables de `startTrackingPointJourney`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartJourneyInput {
    pub bag_tag_no: String,
    pub journey: String,
    pub status: String,
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_date: Option<String>,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_inputs: Option<String>,
}

/// Variables de `saveTrackingPoint`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTrackingPointInput {
    pub journey: String,
    pub status: String,
    pub bag_tag_no: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_inputs: Option<String>,
}

/// Variables de `reportDamageBag`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageReportInput {
    pub bag_tag_no: String,
    pub journey: String,
    pub damage_description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_date: Option<String>,
}

/// Query acotada a un equipaje dentro de un journey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagScopedQuery {
    pub bag_tag_no: String,
    pub journey: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_date: Option<String>,
}

impl BagScopedQuery {
    pub fn new(bag_tag_no: impl Into<String>, journey: impl Into<String>) -> Self {
        Self {
            bag_tag_no: bag_tag_no.into(),
            journey: journey.into(),
            origin: None,
            origin_date: None,
            destination: None,
            destination_date: None,
        }
    }
}

/// Variables de `updateTrackedBag`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedBagInput {
    pub bag_tag_no: String,
    pub journey: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub origin: String,
    pub origin_date: String,
    pub destination: String,
    pub destination_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_number: Option<String>,
    pub last_updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damaged: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageInput>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gha: Option<String>,
    pub updated_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
}
