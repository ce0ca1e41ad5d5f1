//! Configuración de journeys
//!
//! Estructura advisory que describe los tracking points válidos de un
//! journey y la forma de sus orígenes/destinos. Read-only for this client
//! and only used for form shaping; the server re-validates everything.

use serde::{Deserialize, Serialize};

/// Acción de vehículo requerida por un tracking point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleAction {
    Loading,
    Unloading,
    Keeping,
    CsLoading,
    CsUnloading,
    CsKeeping,
}

/// Fuente de un tracking point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingPointType {
    User,
    Api,
    Bpm,
}

/// Forma del origen/destino de un journey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OriginDestinationType {
    ArrivalFlight,
    DepartureFlight,
    TransferFlight,
    SelectionList,
    Custom,
}

/// Presentación de un tracking point en el UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyUi {
    pub icon: String,
    pub color: String,
    pub text_color: String,
    pub button_text: String,
    pub category_text: String,
}

/// Grafo de transiciones de un tracking point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyFlow {
    pub next_tracking_points: Vec<String>,
    pub is_initial: bool,
    #[serde(default)]
    pub vehicle_action: Option<VehicleAction>,
    #[serde(default)]
    pub no_of_images: Option<Vec<String>>,
}

/// Entrada de una lista de selección de orígenes/destinos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionListItem {
    pub name: String,
    pub read_access: Vec<String>,
}

/// Origen o destino de un journey, discriminado por `__typename`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum OriginDestination {
    #[serde(rename = "OriginDestinationBase")]
    Base {
        name: String,
        origin_type: OriginDestinationType,
        icon: String,
    },
    #[serde(rename = "SelectionList")]
    SelectionList {
        name: String,
        origin_type: OriginDestinationType,
        icon: String,
        selection_list: Vec<SelectionListItem>,
    },
}

impl OriginDestination {
    pub fn name(&self) -> &str {
        match self {
            OriginDestination::Base { name, .. } => name,
            OriginDestination::SelectionList { name, .. } => name,
        }
    }
}

/// Definición de un tracking point, discriminada por `__typename`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum TrackingPointConfig {
    #[serde(rename = "TrackingPointConfigBase")]
    Base {
        #[serde(rename = "type")]
        point_type: TrackingPointType,
        status: String,
        status_name: String,
        #[serde(default)]
        location: Option<String>,
        #[serde(default)]
        flow: Option<JourneyFlow>,
        read_access: Vec<String>,
        full_access: Vec<String>,
    },
    #[serde(rename = "UserTrackingPointConfig")]
    User {
        #[serde(rename = "type")]
        point_type: TrackingPointType,
        status: String,
        status_name: String,
        #[serde(default)]
        location: Option<String>,
        ui: JourneyUi,
        #[serde(default)]
        flow: Option<JourneyFlow>,
        read_access: Vec<String>,
        full_access: Vec<String>,
    },
}

impl TrackingPointConfig {
    pub fn status(&self) -> &str {
        match self {
            TrackingPointConfig::Base { status, .. } => status,
            TrackingPointConfig::User { status, .. } => status,
        }
    }

    pub fn flow(&self) -> Option<&JourneyFlow> {
        match self {
            TrackingPointConfig::Base { flow, .. } => flow.as_ref(),
            TrackingPointConfig::User { flow, .. } => flow.as_ref(),
        }
    }

    /// Tracking points desde los que puede arrancar un journey
    pub fn is_initial(&self) -> bool {
        self.flow().map(|f| f.is_initial).unwrap_or(false)
    }
}

/// Configuración completa de un journey
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyConfig {
    pub name: String,
    pub origin: OriginDestination,
    pub destination: OriginDestination,
    pub tracking_points: Vec<TrackingPointConfig>,
}

/// Entrada del menú de acciones de tracking por journey/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub journey: String,
    pub status: String,
    pub category: String,
    pub menu_item: String,
    #[serde(default)]
    pub cognito_group: Option<String>,
    #[serde(default)]
    pub ui: Option<JourneyUi>,
    #[serde(default)]
    pub flow: Option<JourneyFlow>,
}
