//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema GraphQL del servidor de tracking.

pub mod bag;
pub mod graphql;
pub mod journey;
pub mod journey_config;
pub mod tracked_bag;
pub mod tracking_point;
pub mod vehicle;

pub use bag::Bag;
pub use graphql::{GraphQlEnvelope, GraphQlError};
pub use journey::{Journey, STATUS_EXPECTED};
pub use journey_config::{JourneyConfig, MenuItem};
pub use tracked_bag::TrackedBag;
pub use tracking_point::{BagImage, TrackingPoint};
pub use vehicle::Vehicle;
