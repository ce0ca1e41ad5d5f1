//! DTOs de entrada del core de tracking.

pub mod tracking_dto;

pub use tracking_dto::{
    BagImageInput, BagInput, BagScopedQuery, BagTrackingData, DamageReportInput, ImageInput,
    SaveTrackingPointInput, StartJourneyInput, TrackedBagInput, TrackingMode,
};
