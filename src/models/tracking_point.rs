//! Tracking points: un evento inmutable en el historial de journey de un equipaje

use serde::{Deserialize, Serialize};

/// Imagen asociada a un equipaje (`url` es una ubicación de descarga
/// pre-firmada o pública)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagImage {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub image_type: String,
}

/// Un evento en el historial de journey de un equipaje.
///
/// `tracking_point_id` is server-assigned, never client-generated. A point
/// is immutable once created except for `reverted`, which only transitions
/// false -> true via the revert mutation; reverted points remain in history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingPoint {
    pub bag_tag_no: String,
    pub tracking_point_id: String,
    pub journey: String,
    pub status: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Scan-event source marker for baggage-processing-machine points.
    /// Declared non-null by the schema but observed absent on user points.
    #[serde(default)]
    pub bpm: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub reverted: bool,
    pub origin: String,
    pub origin_date: String,
    pub destination: String,
    pub destination_date: String,
    #[serde(default)]
    pub vehicle_action: Option<String>,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub tracked_by: Option<String>,
    #[serde(default)]
    pub damaged: Option<bool>,
    #[serde(default)]
    pub bag_images: Option<Vec<BagImage>>,
    /// Opaque AWSJSON blob, passed through without interpretation.
    #[serde(default)]
    pub additional_data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tracking_point_decodes_sparse_payload() {
        let point: TrackingPoint = serde_json::from_value(json!({
            "bag_tag_no": "618123456",
            "tracking_point_id": "tp-001",
            "journey": "FLYCRUISE",
            "status": "EXPECTED",
            "timestamp": "2025-08-30T10:00:00Z",
            "origin": "SIN",
            "origin_date": "2025-08-30",
            "destination": "MIA",
            "destination_date": "2025-09-02"
        }))
        .unwrap();

        assert_eq!(point.bag_tag_no, "618123456");
        assert!(!point.reverted);
        assert!(point.bpm.is_none());
        assert!(point.bag_images.is_none());
    }

    #[test]
    fn test_bag_image_type_field_rename() {
        let image: BagImage = serde_json::from_value(json!({
            "name": "damage-1.jpg",
            "url": "https://images.example/damage-1.jpg",
            "type": "image/jpeg"
        }))
        .unwrap();
        assert_eq!(image.image_type, "image/jpeg");

        let wire = serde_json::to_value(&image).unwrap();
        assert_eq!(wire["type"], "image/jpeg");
    }
}
