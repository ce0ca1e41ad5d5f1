//! Tracked bags: the current-state projection of a bag's journey.

use serde::{Deserialize, Serialize};

use crate::models::tracking_point::BagImage;

/// Estado agregado de un equipaje, derivado server-side del fold de sus
/// tracking points. Keyed by `(bag_tag_no, journey)`; created implicitly
/// by the first tracking point, never deleted by this client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedBag {
    pub bag_tag_no: String,
    pub journey: String,
    pub status: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
    pub last_updated: String,
    pub origin: String,
    pub origin_date: String,
    pub destination: String,
    pub destination_date: String,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    /// Opaque AWSJSON blob, passed through without interpretation.
    #[serde(default)]
    pub additional_data: Option<String>,
    #[serde(default)]
    pub bag_images: Option<Vec<BagImage>>,
    #[serde(default)]
    pub damaged: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tracked_bag_decodes_server_payload() {
        let bag: TrackedBag = serde_json::from_value(json!({
            "bag_tag_no": "618123456",
            "journey": "FLYCRUISE",
            "status": "APPROVED_FOR_TRANSPORT",
            "location": "T1",
            "updated_by": "agent-7",
            "last_updated": "2025-08-30T11:22:33Z",
            "origin": "SIN",
            "origin_date": "2025-08-30",
            "destination": "MIA",
            "destination_date": "2025-09-02",
            "damaged": true,
            "bag_images": [
                {"name": "side.jpg", "url": "https://images.example/side.jpg", "type": "image/jpeg"}
            ]
        }))
        .unwrap();

        assert!(bag.damaged);
        assert_eq!(bag.bag_images.as_ref().unwrap().len(), 1);
        assert!(bag.vehicle_number.is_none());
    }
}
