//! Normalización de respuestas GraphQL
//!
//! Las respuestas vienen bajo la clave propia de cada operación y el payload
//! puede ser un objeto o una lista según cuál se ejecutó. Este módulo borra
//! esa asimetría: todo caller consume una lista uniforme.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::graphql::GraphQlEnvelope;
use crate::utils::errors::TrackingResult;

/// Aplana el payload de una envolvente a una lista tipada.
///
/// The catalog guarantees exactly one top-level field per response, so the
/// sole key of `data` is taken without knowing the operation name. A single
/// object becomes a one-element list; absent or null data becomes the empty
/// list. Callers distinguish "no data" from failure via the error channel,
/// which has already fired by the time an envelope reaches this point.
pub fn normalize<T: DeserializeOwned>(envelope: GraphQlEnvelope) -> TrackingResult<Vec<T>> {
    let Some(Value::Object(data)) = envelope.data else {
        return Ok(Vec::new());
    };
    let Some((_, payload)) = data.into_iter().next() else {
        return Ok(Vec::new());
    };
    match payload {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(Into::into))
            .collect(),
        single => Ok(vec![serde_json::from_value(single)?]),
    }
}

/// Variante para operaciones de forma `Single`: la lista normalizada
/// colapsa a su único elemento, o `None` si no hubo datos.
pub fn normalize_single<T: DeserializeOwned>(
    envelope: GraphQlEnvelope,
) -> TrackingResult<Option<T>> {
    Ok(normalize(envelope)?.pop())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TrackingPoint;
    use serde_json::json;

    fn envelope(data: Value) -> GraphQlEnvelope {
        GraphQlEnvelope {
            data: Some(data),
            errors: vec![],
        }
    }

    fn point(tag: &str) -> Value {
        json!({
            "bag_tag_no": tag,
            "tracking_point_id": "tp-1",
            "journey": "FLYCRUISE",
            "status": "EXPECTED",
            "timestamp": "2025-08-30T10:00:00Z",
            "origin": "SIN",
            "origin_date": "2025-08-30",
            "destination": "MIA",
            "destination_date": "2025-09-02"
        })
    }

    #[test]
    fn test_single_object_becomes_one_element_list() {
        let points: Vec<TrackingPoint> = normalize(envelope(json!({
            "startTrackingPointJourney": point("618123456")
        })))
        .unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].bag_tag_no, "618123456");
    }

    #[test]
    fn test_list_payload_stays_as_is() {
        let points: Vec<TrackingPoint> = normalize(envelope(json!({
            "saveTrackingPointForMultipleBags": [point("618123456"), point("618123457")]
        })))
        .unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].bag_tag_no, "618123457");
    }

    #[test]
    fn test_empty_list_is_not_an_error() {
        let bags: Vec<TrackingPoint> =
            normalize(envelope(json!({"getTrackedBagsByDate": []}))).unwrap();
        assert!(bags.is_empty());
    }

    #[test]
    fn test_absent_data_normalizes_to_empty_list() {
        let none: Vec<TrackingPoint> = normalize(GraphQlEnvelope::default()).unwrap();
        assert!(none.is_empty());

        let null_data: Vec<TrackingPoint> = normalize(GraphQlEnvelope {
            data: Some(Value::Null),
            errors: vec![],
        })
        .unwrap();
        assert!(null_data.is_empty());

        let null_payload: Vec<TrackingPoint> =
            normalize(envelope(json!({"getTrackedBagByBagTagNo": null}))).unwrap();
        assert!(null_payload.is_empty());
    }

    #[test]
    fn test_shape_only_transform_preserves_fields() {
        let original = point("618123456");
        let points: Vec<Value> =
            normalize(envelope(json!({"saveTrackingPoint": original.clone()}))).unwrap();
        assert_eq!(points, vec![original]);
    }

    #[test]
    fn test_normalize_single() {
        let one: Option<TrackingPoint> = normalize_single(envelope(json!({
            "revertTrackingPoint": point("618123456")
        })))
        .unwrap();
        assert!(one.is_some());

        let none: Option<TrackingPoint> = normalize_single(GraphQlEnvelope::default()).unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_mismatched_payload_is_a_decode_error() {
        let result: TrackingResult<Vec<TrackingPoint>> =
            normalize(envelope(json!({"getTenBags": [{"unexpected": true}]})));
        assert!(result.is_err());
    }
}
