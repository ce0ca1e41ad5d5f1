//! Catálogo de operaciones GraphQL
//!
//! Cada operación soportada es una variante de [`Operation`]: documento,
//! variables tipadas y forma de respuesta viven juntas para que no puedan
//! divergir. El orquestador nunca ensambla documentos ad hoc.

pub mod documents;

use serde_json::{Map, Value};

use crate::dto::{
    BagImageInput, BagInput, BagScopedQuery, DamageReportInput, SaveTrackingPointInput,
    StartJourneyInput, TrackedBagInput,
};
use crate::utils::errors::TrackingResult;

/// Forma del payload bajo la clave de respuesta de la operación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Un único objeto entidad
    Single,
    /// Una lista de entidades
    List,
}

/// Una operación del catálogo junto con sus variables.
#[derive(Debug, Clone)]
pub enum Operation {
    // Queries
    GetJourneyConfig {
        journey: String,
    },
    GetMenuItems,
    GetTenBags,
    GetTrackingPointById {
        bag_tag_no: String,
        tracking_point_id: String,
    },
    GetTrackingPointsByBagTagNo(BagScopedQuery),
    GetTrackedBagsByDate {
        journey: String,
        date: String,
    },
    GetTrackedBags {
        journey: String,
        bags: Vec<BagInput>,
    },
    GetTrackedBagsByBagTagNo(BagScopedQuery),
    GetTrackedBagByBagTagNo(BagScopedQuery),
    GetVehicle {
        journey: Option<String>,
    },

    // Mutations
    StartTrackingPointJourney(StartJourneyInput),
    GenerateBagId {
        journey: String,
        status: String,
        required_inputs: Option<String>,
    },
    SaveTrackingPoint(SaveTrackingPointInput),
    SaveTrackingPointForMultipleBags {
        journey: String,
        status: String,
        bags: Vec<BagInput>,
        required_inputs: Option<String>,
    },
    RevertTrackingPoint {
        bag_tag_no: String,
        tracking_point_id: String,
    },
    MassUpdateTrackingPointStatus {
        journey: String,
        status: String,
        new_status: String,
    },
    UpdateTrackingPointStatusRemoved(BagScopedQuery),
    SaveBagImages {
        bag_images: Vec<BagImageInput>,
    },
    SaveDamagedBagImages {
        bag_images: Vec<BagImageInput>,
    },
    SaveVehicle {
        vehicle_number: String,
        journey: Option<String>,
    },
    SaveTrackingPointsForBagsOnVehicle {
        vehicle_number: String,
        journey: String,
        status: String,
    },
    UpdateTrackedBag {
        bag: TrackedBagInput,
    },
    ReportDamageBag(DamageReportInput),
}

impl Operation {
    /// Nombre de la operación; coincide con la clave bajo `data` en la
    /// respuesta del servidor.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetJourneyConfig { .. } => "getJourneyConfig",
            Operation::GetMenuItems => "getMenuItems",
            Operation::GetTenBags => "getTenBags",
            Operation::GetTrackingPointById { .. } => "getTrackingPointById",
            Operation::GetTrackingPointsByBagTagNo(_) => "getTrackingPointsByBagTagNo",
            Operation::GetTrackedBagsByDate { .. } => "getTrackedBagsByDate",
            Operation::GetTrackedBags { .. } => "getTrackedBags",
            Operation::GetTrackedBagsByBagTagNo(_) => "getTrackedBagsByBagTagNo",
            Operation::GetTrackedBagByBagTagNo(_) => "getTrackedBagByBagTagNo",
            Operation::GetVehicle { .. } => "getVehicle",
            Operation::StartTrackingPointJourney(_) => "startTrackingPointJourney",
            Operation::GenerateBagId { .. } => "generateBagId",
            Operation::SaveTrackingPoint(_) => "saveTrackingPoint",
            Operation::SaveTrackingPointForMultipleBags { .. } => {
                "saveTrackingPointForMultipleBags"
            }
            Operation::RevertTrackingPoint { .. } => "revertTrackingPoint",
            Operation::MassUpdateTrackingPointStatus { .. } => "massUpdateTrackingPointStatus",
            Operation::UpdateTrackingPointStatusRemoved(_) => "updateTrackingPointStatusRemoved",
            Operation::SaveBagImages { .. } => "saveBagImages",
            Operation::SaveDamagedBagImages { .. } => "saveDamagedBagImages",
            Operation::SaveVehicle { .. } => "saveVehicle",
            Operation::SaveTrackingPointsForBagsOnVehicle { .. } => {
                "saveTrackingPointsForBagsOnVehicle"
            }
            Operation::UpdateTrackedBag { .. } => "updateTrackedBag",
            Operation::ReportDamageBag(_) => "reportDamageBag",
        }
    }

    /// Documento GraphQL fijo de la operación
    pub fn document(&self) -> &'static str {
        match self {
            Operation::GetJourneyConfig { .. } => documents::QUERY_JOURNEY_CONFIG,
            Operation::GetMenuItems => documents::QUERY_MENU_ITEMS,
            Operation::GetTenBags => documents::QUERY_TEN_BAGS,
            Operation::GetTrackingPointById { .. } => documents::QUERY_TRACKING_POINT_BY_ID,
            Operation::GetTrackingPointsByBagTagNo(_) => {
                documents::QUERY_TRACKING_POINTS_BY_BAG_TAG_NO
            }
            Operation::GetTrackedBagsByDate { .. } => documents::QUERY_TRACKED_BAGS_BY_DATE,
            Operation::GetTrackedBags { .. } => documents::QUERY_TRACKED_BAGS,
            Operation::GetTrackedBagsByBagTagNo(_) => documents::QUERY_TRACKED_BAGS_BY_BAG_TAG_NO,
            Operation::GetTrackedBagByBagTagNo(_) => documents::QUERY_TRACKED_BAG_BY_BAG_TAG_NO,
            Operation::GetVehicle { .. } => documents::QUERY_VEHICLE,
            Operation::StartTrackingPointJourney(_) => {
                documents::MUTATION_START_TRACKING_POINT_JOURNEY
            }
            Operation::GenerateBagId { .. } => documents::MUTATION_GENERATE_BAG_ID,
            Operation::SaveTrackingPoint(_) => documents::MUTATION_SAVE_TRACKING_POINT,
            Operation::SaveTrackingPointForMultipleBags { .. } => {
                documents::MUTATION_SAVE_TRACKING_POINT_FOR_MULTIPLE_BAGS
            }
            Operation::RevertTrackingPoint { .. } => documents::MUTATION_REVERT_TRACKING_POINT,
            Operation::MassUpdateTrackingPointStatus { .. } => {
                documents::MUTATION_MASS_UPDATE_TRACKING_POINT_STATUS
            }
            Operation::UpdateTrackingPointStatusRemoved(_) => {
                documents::MUTATION_UPDATE_TRACKING_POINT_STATUS_REMOVED
            }
            Operation::SaveBagImages { .. } => documents::MUTATION_SAVE_BAG_IMAGES,
            Operation::SaveDamagedBagImages { .. } => documents::MUTATION_SAVE_DAMAGED_BAG_IMAGES,
            Operation::SaveVehicle { .. } => documents::MUTATION_SAVE_VEHICLE,
            Operation::SaveTrackingPointsForBagsOnVehicle { .. } => {
                documents::MUTATION_SAVE_TRACKING_POINTS_FOR_BAGS_ON_VEHICLE
            }
            Operation::UpdateTrackedBag { .. } => documents::MUTATION_UPDATE_TRACKED_BAG,
            Operation::ReportDamageBag(_) => documents::MUTATION_REPORT_DAMAGE_BAG,
        }
    }

    /// Forma declarada del payload bajo la clave de respuesta
    pub fn response_shape(&self) -> ResponseShape {
        match self {
            Operation::GetJourneyConfig { .. }
            | Operation::GetTrackingPointById { .. }
            | Operation::GetTrackedBagByBagTagNo(_)
            | Operation::StartTrackingPointJourney(_)
            | Operation::GenerateBagId { .. }
            | Operation::SaveTrackingPoint(_)
            | Operation::RevertTrackingPoint { .. }
            | Operation::UpdateTrackingPointStatusRemoved(_)
            | Operation::SaveVehicle { .. }
            | Operation::UpdateTrackedBag { .. }
            | Operation::ReportDamageBag(_) => ResponseShape::Single,

            Operation::GetMenuItems
            | Operation::GetTenBags
            | Operation::GetTrackingPointsByBagTagNo(_)
            | Operation::GetTrackedBagsByDate { .. }
            | Operation::GetTrackedBags { .. }
            | Operation::GetTrackedBagsByBagTagNo(_)
            | Operation::GetVehicle { .. }
            | Operation::SaveTrackingPointForMultipleBags { .. }
            | Operation::MassUpdateTrackingPointStatus { .. }
            | Operation::SaveBagImages { .. }
            | Operation::SaveDamagedBagImages { .. }
            | Operation::SaveTrackingPointsForBagsOnVehicle { .. } => ResponseShape::List,
        }
    }

    /// Serializa las variables de la operación; los opcionales ausentes se
    /// omiten del objeto. `None` para operaciones sin variables.
    pub fn variables(&self) -> TrackingResult<Option<Value>> {
        let value = match self {
            Operation::GetMenuItems | Operation::GetTenBags => return Ok(None),

            Operation::GetJourneyConfig { journey } => {
                object([("journey", Some(journey.as_str()))])
            }
            Operation::GetTrackingPointById {
                bag_tag_no,
                tracking_point_id,
            }
            | Operation::RevertTrackingPoint {
                bag_tag_no,
                tracking_point_id,
            } => object([
                ("bag_tag_no", Some(bag_tag_no.as_str())),
                ("tracking_point_id", Some(tracking_point_id.as_str())),
            ]),
            Operation::GetTrackingPointsByBagTagNo(query)
            | Operation::GetTrackedBagsByBagTagNo(query)
            | Operation::GetTrackedBagByBagTagNo(query)
            | Operation::UpdateTrackingPointStatusRemoved(query) => serde_json::to_value(query)?,
            Operation::GetTrackedBagsByDate { journey, date } => object([
                ("journey", Some(journey.as_str())),
                ("date", Some(date.as_str())),
            ]),
            Operation::GetTrackedBags { journey, bags } => {
                let mut map = Map::new();
                map.insert("journey".to_string(), Value::String(journey.clone()));
                map.insert("bags".to_string(), serde_json::to_value(bags)?);
                Value::Object(map)
            }
            Operation::GetVehicle { journey } => {
                object([("journey", journey.as_deref())])
            }

            Operation::StartTrackingPointJourney(input) => serde_json::to_value(input)?,
            Operation::GenerateBagId {
                journey,
                status,
                required_inputs,
            } => object([
                ("journey", Some(journey.as_str())),
                ("status", Some(status.as_str())),
                ("required_inputs", required_inputs.as_deref()),
            ]),
            Operation::SaveTrackingPoint(input) => serde_json::to_value(input)?,
            Operation::SaveTrackingPointForMultipleBags {
                journey,
                status,
                bags,
                required_inputs,
            } => {
                let mut map = Map::new();
                map.insert("journey".to_string(), Value::String(journey.clone()));
                map.insert("status".to_string(), Value::String(status.clone()));
                map.insert("bags".to_string(), serde_json::to_value(bags)?);
                if let Some(inputs) = required_inputs {
                    map.insert(
                        "required_inputs".to_string(),
                        Value::String(inputs.clone()),
                    );
                }
                Value::Object(map)
            }
            Operation::MassUpdateTrackingPointStatus {
                journey,
                status,
                new_status,
            } => object([
                ("journey", Some(journey.as_str())),
                ("status", Some(status.as_str())),
                ("new_status", Some(new_status.as_str())),
            ]),
            Operation::SaveBagImages { bag_images }
            | Operation::SaveDamagedBagImages { bag_images } => {
                let mut map = Map::new();
                map.insert("bag_images".to_string(), serde_json::to_value(bag_images)?);
                Value::Object(map)
            }
            Operation::SaveVehicle {
                vehicle_number,
                journey,
            } => object([
                ("vehicle_number", Some(vehicle_number.as_str())),
                ("journey", journey.as_deref()),
            ]),
            Operation::SaveTrackingPointsForBagsOnVehicle {
                vehicle_number,
                journey,
                status,
            } => object([
                ("vehicle_number", Some(vehicle_number.as_str())),
                ("journey", Some(journey.as_str())),
                ("status", Some(status.as_str())),
            ]),
            Operation::UpdateTrackedBag { bag } => {
                let mut map = Map::new();
                map.insert("bag".to_string(), serde_json::to_value(bag)?);
                Value::Object(map)
            }
            Operation::ReportDamageBag(input) => serde_json::to_value(input)?,
        };
        Ok(Some(value))
    }
}

/// Construye un objeto de variables omitiendo los pares ausentes
fn object<const N: usize>(pairs: [(&str, Option<&str>); N]) -> Value {
    let mut map = Map::new();
    for (key, value) in pairs {
        if let Some(value) = value {
            map.insert(key.to_string(), Value::String(value.to_string()));
        }
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_operations() -> Vec<Operation> {
        vec![
            Operation::GetJourneyConfig {
                journey: "FLYCRUISE".into(),
            },
            Operation::GetMenuItems,
            Operation::GetTenBags,
            Operation::GetTrackingPointById {
                bag_tag_no: "618123456".into(),
                tracking_point_id: "tp-1".into(),
            },
            Operation::GetTrackingPointsByBagTagNo(BagScopedQuery::new("618123456", "FLYCRUISE")),
            Operation::GetTrackedBagsByDate {
                journey: "FLYCRUISE".into(),
                date: "2025-08-30".into(),
            },
            Operation::GetTrackedBags {
                journey: "FLYCRUISE".into(),
                bags: vec![BagInput::new("618123456")],
            },
            Operation::GetTrackedBagsByBagTagNo(BagScopedQuery::new("618123456", "FLYCRUISE")),
            Operation::GetTrackedBagByBagTagNo(BagScopedQuery::new("618123456", "FLYCRUISE")),
            Operation::GetVehicle { journey: None },
            Operation::StartTrackingPointJourney(StartJourneyInput {
                bag_tag_no: "618123456".into(),
                journey: "FLYCRUISE".into(),
                status: "EXPECTED".into(),
                origin: "SIN".into(),
                origin_date: None,
                destination: "MIA".into(),
                destination_date: None,
                required_inputs: None,
            }),
            Operation::GenerateBagId {
                journey: "FLYCRUISE".into(),
                status: "EXPECTED".into(),
                required_inputs: None,
            },
            Operation::SaveTrackingPoint(SaveTrackingPointInput {
                journey: "FLYCRUISE".into(),
                status: "EXPECTED".into(),
                bag_tag_no: "618123456".into(),
                origin: None,
                origin_date: None,
                destination: None,
                destination_date: None,
                vehicle_number: None,
                images: None,
                required_inputs: None,
            }),
            Operation::SaveTrackingPointForMultipleBags {
                journey: "FLYCRUISE".into(),
                status: "EXPECTED".into(),
                bags: vec![BagInput::new("618123456")],
                required_inputs: None,
            },
            Operation::RevertTrackingPoint {
                bag_tag_no: "618123456".into(),
                tracking_point_id: "tp-1".into(),
            },
            Operation::MassUpdateTrackingPointStatus {
                journey: "FLYCRUISE".into(),
                status: "EXPECTED".into(),
                new_status: "APPROVED_FOR_TRANSPORT".into(),
            },
            Operation::UpdateTrackingPointStatusRemoved(BagScopedQuery::new(
                "618123456",
                "FLYCRUISE",
            )),
            Operation::SaveBagImages { bag_images: vec![] },
            Operation::SaveDamagedBagImages { bag_images: vec![] },
            Operation::SaveVehicle {
                vehicle_number: "TRUCK-7".into(),
                journey: Some("FLYCRUISE".into()),
            },
            Operation::SaveTrackingPointsForBagsOnVehicle {
                vehicle_number: "TRUCK-7".into(),
                journey: "FLYCRUISE".into(),
                status: "IN_TRANSIT".into(),
            },
            Operation::UpdateTrackedBag {
                bag: TrackedBagInput {
                    bag_tag_no: "618123456".into(),
                    journey: "FLYCRUISE".into(),
                    status: "EXPECTED".into(),
                    location: None,
                    origin: "SIN".into(),
                    origin_date: "2025-08-30".into(),
                    destination: "MIA".into(),
                    destination_date: "2025-09-02".into(),
                    vehicle_number: None,
                    last_updated: "2025-08-30T10:00:00Z".into(),
                    damaged: None,
                    images: None,
                    gha: None,
                    updated_by: "agent-7".into(),
                    additional_data: None,
                },
            },
            Operation::ReportDamageBag(DamageReportInput {
                bag_tag_no: "618123456".into(),
                journey: "FLYCRUISE".into(),
                damage_description: "torn handle".into(),
                location: "T1".into(),
                images: None,
                origin: None,
                origin_date: None,
                destination: None,
                destination_date: None,
            }),
        ]
    }

    #[test]
    fn test_document_defines_operation_name() {
        for op in all_operations() {
            let document = op.document();
            assert!(
                document.contains(op.name()),
                "document for {} does not define it",
                op.name()
            );
        }
    }

    /// Every serialized variable name must appear as a `$name` parameter of
    /// the document, and the `updateTrackedBag`-style object inputs count as
    /// one variable each.
    #[test]
    fn test_variables_match_document_parameters() {
        for op in all_operations() {
            let document = op.document();
            let Some(Value::Object(variables)) = op.variables().unwrap() else {
                continue;
            };
            for name in variables.keys() {
                assert!(
                    document.contains(&format!("${name}")),
                    "variable '{name}' of {} is not a parameter of its document",
                    op.name()
                );
            }
        }
    }

    #[test]
    fn test_operations_without_variables() {
        assert!(Operation::GetMenuItems.variables().unwrap().is_none());
        assert!(Operation::GetTenBags.variables().unwrap().is_none());
    }

    #[test]
    fn test_get_vehicle_omits_absent_journey() {
        let vars = Operation::GetVehicle { journey: None }
            .variables()
            .unwrap()
            .unwrap();
        assert_eq!(vars, serde_json::json!({}));

        let vars = Operation::GetVehicle {
            journey: Some("FLYCRUISE".into()),
        }
        .variables()
        .unwrap()
        .unwrap();
        assert_eq!(vars, serde_json::json!({"journey": "FLYCRUISE"}));
    }

    #[test]
    fn test_response_shapes() {
        assert_eq!(
            Operation::GetTenBags.response_shape(),
            ResponseShape::List
        );
        assert_eq!(
            Operation::RevertTrackingPoint {
                bag_tag_no: "618123456".into(),
                tracking_point_id: "tp-1".into(),
            }
            .response_shape(),
            ResponseShape::Single
        );
        assert_eq!(
            Operation::SaveTrackingPointForMultipleBags {
                journey: "FLYCRUISE".into(),
                status: "EXPECTED".into(),
                bags: vec![],
                required_inputs: None,
            }
            .response_shape(),
            ResponseShape::List
        );
    }
}
