//! Orquestador de requests de tracking
//!
//! Traduce una acción del usuario (arrancar o actualizar el tracking de un
//! equipaje, con los campos que haya rellenado) en exactamente una
//! invocación de una operación del catálogo, y expone un wrapper tipado por
//! operación para el resto del catálogo.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::GraphQlTransport;
use crate::config::ApiConfig;
use crate::dto::{
    BagImageInput, BagInput, BagScopedQuery, BagTrackingData, DamageReportInput,
    SaveTrackingPointInput, StartJourneyInput, TrackedBagInput, TrackingMode,
};
use crate::models::graphql::GraphQlEnvelope;
use crate::models::journey::{Journey, STATUS_EXPECTED};
use crate::models::{Bag, BagImage, JourneyConfig, MenuItem, TrackedBag, TrackingPoint, Vehicle};
use crate::operations::Operation;
use crate::services::normalizer::{normalize, normalize_single};
use crate::utils::errors::TrackingResult;
use crate::utils::validation::{
    non_empty, validate_date, validate_not_empty, validate_optional_date, validate_required,
};

/// Servicio de tracking sobre un transporte GraphQL
pub struct TrackingService<T: GraphQlTransport> {
    transport: T,
    config: ApiConfig,
}

impl<T: GraphQlTransport> TrackingService<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Despacho único: una llamada de transporte por operación, con el
    /// array `errors` convertido en error tipado etiquetado con la
    /// operación que falló.
    async fn run(&self, operation: Operation) -> TrackingResult<GraphQlEnvelope> {
        debug!(operation = operation.name(), "executing GraphQL operation");
        let envelope = self.transport.execute(&self.config, &operation).await?;
        envelope.into_checked(operation.name())
    }

    async fn run_list<R: DeserializeOwned>(&self, operation: Operation) -> TrackingResult<Vec<R>> {
        normalize(self.run(operation).await?)
    }

    async fn run_single<R: DeserializeOwned>(
        &self,
        operation: Operation,
    ) -> TrackingResult<Option<R>> {
        normalize_single(self.run(operation).await?)
    }

    /// Envía un formulario de tracking.
    ///
    /// `Start` exige bag tag, origen y destino y mapea a
    /// `startTrackingPointJourney`; `Update` exige solo el bag tag y mapea a
    /// `saveTrackingPoint`. Journey y status toman FLYCRUISE y EXPECTED por
    /// defecto exactamente una vez, antes de llamar al catálogo. Las fechas
    /// se validan antes del despacho, así que una fecha inválida nunca llega
    /// a la red. Los valores de journey/status no reconocidos pasan tal
    /// cual; el servidor es la fuente de verdad sobre su validez.
    pub async fn submit_tracking(
        &self,
        mode: TrackingMode,
        data: &BagTrackingData,
    ) -> TrackingResult<Vec<TrackingPoint>> {
        validate_optional_date("origin_date", data.origin_date.as_deref())?;
        validate_optional_date("destination_date", data.destination_date.as_deref())?;
        validate_not_empty("bag_tag_number", &data.bag_tag_number)?;

        let journey = non_empty(data.journey.as_deref())
            .unwrap_or_else(|| Journey::default().as_str().to_string());
        let status =
            non_empty(data.status.as_deref()).unwrap_or_else(|| STATUS_EXPECTED.to_string());

        let operation = match mode {
            TrackingMode::Start => {
                validate_required("origin", data.origin.as_deref())?;
                validate_required("destination", data.destination.as_deref())?;
                Operation::StartTrackingPointJourney(StartJourneyInput {
                    bag_tag_no: data.bag_tag_number.clone(),
                    journey,
                    status,
                    origin: non_empty(data.origin.as_deref()).unwrap_or_default(),
                    origin_date: data.origin_date.clone(),
                    destination: non_empty(data.destination.as_deref()).unwrap_or_default(),
                    destination_date: data.destination_date.clone(),
                    required_inputs: None,
                })
            }
            TrackingMode::Update => Operation::SaveTrackingPoint(SaveTrackingPointInput {
                journey,
                status,
                bag_tag_no: data.bag_tag_number.clone(),
                origin: non_empty(data.origin.as_deref()),
                origin_date: data.origin_date.clone(),
                destination: non_empty(data.destination.as_deref()),
                destination_date: data.destination_date.clone(),
                vehicle_number: non_empty(data.vehicle_number.as_deref()),
                images: None,
                required_inputs: None,
            }),
        };

        self.run_list(operation).await
    }

    // ---- Queries ----

    pub async fn get_journey_config(&self, journey: &str) -> TrackingResult<Option<JourneyConfig>> {
        self.run_single(Operation::GetJourneyConfig {
            journey: journey.to_string(),
        })
        .await
    }

    pub async fn get_menu_items(&self) -> TrackingResult<Vec<MenuItem>> {
        self.run_list(Operation::GetMenuItems).await
    }

    /// Datos de muestra para demos y pruebas manuales
    pub async fn get_ten_bags(&self) -> TrackingResult<Vec<Bag>> {
        self.run_list(Operation::GetTenBags).await
    }

    pub async fn get_tracking_point_by_id(
        &self,
        bag_tag_no: &str,
        tracking_point_id: &str,
    ) -> TrackingResult<Option<TrackingPoint>> {
        self.run_single(Operation::GetTrackingPointById {
            bag_tag_no: bag_tag_no.to_string(),
            tracking_point_id: tracking_point_id.to_string(),
        })
        .await
    }

    pub async fn get_tracking_points_by_bag_tag_no(
        &self,
        query: BagScopedQuery,
    ) -> TrackingResult<Vec<TrackingPoint>> {
        validate_scoped_query_dates(&query)?;
        self.run_list(Operation::GetTrackingPointsByBagTagNo(query))
            .await
    }

    pub async fn get_tracked_bags_by_date(
        &self,
        journey: &str,
        date: &str,
    ) -> TrackingResult<Vec<TrackedBag>> {
        validate_date("date", date)?;
        self.run_list(Operation::GetTrackedBagsByDate {
            journey: journey.to_string(),
            date: date.to_string(),
        })
        .await
    }

    pub async fn get_tracked_bags(
        &self,
        journey: &str,
        bags: Vec<BagInput>,
    ) -> TrackingResult<Vec<TrackedBag>> {
        validate_bag_dates(&bags)?;
        self.run_list(Operation::GetTrackedBags {
            journey: journey.to_string(),
            bags,
        })
        .await
    }

    pub async fn get_tracked_bags_by_bag_tag_no(
        &self,
        query: BagScopedQuery,
    ) -> TrackingResult<Vec<TrackedBag>> {
        validate_scoped_query_dates(&query)?;
        self.run_list(Operation::GetTrackedBagsByBagTagNo(query))
            .await
    }

    pub async fn get_tracked_bag_by_bag_tag_no(
        &self,
        query: BagScopedQuery,
    ) -> TrackingResult<Option<TrackedBag>> {
        validate_scoped_query_dates(&query)?;
        self.run_single(Operation::GetTrackedBagByBagTagNo(query))
            .await
    }

    pub async fn get_vehicle(&self, journey: Option<&str>) -> TrackingResult<Vec<Vehicle>> {
        self.run_list(Operation::GetVehicle {
            journey: journey.map(str::to_string),
        })
        .await
    }

    // ---- Mutations ----

    pub async fn generate_bag_id(
        &self,
        journey: &str,
        status: &str,
        required_inputs: Option<String>,
    ) -> TrackingResult<Option<TrackingPoint>> {
        self.run_single(Operation::GenerateBagId {
            journey: journey.to_string(),
            status: status.to_string(),
            required_inputs,
        })
        .await
    }

    pub async fn save_tracking_point(
        &self,
        input: SaveTrackingPointInput,
    ) -> TrackingResult<Option<TrackingPoint>> {
        validate_optional_date("origin_date", input.origin_date.as_deref())?;
        validate_optional_date("destination_date", input.destination_date.as_deref())?;
        self.run_single(Operation::SaveTrackingPoint(input)).await
    }

    pub async fn save_tracking_point_for_multiple_bags(
        &self,
        journey: &str,
        status: &str,
        bags: Vec<BagInput>,
        required_inputs: Option<String>,
    ) -> TrackingResult<Vec<TrackingPoint>> {
        validate_bag_dates(&bags)?;
        self.run_list(Operation::SaveTrackingPointForMultipleBags {
            journey: journey.to_string(),
            status: status.to_string(),
            bags,
            required_inputs,
        })
        .await
    }

    /// Marca un tracking point como anulado sin borrarlo del historial
    pub async fn revert_tracking_point(
        &self,
        bag_tag_no: &str,
        tracking_point_id: &str,
    ) -> TrackingResult<Option<TrackingPoint>> {
        self.run_single(Operation::RevertTrackingPoint {
            bag_tag_no: bag_tag_no.to_string(),
            tracking_point_id: tracking_point_id.to_string(),
        })
        .await
    }

    pub async fn mass_update_tracking_point_status(
        &self,
        journey: &str,
        status: &str,
        new_status: &str,
    ) -> TrackingResult<Vec<TrackingPoint>> {
        self.run_list(Operation::MassUpdateTrackingPointStatus {
            journey: journey.to_string(),
            status: status.to_string(),
            new_status: new_status.to_string(),
        })
        .await
    }

    pub async fn update_tracking_point_status_removed(
        &self,
        query: BagScopedQuery,
    ) -> TrackingResult<Option<TrackingPoint>> {
        validate_scoped_query_dates(&query)?;
        self.run_single(Operation::UpdateTrackingPointStatusRemoved(query))
            .await
    }

    pub async fn save_bag_images(
        &self,
        bag_images: Vec<BagImageInput>,
    ) -> TrackingResult<Vec<BagImage>> {
        self.run_list(Operation::SaveBagImages { bag_images }).await
    }

    pub async fn save_damaged_bag_images(
        &self,
        bag_images: Vec<BagImageInput>,
    ) -> TrackingResult<Vec<BagImage>> {
        self.run_list(Operation::SaveDamagedBagImages { bag_images })
            .await
    }

    pub async fn save_vehicle(
        &self,
        vehicle_number: &str,
        journey: Option<&str>,
    ) -> TrackingResult<Option<Vehicle>> {
        self.run_single(Operation::SaveVehicle {
            vehicle_number: vehicle_number.to_string(),
            journey: journey.map(str::to_string),
        })
        .await
    }

    pub async fn save_tracking_points_for_bags_on_vehicle(
        &self,
        vehicle_number: &str,
        journey: &str,
        status: &str,
    ) -> TrackingResult<Vec<TrackingPoint>> {
        self.run_list(Operation::SaveTrackingPointsForBagsOnVehicle {
            vehicle_number: vehicle_number.to_string(),
            journey: journey.to_string(),
            status: status.to_string(),
        })
        .await
    }

    pub async fn update_tracked_bag(
        &self,
        bag: TrackedBagInput,
    ) -> TrackingResult<Option<TrackedBag>> {
        validate_date("origin_date", &bag.origin_date)?;
        validate_date("destination_date", &bag.destination_date)?;
        self.run_single(Operation::UpdateTrackedBag { bag }).await
    }

    pub async fn report_damage_bag(
        &self,
        input: DamageReportInput,
    ) -> TrackingResult<Option<TrackingPoint>> {
        validate_optional_date("origin_date", input.origin_date.as_deref())?;
        validate_optional_date("destination_date", input.destination_date.as_deref())?;
        self.run_single(Operation::ReportDamageBag(input)).await
    }
}

fn validate_scoped_query_dates(query: &BagScopedQuery) -> TrackingResult<()> {
    validate_optional_date("origin_date", query.origin_date.as_deref())?;
    validate_optional_date("destination_date", query.destination_date.as_deref())
}

fn validate_bag_dates(bags: &[BagInput]) -> TrackingResult<()> {
    for bag in bags {
        validate_optional_date("origin_date", bag.origin_date.as_deref())?;
        validate_optional_date("destination_date", bag.destination_date.as_deref())?;
    }
    Ok(())
}
