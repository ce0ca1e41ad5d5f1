//! Consola de demo contra el API GraphQL de tracking
//!
//! Carga el endpoint y la API key del entorno, pide los bags de muestra y
//! los tracked bags FLYCRUISE de hoy, y los imprime.

use anyhow::Result;
use chrono::Utc;
use dotenvy::dotenv;
use tracing::{error, info};

use bag_tracking::models::Journey;
use bag_tracking::{ApiConfig, GraphQlClient, TrackingService};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🧳 Bag Tracking - GraphQL console");
    info!("=================================");

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Missing API configuration: {}", e);
            return Err(e);
        }
    };
    info!("✅ Endpoint: {}", config.endpoint);

    let service = TrackingService::new(GraphQlClient::new()?, config);

    let bags = service.get_ten_bags().await?;
    info!("📦 Sample bags ({}):", bags.len());
    for bag in &bags {
        info!(
            "  {} — flight {} on {} [{}]",
            bag.bag_tag_no,
            bag.flight_no,
            bag.scheduled_date,
            bag.bag_status.as_deref().unwrap_or("-")
        );
    }

    let today = Utc::now().format("%Y-%m-%d").to_string();
    let tracked = service
        .get_tracked_bags_by_date(Journey::Flycruise.as_str(), &today)
        .await?;
    info!("🛄 Tracked FLYCRUISE bags for {} ({}):", today, tracked.len());
    for bag in &tracked {
        info!(
            "  {} — {} @ {} ({} -> {})",
            bag.bag_tag_no,
            bag.status,
            bag.location.as_deref().unwrap_or("-"),
            bag.origin,
            bag.destination
        );
    }

    Ok(())
}
