use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use vehicle_rental::database::DatabaseConnection;
use vehicle_rental::repositories::VehicleRepository;
use vehicle_rental::services::categories;

/// Composition root: abre el store, lo siembra si hace falta y deja el
/// catálogo listo para la capa de presentación.
#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Vehicle Rental - Catálogo embebido");
    info!("=====================================");

    let db_connection = DatabaseConnection::new_default().await?;
    db_connection.run_migrations().await?;

    let repository = VehicleRepository::new(db_connection.pool().clone());

    let catalog = repository.load_all().await?;
    info!("📋 Catálogo: {} vehículos", catalog.len());
    for vehicle in &catalog {
        info!(
            "   #{} {} {} - ⭐{:.1} - {:.2}/día - disponible: {}",
            vehicle.id,
            vehicle.brand,
            vehicle.model,
            vehicle.rating,
            vehicle.price_per_day,
            vehicle.available
        );
    }

    info!("🏷️  Categorías: {}", serde_json::to_string(&categories(&catalog))?);
    info!("✅ Store listo");
    Ok(())
}
