//! Tests de integración del catálogo persistido

use validator::Validate;

use vehicle_rental::config::DatabaseConfig;
use vehicle_rental::database::DatabaseConnection;
use vehicle_rental::repositories::VehicleRepository;
use vehicle_rental::utils::errors::AppError;

async fn seeded_repository() -> VehicleRepository {
    let pool = DatabaseConfig::create_test_pool().await.unwrap();
    let connection = DatabaseConnection::from_pool(pool);
    connection.run_migrations().await.unwrap();
    VehicleRepository::new(connection.pool().clone())
}

#[tokio::test]
async fn test_fresh_store_returns_seed_in_id_order() {
    let repository = seeded_repository().await;
    let catalog = repository.load_all().await.unwrap();

    let summary: Vec<(i64, &str, &str)> = catalog
        .iter()
        .map(|v| (v.id, v.brand.as_str(), v.model.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, "Tesla", "Model 3"),
            (2, "BMW", "M4"),
            (3, "Tesla", "Model Y"),
            (4, "Mercedes", "E-Class"),
        ]
    );
    assert!(catalog.iter().all(|v| v.available));
}

#[tokio::test]
async fn test_seed_rows_satisfy_model_constraints() {
    let repository = seeded_repository().await;
    for vehicle in repository.load_all().await.unwrap() {
        vehicle.validate().unwrap();
        assert!(vehicle.price_per_day > 0.0);
        assert!((0.0..=5.0).contains(&vehicle.rating));
    }
}

#[tokio::test]
async fn test_load_all_returns_fresh_snapshots() {
    let repository = seeded_repository().await;
    let first = repository.load_all().await.unwrap();
    let second = repository.load_all().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_load_by_brand_is_exact_match() {
    let repository = seeded_repository().await;

    let teslas = repository.load_by_brand("Tesla").await.unwrap();
    let ids: Vec<i64> = teslas.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1, 3]);

    // sin normalización: la comparación distingue mayúsculas
    assert!(repository.load_by_brand("tesla").await.unwrap().is_empty());
    assert!(repository.load_by_brand("Audi").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_set_availability_persists_flag() {
    let repository = seeded_repository().await;

    repository.set_availability(2, false).await.unwrap();

    let catalog = repository.load_all().await.unwrap();
    for vehicle in catalog {
        if vehicle.id == 2 {
            assert!(!vehicle.available);
        } else {
            assert!(vehicle.available);
        }
    }
}

#[tokio::test]
async fn test_set_availability_unknown_id_is_not_found() {
    let repository = seeded_repository().await;

    let err = repository.set_availability(99, false).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // ninguna fila cambió
    let catalog = repository.load_all().await.unwrap();
    assert!(catalog.iter().all(|v| v.available));
}

#[tokio::test]
async fn test_file_backed_store_persists_and_does_not_reseed() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("vehicles.db").display()
    );
    let config = DatabaseConfig {
        url,
        ..DatabaseConfig::default()
    };

    {
        let connection = DatabaseConnection::new(&config).await.unwrap();
        connection.run_migrations().await.unwrap();
        let repository = VehicleRepository::new(connection.pool().clone());
        repository.rent(1).await.unwrap();
        connection.pool().close().await;
    }

    // reabrir: el catálogo no se vuelve a sembrar y el flag sobrevive
    let connection = DatabaseConnection::new(&config).await.unwrap();
    connection.run_migrations().await.unwrap();
    let repository = VehicleRepository::new(connection.pool().clone());

    let catalog = repository.load_all().await.unwrap();
    assert_eq!(catalog.len(), 4);
    assert!(!catalog[0].available);
    assert!(catalog[1..].iter().all(|v| v.available));
}
