//! Conexión y bootstrap del catálogo
//!
//! Este módulo maneja la conexión SQLite y la creación/sembrado del schema.
//! El catálogo se siembra una sola vez (store version 1) y después nunca
//! crece ni se reduce en runtime; la única mutación es el flag `available`.

use sqlx::sqlite::SqlitePool;
use tracing::info;

use crate::config::database::DatabaseConfig;
use crate::utils::errors::AppResult;

/// Versión del store una vez sembrado el catálogo
pub const STORE_VERSION: i64 = 1;

/// Catálogo fijo: (brand, model, image, rating, price_per_day)
const SEED_VEHICLES: &[(&str, &str, &str, f64, f64)] = &[
    ("Tesla", "Model 3", "cars/tesla_model_3.png", 4.8, 85.0),
    ("BMW", "M4", "cars/bmw_m4.png", 4.9, 105.0),
    ("Tesla", "Model Y", "cars/tesla_model_y.png", 4.7, 95.0),
    ("Mercedes", "E-Class", "cars/mercedes_e_class.png", 4.9, 110.0),
];

/// Conexión a la base de datos del catálogo
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Crear la conexión a partir de una configuración explícita
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = config.create_pool().await?;
        Ok(Self { pool })
    }

    /// Crear la conexión con la configuración por defecto (DATABASE_URL)
    pub async fn new_default() -> AppResult<Self> {
        Self::new(&DatabaseConfig::default()).await
    }

    /// Envolver un pool ya creado (tests)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Crear el schema y sembrar el catálogo si el store está en versión 0
    ///
    /// Reabrir un store ya sembrado no vuelve a insertar nada.
    pub async fn run_migrations(&self) -> AppResult<()> {
        let version: i64 = sqlx::query_scalar("PRAGMA user_version")
            .fetch_one(&self.pool)
            .await?;

        if version >= STORE_VERSION {
            info!("Store en versión {}, sin migraciones pendientes", version);
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS vehicles (
                id INTEGER PRIMARY KEY,
                brand TEXT NOT NULL,
                model TEXT NOT NULL,
                image TEXT NOT NULL,
                rating REAL NOT NULL,
                available BOOLEAN NOT NULL DEFAULT 1,
                price_per_day REAL NOT NULL
            )
            "#,
        )
        .execute(&mut *tx)
        .await?;

        for (brand, model, image, rating, price_per_day) in SEED_VEHICLES {
            sqlx::query(
                r#"
                INSERT INTO vehicles (brand, model, image, rating, available, price_per_day)
                VALUES (?1, ?2, ?3, ?4, 1, ?5)
                "#,
            )
            .bind(brand)
            .bind(model)
            .bind(image)
            .bind(rating)
            .bind(price_per_day)
            .execute(&mut *tx)
            .await?;
        }

        // PRAGMA no acepta binds
        sqlx::query(&format!("PRAGMA user_version = {}", STORE_VERSION))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            "Catálogo sembrado: {} vehículos, store version {}",
            SEED_VEHICLES.len(),
            STORE_VERSION
        );
        Ok(())
    }
}
