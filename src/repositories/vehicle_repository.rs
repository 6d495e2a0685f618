//! Repositorio del catálogo de vehículos
//!
//! Única superficie de lectura/escritura sobre la tabla `vehicles`. Las
//! lecturas devuelven snapshots frescos; la única mutación permitida es el
//! flag `available`.

use sqlx::sqlite::SqlitePool;
use std::time::Duration;
use tracing::warn;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Reintentos acotados ante contención de lock en el mismo registro
const LOCK_RETRY_ATTEMPTS: u32 = 3;
const LOCK_RETRY_DELAY_MS: u64 = 50;

fn is_lock_contention(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => {
            let message = db.message();
            message.contains("locked") || message.contains("busy")
        }
        _ => false,
    }
}

#[derive(Debug, Clone)]
pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Cargar el catálogo completo, ordenado por id ascendente
    pub async fn load_all(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    /// Cargar los vehículos de una marca, mismo orden que load_all
    ///
    /// La comparación es match exacto de string, sin normalización.
    pub async fn load_by_brand(&self, brand: &str) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE brand = ?1 ORDER BY id ASC",
        )
        .bind(brand)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Persistir el flag de disponibilidad de un vehículo
    ///
    /// Un id desconocido falla con NotFound en lugar de ignorarse.
    pub async fn set_availability(&self, id: i64, available: bool) -> AppResult<()> {
        let mut attempt = 1;
        let result = loop {
            let update = sqlx::query("UPDATE vehicles SET available = ?2 WHERE id = ?1")
                .bind(id)
                .bind(available)
                .execute(&self.pool)
                .await;

            match update {
                Ok(result) => break result,
                Err(e) if attempt < LOCK_RETRY_ATTEMPTS && is_lock_contention(&e) => {
                    warn!(
                        "Registro {} bloqueado, reintentando ({}/{})",
                        id, attempt, LOCK_RETRY_ATTEMPTS
                    );
                    attempt += 1;
                    tokio::time::sleep(Duration::from_millis(LOCK_RETRY_DELAY_MS)).await;
                }
                Err(e) => return Err(e.into()),
            }
        };

        if result.rows_affected() == 0 {
            return Err(not_found_error("Vehicle", id));
        }

        Ok(())
    }

    /// Transición Available → Rented mediante compare-and-set
    ///
    /// El UPDATE solo toca la fila si sigue disponible, así dos confirmaciones
    /// concurrentes sobre el mismo id no pueden tener éxito las dos.
    pub async fn rent(&self, id: i64) -> AppResult<()> {
        let mut attempt = 1;
        let result = loop {
            let update =
                sqlx::query("UPDATE vehicles SET available = 0 WHERE id = ?1 AND available = 1")
                    .bind(id)
                    .execute(&self.pool)
                    .await;

            match update {
                Ok(result) => break result,
                Err(e) if attempt < LOCK_RETRY_ATTEMPTS && is_lock_contention(&e) => {
                    warn!(
                        "Registro {} bloqueado, reintentando ({}/{})",
                        id, attempt, LOCK_RETRY_ATTEMPTS
                    );
                    attempt += 1;
                    tokio::time::sleep(Duration::from_millis(LOCK_RETRY_DELAY_MS)).await;
                }
                Err(e) => return Err(e.into()),
            }
        };

        if result.rows_affected() == 0 {
            // 0 filas: o el id no existe, o el CAS perdió contra otra reserva
            return match self.find_by_id(id).await? {
                None => Err(not_found_error("Vehicle", id)),
                Some(_) => Err(AppError::AlreadyRented(id)),
            };
        }

        Ok(())
    }
}
