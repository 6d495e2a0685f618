//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como se persiste en la tabla
//! `vehicles`, más los tipos transitorios de una reserva.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::errors::AppResult;
use crate::utils::validation::validate_date;

/// Vehicle principal - mapea exactamente a la tabla vehicles
///
/// El `id` lo asigna el store al sembrar el catálogo y nunca se reutiliza.
/// `image` es una referencia opaca (path/URL) que el núcleo no interpreta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub image: String,

    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,

    pub available: bool,

    #[validate(range(min = 0.01))]
    pub price_per_day: f64,
}

/// Request transitorio de reserva - no se persiste
///
/// `vehicle_id` es una clave de búsqueda, no una referencia propietaria.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub vehicle_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BookingRequest {
    pub fn new(vehicle_id: i64, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            vehicle_id,
            start_date,
            end_date,
        }
    }

    /// Construir un request desde fechas en formato YYYY-MM-DD
    pub fn from_strings(vehicle_id: i64, start_date: &str, end_date: &str) -> AppResult<Self> {
        let start = validate_date(start_date).map_err(|e| {
            let mut errors = validator::ValidationErrors::new();
            errors.add("start_date", e);
            errors
        })?;
        let end = validate_date(end_date).map_err(|e| {
            let mut errors = validator::ValidationErrors::new();
            errors.add("end_date", e);
            errors
        })?;

        Ok(Self::new(vehicle_id, start, end))
    }
}

/// Resultado del cálculo de una reserva
///
/// `total_price` se mantiene a precisión completa; el redondeo para mostrar
/// es responsabilidad de la capa de presentación.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingQuote {
    pub rental_days: i64,
    pub total_price: Decimal,
}
