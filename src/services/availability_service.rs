//! Confirmación de reservas
//!
//! Orquesta la confirmación: revalida el rango de fechas con las reglas de la
//! calculadora y, solo si todo pasa, commitea la transición one-way
//! Available → Rented a través del repositorio. No existe transición de
//! vuelta ni entidad de histórico de reservas en este alcance.

use chrono::Utc;
use tracing::info;

use crate::models::vehicle::{BookingQuote, BookingRequest};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::booking_service::BookingCalculator;
use crate::utils::errors::{not_found_error, AppError, AppResult};

#[derive(Debug, Clone)]
pub struct AvailabilityService {
    repository: VehicleRepository,
}

impl AvailabilityService {
    pub fn new(repository: VehicleRepository) -> Self {
        Self { repository }
    }

    /// Confirmar una reserva
    ///
    /// Toda la validación ocurre antes de mutar nada: un rango inválido, un id
    /// desconocido o un vehículo ya alquilado abortan sin efectos. El único
    /// efecto observable del éxito es `available = false` persistido.
    pub async fn confirm(&self, request: &BookingRequest) -> AppResult<BookingQuote> {
        let today = Utc::now().date_naive();
        let rental_days =
            BookingCalculator::validate_range(today, request.start_date, request.end_date)?;

        let vehicle = self
            .repository
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", request.vehicle_id))?;

        if !vehicle.available {
            return Err(AppError::AlreadyRented(vehicle.id));
        }

        let quote = BookingCalculator::price_quote(vehicle.price_per_day, rental_days)?;

        // el CAS del repositorio decide la carrera si otra confirmación llegó antes
        self.repository.rent(vehicle.id).await?;

        info!(
            "Reserva confirmada: {} {} (id {}), {} días, total {}",
            vehicle.brand, vehicle.model, vehicle.id, quote.rental_days, quote.total_price
        );
        Ok(quote)
    }
}
