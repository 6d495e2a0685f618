//! Services module
//!
//! Este módulo contiene la lógica de negocio: el filtro de catálogo, la
//! calculadora de reservas y la confirmación de disponibilidad.

pub mod availability_service;
pub mod booking_service;
pub mod filter_service;

pub use availability_service::AvailabilityService;
pub use booking_service::BookingCalculator;
pub use filter_service::{categories, filter_vehicles, ALL_CATEGORY};
