//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del núcleo de alquiler
//! y los helpers para construirlos.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Vehicle {0} is already rented")]
    AlreadyRented(i64),
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de rango de fechas inválido
pub fn invalid_date_range(message: &str) -> AppError {
    AppError::InvalidDateRange(message.to_string())
}
