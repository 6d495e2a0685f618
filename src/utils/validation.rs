//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::NaiveDate;
use validator::ValidationError;

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_ok() {
        let date = validate_date("2026-08-23").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 23).unwrap());
    }

    #[test]
    fn test_validate_date_bad_format() {
        assert!(validate_date("23/08/2026").is_err());
        assert!(validate_date("").is_err());
    }
}
