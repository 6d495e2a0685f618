//! Calculadora de reservas
//!
//! Traduce el rango de fechas elegido por el usuario a días de alquiler y
//! precio total, y aplica la política de ordenación de fechas. Puro: no toca
//! el store.

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::models::vehicle::BookingQuote;
use crate::utils::errors::{invalid_date_range, validation_error, AppResult};

/// Horizonte máximo de reserva desde hoy, en días
pub const MAX_BOOKING_HORIZON_DAYS: i64 = 365;

/// Estado de selección de fechas de una reserva en curso
#[derive(Debug, Clone)]
pub struct BookingCalculator {
    today: NaiveDate,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl BookingCalculator {
    /// Estado inicial: start = hoy, end = mañana
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            start_date: today,
            end_date: today + Duration::days(1),
        }
    }

    pub fn for_today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Cambiar la fecha de inicio
    ///
    /// Si el fin vigente no queda estrictamente después del nuevo inicio, el
    /// fin avanza a inicio + 1 día. Es una corrección silenciosa de UX, no un
    /// error de validación.
    pub fn set_start_date(&mut self, start_date: NaiveDate) -> AppResult<()> {
        if start_date < self.today {
            return Err(invalid_date_range("start date is before today"));
        }
        // el día siguiente tiene que seguir siendo seleccionable
        if start_date >= self.today + Duration::days(MAX_BOOKING_HORIZON_DAYS) {
            return Err(invalid_date_range("start date is beyond the booking horizon"));
        }

        self.start_date = start_date;
        if self.end_date <= self.start_date {
            self.end_date = self.start_date + Duration::days(1);
        }
        Ok(())
    }

    /// Cambiar la fecha de fin
    ///
    /// Tiene que quedar estrictamente después del inicio vigente; la capa de
    /// presentación solo ofrece fechas que ya lo cumplen.
    pub fn set_end_date(&mut self, end_date: NaiveDate) -> AppResult<()> {
        if end_date <= self.start_date {
            return Err(invalid_date_range("end date must be after start date"));
        }
        if end_date > self.today + Duration::days(MAX_BOOKING_HORIZON_DAYS) {
            return Err(invalid_date_range("end date is beyond the booking horizon"));
        }

        self.end_date = end_date;
        Ok(())
    }

    /// Días de alquiler: fin − inicio en días enteros, mínimo 1
    ///
    /// El clamp cubre el caso borde de mismo día; con set_* ese estado no es
    /// alcanzable, pero la política documentada es 1 día, no un error.
    pub fn rental_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(1)
    }

    /// Precio total del rango vigente para un precio por día
    pub fn quote(&self, price_per_day: f64) -> AppResult<BookingQuote> {
        Self::price_quote(price_per_day, self.rental_days())
    }

    /// total = price_per_day × rental_days, a precisión completa
    pub fn price_quote(price_per_day: f64, rental_days: i64) -> AppResult<BookingQuote> {
        let price = Decimal::from_f64_retain(price_per_day)
            .ok_or_else(|| validation_error("price_per_day", "invalid price value"))?;

        Ok(BookingQuote {
            rental_days,
            total_price: price * Decimal::from(rental_days),
        })
    }

    /// Revalidación defensiva del rango en el momento de confirmar
    ///
    /// A diferencia del clamp de la calculadora, aquí un rango no estricto es
    /// un error: la confirmación no corrige fechas.
    pub fn validate_range(today: NaiveDate, start: NaiveDate, end: NaiveDate) -> AppResult<i64> {
        if end <= start {
            return Err(invalid_date_range("end date must be strictly after start date"));
        }
        if start < today {
            return Err(invalid_date_range("start date is before today"));
        }
        if end > today + Duration::days(MAX_BOOKING_HORIZON_DAYS) {
            return Err(invalid_date_range("end date is beyond the booking horizon"));
        }

        Ok((end - start).num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_range_is_today_to_tomorrow() {
        let today = date(2026, 8, 23);
        let calculator = BookingCalculator::new(today);
        assert_eq!(calculator.start_date(), today);
        assert_eq!(calculator.end_date(), date(2026, 8, 24));
        assert_eq!(calculator.rental_days(), 1);
    }

    #[test]
    fn test_rental_days_three_day_range() {
        let today = date(2026, 8, 23);
        let mut calculator = BookingCalculator::new(today);
        calculator.set_end_date(today + Duration::days(3)).unwrap();
        assert_eq!(calculator.rental_days(), 3);
    }

    #[test]
    fn test_set_start_auto_advances_end() {
        let today = date(2026, 8, 23);
        let mut calculator = BookingCalculator::new(today);

        // el fin vigente (mañana) no queda después del nuevo inicio
        calculator.set_start_date(date(2026, 9, 1)).unwrap();
        assert_eq!(calculator.end_date(), date(2026, 9, 2));
        assert_eq!(calculator.rental_days(), 1);
    }

    #[test]
    fn test_set_start_keeps_later_end() {
        let today = date(2026, 8, 23);
        let mut calculator = BookingCalculator::new(today);
        calculator.set_end_date(date(2026, 9, 10)).unwrap();
        calculator.set_start_date(date(2026, 9, 1)).unwrap();
        assert_eq!(calculator.end_date(), date(2026, 9, 10));
        assert_eq!(calculator.rental_days(), 9);
    }

    #[test]
    fn test_set_end_not_after_start_is_rejected() {
        let today = date(2026, 8, 23);
        let mut calculator = BookingCalculator::new(today);
        calculator.set_start_date(date(2026, 9, 1)).unwrap();

        let err = calculator.set_end_date(date(2026, 9, 1)).unwrap_err();
        assert!(matches!(err, AppError::InvalidDateRange(_)));
        assert_eq!(calculator.end_date(), date(2026, 9, 2));
    }

    #[test]
    fn test_bounds_today_and_horizon() {
        let today = date(2026, 8, 23);
        let mut calculator = BookingCalculator::new(today);

        let past = calculator.set_start_date(date(2026, 8, 22)).unwrap_err();
        assert!(matches!(past, AppError::InvalidDateRange(_)));

        let horizon = today + Duration::days(MAX_BOOKING_HORIZON_DAYS);
        let beyond = calculator.set_end_date(horizon + Duration::days(1)).unwrap_err();
        assert!(matches!(beyond, AppError::InvalidDateRange(_)));

        calculator.set_end_date(horizon).unwrap();
        assert_eq!(calculator.end_date(), horizon);
    }

    #[test]
    fn test_price_quote_exact_decimal() {
        let quote = BookingCalculator::price_quote(85.0, 5).unwrap();
        assert_eq!(quote.rental_days, 5);
        assert_eq!(quote.total_price, Decimal::from(425));
    }

    #[test]
    fn test_validate_range_rejects_same_day() {
        let today = date(2026, 8, 23);
        let err = BookingCalculator::validate_range(today, today, today).unwrap_err();
        assert!(matches!(err, AppError::InvalidDateRange(_)));
    }

    #[test]
    fn test_validate_range_returns_days() {
        let today = date(2026, 8, 23);
        let days =
            BookingCalculator::validate_range(today, today, today + Duration::days(4)).unwrap();
        assert_eq!(days, 4);
    }
}
