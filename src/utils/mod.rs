//! Utilidades compartidas
//!
//! Este módulo contiene el manejo de errores y helpers de validación.

pub mod errors;
pub mod validation;

pub use errors::*;
