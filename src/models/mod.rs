//! Modelos del dominio
//!
//! Este módulo contiene los structs que mapean al schema persistido
//! y los tipos transitorios de reserva.

pub mod vehicle;

pub use vehicle::*;
