//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de base de datos
//! y otras configuraciones del sistema.

pub mod database;

pub use database::*;
