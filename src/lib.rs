//! Núcleo embebido de alquiler de vehículos
//!
//! Catálogo persistido en SQLite, filtro por categoría y texto libre,
//! calculadora de fechas/precio y transición de disponibilidad. Lo consume
//! in-process una capa de presentación; no hay superficie de red.

pub mod config;
pub mod database;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
