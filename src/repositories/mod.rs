//! Repositories module
//!
//! Este módulo contiene el acceso a datos del catálogo de vehículos.

pub mod vehicle_repository;

pub use vehicle_repository::VehicleRepository;
