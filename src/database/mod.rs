//! Módulo de base de datos
//!
//! Maneja la conexión y el bootstrap del catálogo SQLite

pub mod connection;

pub use connection::DatabaseConnection;
