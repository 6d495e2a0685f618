//! Filtro de catálogo
//!
//! Funciones puras sobre el catálogo: una sola función de filtrado
//! recalculada en cada cambio de entrada, sin estado ni cachés. La vista
//! filtrada nunca se guarda; siempre se deriva de la lista completa.

use crate::models::vehicle::Vehicle;

/// Sentinel de categoría que acepta cualquier marca
pub const ALL_CATEGORY: &str = "All";

/// Filtrar el catálogo por categoría y búsqueda de texto libre
///
/// La categoría compara marca exacta (o acepta todo con "All"). Una query no
/// vacía se pasa a minúsculas y matchea como substring sobre marca O modelo.
/// El orden relativo de entrada se conserva; cero coincidencias devuelve una
/// lista vacía, nunca un error.
pub fn filter_vehicles(cars: &[Vehicle], category: &str, query: &str) -> Vec<Vehicle> {
    let query = query.to_lowercase();

    cars.iter()
        .filter(|vehicle| category == ALL_CATEGORY || vehicle.brand == category)
        .filter(|vehicle| {
            if query.is_empty() {
                return true;
            }
            vehicle.brand.to_lowercase().contains(&query)
                || vehicle.model.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Categorías ofrecidas al usuario
///
/// Marcas distintas en orden de primera aparición, con "All" siempre primero.
pub fn categories(cars: &[Vehicle]) -> Vec<String> {
    let mut result = vec![ALL_CATEGORY.to_string()];
    for vehicle in cars {
        if !result.iter().any(|category| category == &vehicle.brand) {
            result.push(vehicle.brand.clone());
        }
    }
    result
}
