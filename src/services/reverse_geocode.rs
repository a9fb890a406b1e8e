// src/services/reverse_geocode.rs
// DOCUMENTATION: Reverse-geocode presentation logic
// PURPOSE: Reduce upstream address components to one short location string

use crate::models::Location;
use crate::services::google_maps_client::GeocodeResult;

/// Assemble a display address from upstream geocode results.
///
/// Scans the first result's components for the most specific available of
/// {neighborhood/sublocality, city, country} and joins them with ", ".
/// When no component matches, falls back to the coordinates at 4 decimal
/// places. Returns None when upstream found no address at all.
pub fn format_address(results: &[GeocodeResult], location: Location) -> Option<String> {
    let first = results.first()?;

    let mut suburb = None;
    let mut city = None;
    let mut country = None;

    for component in &first.address_components {
        let types = &component.types;
        if types.iter().any(|t| t == "sublocality" || t == "neighborhood") {
            suburb.get_or_insert_with(|| component.long_name.clone());
        } else if types.iter().any(|t| t == "locality") {
            city.get_or_insert_with(|| component.long_name.clone());
        } else if types.iter().any(|t| t == "country") {
            country.get_or_insert_with(|| component.long_name.clone());
        }
    }

    let parts: Vec<String> = [suburb, city, country].into_iter().flatten().collect();
    if parts.is_empty() {
        Some(format!("{:.4}, {:.4}", location.lat, location.lng))
    } else {
        Some(parts.join(", "))
    }
}
