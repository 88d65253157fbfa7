//! Filter predicate and ordering for the catalog.
//!
//! Everything here is pure: the store calls [`matches`] for every record when
//! its criteria or list change, then [`sort_indices`] on the survivors.

use std::cmp::Ordering;

use crate::models::{FilterCriteria, SortOrder, Vehicle};

// "All" options offered by the storefront's filter form
pub const ANY_MAKE: &str = "Todas las Marcas";
pub const ANY_BODY_TYPE: &str = "Todos los Tipos";
pub const ANY_FUEL_TYPE: &str = "Todos los Combustibles";

/// Returns the criterion value when it actually constrains the result.
///
/// Empty strings and the form's "all" option mean "no constraint".
fn constraint<'a>(value: &'a Option<String>, any_option: Option<&str>) -> Option<&'a str> {
    let value = value.as_deref()?;
    if value.is_empty() || Some(value) == any_option {
        return None;
    }
    Some(value)
}

/// True iff `vehicle` satisfies every set criterion.
///
/// Make is compared case-sensitively; model and search term are
/// case-insensitive substring matches.
pub fn matches(vehicle: &Vehicle, criteria: &FilterCriteria) -> bool {
    if let Some(make) = constraint(&criteria.make, Some(ANY_MAKE)) {
        if vehicle.make != make {
            return false;
        }
    }

    if let Some(model) = constraint(&criteria.model, None) {
        if !vehicle.model.to_lowercase().contains(&model.to_lowercase()) {
            return false;
        }
    }

    if criteria.min_year.is_some_and(|min| vehicle.year < min) {
        return false;
    }
    if criteria.max_year.is_some_and(|max| vehicle.year > max) {
        return false;
    }

    if criteria.min_price.is_some_and(|min| vehicle.price < min) {
        return false;
    }
    if criteria.max_price.is_some_and(|max| vehicle.price > max) {
        return false;
    }

    if let Some(body_type) = constraint(&criteria.body_type, Some(ANY_BODY_TYPE)) {
        if vehicle.body_type != body_type {
            return false;
        }
    }

    if let Some(fuel_type) = constraint(&criteria.fuel_type, Some(ANY_FUEL_TYPE)) {
        if vehicle.fuel_type != fuel_type {
            return false;
        }
    }

    if let Some(term) = constraint(&criteria.search_term, None) {
        let searchable = format!(
            "{} {} {} {} {}",
            vehicle.make, vehicle.model, vehicle.body_type, vehicle.fuel_type, vehicle.description
        );
        if !searchable.to_lowercase().contains(&term.to_lowercase()) {
            return false;
        }
    }

    true
}

/// True if any criterion would narrow the catalog.
pub fn is_active(criteria: &FilterCriteria) -> bool {
    constraint(&criteria.make, Some(ANY_MAKE)).is_some()
        || constraint(&criteria.model, None).is_some()
        || criteria.min_price.is_some()
        || criteria.max_price.is_some()
        || criteria.min_year.is_some()
        || criteria.max_year.is_some()
        || constraint(&criteria.body_type, Some(ANY_BODY_TYPE)).is_some()
        || constraint(&criteria.fuel_type, Some(ANY_FUEL_TYPE)).is_some()
        || constraint(&criteria.search_term, None).is_some()
}

// Stable sort of positions into `vehicles`
pub fn sort_indices(indices: &mut [usize], vehicles: &[Vehicle], order: SortOrder) {
    let compare: fn(&Vehicle, &Vehicle) -> Ordering = match order {
        SortOrder::Listing => return,
        SortOrder::PriceAsc => |a: &Vehicle, b: &Vehicle| a.price.total_cmp(&b.price),
        SortOrder::PriceDesc => |a: &Vehicle, b: &Vehicle| b.price.total_cmp(&a.price),
        SortOrder::YearDesc => |a: &Vehicle, b: &Vehicle| b.year.cmp(&a.year),
        SortOrder::MileageAsc => |a: &Vehicle, b: &Vehicle| a.mileage.cmp(&b.mileage),
    };
    indices.sort_by(|&a, &b| compare(&vehicles[a], &vehicles[b]));
}
