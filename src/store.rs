//! In-memory catalog store.
//!
//! Owns the full vehicle list, the active filter criteria, sort order,
//! pagination cursor and the session's favorites. The filtered view is kept
//! as positions into the full list and recomputed whenever the list, the
//! criteria or the sort order change.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::filter;
use crate::models::{FilterCriteria, FilterPatch, SortOrder, Vehicle};

// One store per application, shared through the axum state
pub type SharedCatalog = Arc<RwLock<CatalogStore>>;

pub const DEFAULT_PAGE_SIZE: usize = 5;
pub const FEATURED_COUNT: usize = 4;

/// Distinct values present in the catalog, for populating the filter form.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub makes: Vec<String>,
    pub body_types: Vec<String>,
    pub fuel_types: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    all: Vec<Vehicle>,
    filtered: Vec<usize>,
    criteria: FilterCriteria,
    sort: SortOrder,
    current_page: usize,
    page_size: usize,
    favorites: Vec<u64>,
    loading: bool,
    error: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogStore {
    pub fn new(page_size: usize) -> Self {
        Self {
            all: Vec::new(),
            filtered: Vec::new(),
            criteria: FilterCriteria::default(),
            sort: SortOrder::default(),
            current_page: 1,
            page_size: page_size.max(1),
            favorites: Vec::new(),
            loading: false,
            error: None,
            loaded_at: None,
        }
    }

    // --- Actions ---

    /// Replaces the authoritative list and re-derives the filtered view.
    ///
    /// Pagination is left as is; only criteria, sort and page size changes
    /// move the cursor back to page 1.
    pub fn replace_all(&mut self, vehicles: Vec<Vehicle>) {
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if !seen.insert(vehicle.id) {
                tracing::warn!(id = vehicle.id, "Duplicate vehicle id in catalog; lookups return the first one");
            }
        }

        self.all = vehicles;
        self.error = None;
        self.loaded_at = Some(Utc::now());
        self.refilter();
        tracing::info!(total = self.all.len(), filtered = self.filtered.len(), "Catalog replaced");
    }

    pub fn merge_filters(&mut self, partial: impl Into<FilterPatch>) {
        self.criteria.merge(partial);
        self.refilter();
        self.current_page = 1;
        tracing::debug!(criteria = ?self.criteria, filtered = self.filtered.len(), "Filters merged");
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.refilter();
        self.current_page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.refilter();
        self.current_page = 1;
    }

    // Page 0 is treated as page 1; pages past the end are kept and yield an empty view.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            tracing::warn!("Page size 0 requested, using 1");
        }
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Flips favorite membership of `id`. Returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: u64) -> bool {
        if let Some(pos) = self.favorites.iter().position(|&fav| fav == id) {
            self.favorites.remove(pos);
            false
        } else {
            self.favorites.push(id);
            true
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    // --- Derived views ---

    /// The slice `[(page-1)*size, page*size)` of the filtered view, clipped.
    pub fn paginated_view(&self) -> Vec<&Vehicle> {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        self.filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&index| &self.all[index])
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size)
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Vehicle> {
        self.all.iter().find(|vehicle| vehicle.id == id)
    }

    /// First four new vehicles, or the first four of the catalog when fewer
    /// than four are new.
    pub fn featured(&self) -> Vec<&Vehicle> {
        let new_cars: Vec<&Vehicle> = self.all.iter().filter(|vehicle| vehicle.is_new).collect();
        if new_cars.len() >= FEATURED_COUNT {
            return new_cars.into_iter().take(FEATURED_COUNT).collect();
        }
        self.all.iter().take(FEATURED_COUNT).collect()
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.favorites.contains(&id)
    }

    pub fn favorite_ids(&self) -> &[u64] {
        &self.favorites
    }

    // Favorites in catalog order; ids no longer in the catalog are skipped
    pub fn favorite_vehicles(&self) -> Vec<&Vehicle> {
        self.all.iter().filter(|vehicle| self.is_favorite(vehicle.id)).collect()
    }

    pub fn has_active_filters(&self) -> bool {
        filter::is_active(&self.criteria)
    }

    pub fn filter_options(&self) -> FilterOptions {
        let mut makes = BTreeSet::new();
        let mut body_types = BTreeSet::new();
        let mut fuel_types = BTreeSet::new();
        for vehicle in &self.all {
            makes.insert(vehicle.make.clone());
            body_types.insert(vehicle.body_type.clone());
            fuel_types.insert(vehicle.fuel_type.clone());
        }
        FilterOptions {
            makes: makes.into_iter().filter(|v| !v.is_empty()).collect(),
            body_types: body_types.into_iter().filter(|v| !v.is_empty()).collect(),
            fuel_types: fuel_types.into_iter().filter(|v| !v.is_empty()).collect(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_count(&self) -> usize {
        self.all.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    fn refilter(&mut self) {
        let mut filtered: Vec<usize> = self
            .all
            .iter()
            .enumerate()
            .filter(|(_, vehicle)| filter::matches(vehicle, &self.criteria))
            .map(|(index, _)| index)
            .collect();
        filter::sort_indices(&mut filtered, &self.all, self.sort);
        self.filtered = filtered;
    }
}
