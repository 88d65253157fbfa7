// Handlers for the catalog API endpoints

use axum::{
    extract::{Json as JsonExtract, Path, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    cars_api,
    error::{AppError, AppResult},
    models::{FilterCriteria, FilterPatch, SortOrder, Vehicle},
    store::{CatalogStore, FilterOptions, SharedCatalog},
    AppState,
};

// --- Response Wrappers ---

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    cars: Vec<Vehicle>,
    page: usize,
    page_size: usize,
    total_pages: usize,
    filtered_count: usize,
    total_count: usize,
    sort: SortOrder,
}

impl PageResponse {
    fn from_store(store: &CatalogStore) -> Self {
        Self {
            cars: store.paginated_view().into_iter().cloned().collect(),
            page: store.current_page(),
            page_size: store.page_size(),
            total_pages: store.total_pages(),
            filtered_count: store.filtered_count(),
            total_count: store.total_count(),
            sort: store.sort(),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FiltersResponse {
    filters: FilterCriteria,
    has_active_filters: bool,
    filtered_count: usize,
}

impl FiltersResponse {
    fn from_store(store: &CatalogStore) -> Self {
        Self {
            filters: store.criteria().clone(),
            has_active_filters: store.has_active_filters(),
            filtered_count: store.filtered_count(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct FavoritesResponse {
    ids: Vec<u64>, // Toggle order
    cars: Vec<Vehicle>,
}

#[derive(Serialize, Debug)]
pub struct FavoriteResponse {
    id: u64,
    favorite: bool,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    loading: bool,
    error: Option<String>,
    total_count: usize,
    loaded_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug)]
pub struct GenericResponse {
    success: bool,
    message: Option<String>,
    count: Option<usize>,
}

// --- Request Structs ---

// Signed so that out-of-range values reach the clamp instead of failing extraction
#[derive(Deserialize, Debug)]
pub struct PageRequest {
    page: i64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PageSizeRequest {
    page_size: i64,
}

#[derive(Deserialize, Debug)]
pub struct SortRequest {
    sort: SortOrder,
}

fn cloned(vehicles: Vec<&Vehicle>) -> Vec<Vehicle> {
    vehicles.into_iter().cloned().collect()
}

// Values below 1 become 1
fn at_least_one(value: i64) -> usize {
    if value < 1 {
        tracing::warn!("Clamping out-of-range value {} to 1", value);
        return 1;
    }
    usize::try_from(value).unwrap_or(usize::MAX)
}

// --- API Handlers ---

pub async fn list_cars(State(catalog): State<SharedCatalog>) -> Json<PageResponse> {
    let store = catalog.read().await;
    let response = PageResponse::from_store(&store);
    tracing::debug!(page = response.page, returned = response.cars.len(), "[HANDLER] /api/cars");
    Json(response)
}

pub async fn get_car(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<u64>,
) -> AppResult<Json<Vehicle>> {
    let store = catalog.read().await;
    store
        .get_by_id(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
}

pub async fn get_featured(State(catalog): State<SharedCatalog>) -> Json<Vec<Vehicle>> {
    let store = catalog.read().await;
    Json(cloned(store.featured()))
}

pub async fn get_filters(State(catalog): State<SharedCatalog>) -> Json<FiltersResponse> {
    let store = catalog.read().await;
    Json(FiltersResponse::from_store(&store))
}

pub async fn merge_filters(
    State(catalog): State<SharedCatalog>,
    JsonExtract(partial): JsonExtract<FilterPatch>,
) -> Json<FiltersResponse> {
    tracing::info!("API call: merge_filters with {:?}", partial);
    let mut store = catalog.write().await;
    store.merge_filters(partial);
    Json(FiltersResponse::from_store(&store))
}

pub async fn clear_filters(State(catalog): State<SharedCatalog>) -> Json<FiltersResponse> {
    tracing::info!("API call: clear_filters");
    let mut store = catalog.write().await;
    store.clear_filters();
    Json(FiltersResponse::from_store(&store))
}

pub async fn get_filter_options(State(catalog): State<SharedCatalog>) -> Json<FilterOptions> {
    let store = catalog.read().await;
    Json(store.filter_options())
}

pub async fn set_page(
    State(catalog): State<SharedCatalog>,
    JsonExtract(request): JsonExtract<PageRequest>,
) -> Json<PageResponse> {
    let mut store = catalog.write().await;
    store.set_page(at_least_one(request.page));
    Json(PageResponse::from_store(&store))
}

pub async fn set_page_size(
    State(catalog): State<SharedCatalog>,
    JsonExtract(request): JsonExtract<PageSizeRequest>,
) -> Json<PageResponse> {
    let mut store = catalog.write().await;
    store.set_page_size(at_least_one(request.page_size));
    Json(PageResponse::from_store(&store))
}

pub async fn set_sort(
    State(catalog): State<SharedCatalog>,
    JsonExtract(request): JsonExtract<SortRequest>,
) -> Json<PageResponse> {
    let mut store = catalog.write().await;
    store.set_sort(request.sort);
    Json(PageResponse::from_store(&store))
}

pub async fn get_favorites(State(catalog): State<SharedCatalog>) -> Json<FavoritesResponse> {
    let store = catalog.read().await;
    Json(FavoritesResponse {
        ids: store.favorite_ids().to_vec(),
        cars: cloned(store.favorite_vehicles()),
    })
}

pub async fn toggle_favorite(
    State(catalog): State<SharedCatalog>,
    Path(id): Path<u64>,
) -> AppResult<Json<FavoriteResponse>> {
    let mut store = catalog.write().await;
    if store.get_by_id(id).is_none() {
        return Err(AppError::NotFound(format!("Vehicle {} not found", id)));
    }
    let favorite = store.toggle_favorite(id);
    tracing::info!(id, favorite, "API call: toggle_favorite");
    Ok(Json(FavoriteResponse { id, favorite }))
}

pub async fn get_status(State(catalog): State<SharedCatalog>) -> Json<StatusResponse> {
    let store = catalog.read().await;
    Json(StatusResponse {
        loading: store.is_loading(),
        error: store.error().map(str::to_string),
        total_count: store.total_count(),
        loaded_at: store.loaded_at(),
    })
}

pub async fn reload_catalog(State(app_state): State<AppState>) -> AppResult<Json<GenericResponse>> {
    tracing::info!("API call: reload_catalog");
    let count = cars_api::load_catalog(&app_state.http_client, &app_state.settings, &app_state.catalog)
        .await
        .map_err(|e| AppError::InternalServerError(e.context("Failed to reload catalog")))?;

    Ok(Json(GenericResponse {
        success: true,
        message: Some(format!("Catalog reloaded with {} vehicles.", count)),
        count: Some(count),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Settings, fallback::fallback_catalog};
    use axum::{http::StatusCode, response::IntoResponse};
    use reqwest::Client;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn loaded_catalog() -> SharedCatalog {
        let mut store = CatalogStore::new(5);
        store.replace_all(fallback_catalog());
        Arc::new(RwLock::new(store))
    }

    fn app_state(catalog: SharedCatalog) -> AppState {
        AppState {
            settings: Arc::new(Settings {
                server_address: "127.0.0.1:0".to_string(),
                catalog_source_url: None,
                page_size: 5,
                fetch_max_retries: 1,
                fetch_retry_delay_ms: 0,
                use_fallback_catalog: true,
                static_dir: "static".to_string(),
            }),
            http_client: Arc::new(Client::new()),
            catalog,
        }
    }

    fn ids(cars: &[Vehicle]) -> Vec<u64> {
        cars.iter().map(|car| car.id).collect()
    }

    #[tokio::test]
    async fn list_returns_first_page_of_fallback_catalog() {
        let Json(page) = list_cars(State(loaded_catalog())).await;

        assert_eq!(ids(&page.cars), vec![1, 2, 3, 4, 5]);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_count, 20);
    }

    #[tokio::test]
    async fn merging_filters_resets_to_first_page() {
        let catalog = loaded_catalog();
        let Json(page) = set_page(State(catalog.clone()), JsonExtract(PageRequest { page: 3 })).await;
        assert_eq!(page.page, 3);

        let Json(filters) = merge_filters(
            State(catalog.clone()),
            JsonExtract(FilterCriteria { body_type: Some("SUV".to_string()), ..Default::default() }.into()),
        )
        .await;
        assert!(filters.has_active_filters);
        assert_eq!(filters.filtered_count, 12);

        let Json(page) = list_cars(State(catalog.clone())).await;
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 3);
        assert!(page.cars.iter().all(|car| car.body_type == "SUV"));

        let Json(cleared) = clear_filters(State(catalog)).await;
        assert!(!cleared.has_active_filters);
        assert_eq!(cleared.filtered_count, 20);
    }

    #[tokio::test]
    async fn page_size_and_sort_requests_update_the_view() {
        let catalog = loaded_catalog();
        let Json(page) =
            set_page_size(State(catalog.clone()), JsonExtract(PageSizeRequest { page_size: 8 })).await;
        assert_eq!(page.cars.len(), 8);
        assert_eq!(page.total_pages, 3);

        let Json(page) =
            set_sort(State(catalog), JsonExtract(SortRequest { sort: SortOrder::PriceAsc })).await;
        assert_eq!(page.cars.first().map(|car| car.make.as_str()), Some("Toyota"));
        assert_eq!(page.sort, SortOrder::PriceAsc);
    }

    #[tokio::test]
    async fn negative_page_and_page_size_are_clamped_to_one() {
        let catalog = loaded_catalog();

        let request: PageSizeRequest = serde_json::from_str(r#"{"pageSize": -3}"#).unwrap();
        let Json(page) = set_page_size(State(catalog.clone()), JsonExtract(request)).await;
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 20);

        let request: PageRequest = serde_json::from_str(r#"{"page": -1}"#).unwrap();
        let Json(page) = set_page(State(catalog), JsonExtract(request)).await;
        assert_eq!(page.page, 1);
        assert_eq!(ids(&page.cars), vec![1]);
    }

    #[tokio::test]
    async fn null_filter_field_clears_only_that_criterion() {
        let catalog = loaded_catalog();

        let set: FilterPatch = serde_json::from_str(r#"{"maxPrice": 40000, "minYear": 2000}"#).unwrap();
        let Json(filters) = merge_filters(State(catalog.clone()), JsonExtract(set)).await;
        assert!(filters.has_active_filters);
        assert_eq!(filters.filtered_count, 3);

        let unset: FilterPatch = serde_json::from_str(r#"{"maxPrice": null}"#).unwrap();
        let Json(filters) = merge_filters(State(catalog.clone()), JsonExtract(unset)).await;
        assert_eq!(filters.filters.max_price, None);
        assert_eq!(filters.filters.min_year, Some(2000));
        assert_eq!(filters.filtered_count, 20);

        let unset: FilterPatch = serde_json::from_str(r#"{"minYear": null}"#).unwrap();
        let Json(filters) = merge_filters(State(catalog), JsonExtract(unset)).await;
        assert!(!filters.has_active_filters);
        assert_eq!(filters.filtered_count, 20);
    }

    #[tokio::test]
    async fn unknown_vehicle_is_not_found() {
        let catalog = loaded_catalog();
        let Json(car) = get_car(State(catalog.clone()), Path(5)).await.unwrap();
        assert_eq!(car.make, "Tesla");

        let response = get_car(State(catalog.clone()), Path(999)).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = toggle_favorite(State(catalog), Path(999)).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn favorites_toggle_and_list() {
        let catalog = loaded_catalog();
        let Json(first) = toggle_favorite(State(catalog.clone()), Path(6)).await.unwrap();
        assert!(first.favorite);
        let Json(added) = toggle_favorite(State(catalog.clone()), Path(2)).await.unwrap();
        assert!(added.favorite);

        let Json(favorites) = get_favorites(State(catalog.clone())).await;
        assert_eq!(favorites.ids, vec![6, 2]);
        assert_eq!(ids(&favorites.cars), vec![2, 6]);

        let Json(second) = toggle_favorite(State(catalog.clone()), Path(6)).await.unwrap();
        assert!(!second.favorite);
        let Json(favorites) = get_favorites(State(catalog)).await;
        assert_eq!(ids(&favorites.cars), vec![2]);
    }

    #[tokio::test]
    async fn featured_returns_the_four_new_listings() {
        let Json(featured) = get_featured(State(loaded_catalog())).await;
        assert_eq!(ids(&featured), vec![1, 4, 5, 7]);
    }

    #[tokio::test]
    async fn filter_options_list_catalog_values() {
        let Json(options) = get_filter_options(State(loaded_catalog())).await;
        assert_eq!(options.fuel_types, vec!["Eléctrico", "Gasolina", "Híbrido"]);
        assert!(options.makes.contains(&"Land Rover".to_string()));
    }

    #[tokio::test]
    async fn reload_fills_an_empty_store() {
        let catalog: SharedCatalog = Arc::new(RwLock::new(CatalogStore::new(5)));
        let Json(status) = get_status(State(catalog.clone())).await;
        assert_eq!(status.total_count, 0);
        assert!(status.loaded_at.is_none());

        let Json(response) = reload_catalog(State(app_state(catalog.clone()))).await.unwrap();
        assert!(response.success);
        assert_eq!(response.count, Some(20));

        let Json(status) = get_status(State(catalog)).await;
        assert_eq!(status.total_count, 20);
        assert!(!status.loading);
        assert!(status.error.is_none());
    }
}
