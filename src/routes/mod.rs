// Route definitions

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::AppState;

mod api;

// The state is provided here; main only layers tracing and static files on top
pub fn create_router(app_state: AppState) -> Router {
    let api_router = Router::new()
        // Catalog views
        .route("/cars", get(api::list_cars))
        .route("/cars/:id", get(api::get_car))
        .route("/featured", get(api::get_featured))
        // Filters, sorting and pagination
        .route(
            "/filters",
            get(api::get_filters).post(api::merge_filters).delete(api::clear_filters),
        )
        .route("/filter-options", get(api::get_filter_options))
        .route("/page", put(api::set_page))
        .route("/page-size", put(api::set_page_size))
        .route("/sort", put(api::set_sort))
        // Favorites
        .route("/favorites", get(api::get_favorites))
        .route("/favorites/:id", post(api::toggle_favorite))
        // Catalog loading
        .route("/status", get(api::get_status))
        .route("/reload", post(api::reload_catalog));

    Router::new().nest("/api", api_router).with_state(app_state)
}
