use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::catalog::CatalogView,
    response::{ApiResponse, Meta},
    routes::params::CatalogQuery,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(browse_catalog))
}

#[utoipa::path(
    get,
    path = "/api/catalog",
    params(
        ("category" = Option<i64>, Query, description = "Category id"),
        ("active_only" = Option<bool>, Query, description = "Only active products, default true"),
        ("featured_only" = Option<bool>, Query, description = "Only featured products, default false"),
        ("search" = Option<String>, Query, description = "Case-insensitive name/description search"),
        ("sort" = Option<String>, Query, description = "name | price-low | price-high | newest | featured"),
    ),
    responses(
        (status = 200, description = "Filtered and sorted catalog", body = ApiResponse<CatalogView>)
    ),
    tag = "Catalog"
)]
pub async fn browse_catalog(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<ApiResponse<CatalogView>> {
    let (filter, sort) = query.into_parts();
    let view = catalog_service::browse(&state, filter, sort).await;
    let meta = Meta::count(view.total);
    Json(ApiResponse::success("Catalog", view, Some(meta)))
}
