use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::content::{CarouselView, HomeView},
    error::AppResult,
    models::{ContentBlock, NavigationLink},
    response::{ApiResponse, Meta},
    routes::params::NavigationQuery,
    services::content_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(home))
        .route("/carousels/{name}", get(get_carousel))
        .route("/navigation", get(list_navigation))
        .route("/content-blocks/{identifier}", get(get_content_block))
}

#[utoipa::path(
    get,
    path = "/api/home",
    responses(
        (status = 200, description = "Featured products, content blocks, main carousel and header links", body = ApiResponse<HomeView>)
    ),
    tag = "Content"
)]
pub async fn home(State(state): State<AppState>) -> Json<ApiResponse<HomeView>> {
    let view = content_service::home(&state).await;
    Json(ApiResponse::success("Home", view, None))
}

#[utoipa::path(
    get,
    path = "/api/carousels/{name}",
    params(
        ("name" = String, Path, description = "Carousel name, e.g. principal")
    ),
    responses(
        (status = 200, description = "Active slides in order", body = ApiResponse<CarouselView>)
    ),
    tag = "Content"
)]
pub async fn get_carousel(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Json<ApiResponse<CarouselView>> {
    let view = content_service::carousel(&state, &name).await;
    let meta = Meta::count(view.slides.len());
    Json(ApiResponse::success("Carousel", view, Some(meta)))
}

#[utoipa::path(
    get,
    path = "/api/navigation",
    params(
        ("placement" = Option<String>, Query, description = "header | footer_col1 | footer_col2")
    ),
    responses(
        (status = 200, description = "Active navigation links", body = ApiResponse<Vec<NavigationLink>>)
    ),
    tag = "Content"
)]
pub async fn list_navigation(
    State(state): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Json<ApiResponse<Vec<NavigationLink>>> {
    let links = content_service::navigation(&state, query.placement.as_deref()).await;
    let meta = Meta::count(links.len());
    Json(ApiResponse::success("Navigation", links, Some(meta)))
}

#[utoipa::path(
    get,
    path = "/api/content-blocks/{identifier}",
    params(
        ("identifier" = String, Path, description = "Block identifier, e.g. banner-bienvenida-home")
    ),
    responses(
        (status = 200, description = "Content block", body = ApiResponse<ContentBlock>),
        (status = 404, description = "No active block with this identifier"),
    ),
    tag = "Content"
)]
pub async fn get_content_block(
    Path(identifier): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ContentBlock>>> {
    let block = content_service::content_block(&state, &identifier).await?;
    Ok(Json(ApiResponse::success("Content block", block, None)))
}
