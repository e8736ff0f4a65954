use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};
use uuid::Uuid;

use crate::{
    checkout::WhatsAppOrder,
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::AppResult,
    response::{ApiResponse, Meta},
    routes::params::ChangesQuery,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(open_cart))
        .route("/{cart_id}", get(get_cart).delete(close_cart))
        .route("/{cart_id}/items", post(add_to_cart).delete(clear_cart))
        .route(
            "/{cart_id}/items/{product_id}",
            put(update_quantity).delete(remove_from_cart),
        )
        .route("/{cart_id}/changes", get(cart_changes))
        .route("/{cart_id}/checkout", post(checkout))
}

fn envelope(message: &str, view: CartView) -> Json<ApiResponse<CartView>> {
    let meta = Meta::versioned(view.version);
    Json(ApiResponse::success(message, view, Some(meta)))
}

#[utoipa::path(
    post,
    path = "/api/carts",
    responses(
        (status = 201, description = "New empty cart session", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn open_cart(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<CartView>>) {
    let view = cart_service::open_cart(&state).await;
    (StatusCode::CREATED, envelope("Cart opened", view))
}

#[utoipa::path(
    get,
    path = "/api/carts/{cart_id}",
    params(
        ("cart_id" = Uuid, Path, description = "Cart session ID")
    ),
    responses(
        (status = 200, description = "Cart contents and totals", body = ApiResponse<CartView>),
        (status = 404, description = "Unknown cart"),
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let view = cart_service::get_cart(&state, cart_id).await?;
    Ok(envelope("OK", view))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{cart_id}",
    params(
        ("cart_id" = Uuid, Path, description = "Cart session ID")
    ),
    responses(
        (status = 200, description = "Cart session discarded", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Unknown cart"),
    ),
    tag = "Cart"
)]
pub async fn close_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    cart_service::close_cart(&state, cart_id).await?;
    Ok(Json(ApiResponse::success(
        "Cart closed",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/carts/{cart_id}/items",
    params(
        ("cart_id" = Uuid, Path, description = "Cart session ID")
    ),
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Product added or its quantity increased", body = ApiResponse<CartView>),
        (status = 400, description = "Out of stock"),
        (status = 404, description = "Unknown cart or product"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let view = cart_service::add_item(&state, cart_id, payload).await?;
    Ok(envelope("Added to cart", view))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{cart_id}/items",
    params(
        ("cart_id" = Uuid, Path, description = "Cart session ID")
    ),
    responses(
        (status = 200, description = "All lines removed", body = ApiResponse<CartView>),
        (status = 404, description = "Unknown cart"),
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let view = cart_service::clear_cart(&state, cart_id).await?;
    Ok(envelope("Cart cleared", view))
}

#[utoipa::path(
    put,
    path = "/api/carts/{cart_id}/items/{product_id}",
    params(
        ("cart_id" = Uuid, Path, description = "Cart session ID"),
        ("product_id" = i64, Path, description = "Article ID")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity set; zero removes the line", body = ApiResponse<CartView>),
        (status = 404, description = "Unknown cart or line"),
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(Uuid, i64)>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let view = cart_service::update_item(&state, cart_id, product_id, payload).await?;
    Ok(envelope("Updated", view))
}

#[utoipa::path(
    delete,
    path = "/api/carts/{cart_id}/items/{product_id}",
    params(
        ("cart_id" = Uuid, Path, description = "Cart session ID"),
        ("product_id" = i64, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Line removed if present", body = ApiResponse<CartView>),
        (status = 404, description = "Unknown cart"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path((cart_id, product_id)): Path<(Uuid, i64)>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let view = cart_service::remove_item(&state, cart_id, product_id).await?;
    Ok(envelope("Removed from cart", view))
}

#[utoipa::path(
    get,
    path = "/api/carts/{cart_id}/changes",
    params(
        ("cart_id" = Uuid, Path, description = "Cart session ID"),
        ("version" = Option<u64>, Query, description = "Last version seen, default 0")
    ),
    responses(
        (status = 200, description = "Cart once it moves past `version`, or as-is after the poll window", body = ApiResponse<CartView>),
        (status = 404, description = "Unknown cart"),
    ),
    tag = "Cart"
)]
pub async fn cart_changes(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
    Query(query): Query<ChangesQuery>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let wait = state.config.long_poll;
    let view =
        cart_service::wait_for_change(&state, cart_id, query.version.unwrap_or(0), wait).await?;
    Ok(envelope("OK", view))
}

#[utoipa::path(
    post,
    path = "/api/carts/{cart_id}/checkout",
    params(
        ("cart_id" = Uuid, Path, description = "Cart session ID")
    ),
    responses(
        (status = 200, description = "WhatsApp deep link with the order summary", body = ApiResponse<WhatsAppOrder>),
        (status = 404, description = "Unknown cart"),
        (status = 409, description = "Cart is empty"),
        (status = 503, description = "WhatsApp number not configured"),
    ),
    tag = "Cart"
)]
pub async fn checkout(
    State(state): State<AppState>,
    Path(cart_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<WhatsAppOrder>>> {
    let order = cart_service::checkout(&state, cart_id).await?;
    Ok(Json(ApiResponse::success("Checkout", order, None)))
}
