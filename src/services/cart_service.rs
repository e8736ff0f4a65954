use std::time::Duration;

use uuid::Uuid;

use crate::{
    cart::CartStore,
    checkout::{WhatsAppOrder, prepare_order},
    dto::cart::{AddToCartRequest, CartView, UpdateQuantityRequest},
    error::{AppError, AppResult},
    services::product_service::QuantitySelector,
    state::AppState,
};

async fn find_cart(state: &AppState, cart_id: Uuid) -> AppResult<CartStore> {
    state.carts.get(cart_id).await.ok_or(AppError::NotFound)
}

pub async fn open_cart(state: &AppState) -> CartView {
    let (cart_id, store) = state.carts.open().await;
    CartView::new(cart_id, &store.snapshot())
}

pub async fn get_cart(state: &AppState, cart_id: Uuid) -> AppResult<CartView> {
    let store = find_cart(state, cart_id).await?;
    Ok(CartView::new(cart_id, &store.snapshot()))
}

/// Adds a fresh snapshot of the product, never past its remaining stock.
pub async fn add_item(
    state: &AppState,
    cart_id: Uuid,
    payload: AddToCartRequest,
) -> AppResult<CartView> {
    let store = find_cart(state, cart_id).await?;
    let article = state.api.article(payload.product_id).await?;

    if article.stock == 0 {
        return Err(AppError::BadRequest("product is out of stock".to_string()));
    }

    let mut selector = QuantitySelector::new(article.stock);
    selector.set(payload.quantity.unwrap_or(1));
    let quantity = selector.commit(&store, &article);
    if quantity == 0 {
        return Err(AppError::BadRequest(
            "requested quantity exceeds available stock".to_string(),
        ));
    }
    tracing::info!(%cart_id, product_id = article.id, quantity, "added to cart");

    Ok(CartView::new(cart_id, &store.snapshot()))
}

/// Sets a line's quantity, clamped to the stock captured when it was added.
pub async fn update_item(
    state: &AppState,
    cart_id: Uuid,
    product_id: i64,
    payload: UpdateQuantityRequest,
) -> AppResult<CartView> {
    let store = find_cart(state, cart_id).await?;
    let stock = store
        .snapshot()
        .line(product_id)
        .map(|line| line.product.stock)
        .ok_or(AppError::NotFound)?;

    let quantity = payload.quantity.min(i64::from(stock));
    store.update_quantity(product_id, quantity);

    Ok(CartView::new(cart_id, &store.snapshot()))
}

pub async fn remove_item(state: &AppState, cart_id: Uuid, product_id: i64) -> AppResult<CartView> {
    let store = find_cart(state, cart_id).await?;
    store.remove_from_cart(product_id);
    Ok(CartView::new(cart_id, &store.snapshot()))
}

pub async fn clear_cart(state: &AppState, cart_id: Uuid) -> AppResult<CartView> {
    let store = find_cart(state, cart_id).await?;
    store.clear_cart();
    Ok(CartView::new(cart_id, &store.snapshot()))
}

pub async fn close_cart(state: &AppState, cart_id: Uuid) -> AppResult<()> {
    if state.carts.close(cart_id).await {
        Ok(())
    } else {
        Err(AppError::NotFound)
    }
}

/// Waits until the cart moves past `since`, or `wait` elapses, and returns it.
pub async fn wait_for_change(
    state: &AppState,
    cart_id: Uuid,
    since: u64,
    wait: Duration,
) -> AppResult<CartView> {
    let store = find_cart(state, cart_id).await?;
    let mut changes = store.subscribe();

    let timed_out = tokio::time::timeout(wait, changes.wait_for(|cart| cart.version > since))
        .await
        .is_err();
    if timed_out {
        tracing::debug!(%cart_id, since, "cart long-poll elapsed without changes");
    }

    Ok(CartView::new(cart_id, &store.snapshot()))
}

/// Builds the WhatsApp handoff. The cart is left as is.
pub async fn checkout(state: &AppState, cart_id: Uuid) -> AppResult<WhatsAppOrder> {
    let store = find_cart(state, cart_id).await?;
    let cart = store.snapshot();

    let order = prepare_order(
        &state.config.store_name,
        &state.config.whatsapp_number,
        &cart,
    )
    .inspect_err(|err| tracing::error!(%cart_id, error = %err, "checkout blocked"))?;

    tracing::info!(
        %cart_id,
        items = cart.items_count(),
        total = %cart.total(),
        "checkout handed off to WhatsApp"
    );
    Ok(order)
}
