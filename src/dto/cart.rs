use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    cart::{Cart, CartLine, ProductSnapshot},
    money::Money,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub product_id: i64,
    /// Units to add; defaults to 1 and is bounded by remaining stock.
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    /// Zero or below removes the line.
    pub quantity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartLineView {
    pub product: ProductSnapshot,
    pub quantity: u32,
    pub subtotal: Money,
    pub subtotal_display: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        let subtotal = line.subtotal();
        Self {
            product: line.product.clone(),
            quantity: line.quantity,
            subtotal,
            subtotal_display: subtotal.to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CartView {
    pub cart_id: Uuid,
    pub version: u64,
    pub lines: Vec<CartLineView>,
    pub items_count: u32,
    pub total: Money,
    pub total_display: String,
    /// Set when the cart has no lines.
    pub notice: Option<String>,
}

impl CartView {
    pub fn new(cart_id: Uuid, cart: &Cart) -> Self {
        let total = cart.total();
        Self {
            cart_id,
            version: cart.version,
            lines: cart.lines.iter().map(CartLineView::from).collect(),
            items_count: cart.items_count(),
            total,
            total_display: total.to_string(),
            notice: cart
                .is_empty()
                .then(|| "Tu carrito está vacío".to_string()),
        }
    }
}
