//! WhatsApp checkout handoff.
//!
//! The order is not persisted here. The cart is rendered into a text summary
//! and handed to `wa.me`; the conversation that follows is the record.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{cart::Cart, error::CheckoutError};

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

const PHONE_PLACEHOLDER: &str = "TU_NUMERO_DE_WHATSAPP_AQUI";

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct WhatsAppOrder {
    pub phone_number: String,
    pub message: String,
    pub url: String,
}

/// Digits of a configured destination number.
///
/// Unset numbers, the template placeholder and masked numbers (`519XXXXXXX`)
/// are rejected before anything is sent.
pub fn validate_phone(raw: &str) -> Result<String, CheckoutError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == PHONE_PLACEHOLDER || raw.contains('X') {
        return Err(CheckoutError::PhoneNotConfigured);
    }
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(CheckoutError::PhoneNotConfigured);
    }
    Ok(digits)
}

pub fn order_message(store_name: &str, cart: &Cart) -> String {
    let details = cart
        .lines
        .iter()
        .map(|line| {
            let variants = line.product.variant_attributes();
            let variants = if variants.is_empty() {
                String::new()
            } else {
                format!(" ({})", variants.join(" "))
            };
            format!(
                "• {}{} - Cantidad: {} - Subtotal: {}",
                line.product.name,
                variants,
                line.quantity,
                line.subtotal()
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "¡Hola {store_name}! Quisiera realizar el siguiente pedido:\n\n\
         {details}\n\n\
         *Total del Pedido: {}*\n\n\
         Por favor, confírmame la disponibilidad, detalles de pago y opciones de entrega.\n\n\
         ¡Gracias!",
        cart.total()
    )
}

pub fn whatsapp_url(phone_number: &str, message: &str) -> String {
    format!(
        "{WHATSAPP_BASE_URL}/{phone_number}?text={}",
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// Builds the deep link for `cart`. Leaves the cart untouched.
pub fn prepare_order(
    store_name: &str,
    phone_number: &str,
    cart: &Cart,
) -> Result<WhatsAppOrder, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let phone_number = validate_phone(phone_number)?;
    let message = order_message(store_name, cart);
    let url = whatsapp_url(&phone_number, &message);
    Ok(WhatsAppOrder {
        phone_number,
        message,
        url,
    })
}
