mod common;

use common::{article, article_with};
use serde_json::json;
use storefront_bff::{
    cart::CartStore,
    checkout::{order_message, prepare_order, validate_phone, whatsapp_url},
    error::CheckoutError,
};

#[test]
fn message_lists_lines_and_total() {
    let store = CartStore::new();
    let a = article_with(
        1,
        "Vestido floral",
        "25.00",
        json!({ "marca": "Zara", "talla": "M", "color": "Rojo" }),
    );
    store.add_to_cart(&a);
    store.add_to_cart(&a);
    store.add_to_cart(&article(2, "Cinturón", "10.00", 3));

    let message = order_message("DiegoJhoao Store", &store.snapshot());

    assert_eq!(
        message,
        "¡Hola DiegoJhoao Store! Quisiera realizar el siguiente pedido:\n\n\
         • Vestido floral (Zara M Rojo) - Cantidad: 2 - Subtotal: S/ 50.00\n\
         • Cinturón - Cantidad: 1 - Subtotal: S/ 10.00\n\n\
         *Total del Pedido: S/ 60.00*\n\n\
         Por favor, confírmame la disponibilidad, detalles de pago y opciones de entrega.\n\n\
         ¡Gracias!"
    );
}

#[test]
fn url_encodes_like_encode_uri_component() {
    let url = whatsapp_url("51917277552", "¡Hola! (x2) *Total*\nok");
    assert_eq!(
        url,
        "https://wa.me/51917277552?text=%C2%A1Hola!%20(x2)%20*Total*%0Aok"
    );
}

#[test]
fn placeholder_and_masked_numbers_are_rejected() {
    assert_eq!(validate_phone(""), Err(CheckoutError::PhoneNotConfigured));
    assert_eq!(
        validate_phone("TU_NUMERO_DE_WHATSAPP_AQUI"),
        Err(CheckoutError::PhoneNotConfigured)
    );
    assert_eq!(
        validate_phone("519XXXXXXXX"),
        Err(CheckoutError::PhoneNotConfigured)
    );
    assert_eq!(validate_phone("+51 917 277 552"), Ok("51917277552".to_string()));
}

#[test]
fn empty_cart_cannot_check_out() {
    let store = CartStore::new();
    assert_eq!(
        prepare_order("Store", "51917277552", &store.snapshot()),
        Err(CheckoutError::EmptyCart)
    );
}

#[test]
fn prepare_order_does_not_touch_the_cart() {
    let store = CartStore::new();
    store.add_to_cart(&article(1, "Polo", "20.00", 5));
    let before = store.snapshot();

    let order = prepare_order("Store", "51917277552", &before).expect("order");

    assert!(order.url.starts_with("https://wa.me/51917277552?text="));
    assert!(order.message.contains("Polo - Cantidad: 1 - Subtotal: S/ 20.00"));
    assert_eq!(store.snapshot(), before);
}
