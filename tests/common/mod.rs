#![allow(dead_code)]

use serde_json::{Value, json};
use storefront_bff::models::Article;

/// Wire-format article as the catalog API serves it.
pub fn article_json(id: i64, name: &str, price: &str, stock: u32) -> Value {
    json!({
        "id": id,
        "categoria": 1,
        "categoria_nombre": "Vestidos",
        "nombre": name,
        "descripcion": format!("Descripción de {name}"),
        "precio": price,
        "stock": stock,
        "sku": null,
        "activo": true,
        "destacado": false,
        "imagen_principal": null,
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:00:00Z"
    })
}

pub fn article(id: i64, name: &str, price: &str, stock: u32) -> Article {
    serde_json::from_value(article_json(id, name, price, stock)).expect("valid article fixture")
}

pub fn article_with(id: i64, name: &str, price: &str, patch: Value) -> Article {
    let mut value = article_json(id, name, price, 10);
    if let (Some(target), Some(fields)) = (value.as_object_mut(), patch.as_object()) {
        for (key, field) in fields {
            target.insert(key.clone(), field.clone());
        }
    }
    serde_json::from_value(value).expect("valid article fixture")
}
