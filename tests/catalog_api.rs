//! `CatalogApi` against a local `wiremock` server.

mod common;

use common::article_json;
use serde_json::json;
use storefront_bff::{
    client::{ArticleQuery, CatalogApi},
    error::ApiError,
    money::Money,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> CatalogApi {
    CatalogApi::new(format!("{}/api", server.uri()), server.uri(), None)
        .expect("failed to build test CatalogApi")
}

#[tokio::test]
async fn decodes_bare_array_listings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categorias/"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "nombre": "Vestidos", "slug": "vestidos", "activo": true, "orden": 0 },
            { "id": 2, "nombre": "Blusas", "slug": "blusas", "activo": true, "orden": 1 }
        ])))
        .mount(&server)
        .await;

    let categories = api_for(&server).categories().await.expect("categories");
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].name, "Blusas");
}

#[tokio::test]
async fn fetches_a_single_category_with_absolute_image() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categorias/3/"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "nombre": "Chompas",
            "descripcion": "Tejidos de alpaca",
            "slug": "chompas",
            "activo": true,
            "orden": 2,
            "imagen_categoria": "/media/categorias/chompas.jpg"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let category = api_for(&server).category(3).await.expect("category");
    assert_eq!(category.id, 3);
    assert_eq!(category.name, "Chompas");
    assert_eq!(category.position, 2);
    assert_eq!(
        category.image.as_deref(),
        Some(format!("{}/media/categorias/chompas.jpg", server.uri()).as_str())
    );
}

#[tokio::test]
async fn missing_category_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categorias/99/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = api_for(&server).category(99).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn decodes_paginated_listings_and_sends_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articulos/"))
        .and(query_param("categoria", "3"))
        .and(query_param("activo", "true"))
        .and(query_param("limit", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "previous": null,
            "results": [article_json(9, "Falda", "49.90", 2)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let articles = api_for(&server)
        .articles(&ArticleQuery::related_to(3, 4))
        .await
        .expect("articles");
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].price, Money::from_cents(4990));
}

#[tokio::test]
async fn detail_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articulos/77/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "No encontrado." })))
        .mount(&server)
        .await;

    let err = api_for(&server).article(77).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn server_errors_surface_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categorias/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = api_for(&server).categories().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500, .. }), "got {err:?}");
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/content-blocks/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).content_blocks(None).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn unreachable_api_is_a_network_error() {
    let api = CatalogApi::new("http://127.0.0.1:9/api", "http://127.0.0.1:9", None).unwrap();
    let err = api.categories().await.unwrap_err();
    assert!(matches!(err, ApiError::Network { .. }), "got {err:?}");
}

#[tokio::test]
async fn carousel_lookup_takes_first_match_and_resolves_media() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/carousels/"))
        .and(query_param("nombre", "principal"))
        .and(query_param("activo", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "nombre": "principal",
            "activo": true,
            "slides": [
                { "id": 2, "imagen": "/media/carousels/b.jpg", "orden": 2, "activo": true },
                { "id": 1, "imagen": "https://cdn.example.com/a.jpg", "titulo": "Nueva colección", "orden": 1, "activo": true },
                { "id": 3, "imagen": "/media/carousels/c.jpg", "orden": 0, "activo": false }
            ]
        }])))
        .mount(&server)
        .await;

    let carousel = api_for(&server)
        .carousel("principal")
        .await
        .expect("request")
        .expect("carousel present");

    let slides = carousel.active_slides();
    assert_eq!(slides.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(slides[0].image, "https://cdn.example.com/a.jpg");
    assert_eq!(slides[1].image, format!("{}/media/carousels/b.jpg", server.uri()));
}

#[tokio::test]
async fn empty_carousel_listing_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/carousels/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    assert!(api_for(&server).carousel("ofertas").await.unwrap().is_none());
}

#[tokio::test]
async fn navigation_links_filter_by_placement() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/navigation-links/"))
        .and(query_param("ubicacion", "header"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "texto_del_enlace": "Instagram",
            "url_o_ruta": "https://instagram.com/diegojhoao",
            "ubicacion": "header",
            "orden": 0,
            "abrir_en_nueva_pestana": true,
            "activo": true
        }])))
        .mount(&server)
        .await;

    let links = api_for(&server)
        .navigation_links(Some("header"))
        .await
        .expect("links");
    assert_eq!(links.len(), 1);
    assert!(links[0].open_in_new_tab);
    assert!(links[0].is_external());
}

#[tokio::test]
async fn numeric_prices_are_accepted() {
    let server = MockServer::start().await;
    let mut body = article_json(5, "Polo", "0", 1);
    body["precio"] = json!(19.9);
    Mock::given(method("GET"))
        .and(path("/api/articulos/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let article = api_for(&server).article(5).await.expect("article");
    assert_eq!(article.price, Money::from_cents(1990));
}
