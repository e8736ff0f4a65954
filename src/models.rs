//! Catalog entities as served by the upstream REST API.
//!
//! The API speaks Spanish field names; these types read them and re-emit
//! English names to storefront clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::money::{self, Money};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,
    #[serde(rename(deserialize = "nombre"))]
    pub name: String,
    #[serde(rename(deserialize = "descripcion"), default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(rename(deserialize = "activo"), default = "default_true")]
    pub active: bool,
    #[serde(rename(deserialize = "orden"), default)]
    pub position: u32,
    #[serde(rename(deserialize = "imagen_categoria"), default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Article {
    pub id: i64,
    #[serde(rename(deserialize = "categoria"), default)]
    pub category_id: Option<i64>,
    #[serde(rename(deserialize = "categoria_nombre"), default)]
    pub category_name: Option<String>,
    #[serde(rename(deserialize = "nombre"))]
    pub name: String,
    #[serde(rename(deserialize = "descripcion"), default)]
    pub description: Option<String>,
    #[serde(
        rename(deserialize = "precio"),
        deserialize_with = "money::deserialize_decimal"
    )]
    pub price: Money,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(rename(deserialize = "activo"), default = "default_true")]
    pub active: bool,
    #[serde(rename(deserialize = "destacado"), default)]
    pub featured: bool,
    #[serde(rename(deserialize = "imagen_principal"), default)]
    pub image: Option<String>,
    #[serde(rename(deserialize = "marca"), default)]
    pub brand: Option<String>,
    #[serde(rename(deserialize = "talla"), default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Slide {
    pub id: i64,
    #[serde(rename(deserialize = "imagen"))]
    pub image: String,
    #[serde(rename(deserialize = "titulo"), default)]
    pub title: Option<String>,
    #[serde(rename(deserialize = "subtitulo"), default)]
    pub subtitle: Option<String>,
    #[serde(rename(deserialize = "enlace_url"), default)]
    pub link: Option<String>,
    #[serde(rename(deserialize = "orden"), default)]
    pub position: u32,
    #[serde(rename(deserialize = "activo"), default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Carousel {
    pub id: i64,
    #[serde(rename(deserialize = "nombre"))]
    pub name: String,
    #[serde(rename(deserialize = "activo"), default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Carousel {
    /// Active slides in display order.
    pub fn active_slides(&self) -> Vec<Slide> {
        let mut slides: Vec<Slide> = self.slides.iter().filter(|s| s.active).cloned().collect();
        slides.sort_by_key(|s| s.position);
        slides
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContentBlock {
    pub id: i64,
    #[serde(rename(deserialize = "identificador"))]
    pub identifier: String,
    #[serde(rename(deserialize = "titulo"), default)]
    pub title: Option<String>,
    #[serde(rename(deserialize = "contenido_html"), default)]
    pub html: Option<String>,
    #[serde(rename(deserialize = "imagen_asociada"), default)]
    pub image: Option<String>,
    #[serde(rename(deserialize = "enlace_url"), default)]
    pub link: Option<String>,
    #[serde(rename(deserialize = "activo"), default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationLink {
    pub id: i64,
    #[serde(rename(deserialize = "texto_del_enlace"))]
    pub text: String,
    #[serde(rename(deserialize = "url_o_ruta"))]
    pub target: String,
    #[serde(rename(deserialize = "ubicacion"), default)]
    pub placement: Option<String>,
    #[serde(rename(deserialize = "orden"), default)]
    pub position: u32,
    #[serde(rename(deserialize = "abrir_en_nueva_pestana"), default)]
    pub open_in_new_tab: bool,
    #[serde(rename(deserialize = "activo"), default = "default_true")]
    pub active: bool,
}

impl NavigationLink {
    pub fn is_external(&self) -> bool {
        self.target.starts_with("http://") || self.target.starts_with("https://")
    }
}

/// Rewrites relative media paths (`/media/...`) against the media host.
pub trait ResolveMedia {
    fn resolve_media(&mut self, media_base: &str);
}

pub fn absolute_media_url(media_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        media_base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn resolve_field(field: &mut Option<String>, media_base: &str) {
    if let Some(path) = field.as_mut().filter(|p| !p.is_empty()) {
        *path = absolute_media_url(media_base, path);
    }
}

impl ResolveMedia for Category {
    fn resolve_media(&mut self, media_base: &str) {
        resolve_field(&mut self.image, media_base);
    }
}

impl ResolveMedia for Article {
    fn resolve_media(&mut self, media_base: &str) {
        resolve_field(&mut self.image, media_base);
    }
}

impl ResolveMedia for Carousel {
    fn resolve_media(&mut self, media_base: &str) {
        for slide in &mut self.slides {
            slide.image = absolute_media_url(media_base, &slide.image);
        }
    }
}

impl ResolveMedia for ContentBlock {
    fn resolve_media(&mut self, media_base: &str) {
        resolve_field(&mut self.image, media_base);
    }
}

impl ResolveMedia for NavigationLink {
    fn resolve_media(&mut self, _media_base: &str) {}
}
