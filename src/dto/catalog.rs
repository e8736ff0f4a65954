use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    catalog::{CatalogFilter, SortKey},
    models::{Article, Category},
};

#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogView {
    pub heading: String,
    pub products: Vec<Article>,
    pub categories: Vec<Category>,
    pub filter: CatalogFilter,
    pub sort: SortKey,
    pub sort_label: String,
    pub total: usize,
    /// Inline message when the listing is empty or partially unavailable.
    pub notice: Option<String>,
}
