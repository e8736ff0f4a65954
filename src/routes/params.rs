use serde::Deserialize;
use utoipa::ToSchema;

use crate::catalog::{CatalogFilter, SortKey};

/// Catalog page query string. Mirrors the storefront's filter sidebar defaults:
/// active products only, sorted by name.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CatalogQuery {
    pub category: Option<i64>,
    pub active_only: Option<bool>,
    pub featured_only: Option<bool>,
    pub search: Option<String>,
    pub sort: Option<SortKey>,
}

impl CatalogQuery {
    pub fn into_parts(self) -> (CatalogFilter, SortKey) {
        let filter = CatalogFilter {
            category: self.category,
            active_only: self.active_only.unwrap_or(true),
            featured_only: self.featured_only.unwrap_or(false),
            search_term: self.search.filter(|s| !s.trim().is_empty()),
        };
        (filter, self.sort.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NavigationQuery {
    pub placement: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangesQuery {
    /// Last cart version the client rendered.
    pub version: Option<u64>,
}
