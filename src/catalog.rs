//! Client-side catalog filtering and ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{client::ArticleQuery, models::Article};

/// Predicates a product must satisfy to be listed. Unset predicates match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogFilter {
    pub category: Option<i64>,
    pub active_only: bool,
    pub featured_only: bool,
    pub search_term: Option<String>,
}

impl CatalogFilter {
    fn search_needle(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, article: &Article) -> bool {
        if self.category.is_some() && article.category_id != self.category {
            return false;
        }
        if self.active_only && !article.active {
            return false;
        }
        if self.featured_only && !article.featured {
            return false;
        }
        match self.search_needle() {
            Some(needle) => {
                article.name.to_lowercase().contains(&needle)
                    || article
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            }
            None => true,
        }
    }

    pub fn apply(&self, products: &[Article]) -> Vec<Article> {
        products.iter().filter(|a| self.matches(a)).cloned().collect()
    }

    /// Parameters the catalog API can filter on itself. Search stays client-side.
    pub fn upstream_query(&self) -> ArticleQuery {
        ArticleQuery {
            category: self.category,
            active: self.active_only.then_some(true),
            featured: self.featured_only.then_some(true),
            ..ArticleQuery::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Newest,
    Featured,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Nombre A-Z",
            SortKey::PriceLow => "Precio: Menor a Mayor",
            SortKey::PriceHigh => "Precio: Mayor a Menor",
            SortKey::Newest => "Más Recientes",
            SortKey::Featured => "Destacados Primero",
        }
    }

    fn compare(self, a: &Article, b: &Article) -> Ordering {
        match self {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            // Undated articles sink to the end.
            SortKey::Newest => match (a.created_at, b.created_at) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortKey::Featured => b.featured.cmp(&a.featured),
        }
    }
}

/// Accent- and case-insensitive first, so "Ábrigo" sorts next to "abrigo".
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

/// Returns a sorted copy; ties keep their input order.
pub fn sort_products(products: &[Article], key: SortKey) -> Vec<Article> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}
