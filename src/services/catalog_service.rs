use crate::{
    catalog::{CatalogFilter, SortKey, sort_products},
    dto::catalog::CatalogView,
    models::Category,
    state::AppState,
};

/// Fetches articles and categories concurrently, then filters and sorts locally.
///
/// Upstream failures degrade to an empty listing with a notice.
pub async fn browse(state: &AppState, filter: CatalogFilter, sort: SortKey) -> CatalogView {
    let query = filter.upstream_query();
    let (articles, categories) = tokio::join!(state.api.articles(&query), state.api.categories());

    let categories = categories.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "categories unavailable");
        Vec::new()
    });

    let (products, notice) = match articles {
        Ok(articles) => {
            let products = sort_products(&filter.apply(&articles), sort);
            let notice = products
                .is_empty()
                .then(|| "No se encontraron productos".to_string());
            (products, notice)
        }
        Err(err) => {
            tracing::warn!(error = %err, "articles unavailable");
            (
                Vec::new(),
                Some("No se pudieron cargar los productos".to_string()),
            )
        }
    };

    CatalogView {
        heading: heading(&filter, &categories),
        total: products.len(),
        products,
        categories,
        sort_label: sort.label().to_string(),
        filter,
        sort,
        notice,
    }
}

fn heading(filter: &CatalogFilter, categories: &[Category]) -> String {
    if let Some(term) = filter.search_term.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        return format!("Resultados para \"{term}\"");
    }
    filter
        .category
        .and_then(|id| categories.iter().find(|c| c.id == id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Todos los Productos".to_string())
}
