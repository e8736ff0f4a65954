use std::collections::BTreeMap;

use crate::{
    catalog::CatalogFilter,
    client::ArticleQuery,
    dto::content::{CarouselView, HomeView},
    error::{AppError, AppResult},
    models::{ContentBlock, NavigationLink},
    state::AppState,
};

pub const HOME_CAROUSEL: &str = "principal";
pub const HEADER_PLACEMENT: &str = "header";
pub const FEATURED_LIMIT: u32 = 4;

pub async fn home(state: &AppState) -> HomeView {
    let featured_query = ArticleQuery::featured(FEATURED_LIMIT);
    let (featured, blocks, carousel, navigation) = tokio::join!(
        state.api.articles(&featured_query),
        state.api.content_blocks(None),
        carousel(state, HOME_CAROUSEL),
        navigation(state, Some(HEADER_PLACEMENT)),
    );

    let mut notices = Vec::new();

    let featured = match featured {
        Ok(articles) => {
            let only_featured = CatalogFilter {
                featured_only: true,
                ..CatalogFilter::default()
            };
            let mut featured = only_featured.apply(&articles);
            featured.truncate(FEATURED_LIMIT as usize);
            featured
        }
        Err(err) => {
            tracing::warn!(error = %err, "featured products unavailable");
            notices.push("No se pudieron cargar los productos destacados".to_string());
            Vec::new()
        }
    };

    let content_blocks = match blocks {
        Ok(blocks) => index_blocks(blocks),
        Err(err) => {
            tracing::warn!(error = %err, "content blocks unavailable");
            BTreeMap::new()
        }
    };

    HomeView {
        featured,
        content_blocks,
        carousel,
        navigation,
        notices,
    }
}

/// Active blocks keyed by identifier; later duplicates win.
pub fn index_blocks(blocks: Vec<ContentBlock>) -> BTreeMap<String, ContentBlock> {
    blocks
        .into_iter()
        .filter(|b| b.active)
        .map(|b| (b.identifier.clone(), b))
        .collect()
}

/// Active slides of the named carousel, or a notice explaining why there are none.
pub async fn carousel(state: &AppState, name: &str) -> CarouselView {
    let name = name.trim();
    if name.is_empty() {
        return CarouselView {
            name: String::new(),
            slides: Vec::new(),
            notice: Some("Nombre del carrusel no especificado.".to_string()),
        };
    }

    let (slides, notice) = match state.api.carousel(name).await {
        Ok(Some(carousel)) => {
            let slides = carousel.active_slides();
            let notice = slides
                .is_empty()
                .then(|| format!("Carrusel \"{name}\" no tiene slides activos."));
            (slides, notice)
        }
        Ok(None) => {
            tracing::warn!(carousel = name, "carousel not found");
            (
                Vec::new(),
                Some(format!(
                    "Carrusel \"{name}\" no encontrado o sin slides activos."
                )),
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, carousel = name, "carousel unavailable");
            (
                Vec::new(),
                Some("Error al cargar datos del carrusel.".to_string()),
            )
        }
    };

    CarouselView {
        name: name.to_string(),
        slides,
        notice,
    }
}

/// Active links in display order; an unreachable API yields no links.
pub async fn navigation(state: &AppState, placement: Option<&str>) -> Vec<NavigationLink> {
    match state.api.navigation_links(placement).await {
        Ok(links) => {
            let mut links: Vec<_> = links.into_iter().filter(|l| l.active).collect();
            links.sort_by_key(|l| l.position);
            links
        }
        Err(err) => {
            tracing::warn!(error = %err, ?placement, "navigation links unavailable");
            Vec::new()
        }
    }
}

pub async fn content_block(state: &AppState, identifier: &str) -> AppResult<ContentBlock> {
    state
        .api
        .content_block(identifier)
        .await?
        .filter(|block| block.active)
        .ok_or(AppError::NotFound)
}
