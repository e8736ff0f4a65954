//! HTTP client for the upstream catalog REST API.
//!
//! Every resource family is a plain `GET {base}/{resource}/`. List endpoints
//! answer either with a bare JSON array or with a paginated
//! `{"results": [...]}` object; both decode through [`Listing`].

use std::time::Duration;

use reqwest::{Client, StatusCode, header};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    error::ApiError,
    models::{Article, Carousel, Category, ContentBlock, NavigationLink, ResolveMedia},
};

/// A list endpoint response in either of the shapes the API produces.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Bare(Vec<T>),
    Paginated { results: Vec<T> },
}

impl<T> Listing<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Bare(items) => items,
            Listing::Paginated { results } => results,
        }
    }
}

/// Query parameters accepted by `GET /articulos/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub category: Option<i64>,
    pub active: Option<bool>,
    pub featured: Option<bool>,
    pub limit: Option<u32>,
}

impl ArticleQuery {
    pub fn featured(limit: u32) -> Self {
        Self {
            featured: Some(true),
            limit: Some(limit),
            ..Self::default()
        }
    }

    pub fn related_to(category: i64, limit: u32) -> Self {
        Self {
            category: Some(category),
            active: Some(true),
            limit: Some(limit),
            ..Self::default()
        }
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("categoria", category.to_string()));
        }
        if let Some(active) = self.active {
            params.push(("activo", active.to_string()));
        }
        if let Some(featured) = self.featured {
            params.push(("destacado", featured.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: Client,
    base_url: String,
    media_base_url: String,
}

impl CatalogApi {
    /// Builds a client rooted at `base_url` (e.g. `http://localhost:8000/api`).
    ///
    /// No timeout is applied unless one is given.
    pub fn new(
        base_url: impl Into<String>,
        media_base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Client)?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            media_base_url: media_base_url.into(),
        })
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}/", self.base_url, resource.trim_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, ApiError> {
        let url = self.endpoint(resource);
        tracing::debug!(%url, ?params, "catalog api request");

        let response = self
            .client
            .get(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .query(params)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { url });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|source| ApiError::Network {
            url: url.clone(),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }

    async fn list<T>(
        &self,
        resource: &str,
        params: &[(&'static str, String)],
    ) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned + ResolveMedia,
    {
        let mut items = self.get_json::<Listing<T>>(resource, params).await?.into_items();
        for item in &mut items {
            item.resolve_media(&self.media_base_url);
        }
        Ok(items)
    }

    async fn detail<T>(&self, resource: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + ResolveMedia,
    {
        let mut item: T = self.get_json(resource, &[]).await?;
        item.resolve_media(&self.media_base_url);
        Ok(item)
    }

    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.list("categorias", &[]).await
    }

    pub async fn category(&self, id: i64) -> Result<Category, ApiError> {
        self.detail(&format!("categorias/{id}")).await
    }

    pub async fn articles(&self, query: &ArticleQuery) -> Result<Vec<Article>, ApiError> {
        self.list("articulos", &query.params()).await
    }

    pub async fn article(&self, id: i64) -> Result<Article, ApiError> {
        self.detail(&format!("articulos/{id}")).await
    }

    pub async fn carousels(
        &self,
        name: Option<&str>,
        active: Option<bool>,
    ) -> Result<Vec<Carousel>, ApiError> {
        let mut params = Vec::new();
        if let Some(name) = name {
            params.push(("nombre", name.to_string()));
        }
        if let Some(active) = active {
            params.push(("activo", active.to_string()));
        }
        self.list("carousels", &params).await
    }

    /// The first active carousel with this name; an empty listing is `None`.
    pub async fn carousel(&self, name: &str) -> Result<Option<Carousel>, ApiError> {
        Ok(self
            .carousels(Some(name), Some(true))
            .await?
            .into_iter()
            .next())
    }

    pub async fn navigation_links(
        &self,
        placement: Option<&str>,
    ) -> Result<Vec<NavigationLink>, ApiError> {
        let params: Vec<_> = placement
            .map(|p| ("ubicacion", p.to_string()))
            .into_iter()
            .collect();
        self.list("navigation-links", &params).await
    }

    pub async fn content_blocks(
        &self,
        identifier: Option<&str>,
    ) -> Result<Vec<ContentBlock>, ApiError> {
        let params: Vec<_> = identifier
            .map(|i| ("identificador", i.to_string()))
            .into_iter()
            .collect();
        self.list("content-blocks", &params).await
    }

    pub async fn content_block(&self, identifier: &str) -> Result<Option<ContentBlock>, ApiError> {
        Ok(self
            .content_blocks(Some(identifier))
            .await?
            .into_iter()
            .find(|block| block.identifier == identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn listing_accepts_bare_arrays() {
        let listing: Listing<Item> = serde_json::from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(listing.into_items(), vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn listing_accepts_paginated_objects() {
        let listing: Listing<Item> =
            serde_json::from_str(r#"{"count":1,"next":null,"results":[{"id":7}]}"#).unwrap();
        assert_eq!(listing.into_items(), vec![Item { id: 7 }]);
    }

    #[test]
    fn article_query_serializes_only_set_params() {
        let query = ArticleQuery::related_to(3, 4);
        assert_eq!(
            query.params(),
            vec![
                ("categoria", "3".to_string()),
                ("activo", "true".to_string()),
                ("limit", "4".to_string()),
            ]
        );
        assert!(ArticleQuery::default().params().is_empty());
    }
}
