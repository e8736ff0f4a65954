use std::sync::Arc;

use crate::{cart::CartRegistry, client::CatalogApi, config::AppConfig, error::ApiError};

#[derive(Clone)]
pub struct AppState {
    pub api: CatalogApi,
    pub carts: CartRegistry,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let api = CatalogApi::new(
            config.api_base_url.clone(),
            config.media_base_url.clone(),
            config.api_timeout,
        )?;
        Ok(Self {
            api,
            carts: CartRegistry::new(),
            config: Arc::new(config),
        })
    }
}
