use std::{env, time::Duration};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_MEDIA_URL: &str = "http://localhost:8000";
pub const DEFAULT_STORE_NAME: &str = "DiegoJhoao Store";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "51917277552";
pub const DEFAULT_CART_TTL: Duration = Duration::from_secs(2 * 60 * 60);

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Base of the catalog REST API, without trailing slash.
    pub api_base_url: String,
    /// Host that relative media paths are resolved against.
    pub media_base_url: String,
    /// Unset means upstream requests never time out.
    pub api_timeout: Option<Duration>,
    pub store_name: String,
    pub whatsapp_number: String,
    pub long_poll: Duration,
    /// Carts idle this long are dropped.
    pub cart_ttl: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let api_base_url = env::var("STOREFRONT_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let media_base_url =
            env::var("STOREFRONT_MEDIA_URL").unwrap_or_else(|_| DEFAULT_MEDIA_URL.to_string());
        let api_timeout = match env::var("STOREFRONT_API_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(raw.parse::<u64>().map_err(|err| {
                anyhow::anyhow!("STOREFRONT_API_TIMEOUT_SECS must be whole seconds: {err}")
            })?)),
            Err(_) => None,
        };
        let store_name =
            env::var("STOREFRONT_STORE_NAME").unwrap_or_else(|_| DEFAULT_STORE_NAME.to_string());
        let whatsapp_number = env::var("STOREFRONT_WHATSAPP_NUMBER")
            .unwrap_or_else(|_| DEFAULT_WHATSAPP_NUMBER.to_string());
        let long_poll = env::var("STOREFRONT_LONG_POLL_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(25));
        let cart_ttl = match env::var("STOREFRONT_CART_TTL_SECS") {
            Ok(raw) => Duration::from_secs(raw.parse::<u64>().map_err(|err| {
                anyhow::anyhow!("STOREFRONT_CART_TTL_SECS must be whole seconds: {err}")
            })?),
            Err(_) => DEFAULT_CART_TTL,
        };

        Ok(Self {
            host,
            port,
            api_base_url,
            media_base_url,
            api_timeout,
            store_name,
            whatsapp_number,
            long_poll,
            cart_ttl,
        })
    }

    /// Defaults pointed at an explicit catalog API, for tests and tooling.
    pub fn with_api(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            media_base_url: api_base_url.clone(),
            api_base_url,
            api_timeout: None,
            store_name: DEFAULT_STORE_NAME.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            long_poll: Duration::from_secs(25),
            cart_ttl: DEFAULT_CART_TTL,
        }
    }
}
