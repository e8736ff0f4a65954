use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub total: Option<u64>,
    /// Cart version the payload was rendered from, for long-poll clients.
    pub version: Option<u64>,
}

impl Meta {
    pub fn count(total: usize) -> Self {
        Self {
            total: Some(total as u64),
            version: None,
        }
    }

    pub fn versioned(version: u64) -> Self {
        Self {
            total: None,
            version: Some(version),
        }
    }

    pub fn empty() -> Self {
        Self {
            total: None,
            version: None,
        }
    }
}

/// Envelope shared by every storefront endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
