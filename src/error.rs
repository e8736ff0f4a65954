use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::response::{ApiResponse, Meta};

/// Failures talking to the upstream catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("resource not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("WhatsApp number is not configured, please contact the store administrator")]
    PhoneNotConfigured,

    #[error("cart is empty")]
    EmptyCart,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Upstream catalog error")]
    Upstream(#[from] ApiError),

    #[error("{0}")]
    Checkout(#[from] CheckoutError),
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Upstream(ApiError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Not Found".to_string())
            }
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            AppError::Checkout(CheckoutError::EmptyCart) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::Checkout(CheckoutError::PhoneNotConfigured) => {
                (StatusCode::SERVICE_UNAVAILABLE, self.to_string())
            }
        };

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }

        let detail = match &self {
            AppError::Upstream(err) => err.to_string(),
            _ => self.to_string(),
        };

        let body = ApiResponse {
            message,
            data: Some(ErrorData { error: detail }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
