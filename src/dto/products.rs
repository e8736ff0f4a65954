use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Article;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock { remaining: u32 },
    InStock,
}

impl StockStatus {
    pub fn for_stock(stock: u32) -> Self {
        match stock {
            0 => StockStatus::OutOfStock,
            1..=5 => StockStatus::LowStock { remaining: stock },
            _ => StockStatus::InStock,
        }
    }

    pub fn label(self) -> String {
        match self {
            StockStatus::OutOfStock => "Agotado".to_string(),
            StockStatus::LowStock { remaining } => format!("Solo quedan {remaining}"),
            StockStatus::InStock => "En stock".to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDetail {
    pub product: Article,
    pub price_display: String,
    pub stock_status: StockStatus,
    pub stock_label: String,
    /// Largest quantity the selector allows.
    pub max_quantity: u32,
    pub related: Vec<Article>,
    pub notice: Option<String>,
}
