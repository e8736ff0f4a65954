use crate::{
    cart::CartStore,
    client::ArticleQuery,
    dto::products::{ProductDetail, StockStatus},
    error::AppResult,
    models::Article,
    state::AppState,
};

pub const RELATED_LIMIT: usize = 4;

/// Quantity picker on the product page, bounded to `[1, stock]`.
///
/// With nothing in stock the selector sits at zero and adds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySelector {
    quantity: u32,
    stock: u32,
}

impl QuantitySelector {
    pub fn new(stock: u32) -> Self {
        Self {
            quantity: stock.min(1),
            stock,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Moves by `delta`; steps that would leave `[1, stock]` are ignored.
    pub fn step(&mut self, delta: i64) -> bool {
        let next = i64::from(self.quantity) + delta;
        if next >= 1 && next <= i64::from(self.stock) {
            self.quantity = next as u32;
            true
        } else {
            false
        }
    }

    pub fn set(&mut self, requested: u32) {
        self.quantity = if self.stock == 0 {
            0
        } else {
            requested.clamp(1, self.stock)
        };
    }

    /// Adds the selected quantity to `cart`, never past the article's stock,
    /// and resets the picker. Returns the units added.
    pub fn commit(&mut self, cart: &CartStore, article: &Article) -> u32 {
        let added = cart.add_within_stock(article, self.quantity);
        self.quantity = self.stock.min(1);
        added
    }
}

/// Same-category articles other than `product_id`, at most [`RELATED_LIMIT`].
pub fn related_articles(candidates: Vec<Article>, product_id: i64) -> Vec<Article> {
    candidates
        .into_iter()
        .filter(|a| a.id != product_id)
        .take(RELATED_LIMIT)
        .collect()
}

pub async fn product_detail(state: &AppState, id: i64) -> AppResult<ProductDetail> {
    let product = state.api.article(id).await?;

    let (related, notice) = match product.category_id {
        Some(category) => {
            let query = ArticleQuery::related_to(category, RELATED_LIMIT as u32);
            match state.api.articles(&query).await {
                Ok(candidates) => (related_articles(candidates, id), None),
                Err(err) => {
                    tracing::warn!(error = %err, product_id = id, "related products unavailable");
                    (
                        Vec::new(),
                        Some("No se pudieron cargar productos relacionados".to_string()),
                    )
                }
            }
        }
        None => (Vec::new(), None),
    };

    let stock_status = StockStatus::for_stock(product.stock);
    Ok(ProductDetail {
        price_display: product.price.to_string(),
        stock_label: stock_status.label(),
        max_quantity: product.stock,
        stock_status,
        product,
        related,
        notice,
    })
}
