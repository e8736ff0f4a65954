//! Session-scoped cart stores.
//!
//! A [`CartStore`] is a handle onto one cart. Mutations are applied through a
//! `tokio::sync::watch` channel, so every subscriber observes each change as
//! soon as the mutating call returns. The store keeps at most one line per
//! product. Only [`CartStore::add_within_stock`] looks at stock; the other
//! mutations take quantities as given.

use std::{collections::HashMap, sync::Arc, time::Duration};

use serde::Serialize;
use tokio::{
    sync::{RwLock, watch},
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{models::Article, money::Money};

const REAPER_MAX_PERIOD: Duration = Duration::from_secs(60);

/// Product fields copied into the cart at add time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProductSnapshot {
    pub id: i64,
    pub name: String,
    pub price: Money,
    pub stock: u32,
    pub sku: Option<String>,
    pub image: Option<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl From<&Article> for ProductSnapshot {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            name: article.name.clone(),
            price: article.price,
            stock: article.stock,
            sku: article.sku.clone(),
            image: article.image.clone(),
            brand: article.brand.clone(),
            size: article.size.clone(),
            color: article.color.clone(),
        }
    }
}

impl ProductSnapshot {
    /// Non-empty variant attributes in brand, size, color order.
    pub fn variant_attributes(&self) -> Vec<&str> {
        [&self.brand, &self.size, &self.color]
            .into_iter()
            .filter_map(|attr| attr.as_deref().map(str::trim))
            .filter(|attr| !attr.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CartLine {
    pub product: ProductSnapshot,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> Money {
        self.product.price * self.quantity
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Cart {
    /// Bumped on every effective mutation.
    pub version: u64,
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities, not number of lines.
    pub fn items_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    fn touch(&mut self) {
        self.version += 1;
    }

    /// Adds `quantity` to the product's line, creating it from a fresh snapshot.
    fn merge(&mut self, article: &Article, quantity: u32) -> u32 {
        let new_quantity = match self.lines.iter_mut().find(|l| l.product.id == article.id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
                line.quantity
            }
            None => {
                self.lines.push(CartLine {
                    product: ProductSnapshot::from(article),
                    quantity,
                });
                quantity
            }
        };
        self.touch();
        new_quantity
    }
}

#[derive(Debug, Clone)]
pub struct CartStore {
    state: Arc<watch::Sender<Cart>>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Cart::default());
        Self {
            state: Arc::new(tx),
        }
    }

    /// Adds one unit of `article`, merging into an existing line.
    pub fn add_to_cart(&self, article: &Article) -> u32 {
        self.add_quantity(article, 1)
    }

    /// Adds `quantity` units in one notification. Returns the line's new quantity.
    pub fn add_quantity(&self, article: &Article, quantity: u32) -> u32 {
        if quantity == 0 {
            return self.snapshot().line(article.id).map_or(0, |l| l.quantity);
        }

        let mut new_quantity = 0;
        self.state.send_modify(|cart| {
            new_quantity = cart.merge(article, quantity);
        });
        tracing::debug!(product_id = article.id, quantity = new_quantity, "cart line added");
        new_quantity
    }

    /// Adds up to `quantity` units without the line passing `article.stock`.
    ///
    /// The remaining-stock check and the insert happen under one lock.
    /// Returns the units actually added; zero leaves the cart untouched.
    pub fn add_within_stock(&self, article: &Article, quantity: u32) -> u32 {
        let mut added = 0;
        self.state.send_if_modified(|cart| {
            let in_cart = cart.line(article.id).map_or(0, |l| l.quantity);
            added = quantity.min(article.stock.saturating_sub(in_cart));
            if added == 0 {
                return false;
            }
            cart.merge(article, added);
            true
        });
        if added > 0 {
            tracing::debug!(product_id = article.id, added, "cart line added within stock");
        }
        added
    }

    /// Sets a line's quantity; zero or below removes the line.
    ///
    /// Returns whether the cart changed. Unknown products are ignored.
    pub fn update_quantity(&self, product_id: i64, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_from_cart(product_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        self.state.send_if_modified(|cart| {
            match cart.lines.iter_mut().find(|l| l.product.id == product_id) {
                Some(line) if line.quantity != quantity => {
                    line.quantity = quantity;
                    cart.touch();
                    true
                }
                _ => false,
            }
        })
    }

    pub fn remove_from_cart(&self, product_id: i64) -> bool {
        let removed = self.state.send_if_modified(|cart| {
            let before = cart.lines.len();
            cart.lines.retain(|l| l.product.id != product_id);
            let changed = cart.lines.len() != before;
            if changed {
                cart.touch();
            }
            changed
        });
        if removed {
            tracing::debug!(product_id, "cart line removed");
        }
        removed
    }

    pub fn clear_cart(&self) {
        self.state.send_if_modified(|cart| {
            if cart.lines.is_empty() {
                return false;
            }
            cart.lines.clear();
            cart.touch();
            true
        });
    }

    pub fn cart_total(&self) -> Money {
        self.state.borrow().total()
    }

    pub fn items_count(&self) -> u32 {
        self.state.borrow().items_count()
    }

    pub fn snapshot(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// A receiver that observes every subsequent mutation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }
}

#[derive(Debug)]
struct Session {
    store: CartStore,
    last_seen: Instant,
}

/// All open carts, keyed by session id. Carts live only in memory and are
/// dropped once idle for longer than the registry's TTL.
#[derive(Debug, Clone, Default)]
pub struct CartRegistry {
    carts: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl CartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn open(&self) -> (Uuid, CartStore) {
        let id = Uuid::new_v4();
        let store = CartStore::new();
        self.carts.write().await.insert(
            id,
            Session {
                store: store.clone(),
                last_seen: Instant::now(),
            },
        );
        tracing::info!(cart_id = %id, "cart session opened");
        (id, store)
    }

    /// Looks up a cart and marks its session as active.
    pub async fn get(&self, id: Uuid) -> Option<CartStore> {
        let mut carts = self.carts.write().await;
        let session = carts.get_mut(&id)?;
        session.last_seen = Instant::now();
        Some(session.store.clone())
    }

    pub async fn close(&self, id: Uuid) -> bool {
        let closed = self.carts.write().await.remove(&id).is_some();
        if closed {
            tracing::info!(cart_id = %id, "cart session closed");
        }
        closed
    }

    /// Drops carts untouched for at least `ttl`. Returns how many were dropped.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut carts = self.carts.write().await;
        let before = carts.len();
        carts.retain(|_, session| session.last_seen.elapsed() < ttl);
        let evicted = before - carts.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = carts.len(), "idle cart sessions evicted");
        }
        evicted
    }

    /// Sweeps idle carts in the background every `ttl`, capped at one minute.
    pub fn spawn_reaper(&self, ttl: Duration) -> JoinHandle<()> {
        let registry = self.clone();
        let period = ttl.min(REAPER_MAX_PERIOD).max(Duration::from_millis(1));
        tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                registry.evict_idle(ttl).await;
            }
        })
    }

    pub async fn len(&self) -> usize {
        self.carts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.carts.read().await.is_empty()
    }
}
