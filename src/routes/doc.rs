use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    cart::{CartLine, ProductSnapshot},
    catalog::{CatalogFilter, SortKey},
    checkout::WhatsAppOrder,
    dto::{
        cart::{AddToCartRequest, CartLineView, CartView, UpdateQuantityRequest},
        catalog::CatalogView,
        content::{CarouselView, HomeView},
        products::{ProductDetail, StockStatus},
    },
    models::{Article, Carousel, Category, ContentBlock, NavigationLink, Slide},
    money::Money,
    response::{ApiResponse, Meta},
    routes::{cart, catalog, content, health, params, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        catalog::browse_catalog,
        products::get_product,
        content::home,
        content::get_carousel,
        content::list_navigation,
        content::get_content_block,
        cart::open_cart,
        cart::get_cart,
        cart::close_cart,
        cart::add_to_cart,
        cart::clear_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::cart_changes,
        cart::checkout
    ),
    components(
        schemas(
            Money,
            Article,
            Category,
            Carousel,
            Slide,
            ContentBlock,
            NavigationLink,
            ProductSnapshot,
            CartLine,
            CatalogFilter,
            SortKey,
            WhatsAppOrder,
            AddToCartRequest,
            UpdateQuantityRequest,
            CartLineView,
            CartView,
            CatalogView,
            CarouselView,
            HomeView,
            ProductDetail,
            StockStatus,
            params::CatalogQuery,
            params::NavigationQuery,
            params::ChangesQuery,
            Meta,
            ApiResponse<CartView>,
            ApiResponse<CatalogView>,
            ApiResponse<ProductDetail>,
            ApiResponse<HomeView>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Catalog", description = "Filtered and sorted product listing"),
        (name = "Products", description = "Product detail endpoints"),
        (name = "Content", description = "Home page, carousels, navigation and content blocks"),
        (name = "Cart", description = "Session cart and WhatsApp checkout"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
