use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Article, ContentBlock, NavigationLink, Slide};

#[derive(Debug, Serialize, ToSchema)]
pub struct CarouselView {
    pub name: String,
    pub slides: Vec<Slide>,
    pub notice: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeView {
    pub featured: Vec<Article>,
    pub content_blocks: BTreeMap<String, ContentBlock>,
    pub carousel: CarouselView,
    pub navigation: Vec<NavigationLink>,
    pub notices: Vec<String>,
}
