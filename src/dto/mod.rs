pub mod cart;
pub mod catalog;
pub mod content;
pub mod products;
