pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod money;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
