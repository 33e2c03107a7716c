//! # Products Module
//!
//! This module handles all product-related functionality including:
//! - Public product catalog with category filter
//! - Admin product creation

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::products_routes;
