//! # Cart Module
//!
//! This module handles all shopping-cart functionality including:
//! - Listing the current user's cart rows
//! - Adding items (every add inserts a fresh row)
//! - Removing a product (all sizes) and clearing the cart

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::cart_routes;
