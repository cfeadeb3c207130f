//! Dietary suitability checks for recognized recipes.
//!
//! The core is [`diet::check_dietary_suitability`], a pure function over a
//! recipe's ingredients and the user's [`models::DietaryPreferences`]. Around
//! it sit the DeepSeek recognition client, the recipe handler that composes
//! both, and an optional axum HTTP API.

pub mod config;
pub mod diet;
pub mod handlers;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod server;
