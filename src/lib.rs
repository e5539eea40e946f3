//! Livraria Book Reservation API
//!
//! A Rust REST API server for a small book catalog: authors, books,
//! users and their reservations, backed by an in-memory store.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: repository::Repository,
}
