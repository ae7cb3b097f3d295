//! Application state management

use club_core::config::AppConfig;
use sqlx::PgPool;

/// Application state shared across handlers
///
/// The configuration (including the token signing secret) is read-only after
/// startup; the pool provides its own concurrency-safe connection handling.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        Self { config, db_pool }
    }
}
