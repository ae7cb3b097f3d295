//! Club Core - Domain models and shared configuration
//!
//! This crate defines the types used throughout the club backend:
//! - Account and blog post models
//! - Role definitions for authorization
//! - Configuration management

pub mod config;
pub mod models;

pub use config::{AppConfig, AuthConfig, ConfigError, DatabaseConfig, LoggingConfig, ServerConfig};
pub use models::{Post, User, UserRole};
