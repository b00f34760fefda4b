//! Shared types, errors, and configuration for Cotiza.
//!
//! This crate provides common types used across all other crates:
//! - Monetary arithmetic helpers with decimal precision
//! - Application-wide error types
//! - JWT token handling and auth payloads
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use auth::Claims;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtConfig, JwtError, JwtService};
