//! Company logo asset storage.

pub mod config;
pub mod error;
pub mod service;

pub use config::{StorageConfig, StorageProvider};
pub use error::StorageError;
pub use service::{LogoStore, MAX_LOGO_BYTES, content_type_for};
