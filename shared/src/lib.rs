//! # Signet Shared
//!
//! Cross-cutting types for the Signet backend: configuration structs loaded
//! from the environment, the pagination envelope, API response wrappers, and
//! validation utilities used by both the core and api crates.

pub mod config;
pub mod types;
pub mod utils;

pub use config::AppConfig;
pub use types::pagination::{PageQuery, PaginatedResponse};
pub use types::response::{ErrorResponse, MessageResponse};
