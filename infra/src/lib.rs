//! # Signet Infrastructure
//!
//! Concrete implementations of the core crate's persistence and collaborator
//! traits: MySQL repositories (sqlx), the SMTP mailer (lettre), and avatar
//! object storage (local filesystem, optionally S3).

pub mod database;
pub mod email;
pub mod storage;

pub use database::connection::create_pool;
pub use database::mysql::{MySqlTokenRepository, MySqlUserRepository};
pub use email::SmtpMailer;
pub use storage::{AvatarStorage, LocalAvatarStorage};
#[cfg(feature = "s3")]
pub use storage::S3AvatarStorage;
