//! Request handling helpers shared by the route modules.

pub mod error;

pub use error::{handle_domain_error, validation_error_response};
