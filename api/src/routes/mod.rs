//! Route handlers.

pub mod users;

pub use users::AppState;
