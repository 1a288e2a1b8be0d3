//! Profile management and the admin user listing.

pub mod service;

pub use service::{ProfileUpdate, UserService};

#[cfg(test)]
mod tests;
