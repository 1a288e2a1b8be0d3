mod mocks;
mod service_tests;

pub use mocks::{MockMailer, SentEmail};
