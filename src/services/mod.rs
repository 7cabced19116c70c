//! The services that make up the API.
//!
//! Each service exposes its functionality as plain methods, and converts into
//! an [`axum::Router`] for serving it over HTTP.

pub mod customers;
pub use customers::CustomerService;

pub mod health;
pub use health::HealthService;
