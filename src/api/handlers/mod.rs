//! HTTP request handlers.

pub mod auth_handler;
pub mod claims_handler;

pub use auth_handler::auth_routes;
pub use claims_handler::claims_routes;
