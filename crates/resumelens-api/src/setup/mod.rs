//! Application setup: service construction, routing, and server lifecycle.

pub mod routes;
pub mod server;
pub mod services;

pub use services::initialize_app;
