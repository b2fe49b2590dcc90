//! Resumelens API Library
//!
//! This crate provides the HTTP handlers, error conversion, and application
//! setup for the resume analysis pipeline.

// Module declarations
pub mod api_doc;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;
pub use state::AppState;
