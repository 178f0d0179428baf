//! HTTP presentation layer for QueryLens
//!
//! Exposes the query interpreter over a small axum API.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
