//! Application state shared across handlers

use std::sync::Arc;

use application::QueryInterpreter;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// The query interpreter; stateless, shared by all requests
    pub interpreter: Arc<QueryInterpreter>,
}

impl AppState {
    /// Create state around an interpreter
    #[must_use]
    pub fn new(interpreter: Arc<QueryInterpreter>) -> Self {
        Self { interpreter }
    }
}
