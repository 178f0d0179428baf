//! Application layer - Use cases and orchestration
//!
//! Defines the ports the interpreter depends on, the ordered selection
//! rule chains, and the `QueryInterpreter` service that composes them.

pub mod error;
pub mod ports;
pub mod selection;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use selection::{DATE_KEYWORDS, select_date_text, select_location};
pub use services::QueryInterpreter;
