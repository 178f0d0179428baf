//! Application services

mod interpreter;

pub use interpreter::QueryInterpreter;
