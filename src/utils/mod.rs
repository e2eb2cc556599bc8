//! Shared utilities: command-line input validation.

pub mod validation;

pub use validation::parse_agent_count;
