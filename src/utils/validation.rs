//! Command-line input validation.
//!
//! The agent count arrives as raw text so that a non-integer value can be
//! reported with its own message before the usage line.

use crate::error::StartStateError;

/// Parse an agent count argument.
///
/// Accepts an optionally signed base-10 integer with surrounding whitespace.
/// Zero and negative values are returned as-is; they produce a document
/// without agent records.
///
/// # Examples
/// ```
/// use circles_states::utils::validation::parse_agent_count;
///
/// assert_eq!(parse_agent_count("100").unwrap(), 100);
/// assert_eq!(parse_agent_count(" 7 ").unwrap(), 7);
/// assert_eq!(parse_agent_count("-3").unwrap(), -3);
/// assert!(parse_agent_count("abc").is_err());
/// ```
pub fn parse_agent_count(raw: &str) -> Result<i64, StartStateError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| StartStateError::InvalidAgentCount { value: raw.to_string() })
}
