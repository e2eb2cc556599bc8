//! Error types for start-state generation.
//!
//! Errors fall into two classes that map onto distinct process exit
//! statuses: usage/validation problems (status 1) and I/O failures on the
//! output destination (status 2).

use std::io;

use crate::config::ValidationError;

/// Exit status for a missing, surplus or malformed argument.
pub const EXIT_USAGE: i32 = 1;

/// Exit status for an output destination that cannot be opened or written.
pub const EXIT_IO: i32 = 2;

/// Errors that can occur while generating a start-states document
#[derive(Debug, thiserror::Error)]
pub enum StartStateError {
    #[error("INVALID INPUT VALUE: '{value}' is not an integer")]
    InvalidAgentCount { value: String },

    #[error(transparent)]
    InvalidSettings(#[from] ValidationError),

    #[error("ERROR: Unable to open {path} for writing\nFailed with IO Error ({}) : {source}", os_error_code(.source))]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("ERROR: Failed while writing {path}\nFailed with IO Error ({}) : {source}", os_error_code(.source))]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl StartStateError {
    /// Process exit status matching this error's class.
    pub fn exit_code(&self) -> i32 {
        match self {
            StartStateError::InvalidAgentCount { .. } | StartStateError::InvalidSettings(_) => EXIT_USAGE,
            StartStateError::Open { .. } | StartStateError::Write { .. } => EXIT_IO,
        }
    }

    /// Whether the usage line should follow the error message.
    pub fn wants_usage(&self) -> bool {
        matches!(self, StartStateError::InvalidAgentCount { .. })
    }
}

/// OS error number, or `-` when the error did not come from the OS.
fn os_error_code(err: &io::Error) -> String {
    err.raw_os_error()
        .map(|code| code.to_string())
        .unwrap_or_else(|| "-".to_string())
}
