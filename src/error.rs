//! Error types and handling infrastructure for termout.
//!
//! This module provides a centralized error type using `thiserror`. Library code
//! returns [`Result`]; the demo binary wraps it with `anyhow` for context.
//!
//! ## Design Principles
//!
//! - **Propagate sink failures unmodified**: a failed write is never retried or swallowed
//! - **Capability detection never fails**: a missing terminal is a `false`, not an error
//! - **Consistency**: Standardized Result type across all modules

use thiserror::Error;

/// The main error type for termout operations.
#[derive(Error, Debug)]
pub enum TermoutError {
    /// Writing or flushing the output sink failed
    #[error("Output operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A caller supplied a value the operation cannot work with
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A background task could not be started
    #[error("Runtime unavailable: {message}")]
    Runtime { message: String },

    /// A background task panicked or was cancelled before it acknowledged shutdown
    #[error("Background task failed: {message}")]
    Task { message: String },

    /// The consumer side of a result stream is gone
    #[error("Result stream is closed")]
    StreamClosed,
}

/// Standard Result type for termout operations.
pub type Result<T> = std::result::Result<T, TermoutError>;

impl TermoutError {
    /// Create an Io error from an io::Error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a Runtime error with a descriptive message
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }

    /// Create a Task error with a descriptive message
    pub fn task(message: impl Into<String>) -> Self {
        Self::Task {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for TermoutError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::BrokenPipe => Self::Io {
                message: "Broken pipe".to_string(),
                source: err,
            },
            std::io::ErrorKind::WriteZero => Self::Io {
                message: "Sink accepted no bytes".to_string(),
                source: err,
            },
            _ => Self::Io {
                message: "Write failed".to_string(),
                source: err,
            },
        }
    }
}

impl From<tokio::task::JoinError> for TermoutError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            Self::task("task panicked")
        } else {
            Self::task("task was cancelled")
        }
    }
}
