//! # termout - Terminal Output Layer for Command-Line Applications
//!
//! Renders ANSI control sequences, draws progress indicators, and writes command
//! results (single values or live streams of lines) to standard output and error.
//!
//! ## Features
//!
//! - **Capability Detection**: Knows whether a sink is an interactive terminal
//! - **Escape Sequences**: Cursor, line, screen and mode control, one write per operation
//! - **Progress Indicators**: Bounded progress bar and task-driven spinner
//! - **Streamed Results**: Lines produced concurrently are written in arrival order
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`terminal`] - Capability detection, output handle and control sequences
//! - [`progress`] - Progress bar and spinner
//! - [`respond`] - Handler results and the responder that writes them
//!
//! Every component writes through an explicit [`Output`], so tests can swap the
//! process streams for in-memory buffers.

// Core modules
pub mod error;
pub mod terminal;

// Components built on the terminal layer
pub mod progress;
pub mod respond;

// Re-export commonly used types for convenience
pub use error::{Result, TermoutError};

// Public API surface for external usage
pub use progress::{ProgressBar, Spinner};
pub use respond::{CommandResult, LineSender, Responder, ResultStream};
pub use terminal::{terminal_info, ControlSequence, Output, OutputStream, TerminalInfo};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
