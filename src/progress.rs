//! Progress indicators drawn with the escape-sequence writer.
//!
//! - [`ProgressBar`] - bounded, advanced explicitly by the caller
//! - [`Spinner`] - unbounded, animated by a background Tokio task

pub mod bar;
pub mod spinner;

pub use bar::ProgressBar;
pub use spinner::Spinner;
