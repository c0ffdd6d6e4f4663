//! Terminal subsystem: capability detection, the shared output handle, and the
//! escape-sequence catalog written through it.

pub mod control;
pub mod detect;
pub mod output;
pub mod sequence;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::terminal` rather than reaching into submodules.
pub use detect::{terminal_info, OutputStream, TerminalInfo};
pub use output::Output;
pub use sequence::{ControlSequence, CSI, ESC, OSC};
