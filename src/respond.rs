//! Result responder subsystem.
//!
//! Command handlers hand back a [`CommandResult`] (a single value or a live
//! [`ResultStream`] of lines) and an optional error; the [`Responder`] writes both to
//! the right output streams.

pub mod responder;
pub mod result;

pub use responder::Responder;
pub use result::{CommandResult, LineSender, ResultStream};
