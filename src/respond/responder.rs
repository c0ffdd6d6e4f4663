//! Writes handler results to standard output and errors to standard error.
//!
//! The responder does not map errors to process exit codes; a handler error is only
//! rendered as text. Exit-status policy belongs to the caller and is not decided yet.

use crate::error::Result;
use crate::respond::result::{CommandResult, ResultStream};
use crate::terminal::{Output, OutputStream};
use std::fmt::Display;
use std::io::{Stderr, Stdout};

/// Renders a handler's `(value, error)` pair.
#[derive(Debug)]
pub struct Responder<O: OutputStream = Stdout, E: OutputStream = Stderr> {
    stdout: Output<O>,
    stderr: Output<E>,
}

impl Responder {
    /// Responder writing to the process standard output and error.
    pub fn new() -> Self {
        Self::with_outputs(Output::stdout(), Output::stderr())
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OutputStream, E: OutputStream> Clone for Responder<O, E> {
    fn clone(&self) -> Self {
        Self {
            stdout: self.stdout.clone(),
            stderr: self.stderr.clone(),
        }
    }
}

impl<O: OutputStream, E: OutputStream> Responder<O, E> {
    pub fn with_outputs(stdout: Output<O>, stderr: Output<E>) -> Self {
        Self { stdout, stderr }
    }

    /// Write `value` to stdout and `error` to stderr.
    ///
    /// The two are independent: a handler may return a partial value together with an
    /// error, and both are written, value first. A streamed value is drained line by line
    /// as it arrives and this only returns after the producer closes the stream.
    ///
    /// A failed stdout write does not stop the error from reaching stderr; the first
    /// failure is returned after both branches ran.
    pub async fn respond(
        &self,
        value: Option<CommandResult>,
        error: Option<&(dyn Display + Send + Sync)>,
    ) -> Result<()> {
        let written = match value {
            Some(CommandResult::Stream(stream)) => self.drain(stream).await,
            Some(CommandResult::Scalar(value)) => self.stdout.println(value),
            None => Ok(()),
        };

        if let Some(error) = error {
            self.stderr.println(error)?;
        }

        written
    }

    /// Consume `stream` until its producer closes it. After a failed write the remaining
    /// lines are discarded and the first failure is returned.
    async fn drain(&self, mut stream: ResultStream) -> Result<()> {
        let mut written = 0usize;
        let mut failure = None;
        while let Some(line) = stream.next_line().await {
            if failure.is_some() {
                continue;
            }
            match self.stdout.println(line) {
                Ok(()) => written += 1,
                Err(err) => failure = Some(err),
            }
        }
        log::debug!("result stream closed after {written} lines");
        failure.map_or(Ok(()), Err)
    }
}
