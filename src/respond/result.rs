//! Handler result types.

use crate::error::{Result, TermoutError};
use futures::stream::{Stream, StreamExt};
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio_stream::wrappers::UnboundedReceiverStream;

/// What a command handler produced.
#[derive(Debug)]
pub enum CommandResult {
    /// A single value, written as one line
    Scalar(String),
    /// Lines produced concurrently, written as they arrive
    Stream(ResultStream),
}

impl CommandResult {
    /// Scalar result from anything displayable.
    pub fn scalar(value: impl fmt::Display) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for CommandResult {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<&str> for CommandResult {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<ResultStream> for CommandResult {
    fn from(stream: ResultStream) -> Self {
        Self::Stream(stream)
    }
}

/// Single-consumer stream of whole lines, finished when its producer closes it.
pub struct ResultStream {
    inner: Pin<Box<dyn Stream<Item = String> + Send>>,
}

impl ResultStream {
    /// Create a connected producer/consumer pair backed by an unbounded channel.
    pub fn channel() -> (LineSender, ResultStream) {
        let (tx, rx) = mpsc::unbounded_channel();
        let stream = Self::from_stream(UnboundedReceiverStream::new(rx));
        (LineSender { tx }, stream)
    }

    /// Adapt any line stream; it is closed when the stream ends.
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = String> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }

    /// Wait for the next line; `None` once the producer has closed the stream.
    pub async fn next_line(&mut self) -> Option<String> {
        self.inner.next().await
    }
}

impl Stream for ResultStream {
    type Item = String;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<String>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl fmt::Debug for ResultStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultStream").finish_non_exhaustive()
    }
}

/// Producer half of [`ResultStream::channel`].
///
/// Not `Clone`: a stream has exactly one producer. Dropping the sender closes the stream.
#[derive(Debug)]
pub struct LineSender {
    tx: UnboundedSender<String>,
}

impl LineSender {
    /// Queue one line for the consumer.
    pub fn send(&self, line: impl Into<String>) -> Result<()> {
        self.tx
            .send(line.into())
            .map_err(|_| TermoutError::StreamClosed)
    }

    /// Signal that no more lines follow.
    pub fn close(self) {
        drop(self);
    }

    /// Whether the consumer has gone away.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
