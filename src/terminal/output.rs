//! Shared output handle.
//!
//! [`Output`] owns a sink together with the [`TerminalInfo`] detected when it was built.
//! Clones share the same sink, so a background indicator task and its owner write
//! through one lock. The lock serializes whole writes only: keeping cursor-relative
//! writes from different callers apart while an indicator runs is up to the caller.

use crate::error::{Result, TermoutError};
use crate::terminal::detect::{terminal_info, OutputStream, TerminalInfo};
use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::Arc;

/// Output sink plus its terminal capabilities.
pub struct Output<W: OutputStream = Stdout> {
    sink: Arc<Mutex<W>>,
    info: TerminalInfo,
}

impl Output<Stdout> {
    /// Output bound to the process standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Output<Stderr> {
    /// Output bound to the process standard error.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: OutputStream> Output<W> {
    /// Wrap `sink`, detecting its terminal capabilities once.
    pub fn new(sink: W) -> Self {
        let info = terminal_info(&sink);
        Self {
            sink: Arc::new(Mutex::new(sink)),
            info,
        }
    }

    pub fn terminal_info(&self) -> TerminalInfo {
        self.info
    }

    pub fn is_terminal(&self) -> bool {
        self.info.is_terminal
    }

    pub fn fd(&self) -> u64 {
        self.info.fd
    }

    /// Terminal dimensions as `(columns, rows)`, or `None` when the sink is not a terminal.
    pub fn size(&self) -> Option<(u16, u16)> {
        if !self.info.is_terminal {
            return None;
        }
        crossterm::terminal::size().ok()
    }

    /// Lock the underlying sink.
    pub fn sink(&self) -> MutexGuard<'_, W> {
        self.sink.lock()
    }

    /// Write `text` as-is.
    pub fn print(&self, text: impl fmt::Display) -> Result<()> {
        self.write_str(&text.to_string())
    }

    /// Write `text` followed by a newline, in one write.
    pub fn println(&self, text: impl fmt::Display) -> Result<()> {
        self.write_str(&format!("{text}\n"))
    }

    /// Write an already composed string in a single `write_all` and flush.
    pub(crate) fn write_str(&self, composed: &str) -> Result<()> {
        let mut sink = self.sink.lock();
        sink.write_all(composed.as_bytes())
            .map_err(|e| TermoutError::io("writing to output sink", e))?;
        sink.flush()
            .map_err(|e| TermoutError::io("flushing output sink", e))
    }
}

impl<W: OutputStream> Clone for Output<W> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            info: self.info,
        }
    }
}

impl<W: OutputStream> fmt::Debug for Output<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").field("info", &self.info).finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory sink that records every `write` call separately.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub writes: Vec<Vec<u8>>,
        pub fail: bool,
    }

    impl Write for RecordingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.writes.push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl OutputStream for RecordingSink {}

    pub(crate) fn contents(output: &Output<Vec<u8>>) -> String {
        String::from_utf8(output.sink().clone()).expect("utf-8 output")
    }

    #[test]
    fn println_appends_newline() {
        let output = Output::new(Vec::new());
        output.println("hello").unwrap();
        output.print(42).unwrap();
        assert_eq!(contents(&output), "hello\n42");
    }

    #[test]
    fn println_is_a_single_write() {
        let output = Output::new(RecordingSink::default());
        output.println(format_args!("{} {}", "two", "parts")).unwrap();

        let sink = output.sink();
        assert_eq!(sink.writes.len(), 1);
        assert_eq!(sink.writes[0], b"two parts\n");
    }

    #[test]
    fn clones_share_the_sink() {
        let output = Output::new(Vec::new());
        let clone = output.clone();
        clone.print("from clone").unwrap();
        assert_eq!(contents(&output), "from clone");
    }

    #[test]
    fn in_memory_output_has_no_terminal() {
        let output = Output::new(Vec::new());
        assert!(!output.is_terminal());
        assert_eq!(output.fd(), 0);
        assert_eq!(output.size(), None);
    }

    #[test]
    fn write_failure_is_propagated() {
        let output = Output::new(RecordingSink {
            fail: true,
            ..Default::default()
        });
        let err = output.println("lost").unwrap_err();
        match err {
            TermoutError::Io { message, source } => {
                assert_eq!(message, "writing to output sink");
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("Expected Io variant, got {other:?}"),
        }
    }
}
