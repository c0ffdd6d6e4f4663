//! Terminal capability detection.
//!
//! Answers two questions about an output sink: which raw OS descriptor backs it, and
//! whether that descriptor is an interactive terminal. Sinks that are not backed by a
//! descriptor (in-memory buffers) report descriptor `0` and no terminal.

use std::fs::File;
use std::io::{Cursor, IsTerminal, Stderr, Stdout, Write};

/// Raw descriptor and interactivity of an output sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TerminalInfo {
    /// Platform descriptor (unix fd, windows handle value); 0 when there is none
    pub fd: u64,
    /// Whether the descriptor is attached to an interactive terminal
    pub is_terminal: bool,
}

impl TerminalInfo {
    pub fn new(fd: u64, is_terminal: bool) -> Self {
        Self { fd, is_terminal }
    }
}

/// A byte sink that termout can write through.
///
/// Implementors backed by a real file or device override [`OutputStream::terminal_info`];
/// the default reports no descriptor and no terminal.
pub trait OutputStream: Write + Send + 'static {
    fn terminal_info(&self) -> TerminalInfo {
        TerminalInfo::default()
    }
}

/// Detect the terminal capabilities of `sink`.
///
/// Never fails and has no side effects; repeated calls on the same sink agree.
pub fn terminal_info<S: OutputStream + ?Sized>(sink: &S) -> TerminalInfo {
    sink.terminal_info()
}

#[cfg(unix)]
fn raw_descriptor<T: std::os::fd::AsRawFd>(stream: &T) -> u64 {
    stream.as_raw_fd() as u64
}

#[cfg(windows)]
fn raw_descriptor<T: std::os::windows::io::AsRawHandle>(stream: &T) -> u64 {
    stream.as_raw_handle() as usize as u64
}

#[cfg(not(any(unix, windows)))]
fn raw_descriptor<T>(_stream: &T) -> u64 {
    0
}

impl OutputStream for Stdout {
    fn terminal_info(&self) -> TerminalInfo {
        TerminalInfo::new(raw_descriptor(self), self.is_terminal())
    }
}

impl OutputStream for Stderr {
    fn terminal_info(&self) -> TerminalInfo {
        TerminalInfo::new(raw_descriptor(self), self.is_terminal())
    }
}

impl OutputStream for File {
    fn terminal_info(&self) -> TerminalInfo {
        TerminalInfo::new(raw_descriptor(self), self.is_terminal())
    }
}

impl OutputStream for Vec<u8> {}

impl OutputStream for Cursor<Vec<u8>> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_sink_is_not_a_terminal() {
        let buffer: Vec<u8> = Vec::new();

        for _ in 0..3 {
            assert_eq!(terminal_info(&buffer), TerminalInfo::new(0, false));
        }

        let cursor = Cursor::new(Vec::new());
        assert_eq!(terminal_info(&cursor), TerminalInfo::default());
    }

    #[test]
    fn regular_file_has_descriptor_but_no_terminal() {
        let file = tempfile::tempfile().expect("create temp file");

        let first = terminal_info(&file);
        let second = terminal_info(&file);

        assert!(!first.is_terminal);
        #[cfg(unix)]
        assert_ne!(first.fd, 0);
        assert_eq!(first, second);
    }

    #[test]
    fn stdout_detection_is_stable() {
        let stdout = std::io::stdout();
        assert_eq!(terminal_info(&stdout), terminal_info(&stdout));
        #[cfg(unix)]
        assert_eq!(terminal_info(&stdout).fd, 1);
    }
}
