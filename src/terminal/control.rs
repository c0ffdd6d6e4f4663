//! Escape-sequence writer.
//!
//! Cursor, line, screen and mode operations on [`Output`]. Every operation composes its
//! full sequence first and hands it to the sink in one write. Nothing is gated on
//! [`Output::is_terminal`]: callers decide whether to draw.

use crate::error::Result;
use crate::terminal::detect::OutputStream;
use crate::terminal::output::Output;
use crate::terminal::sequence::{ControlSequence, ERASE_ALL};

impl<W: OutputStream> Output<W> {
    /// Write one control sequence.
    pub fn write_sequence(&self, sequence: ControlSequence<'_>) -> Result<()> {
        self.write_str(&sequence.to_string())
    }

    /// Reset all text attributes to the terminal default.
    pub fn reset(&self) -> Result<()> {
        self.write_sequence(ControlSequence::ResetStyle)
    }

    pub fn save_screen(&self) -> Result<()> {
        self.write_sequence(ControlSequence::SaveScreen)
    }

    pub fn restore_screen(&self) -> Result<()> {
        self.write_sequence(ControlSequence::RestoreScreen)
    }

    /// Switch to the alternate screen buffer; [`Output::exit_alt_screen`] returns to the
    /// former view.
    pub fn alt_screen(&self) -> Result<()> {
        self.write_sequence(ControlSequence::AltScreen)
    }

    pub fn exit_alt_screen(&self) -> Result<()> {
        self.write_sequence(ControlSequence::ExitAltScreen)
    }

    /// Erase the visible screen and home the cursor to (1, 1).
    pub fn clear_screen(&self) -> Result<()> {
        let composed = format!(
            "{}{}",
            ControlSequence::EraseDisplay(ERASE_ALL),
            ControlSequence::CursorPosition { row: 1, column: 1 }
        );
        self.write_str(&composed)
    }

    /// Move the cursor to a 1-based `row` and `column`.
    pub fn move_cursor(&self, row: u16, column: u16) -> Result<()> {
        self.write_sequence(ControlSequence::CursorPosition { row, column })
    }

    pub fn hide_cursor(&self) -> Result<()> {
        self.write_sequence(ControlSequence::HideCursor)
    }

    pub fn show_cursor(&self) -> Result<()> {
        self.write_sequence(ControlSequence::ShowCursor)
    }

    pub fn save_cursor_position(&self) -> Result<()> {
        self.write_sequence(ControlSequence::SaveCursorPosition)
    }

    pub fn restore_cursor_position(&self) -> Result<()> {
        self.write_sequence(ControlSequence::RestoreCursorPosition)
    }

    pub fn cursor_up(&self, n: u16) -> Result<()> {
        self.write_sequence(ControlSequence::CursorUp(n))
    }

    pub fn cursor_down(&self, n: u16) -> Result<()> {
        self.write_sequence(ControlSequence::CursorDown(n))
    }

    pub fn cursor_forward(&self, n: u16) -> Result<()> {
        self.write_sequence(ControlSequence::CursorForward(n))
    }

    pub fn cursor_back(&self, n: u16) -> Result<()> {
        self.write_sequence(ControlSequence::CursorBack(n))
    }

    /// Move down `n` lines, to the start of the line.
    pub fn cursor_next_line(&self, n: u16) -> Result<()> {
        self.write_sequence(ControlSequence::CursorNextLine(n))
    }

    /// Move up `n` lines, to the start of the line.
    pub fn cursor_prev_line(&self, n: u16) -> Result<()> {
        self.write_sequence(ControlSequence::CursorPreviousLine(n))
    }

    pub fn clear_line(&self) -> Result<()> {
        self.write_sequence(ControlSequence::EraseEntireLine)
    }

    pub fn clear_line_left(&self) -> Result<()> {
        self.write_sequence(ControlSequence::EraseLineLeft)
    }

    pub fn clear_line_right(&self) -> Result<()> {
        self.write_sequence(ControlSequence::EraseLineRight)
    }

    /// Erase the current line and the `n` lines above it, leaving the cursor on the
    /// topmost erased line.
    pub fn clear_lines(&self, n: u16) -> Result<()> {
        self.write_str(&clear_lines_sequence(n))
    }

    /// Restrict scrolling to rows `top..=bottom`.
    pub fn change_scrolling_region(&self, top: u16, bottom: u16) -> Result<()> {
        self.write_sequence(ControlSequence::ChangeScrollingRegion { top, bottom })
    }

    /// Insert `n` blank lines at the cursor, pushing the rest of the scrolling region down.
    pub fn insert_lines(&self, n: u16) -> Result<()> {
        self.write_sequence(ControlSequence::InsertLines(n))
    }

    /// Delete `n` lines at the cursor, pulling the rest of the scrolling region up.
    pub fn delete_lines(&self, n: u16) -> Result<()> {
        self.write_sequence(ControlSequence::DeleteLines(n))
    }

    pub fn set_window_title(&self, title: &str) -> Result<()> {
        self.write_sequence(ControlSequence::SetWindowTitle(title))
    }

    pub fn enable_bracketed_paste(&self) -> Result<()> {
        self.write_sequence(ControlSequence::EnableBracketedPaste)
    }

    pub fn disable_bracketed_paste(&self) -> Result<()> {
        self.write_sequence(ControlSequence::DisableBracketedPaste)
    }
}

/// Erase current line, then `n` times {up one line, erase}.
pub(crate) fn clear_lines_sequence(n: u16) -> String {
    let clear_line = ControlSequence::EraseLine(ERASE_ALL).to_string();
    let cursor_up = ControlSequence::CursorUp(1).to_string();

    let above = format!("{cursor_up}{clear_line}").repeat(usize::from(n));
    clear_line + &above
}
