//! ANSI control sequence templates.
//!
//! Each [`ControlSequence`] renders through `Display` to exactly one sequence: the CSI or
//! OSC introducer, the positional parameters in order, then the terminator.

use std::fmt;

/// Escape character.
pub const ESC: char = '\x1b';
/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Operating System Command introducer.
pub const OSC: &str = "\x1b]";

/// Parameter for erase-display and erase-line that covers the whole area.
pub(crate) const ERASE_ALL: u16 = 2;

/// A single terminal control sequence and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSequence<'a> {
    /// `CSI row;col H`
    CursorPosition { row: u16, column: u16 },
    /// `CSI n A`
    CursorUp(u16),
    /// `CSI n B`
    CursorDown(u16),
    /// `CSI n C`
    CursorForward(u16),
    /// `CSI n D`
    CursorBack(u16),
    /// `CSI n E`
    CursorNextLine(u16),
    /// `CSI n F`
    CursorPreviousLine(u16),
    /// `CSI s`
    SaveCursorPosition,
    /// `CSI u`
    RestoreCursorPosition,
    /// `CSI n J`
    EraseDisplay(u16),
    /// `CSI n K`
    EraseLine(u16),
    /// `CSI 0K`
    EraseLineRight,
    /// `CSI 1K`
    EraseLineLeft,
    /// `CSI 2K`
    EraseEntireLine,
    /// `CSI top;bottom r`
    ChangeScrollingRegion { top: u16, bottom: u16 },
    /// `CSI n L`
    InsertLines(u16),
    /// `CSI n M`
    DeleteLines(u16),
    /// `CSI ?47h`
    SaveScreen,
    /// `CSI ?47l`
    RestoreScreen,
    /// `CSI ?1049h`
    AltScreen,
    /// `CSI ?1049l`
    ExitAltScreen,
    /// `CSI ?2004h`
    EnableBracketedPaste,
    /// `CSI ?2004l`
    DisableBracketedPaste,
    /// `CSI ?25h`
    ShowCursor,
    /// `CSI ?25l`
    HideCursor,
    /// `CSI 0m`
    ResetStyle,
    /// `OSC 2;title`
    SetWindowTitle(&'a str),
}

impl fmt::Display for ControlSequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CursorPosition { row, column } => write!(f, "{CSI}{row};{column}H"),
            Self::CursorUp(n) => write!(f, "{CSI}{n}A"),
            Self::CursorDown(n) => write!(f, "{CSI}{n}B"),
            Self::CursorForward(n) => write!(f, "{CSI}{n}C"),
            Self::CursorBack(n) => write!(f, "{CSI}{n}D"),
            Self::CursorNextLine(n) => write!(f, "{CSI}{n}E"),
            Self::CursorPreviousLine(n) => write!(f, "{CSI}{n}F"),
            Self::SaveCursorPosition => write!(f, "{CSI}s"),
            Self::RestoreCursorPosition => write!(f, "{CSI}u"),
            Self::EraseDisplay(n) => write!(f, "{CSI}{n}J"),
            Self::EraseLine(n) => write!(f, "{CSI}{n}K"),
            Self::EraseLineRight => write!(f, "{CSI}0K"),
            Self::EraseLineLeft => write!(f, "{CSI}1K"),
            Self::EraseEntireLine => write!(f, "{CSI}2K"),
            Self::ChangeScrollingRegion { top, bottom } => write!(f, "{CSI}{top};{bottom}r"),
            Self::InsertLines(n) => write!(f, "{CSI}{n}L"),
            Self::DeleteLines(n) => write!(f, "{CSI}{n}M"),
            Self::SaveScreen => write!(f, "{CSI}?47h"),
            Self::RestoreScreen => write!(f, "{CSI}?47l"),
            Self::AltScreen => write!(f, "{CSI}?1049h"),
            Self::ExitAltScreen => write!(f, "{CSI}?1049l"),
            Self::EnableBracketedPaste => write!(f, "{CSI}?2004h"),
            Self::DisableBracketedPaste => write!(f, "{CSI}?2004l"),
            Self::ShowCursor => write!(f, "{CSI}?25h"),
            Self::HideCursor => write!(f, "{CSI}?25l"),
            Self::ResetStyle => write!(f, "{CSI}0m"),
            Self::SetWindowTitle(title) => write!(f, "{OSC}2;{title}"),
        }
    }
}
