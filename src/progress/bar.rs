//! Bounded progress bar.
//!
//! The bar owns a total fixed at creation and a current value that only grows. Every
//! increment redraws the whole line synchronously:
//!
//! ```text
//! [██████████████                ] 46.667%
//! ```

use crate::error::{Result, TermoutError};
use crate::terminal::{ControlSequence, Output, OutputStream};
use std::io::Stdout;

/// Line width used when the sink is not a terminal.
const DEFAULT_WIDTH: usize = 120;
/// Fewest fill cells drawn regardless of width.
const MIN_CELLS: usize = 10;
/// Columns taken by `[`, `]`, the separating space and `100.000%`.
const DECORATION_WIDTH: usize = 11;

const FILLED: char = '█';
const EMPTY: char = ' ';

pub struct ProgressBar<W: OutputStream = Stdout> {
    output: Output<W>,
    current: u64,
    total: u64,
    width: usize,
}

impl<W: OutputStream> ProgressBar<W> {
    /// Create a bar counting up to `total`, sized to the terminal width when there is one.
    pub fn new(output: Output<W>, total: u64) -> Result<Self> {
        if total == 0 {
            return Err(TermoutError::invalid_argument(
                "progress bar total must be greater than zero",
            ));
        }

        let width = output
            .size()
            .map(|(columns, _)| usize::from(columns))
            .unwrap_or(DEFAULT_WIDTH);

        Ok(Self {
            output,
            current: 0,
            total,
            width,
        })
    }

    /// Override the line width used for rendering.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Advance by `delta` and redraw.
    ///
    /// Returns `Ok(true)` while the bar is still below its total. The call that reaches
    /// the total draws 100% and returns `Ok(false)`; later calls write nothing and also
    /// return `Ok(false)`.
    pub fn increment(&mut self, delta: u64) -> Result<bool> {
        if self.is_complete() {
            return Ok(false);
        }

        self.current = self.current.saturating_add(delta).min(self.total);
        self.redraw()?;

        Ok(!self.is_complete())
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.total
    }

    pub fn percent(&self) -> f64 {
        self.current as f64 * 100.0 / self.total as f64
    }

    fn redraw(&self) -> Result<()> {
        let mut frame = format!("\r{}{}", ControlSequence::EraseEntireLine, self.render());
        if self.is_complete() {
            frame.push('\n');
        }
        self.output.print(frame)
    }

    /// Render the bar body without any control sequences.
    pub fn render(&self) -> String {
        let cells = self.width.saturating_sub(DECORATION_WIDTH).max(MIN_CELLS);
        let filled = (u128::from(self.current) * cells as u128 / u128::from(self.total)) as usize;

        let mut line = String::with_capacity(cells * FILLED.len_utf8() + DECORATION_WIDTH);
        line.push('[');
        line.extend(std::iter::repeat(FILLED).take(filled));
        line.extend(std::iter::repeat(EMPTY).take(cells - filled));
        line.push(']');
        line.push_str(&format!(" {:.3}%", self.percent()));
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::output::tests::{contents, RecordingSink};
    use proptest::prelude::*;

    fn bar(total: u64) -> (Output<Vec<u8>>, ProgressBar<Vec<u8>>) {
        let output = Output::new(Vec::new());
        let bar = ProgressBar::new(output.clone(), total)
            .unwrap()
            .with_width(21);
        (output, bar)
    }

    #[test]
    fn zero_total_is_rejected() {
        let result = ProgressBar::new(Output::new(Vec::new()), 0);
        assert!(matches!(
            result,
            Err(TermoutError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn non_terminal_uses_default_width() {
        let mut bar = ProgressBar::new(Output::new(Vec::new()), 10).unwrap();
        bar.increment(10).unwrap();
        assert_eq!(bar.render().chars().count(), DEFAULT_WIDTH);
    }

    #[test]
    fn render_fills_proportionally() {
        let (_, mut bar) = bar(100);
        assert_eq!(bar.render(), "[          ] 0.000%");

        bar.increment(50).unwrap();
        assert_eq!(bar.render(), "[█████     ] 50.000%");

        bar.increment(50).unwrap();
        assert_eq!(bar.render(), "[██████████] 100.000%");
    }

    #[test]
    fn narrow_width_keeps_minimum_cells() {
        let (_, bar) = bar(3);
        let bar = bar.with_width(4);
        assert_eq!(bar.render(), "[          ] 0.000%");
    }

    #[test]
    fn increment_redraws_line_synchronously() {
        let (output, mut bar) = bar(4);

        assert!(bar.increment(1).unwrap());
        assert_eq!(contents(&output), "\r\x1b[2K[██        ] 25.000%");
    }

    #[test]
    fn reaching_total_returns_false_and_ends_line() {
        let (output, mut bar) = bar(100);

        let mut calls = 0;
        while bar.increment(10).unwrap() {
            calls += 1;
        }

        assert_eq!(calls, 9);
        assert_eq!(bar.current(), 100);
        assert!(contents(&output).ends_with("[██████████] 100.000%\n"));
    }

    #[test]
    fn increments_after_completion_are_noops() {
        let output = Output::new(RecordingSink::default());
        let mut bar = ProgressBar::new(output.clone(), 5).unwrap();

        assert!(!bar.increment(7).unwrap());
        assert_eq!(bar.current(), 5);
        assert!(!bar.increment(1).unwrap());
        assert!(!bar.increment(0).unwrap());

        assert_eq!(output.sink().writes.len(), 1);
    }

    #[test]
    fn overflowing_delta_is_clamped() {
        let (_, mut bar) = bar(10);
        bar.increment(3).unwrap();
        assert!(!bar.increment(u64::MAX).unwrap());
        assert_eq!(bar.current(), 10);
        assert!(bar.is_complete());
    }

    #[test]
    fn write_failure_is_propagated() {
        let output = Output::new(RecordingSink {
            fail: true,
            ..Default::default()
        });
        let mut bar = ProgressBar::new(output, 10).unwrap();
        assert!(bar.increment(1).is_err());
    }

    proptest! {
        #[test]
        fn current_never_exceeds_total(
            total in 1u64..500,
            deltas in proptest::collection::vec(0u64..120, 1..40),
        ) {
            let (_, mut bar) = bar(total);
            let mut cumulative = 0u64;
            let mut reached = false;

            for delta in deltas {
                let still_running = bar.increment(delta).unwrap();
                cumulative += delta;

                prop_assert!(bar.current() <= total);
                if reached {
                    prop_assert!(!still_running);
                } else if cumulative >= total {
                    prop_assert!(!still_running);
                    prop_assert_eq!(bar.current(), total);
                    reached = true;
                } else {
                    prop_assert!(still_running);
                    prop_assert_eq!(bar.current(), cumulative);
                }
            }
        }
    }
}
