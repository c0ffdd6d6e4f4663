//! Animated spinner backed by a Tokio task.
//!
//! A running spinner owns one background task that redraws the glyph on every tick.
//! Shutdown goes through a `watch` channel and [`Spinner::stop`] then awaits the task's
//! `JoinHandle`, so once `stop` returns the task has exited and cannot draw again.

use crate::error::{Result, TermoutError};
use crate::terminal::{ControlSequence, Output, OutputStream};
use std::io::Stdout;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

const DOT_FRAMES: &[&str] = &["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "];
const PULSE_FRAMES: &[&str] = &["█", "▓", "▒", "░"];
const GLOBE_FRAMES: &[&str] = &["🌍", "🌎", "🌏"];

const DOT_INTERVAL: Duration = Duration::from_millis(100);
const PULSE_INTERVAL: Duration = Duration::from_millis(250);
const GLOBE_INTERVAL: Duration = Duration::from_millis(250);

pub struct Spinner<W: OutputStream = Stdout> {
    output: Output<W>,
    frames: &'static [&'static str],
    interval: Duration,
    frame: usize,
    task: Option<SpinnerTask>,
}

/// Handles of a running spinner task.
struct SpinnerTask {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<Result<usize>>,
}

impl<W: OutputStream> Spinner<W> {
    /// Create a stopped spinner cycling through `frames` once per `interval`.
    pub fn new(
        output: Output<W>,
        frames: &'static [&'static str],
        interval: Duration,
    ) -> Result<Self> {
        if frames.is_empty() {
            return Err(TermoutError::invalid_argument(
                "spinner needs at least one frame",
            ));
        }
        if interval.is_zero() {
            return Err(TermoutError::invalid_argument(
                "spinner interval must be non-zero",
            ));
        }
        Ok(Self::from_parts(output, frames, interval))
    }

    /// Braille dots, ten frames per second.
    pub fn dots(output: Output<W>) -> Self {
        Self::from_parts(output, DOT_FRAMES, DOT_INTERVAL)
    }

    /// Shaded blocks, four frames per second.
    pub fn pulse(output: Output<W>) -> Self {
        Self::from_parts(output, PULSE_FRAMES, PULSE_INTERVAL)
    }

    /// Rotating globe, four frames per second.
    pub fn globe(output: Output<W>) -> Self {
        Self::from_parts(output, GLOBE_FRAMES, GLOBE_INTERVAL)
    }

    fn from_parts(output: Output<W>, frames: &'static [&'static str], interval: Duration) -> Self {
        Self {
            output,
            frames,
            interval,
            frame: 0,
            task: None,
        }
    }

    /// Start animating. Does nothing if the spinner is already running.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spin(&mut self) -> Result<()> {
        if self.task.is_some() {
            return Ok(());
        }

        let runtime = Handle::try_current().map_err(|e| TermoutError::runtime(e.to_string()))?;
        let (shutdown, signal) = watch::channel(false);
        let handle = runtime.spawn(spin_loop(
            self.output.clone(),
            self.frames,
            self.interval,
            self.frame,
            signal,
        ));

        log::debug!(
            "spinner started with {} frames every {:?}",
            self.frames.len(),
            self.interval
        );
        self.task = Some(SpinnerTask { shutdown, handle });
        Ok(())
    }

    /// Stop animating and clear the spinner's line.
    ///
    /// Waits for the background task to exit before clearing, so no frame is drawn after
    /// this returns. Stopping a stopped spinner does nothing. A write failure inside the
    /// task is reported here.
    pub async fn stop(&mut self) -> Result<()> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };

        // The task may already have exited on a write error, dropping the receiver.
        let _ = task.shutdown.send(true);
        self.frame = task.handle.await??;

        log::debug!("spinner stopped at frame {}", self.frame);
        self.output
            .print(format_args!("\r{}", ControlSequence::EraseEntireLine))
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Index of the next frame to draw.
    pub fn frame(&self) -> usize {
        self.frame
    }
}

impl<W: OutputStream> Drop for Spinner<W> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            log::warn!("spinner dropped while running, aborting its task");
            let _ = task.shutdown.send(true);
            task.handle.abort();
        }
    }
}

/// Redraw loop; returns the next frame index once shutdown is observed.
async fn spin_loop<W: OutputStream>(
    output: Output<W>,
    frames: &'static [&'static str],
    interval: Duration,
    mut frame: usize,
    mut shutdown: watch::Receiver<bool>,
) -> Result<usize> {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            _ = ticker.tick() => {
                output.print(format_args!(
                    "\r{}{}",
                    ControlSequence::EraseEntireLine,
                    frames[frame]
                ))?;
                frame = (frame + 1) % frames.len();
            }
        }
    }

    Ok(frame)
}
