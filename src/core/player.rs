//! Frame loop that turns an encoded animation into paced terminal output.
//!
//! Input is a flat byte blob of rows. Non-empty rows are decoded and printed;
//! an empty row ends the current frame, which flushes, waits one frame delay
//! and clears the screen before the next frame's rows are printed.

use std::io;
use std::time::Duration;

use crate::common::{FrameRate, Result};
use crate::core::decoder::DecodeBuffer;

/// Output side of the player.
pub trait Screen {
    /// Clear the whole screen and home the cursor.
    fn clear(&mut self) -> io::Result<()>;

    /// Write one decoded row followed by a newline.
    fn write_row(&mut self, row: &[u8]) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// Blocking delay between frames.
pub trait Pacer {
    fn pause(&mut self, delay: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Where the frame loop currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing played yet
    Ready,
    /// Printing rows of the current frame
    AccumulatingFrameLines,
    /// Flushing and waiting out the frame delay
    FrameBoundary,
    /// End of input reached and the last frame paced
    Finished,
}

/// Counters collected during one playback. Diagnostic only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Frame boundaries crossed (empty rows seen)
    pub frames: usize,
    /// Rows decoded and printed
    pub rows: usize,
    /// Rows cut off at the decode buffer capacity
    pub truncated_rows: usize,
}

/// Split raw animation data into rows.
///
/// Rows end at `\n` with one trailing `\r` stripped. A final `\n` does not
/// produce an extra empty row, and empty input produces no rows at all.
pub fn frame_lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = if data.is_empty() {
        None
    } else {
        Some(data.strip_suffix(b"\n").unwrap_or(data))
    };

    body.into_iter()
        .flat_map(|body| body.split(|&b| b == b'\n'))
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

pub struct Player<S, P> {
    screen: S,
    pacer: P,
    frame_rate: FrameRate,
    buffer: DecodeBuffer,
    state: PlaybackState,
}

impl<S: Screen, P: Pacer> Player<S, P> {
    pub fn new(screen: S, pacer: P, frame_rate: FrameRate, buffer: DecodeBuffer) -> Self {
        Self {
            screen,
            pacer,
            frame_rate,
            buffer,
            state: PlaybackState::Ready,
        }
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[inline]
    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Play the whole animation once.
    ///
    /// The screen is cleared first. After the last row the output is flushed
    /// and one more frame delay is waited so the final frame stays visible.
    pub fn play(&mut self, data: &[u8]) -> Result<PlaybackSummary> {
        let delay = self.frame_rate.frame_delay();
        let mut summary = PlaybackSummary::default();

        tracing::debug!(fps = self.frame_rate.fps(), delay_ms = delay.as_millis() as u64, "starting playback");

        self.screen.clear()?;
        self.state = PlaybackState::AccumulatingFrameLines;

        for line in frame_lines(data) {
            if line.is_empty() {
                self.end_frame(delay)?;
                self.screen.clear()?;
                self.state = PlaybackState::AccumulatingFrameLines;
                summary.frames += 1;
                tracing::trace!(frame = summary.frames, "frame boundary");
                continue;
            }

            let row = self.buffer.decode(line);
            self.screen.write_row(row)?;
            summary.rows += 1;
            if self.buffer.is_truncated() {
                summary.truncated_rows += 1;
                tracing::debug!(row = summary.rows, "row clamped to buffer capacity");
            }
        }

        self.end_frame(delay)?;
        self.state = PlaybackState::Finished;

        tracing::debug!(
            frames = summary.frames,
            rows = summary.rows,
            truncated = summary.truncated_rows,
            "playback finished"
        );

        Ok(summary)
    }

    fn end_frame(&mut self, delay: Duration) -> Result<()> {
        self.state = PlaybackState::FrameBoundary;
        self.screen.flush()?;
        self.pacer.pause(delay);
        Ok(())
    }
}
