//! Renderers for recorded snapshot sequences.

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use super::format::{FrameStyle, write_frame};
use super::recorder::Snapshot;

/// Consumer of a finished snapshot sequence.
///
/// Implementations display or export frames; they receive the sequence by
/// shared reference and cannot modify it.
pub trait Renderer {
    type Error;

    fn render(&mut self, snapshots: &[Snapshot]) -> Result<(), Self::Error>;
}

/// Default delay between frames, matching a 20 fps animation.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(50);

/// Plays snapshots as text frames on a writer.
///
/// Usage:
/// ```ignore
/// let run = engine.run(None)?;
/// TerminalPlayer::stdout().render(&run.snapshots)?;
/// ```
pub struct TerminalPlayer<W: Write> {
    writer: W,
    style: FrameStyle,
    frame_delay: Duration,
    clear_screen: bool,
}

impl TerminalPlayer<Stdout> {
    /// Player on stdout that clears the screen between frames.
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
            style: FrameStyle::default(),
            frame_delay: DEFAULT_FRAME_DELAY,
            clear_screen: true,
        }
    }
}

impl<W: Write> TerminalPlayer<W> {
    /// Player on an arbitrary writer with no delay and no screen clearing.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            style: FrameStyle::default(),
            frame_delay: Duration::ZERO,
            clear_screen: false,
        }
    }

    pub fn with_style(mut self, style: FrameStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }

    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TerminalPlayer<W> {
    type Error = io::Error;

    fn render(&mut self, snapshots: &[Snapshot]) -> io::Result<()> {
        let count = snapshots.len();
        for (i, snapshot) in snapshots.iter().enumerate() {
            if self.clear_screen {
                // ANSI: clear screen, cursor home
                self.writer.write_all(b"\x1b[2J\x1b[H")?;
            }
            writeln!(self.writer, "frame {}/{}", i + 1, count)?;
            write_frame(&mut self.writer, snapshot, &self.style)?;
            self.writer.flush()?;

            if !self.frame_delay.is_zero() && i + 1 < count {
                thread::sleep(self.frame_delay);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{Lattice, Spin};

    #[test]
    fn test_render_frames() {
        let snapshots = vec![
            Snapshot::capture(&Lattice::filled(1, 3, Spin::Zero)),
            Snapshot::capture(&Lattice::from_rows(&[[1u8, 0, 1]]).unwrap()),
        ];

        let mut player = TerminalPlayer::new(Vec::new());
        player.render(&snapshots).unwrap();
        let out = String::from_utf8(player.into_inner()).unwrap();

        assert_eq!(out, "frame 1/2\n...\nframe 2/2\n#.#\n");
    }

    #[test]
    fn test_render_clear_and_style() {
        let snapshots = vec![Snapshot::capture(&Lattice::filled(1, 2, Spin::One))];
        let mut player = TerminalPlayer::new(Vec::new())
            .with_clear_screen(true)
            .with_style(FrameStyle { zero: '0', one: '1' });
        player.render(&snapshots).unwrap();
        let out = String::from_utf8(player.into_inner()).unwrap();

        assert_eq!(out, "\x1b[2J\x1b[Hframe 1/1\n11\n");
    }

    #[test]
    fn test_render_nothing() {
        let mut player = TerminalPlayer::new(Vec::new());
        player.render(&[]).unwrap();
        assert!(player.into_inner().is_empty());
    }

    #[test]
    fn test_frame_delay_between_frames() {
        let frame = Snapshot::capture(&Lattice::filled(1, 1, Spin::Zero));
        let snapshots = vec![frame.clone(), frame.clone(), frame];
        let mut player = TerminalPlayer::new(Vec::new()).with_frame_delay(Duration::from_millis(5));

        let start = std::time::Instant::now();
        player.render(&snapshots).unwrap();
        // Two gaps for three frames; no sleep after the last one.
        assert!(start.elapsed() >= Duration::from_millis(10));
        assert_eq!(player.into_inner().iter().filter(|&&b| b == b'\n').count(), 6);
    }
}
