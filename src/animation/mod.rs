//! Snapshot capture and playback for lattice simulations.
//!
//! The engine records independent copies of the lattice into a
//! [`SnapshotRecorder`]; the finished sequence is handed to any [`Renderer`]
//! for display. Renderers only ever see `&[Snapshot]`, so they cannot alter
//! what was recorded.
//!
//! # Frame Format
//!
//! [`TerminalPlayer`] draws one text frame per snapshot:
//!
//! ```text
//! frame 2/6
//! ..##..
//! .####.
//! ..##..
//! ```

mod format;
mod player;
mod recorder;

pub use format::{FrameStyle, format_frame, write_frame};
pub use player::{DEFAULT_FRAME_DELAY, Renderer, TerminalPlayer};
pub use recorder::{SNAPSHOT_INTERVAL_MCS, Snapshot, SnapshotRecorder};
