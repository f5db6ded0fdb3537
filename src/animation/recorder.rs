//! Snapshot recorder for capturing lattice states during a run.

use std::ops::Deref;

use crate::compute::Lattice;

/// Monte Carlo steps between captured snapshots.
pub const SNAPSHOT_INTERVAL_MCS: u64 = 10;

/// Immutable copy of a lattice at one instant.
///
/// Owns its own storage, so later mutation of the live lattice never shows up
/// in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    lattice: Lattice,
}

impl Snapshot {
    /// Copy the current state of `lattice`.
    pub fn capture(lattice: &Lattice) -> Self {
        Self {
            lattice: lattice.clone(),
        }
    }

    /// The captured lattice.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Take ownership of the captured lattice.
    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }
}

impl Deref for Snapshot {
    type Target = Lattice;

    fn deref(&self) -> &Lattice {
        &self.lattice
    }
}

/// Collects snapshots at a fixed cadence of attempted updates.
///
/// Usage:
/// ```ignore
/// let mut recorder = SnapshotRecorder::new(lattice.len());
/// recorder.capture(&lattice);
/// for attempted in 1..=total {
///     engine.step(&mut lattice)?;
///     recorder.record_update(attempted, &lattice);
/// }
/// let snapshots = recorder.finish();
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotRecorder {
    /// Attempted updates between captures (0 disables periodic capture).
    interval: u64,
    snapshots: Vec<Snapshot>,
}

impl SnapshotRecorder {
    /// Recorder capturing every [`SNAPSHOT_INTERVAL_MCS`] Monte Carlo steps
    /// for a lattice of `sites` sites.
    pub fn new(sites: usize) -> Self {
        Self::with_interval_mcs(sites, SNAPSHOT_INTERVAL_MCS)
    }

    /// Recorder capturing every `interval_mcs` Monte Carlo steps.
    pub fn with_interval_mcs(sites: usize, interval_mcs: u64) -> Self {
        Self {
            interval: interval_mcs * sites as u64,
            snapshots: Vec::new(),
        }
    }

    /// Attempted updates between periodic captures.
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Capture unconditionally.
    pub fn capture(&mut self, lattice: &Lattice) -> &Snapshot {
        self.snapshots.push(Snapshot::capture(lattice));
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Notify the recorder that `attempted` updates have completed.
    ///
    /// Returns true if a snapshot was captured.
    pub fn record_update(&mut self, attempted: u64, lattice: &Lattice) -> bool {
        if self.interval == 0 || attempted % self.interval != 0 {
            return false;
        }
        self.capture(lattice);
        true
    }

    /// Snapshots captured so far.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Hand the ordered snapshot sequence to the caller.
    pub fn finish(self) -> Vec<Snapshot> {
        self.snapshots
    }
}
