//! Simulation engine - Metropolis Monte Carlo driver.
//!
//! One Monte Carlo step (mcs) is `width * height` attempted single-site
//! updates. A run performs exactly `max_mcs * width * height` attempts,
//! capturing a snapshot before the first attempt and again after every
//! [`SNAPSHOT_INTERVAL_MCS`] completed steps.
//!
//! Each attempt consults the random source in a fixed order: site column,
//! site row, proposed spin, and only for a thermally activated move
//! (`delta_E > 0`, `T > 0`) the acceptance draw. Changing this order
//! changes the trajectory produced by a given seed.
//!
//! [`SNAPSHOT_INTERVAL_MCS`]: crate::animation::SNAPSHOT_INTERVAL_MCS

use log::{debug, info};
use rand::RngCore;
use rand::rngs::StdRng;

use crate::animation::{Snapshot, SnapshotRecorder};
use crate::schema::SimulationConfig;

use super::{Lattice, LatticeError, Metropolis, SpinRng, energy_delta};

/// Errors raised by a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("Cannot select a site on a {height}x{width} lattice")]
    InvalidDimensions { height: usize, width: usize },
    #[error("Initial lattice is {found_height}x{found_width}, expected {height}x{width}")]
    ShapeMismatch {
        height: usize,
        width: usize,
        found_height: usize,
        found_width: usize,
    },
    #[error(transparent)]
    Lattice(#[from] LatticeError),
}

/// Result of a single attempted update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Proposed spin equaled the current one; nothing was evaluated.
    Unchanged,
    /// Flip evaluated and rejected.
    Rejected,
    /// Flip evaluated and applied.
    Accepted,
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub attempted: u64,
    pub unchanged: u64,
    pub rejected: u64,
    pub accepted: u64,
}

impl RunStats {
    #[inline]
    fn record(&mut self, outcome: UpdateOutcome) {
        self.attempted += 1;
        match outcome {
            UpdateOutcome::Unchanged => self.unchanged += 1,
            UpdateOutcome::Rejected => self.rejected += 1,
            UpdateOutcome::Accepted => self.accepted += 1,
        }
    }

    /// Fraction of evaluated flips that were accepted.
    pub fn acceptance_ratio(&self) -> f64 {
        let evaluated = self.accepted + self.rejected;
        if evaluated == 0 {
            0.0
        } else {
            self.accepted as f64 / evaluated as f64
        }
    }
}

/// Progress report emitted after each periodic snapshot.
#[derive(Debug, Clone, Copy)]
pub struct RunProgress {
    /// Completed Monte Carlo steps.
    pub mcs: u64,
    /// Total Monte Carlo steps in the run.
    pub max_mcs: u64,
    /// Snapshots captured so far, including the initial one.
    pub snapshots: usize,
    pub stats: RunStats,
}

/// Output of a complete run.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Ordered snapshots; the first is the initial state.
    pub snapshots: Vec<Snapshot>,
    pub stats: RunStats,
}

/// Single-threaded Metropolis engine with an injected random source.
pub struct SimulationEngine<R: RngCore = StdRng> {
    config: SimulationConfig,
    metropolis: Metropolis,
    rng: SpinRng<R>,
}

impl SimulationEngine<StdRng> {
    /// Engine seeded from `config.rng_seed`, or from entropy if unset.
    pub fn from_config(config: SimulationConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => SpinRng::new(seed),
            None => SpinRng::from_entropy(),
        };
        Self::new(config, rng)
    }
}

impl<R: RngCore> SimulationEngine<R> {
    pub fn new(config: SimulationConfig, rng: SpinRng<R>) -> Self {
        let metropolis = config.metropolis();
        Self {
            config,
            metropolis,
            rng,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Release the random source, e.g. to continue a reproducible stream.
    pub fn into_rng(self) -> SpinRng<R> {
        self.rng
    }

    /// Perform one attempted update on `lattice`.
    pub fn step(&mut self, lattice: &mut Lattice) -> Result<UpdateOutcome, SimulationError> {
        let site = self.rng.site(lattice.height(), lattice.width())?;
        let proposed = self.rng.spin();

        if proposed == lattice.get(site) {
            return Ok(UpdateOutcome::Unchanged);
        }

        let delta_e = energy_delta(lattice, site);
        if self.metropolis.accept(delta_e, &mut self.rng) {
            lattice.set(site, proposed);
            Ok(UpdateOutcome::Accepted)
        } else {
            Ok(UpdateOutcome::Rejected)
        }
    }

    /// Resolve the starting lattice: a supplied one must match the configured
    /// shape, otherwise a uniformly random one is drawn.
    pub fn initial_lattice(
        &mut self,
        initial: Option<Lattice>,
    ) -> Result<Lattice, SimulationError> {
        let (height, width) = (self.config.height, self.config.width);
        match initial {
            None => Ok(Lattice::random(height, width, &mut self.rng)),
            Some(lattice) => {
                // A zero dimension collapses to the empty 0x0 lattice.
                let expected = if height == 0 || width == 0 {
                    (0, 0)
                } else {
                    (height, width)
                };
                if (lattice.height(), lattice.width()) != expected {
                    return Err(SimulationError::ShapeMismatch {
                        height,
                        width,
                        found_height: lattice.height(),
                        found_width: lattice.width(),
                    });
                }
                Ok(lattice)
            }
        }
    }

    /// Run the full simulation.
    pub fn run(&mut self, initial: Option<Lattice>) -> Result<SimulationRun, SimulationError> {
        self.run_with_progress(initial, |_| {})
    }

    /// Run the full simulation, calling `on_progress` after each periodic
    /// snapshot.
    pub fn run_with_progress(
        &mut self,
        initial: Option<Lattice>,
        mut on_progress: impl FnMut(&RunProgress),
    ) -> Result<SimulationRun, SimulationError> {
        let mut lattice = self.initial_lattice(initial)?;

        let sites = lattice.len() as u64;
        let max_mcs = self.config.max_mcs;
        let total = max_mcs * sites;

        info!(
            "Starting run: {}x{} lattice, T={}, k={}, {} mcs ({} attempted updates)",
            lattice.height(),
            lattice.width(),
            self.metropolis.temperature,
            self.metropolis.boltzmann,
            max_mcs,
            total
        );

        let mut recorder = SnapshotRecorder::new(lattice.len());
        recorder.capture(&lattice);

        let mut stats = RunStats::default();
        while stats.attempted < total {
            let outcome = self.step(&mut lattice)?;
            stats.record(outcome);

            if recorder.record_update(stats.attempted, &lattice) {
                let progress = RunProgress {
                    mcs: stats.attempted / sites,
                    max_mcs,
                    snapshots: recorder.len(),
                    stats,
                };
                debug!(
                    "Snapshot {} at mcs {}/{} (accepted {}, rejected {})",
                    progress.snapshots, progress.mcs, max_mcs, stats.accepted, stats.rejected
                );
                on_progress(&progress);
            }
        }

        info!(
            "Run complete: {} snapshots, {} attempted, {} accepted, {} rejected, {} unchanged",
            recorder.len(),
            stats.attempted,
            stats.accepted,
            stats.rejected,
            stats.unchanged
        );

        Ok(SimulationRun {
            snapshots: recorder.finish(),
            stats,
        })
    }
}

/// Run a simulation and return its ordered snapshots.
///
/// `initial`, if given, must be `height x width`. Otherwise each site starts
/// with a uniformly random spin drawn from `rng`.
pub fn run<R: RngCore>(
    height: usize,
    width: usize,
    temperature: f64,
    boltzmann: f64,
    max_mcs: u64,
    initial: Option<Lattice>,
    rng: SpinRng<R>,
) -> Result<Vec<Snapshot>, SimulationError> {
    let config = SimulationConfig {
        width,
        height,
        temperature,
        boltzmann,
        max_mcs,
        rng_seed: None,
    };
    SimulationEngine::new(config, rng)
        .run(initial)
        .map(|run| run.snapshots)
}
