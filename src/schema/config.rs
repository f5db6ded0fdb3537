//! Configuration types for Ising simulation parameters.

use serde::{Deserialize, Serialize};

use crate::compute::Metropolis;

fn default_boltzmann() -> f64 {
    1.0
}

fn default_max_mcs() -> u64 {
    100
}

/// Top-level simulation configuration.
///
/// Temperature and the Boltzmann constant are taken as given; no sign or
/// range checks are applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Lattice width in sites (columns).
    pub width: usize,
    /// Lattice height in sites (rows).
    pub height: usize,
    /// Temperature T. Values <= 0 reject every energetically unfavorable flip.
    #[serde(default)]
    pub temperature: f64,
    /// Boltzmann constant k.
    #[serde(default = "default_boltzmann")]
    pub boltzmann: f64,
    /// Number of Monte Carlo steps (one step = width * height attempts).
    #[serde(default = "default_max_mcs")]
    pub max_mcs: u64,
    /// Seed for the random source. `None` seeds from entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            temperature: 0.0,
            boltzmann: 1.0,
            max_mcs: 500,
            rng_seed: None,
        }
    }
}

impl SimulationConfig {
    /// Attempted updates per Monte Carlo step (width * height).
    #[inline]
    pub fn sites(&self) -> u64 {
        (self.width * self.height) as u64
    }

    /// Total attempted updates in a run.
    #[inline]
    pub fn total_updates(&self) -> u64 {
        self.max_mcs * self.sites()
    }

    /// Acceptance rule for this temperature.
    pub fn metropolis(&self) -> Metropolis {
        Metropolis::new(self.temperature, self.boltzmann)
    }
}
