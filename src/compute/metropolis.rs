//! Metropolis acceptance rule.

use rand::RngCore;

use super::SpinRng;

/// Metropolis criterion at a fixed temperature.
///
/// Temperature is passed through unchanged: any `temperature <= 0` rejects
/// every energetically unfavorable move, so negative values behave like zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metropolis {
    pub temperature: f64,
    pub boltzmann: f64,
}

impl Metropolis {
    pub fn new(temperature: f64, boltzmann: f64) -> Self {
        Self {
            temperature,
            boltzmann,
        }
    }

    /// Boltzmann factor `exp(-delta_e / (k * T))` for a thermally activated move.
    #[inline]
    pub fn boltzmann_factor(&self, delta_e: i32) -> f64 {
        (-f64::from(delta_e) / (self.boltzmann * self.temperature)).exp()
    }

    /// Probability that a move with energy change `delta_e` is accepted.
    pub fn acceptance_probability(&self, delta_e: i32) -> f64 {
        if delta_e <= 0 {
            1.0
        } else if self.temperature > 0.0 {
            self.boltzmann_factor(delta_e).min(1.0)
        } else {
            0.0
        }
    }

    /// Accept or reject a move with energy change `delta_e`.
    ///
    /// Draws from `rng` only when `delta_e > 0` and `temperature > 0`.
    pub fn accept<R: RngCore>(&self, delta_e: i32, rng: &mut SpinRng<R>) -> bool {
        if delta_e <= 0 {
            return true;
        }
        if self.temperature > 0.0 {
            return rng.unit() < self.boltzmann_factor(delta_e);
        }
        false
    }
}
