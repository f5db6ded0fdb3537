//! Seedable random source for the simulation.
//!
//! Every draw the engine makes goes through [`SpinRng`], so a run is fully
//! reproducible from its seed as long as the draw order is unchanged.

use rand::prelude::*;

use super::{SimulationError, Site, Spin};

/// Random number generator wrapper for lattice updates.
pub struct SpinRng<R: RngCore = StdRng> {
    rng: R,
}

impl SpinRng<StdRng> {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: RngCore> SpinRng<R> {
    /// Wrap an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Uniformly random site. The column is drawn before the row.
    pub fn site(&mut self, height: usize, width: usize) -> Result<Site, SimulationError> {
        if height == 0 || width == 0 {
            return Err(SimulationError::InvalidDimensions { height, width });
        }
        let column = self.rng.gen_range(0..width);
        let row = self.rng.gen_range(0..height);
        Ok(Site { column, row })
    }

    /// Uniformly random spin.
    #[inline]
    pub fn spin(&mut self) -> Spin {
        Spin::from(self.rng.gen_range(0..2u8) == 1)
    }

    /// Uniform value in [0, 1).
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}
