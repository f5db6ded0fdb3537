//! Compute module - Lattice, energetics and the Monte Carlo engine.

mod energy;
mod engine;
mod lattice;
mod metropolis;
mod neighbors;
mod rng;
mod stats;

pub use energy::*;
pub use engine::*;
pub use lattice::*;
pub use metropolis::*;
pub use neighbors::*;
pub use rng::*;
pub use stats::*;
