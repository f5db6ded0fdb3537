//! Schema module - Configuration and seeding types for Ising simulations.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
