//! Ising model microstructure evolution.
//!
//! This crate simulates a two-component system discretized into a 2D
//! `height x width` lattice. Each site holds a spin of 0 or 1 and interacts
//! with its Moore neighborhood (up to 8 surrounding sites, clipped at the
//! lattice boundary). Sites are picked at random and proposed a new spin; the
//! Metropolis criterion decides whether an energetically unfavorable flip is
//! accepted.
//!
//! # Architecture
//!
//! - `schema`: Configuration types and seeding for simulations
//! - `compute`: Lattice, neighbor scan, energy model, Metropolis rule, engine
//! - `animation`: Snapshot capture and rendering of the snapshot sequence
//!
//! # Example
//!
//! ```rust,no_run
//! use ising_mc::{
//!     animation::{Renderer, TerminalPlayer},
//!     compute::{SimulationEngine, SpinRng},
//!     schema::{Seed, SimulationConfig},
//! };
//!
//! let config = SimulationConfig {
//!     temperature: 0.5,
//!     max_mcs: 200,
//!     ..Default::default()
//! };
//!
//! // Start from an elliptical seed region
//! let initial = Seed::default().generate(config.height, config.width).unwrap();
//!
//! let mut engine = SimulationEngine::new(config, SpinRng::new(42));
//! let run = engine.run(Some(initial)).unwrap();
//!
//! println!("{} snapshots captured", run.snapshots.len());
//! TerminalPlayer::stdout().render(&run.snapshots).unwrap();
//! ```

pub mod animation;
pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use animation::{Renderer, Snapshot, TerminalPlayer};
pub use compute::{
    Lattice, LatticeStats, Metropolis, SimulationEngine, SimulationError, Site, Spin, SpinRng, run,
};
pub use schema::{Pattern, Seed, Seeder, SimulationConfig};
