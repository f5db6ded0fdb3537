//! Energy change for single-site flips.
//!
//! The energy cost of flipping a site is the number of neighbors that agree
//! with its current spin minus the number that would agree after the flip:
//!
//! ```text
//! delta_E = likes_old - likes_new = 2 * likes_old - neighbor_count
//! ```
//!
//! Positive values mean the flip loses favorable alignment.

use super::{Lattice, Site, Spin, moore_neighbors};

/// Number of Moore neighbors of `site` holding `spin`.
pub fn like_neighbors(lattice: &Lattice, site: Site, spin: Spin) -> usize {
    moore_neighbors(site, lattice.height(), lattice.width())
        .filter(|&n| lattice.get(n) == spin)
        .count()
}

/// Energy change for flipping the spin at `site`.
///
/// Panics if the lattice is empty or `site` is out of bounds.
pub fn energy_delta(lattice: &Lattice, site: Site) -> i32 {
    assert!(!lattice.is_empty(), "energy_delta called on an empty lattice");

    let old = lattice.get(site);
    let mut total = 0i32;
    let mut likes_old = 0i32;
    for n in moore_neighbors(site, lattice.height(), lattice.width()) {
        total += 1;
        if lattice.get(n) == old {
            likes_old += 1;
        }
    }
    let likes_new = total - likes_old;
    likes_old - likes_new
}
