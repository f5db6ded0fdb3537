//! Summary statistics of a lattice configuration.

use super::{Lattice, Site, Spin, moore_neighbors};

/// Composition and interface statistics for a lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeStats {
    /// Total number of sites.
    pub sites: usize,
    /// Sites holding `Spin::One`.
    pub ones: usize,
    /// Fraction of sites holding `Spin::One` (0 for an empty lattice).
    pub fraction_ones: f64,
    /// Moore-neighbor pairs with differing spins, each pair counted once.
    pub unlike_pairs: usize,
}

impl LatticeStats {
    /// Compute statistics from a lattice.
    pub fn from_lattice(lattice: &Lattice) -> Self {
        let sites = lattice.len();
        let ones = lattice.count_ones();
        let fraction_ones = if sites > 0 {
            ones as f64 / sites as f64
        } else {
            0.0
        };

        Self {
            sites,
            ones,
            fraction_ones,
            unlike_pairs: unlike_pairs(lattice),
        }
    }
}

/// Count differing Moore-neighbor pairs. Each pair is visited from the site
/// that comes first in row-major order.
fn unlike_pairs(lattice: &Lattice) -> usize {
    let (height, width) = (lattice.height(), lattice.width());
    let mut count = 0;
    for row in 0..height {
        for column in 0..width {
            let site = Site { column, row };
            let spin: Spin = lattice.get(site);
            count += moore_neighbors(site, height, width)
                .filter(|n| (n.row, n.column) > (row, column))
                .filter(|&n| lattice.get(n) != spin)
                .count();
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_lattice() {
        let stats = LatticeStats::from_lattice(&Lattice::filled(4, 6, Spin::One));
        assert_eq!(stats.sites, 24);
        assert_eq!(stats.ones, 24);
        assert_eq!(stats.fraction_ones, 1.0);
        assert_eq!(stats.unlike_pairs, 0);
    }

    #[test]
    fn test_empty_lattice() {
        let stats = LatticeStats::from_lattice(&Lattice::empty());
        assert_eq!(stats.sites, 0);
        assert_eq!(stats.fraction_ones, 0.0);
        assert_eq!(stats.unlike_pairs, 0);
    }

    #[test]
    fn test_single_odd_site() {
        let mut lattice = Lattice::filled(3, 3, Spin::Zero);
        lattice.set(Site::new(1, 1), Spin::One);
        let stats = LatticeStats::from_lattice(&lattice);
        assert_eq!(stats.ones, 1);
        assert_eq!(stats.unlike_pairs, 8);

        let mut corner = Lattice::filled(3, 3, Spin::Zero);
        corner.set(Site::new(2, 2), Spin::One);
        assert_eq!(LatticeStats::from_lattice(&corner).unlike_pairs, 3);
    }

    #[test]
    fn test_half_split() {
        // Two columns of zeros beside two columns of ones, 3 rows tall.
        let lattice = Lattice::from_rows(&[[0u8, 0, 1, 1], [0, 0, 1, 1], [0, 0, 1, 1]]).unwrap();
        let stats = LatticeStats::from_lattice(&lattice);
        assert_eq!(stats.fraction_ones, 0.5);
        // Horizontal bonds across the split: 3, diagonals: 2 * 2.
        assert_eq!(stats.unlike_pairs, 7);
    }
}
