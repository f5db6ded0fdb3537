//! Moore neighborhood enumeration with finite (non-periodic) boundaries.
//!
//! Neighbors are produced by a single clipped scan: rows `row - 1 ..= row + 1`,
//! and within each row columns `column - 1 ..= column + 1`, skipping the center
//! and anything outside `[0, height) x [0, width)`. Corners therefore yield 3
//! neighbors, edges 5 and interior sites 8.

use std::iter::FusedIterator;

use super::{Lattice, Site, Spin};

/// Iterator over the in-bounds Moore neighbors of a site, in scan order.
#[derive(Debug, Clone)]
pub struct MooreNeighbors {
    center: Site,
    row: usize,
    column: usize,
    row_end: usize,
    column_start: usize,
    column_end: usize,
}

impl Iterator for MooreNeighbors {
    type Item = Site;

    fn next(&mut self) -> Option<Site> {
        while self.row < self.row_end {
            if self.column >= self.column_end {
                self.row += 1;
                self.column = self.column_start;
                continue;
            }
            let site = Site {
                column: self.column,
                row: self.row,
            };
            self.column += 1;
            if site != self.center {
                return Some(site);
            }
        }
        None
    }
}

impl FusedIterator for MooreNeighbors {}

/// Moore neighbors of `site` within a `height x width` extent.
///
/// Panics if `site` lies outside the extent.
pub fn moore_neighbors(site: Site, height: usize, width: usize) -> MooreNeighbors {
    assert!(
        site.row < height && site.column < width,
        "site {site} out of bounds for {height}x{width} lattice"
    );

    let column_start = site.column.saturating_sub(1);
    MooreNeighbors {
        center: site,
        row: site.row.saturating_sub(1),
        column: column_start,
        row_end: (site.row + 2).min(height),
        column_start,
        column_end: (site.column + 2).min(width),
    }
}

/// Number of in-bounds Moore neighbors of `site`.
pub fn neighbor_count(site: Site, height: usize, width: usize) -> usize {
    moore_neighbors(site, height, width).count()
}

/// Spins of the Moore neighbors of `site`, in scan order.
pub fn neighbor_states(lattice: &Lattice, site: Site) -> Vec<Spin> {
    moore_neighbors(site, lattice.height(), lattice.width())
        .map(|n| lattice.get(n))
        .collect()
}
