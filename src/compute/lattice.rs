//! Two-state lattice storage.
//!
//! Spins are stored as a flat row-major array: `cells[row * width + column]`.

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::SpinRng;

/// One of the two components of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Spin {
    #[default]
    Zero = 0,
    One = 1,
}

impl Spin {
    /// The other state.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Spin::Zero => Spin::One,
            Spin::One => Spin::Zero,
        }
    }

    /// External {0, 1} representation.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<bool> for Spin {
    fn from(v: bool) -> Self {
        if v { Spin::One } else { Spin::Zero }
    }
}

impl From<Spin> for u8 {
    fn from(s: Spin) -> Self {
        s.as_u8()
    }
}

impl TryFrom<u8> for Spin {
    type Error = SpinError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(Spin::Zero),
            1 => Ok(Spin::One),
            other => Err(SpinError(other)),
        }
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Value outside the {0, 1} spin domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Spin value must be 0 or 1, got {0}")]
pub struct SpinError(pub u8);

/// Lattice coordinate. `column` indexes width, `row` indexes height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    pub column: usize,
    pub row: usize,
}

impl Site {
    #[inline]
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl From<(usize, usize)> for Site {
    /// `(column, row)`.
    fn from((column, row): (usize, usize)) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Errors converting external grid data into a [`Lattice`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LatticeError {
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid spin {value} at row {row}, column {column}")]
    InvalidSpin { row: usize, column: usize, value: u8 },
}

/// Height x width grid of spins.
///
/// Dimensions are fixed at construction. A lattice with a zero dimension is
/// valid and empty; both of its dimensions then report 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lattice {
    cells: Vec<Spin>,
    height: usize,
    width: usize,
}

impl Lattice {
    /// Empty lattice (0 x 0).
    pub fn empty() -> Self {
        Self {
            cells: Vec::new(),
            height: 0,
            width: 0,
        }
    }

    /// Lattice with every site set to `spin`.
    pub fn filled(height: usize, width: usize, spin: Spin) -> Self {
        if height == 0 || width == 0 {
            return Self::empty();
        }
        Self {
            cells: vec![spin; height * width],
            height,
            width,
        }
    }

    /// Lattice where each site independently takes a uniformly random spin.
    ///
    /// Sites are drawn in row-major order.
    pub fn random<R: RngCore>(height: usize, width: usize, rng: &mut SpinRng<R>) -> Self {
        if height == 0 || width == 0 {
            return Self::empty();
        }
        let cells = (0..height * width).map(|_| rng.spin()).collect();
        Self {
            cells,
            height,
            width,
        }
    }

    /// Build by evaluating `f` at every site in row-major order.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(Site) -> Spin) -> Self {
        if height == 0 || width == 0 {
            return Self::empty();
        }
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for column in 0..width {
                cells.push(f(Site { column, row }));
            }
        }
        Self {
            cells,
            height,
            width,
        }
    }

    /// Build from the external nested representation (outer = rows).
    pub fn from_rows<T: AsRef<[u8]>>(rows: &[T]) -> Result<Self, LatticeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());

        let mut cells = Vec::with_capacity(height * width);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(LatticeError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (column, &value) in values.iter().enumerate() {
                let spin = Spin::try_from(value)
                    .map_err(|e| LatticeError::InvalidSpin { row, column, value: e.0 })?;
                cells.push(spin);
            }
        }

        if cells.is_empty() {
            return Ok(Self::empty());
        }
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Build from a boolean grid, as produced by geometric seeders.
    pub fn from_bools<T: AsRef<[bool]>>(rows: &[T]) -> Result<Self, LatticeError> {
        let numeric: Vec<Vec<u8>> = rows
            .iter()
            .map(|r| r.as_ref().iter().map(|&b| b as u8).collect())
            .collect();
        Self::from_rows(&numeric)
    }

    /// Export to the external nested representation.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|s| s.as_u8()).collect())
            .collect()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of sites.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `site` lies inside the lattice.
    #[inline]
    pub fn contains(&self, site: Site) -> bool {
        site.column < self.width && site.row < self.height
    }

    #[inline]
    fn idx(&self, site: Site) -> usize {
        assert!(
            self.contains(site),
            "site {site} out of bounds for {}x{} lattice",
            self.height,
            self.width
        );
        site.row * self.width + site.column
    }

    /// Spin at `site`. Panics if `site` is out of bounds.
    #[inline]
    pub fn get(&self, site: Site) -> Spin {
        self.cells[self.idx(site)]
    }

    /// Set the spin at `site`. Panics if `site` is out of bounds.
    #[inline]
    pub fn set(&mut self, site: Site, spin: Spin) {
        let i = self.idx(site);
        self.cells[i] = spin;
    }

    /// Flip the spin at `site` in place, returning the new value.
    #[inline]
    pub fn flip(&mut self, site: Site) -> Spin {
        let i = self.idx(site);
        self.cells[i] = self.cells[i].flipped();
        self.cells[i]
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Spin]> {
        // chunks() rejects a zero chunk size; an empty lattice has no rows anyway.
        self.cells.chunks(self.width.max(1))
    }

    /// Number of sites holding [`Spin::One`].
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&s| s == Spin::One).count()
    }
}

impl fmt::Display for Lattice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for spin in row {
                write!(f, "{spin}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
