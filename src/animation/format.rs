//! Text frame encoding for lattice snapshots.

use std::io::{self, Write};

use crate::compute::{Lattice, Spin};

/// Characters used to draw each spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    /// Character for `Spin::Zero`.
    pub zero: char,
    /// Character for `Spin::One`.
    pub one: char,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self { zero: '.', one: '#' }
    }
}

impl FrameStyle {
    #[inline]
    pub fn glyph(&self, spin: Spin) -> char {
        match spin {
            Spin::Zero => self.zero,
            Spin::One => self.one,
        }
    }
}

/// Write one frame, one line per lattice row.
pub fn write_frame<W: Write>(w: &mut W, lattice: &Lattice, style: &FrameStyle) -> io::Result<()> {
    let mut line = String::with_capacity(lattice.width() * 4 + 1);
    for row in lattice.rows() {
        line.clear();
        line.extend(row.iter().map(|&s| style.glyph(s)));
        line.push('\n');
        w.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Render one frame to a string.
pub fn format_frame(lattice: &Lattice, style: &FrameStyle) -> String {
    lattice
        .rows()
        .map(|row| {
            let mut line: String = row.iter().map(|&s| style.glyph(s)).collect();
            line.push('\n');
            line
        })
        .collect()
}
