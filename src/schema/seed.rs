//! Seed types for initializing Ising simulations.

use serde::{Deserialize, Serialize};

use crate::compute::{Lattice, LatticeError, Site, Spin, SpinRng};

/// Producer of an initial lattice for a given shape.
///
/// The engine depends only on the shape and value domain of the result, never
/// on how it was built.
pub trait Seeder {
    fn seed_lattice(&self, height: usize, width: usize) -> Result<Lattice, LatticeError>;
}

/// Any site predicate is a seeder; `true` maps to `Spin::One`.
impl<F> Seeder for F
where
    F: Fn(Site) -> bool,
{
    fn seed_lattice(&self, height: usize, width: usize) -> Result<Lattice, LatticeError> {
        Ok(Lattice::from_fn(height, width, |s| Spin::from(self(s))))
    }
}

/// Initial lattice description for a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Ellipse {
                center: None,
                semi_axes: (12.0, 12.0),
                inside: Spin::One,
                outside: Spin::Zero,
            },
        }
    }
}

fn default_inside() -> Spin {
    Spin::One
}

/// Predefined patterns for initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Independent uniformly random spins.
    Random {
        /// Random seed (None = entropy).
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Every site holds the same spin.
    Uniform { spin: Spin },
    /// Elliptical region of one spin on a background of the other.
    ///
    /// Column `c` sits at x = c * width / (width - 1) and row `r` at
    /// y = r * height / (height - 1), i.e. sites are spread evenly over
    /// `[0, width] x [0, height]` including both ends.
    Ellipse {
        /// Center (x0, y0) in lattice units; `None` centers it on the
        /// lattice at `(width / 2, height / 2)`.
        #[serde(default)]
        center: Option<(f64, f64)>,
        /// Semi-axes (a, b) along x and y.
        semi_axes: (f64, f64),
        /// Spin inside the ellipse.
        #[serde(default = "default_inside")]
        inside: Spin,
        /// Spin outside the ellipse.
        #[serde(default)]
        outside: Spin,
    },
    /// Literal grid in the external row representation.
    Custom { rows: Vec<Vec<u8>> },
}

impl Seed {
    /// Generate the initial lattice from this seed.
    ///
    /// `Custom` grids keep their own shape; the engine rejects one that does
    /// not match the configured dimensions.
    pub fn generate(&self, height: usize, width: usize) -> Result<Lattice, LatticeError> {
        match &self.pattern {
            Pattern::Random { seed } => {
                let mut rng = match seed {
                    Some(s) => SpinRng::new(*s),
                    None => SpinRng::from_entropy(),
                };
                Ok(Lattice::random(height, width, &mut rng))
            }
            Pattern::Uniform { spin } => Ok(Lattice::filled(height, width, *spin)),
            Pattern::Ellipse {
                center,
                semi_axes,
                inside,
                outside,
            } => {
                let center = center.unwrap_or(((width / 2) as f64, (height / 2) as f64));
                let ellipse = ellipse_predicate(height, width, center, *semi_axes);
                Ok(Lattice::from_fn(height, width, |s| {
                    if ellipse(s) { *inside } else { *outside }
                }))
            }
            Pattern::Custom { rows } => Lattice::from_rows(rows),
        }
    }
}

impl Seeder for Seed {
    fn seed_lattice(&self, height: usize, width: usize) -> Result<Lattice, LatticeError> {
        self.generate(height, width)
    }
}

/// Evenly spaced sample `i` of `n` points over `[0, end]`, inclusive.
#[inline]
fn linspace(i: usize, n: usize, end: f64) -> f64 {
    if n <= 1 {
        0.0
    } else {
        i as f64 * end / (n - 1) as f64
    }
}

/// Membership test for the ellipse `((x - x0) / a)^2 + ((y - y0) / b)^2 <= 1`.
pub fn ellipse_predicate(
    height: usize,
    width: usize,
    center: (f64, f64),
    semi_axes: (f64, f64),
) -> impl Fn(Site) -> bool {
    let (x0, y0) = center;
    let (a, b) = semi_axes;
    move |site: Site| {
        let x = linspace(site.column, width, width as f64);
        let y = linspace(site.row, height, height as f64);
        let dx = (x - x0) / a;
        let dy = (y - y0) / b;
        dx * dx + dy * dy <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        let seed = Seed {
            pattern: Pattern::Uniform { spin: Spin::One },
        };
        let lattice = seed.generate(3, 4).unwrap();
        assert_eq!(lattice.count_ones(), 12);
    }

    #[test]
    fn test_random_reproducible() {
        let seed = Seed {
            pattern: Pattern::Random { seed: Some(42) },
        };
        let a = seed.generate(10, 10).unwrap();
        let b = seed.generate(10, 10).unwrap();
        assert_eq!(a, b);
        assert!(a.count_ones() > 0 && a.count_ones() < 100);
    }

    #[test]
    fn test_ellipse_small_grid() {
        // 5x5 grid spans [0, 5]: coordinates 0, 1.25, 2.5, 3.75, 5.
        let seed = Seed {
            pattern: Pattern::Ellipse {
                center: Some((2.5, 2.5)),
                semi_axes: (1.3, 1.3),
                inside: Spin::One,
                outside: Spin::Zero,
            },
        };
        let lattice = seed.generate(5, 5).unwrap();
        assert_eq!(
            lattice.to_rows(),
            vec![
                vec![0, 0, 0, 0, 0],
                vec![0, 0, 1, 0, 0],
                vec![0, 1, 1, 1, 0],
                vec![0, 0, 1, 0, 0],
                vec![0, 0, 0, 0, 0],
            ]
        );
    }

    #[test]
    fn test_ellipse_inverted() {
        let seed = Seed {
            pattern: Pattern::Ellipse {
                center: Some((2.5, 2.5)),
                semi_axes: (1.3, 1.3),
                inside: Spin::Zero,
                outside: Spin::One,
            },
        };
        assert_eq!(seed.generate(5, 5).unwrap().count_ones(), 20);
    }

    #[test]
    fn test_default_seed_is_centered_disc() {
        let lattice = Seed::default().generate(50, 50).unwrap();
        assert_eq!(lattice.get(Site::new(25, 25)), Spin::One);
        assert_eq!(lattice.get(Site::new(0, 0)), Spin::Zero);
        assert_eq!(lattice.get(Site::new(49, 49)), Spin::Zero);

        // Roughly pi * 12^2 sites (grid spacing is slightly above 1).
        let ones = lattice.count_ones() as f64;
        assert!((ones - 452.0).abs() < 40.0, "ones = {ones}");
    }

    #[test]
    fn test_default_seed_follows_lattice_shape() {
        // 20 rows x 30 columns: centered at x = 15, y = 10.
        let lattice = Seed::default().generate(20, 30).unwrap();
        assert_eq!(lattice.get(Site::new(15, 10)), Spin::One);
        assert_eq!(lattice.get(Site::new(0, 10)), Spin::Zero);
        assert_eq!(lattice.get(Site::new(29, 10)), Spin::Zero);

        let serialized = serde_json::to_string(&Seed::default()).unwrap();
        let parsed: Seed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed.generate(20, 30).unwrap(), lattice);
    }

    #[test]
    fn test_custom() {
        let seed = Seed {
            pattern: Pattern::Custom {
                rows: vec![vec![0, 1], vec![1, 0]],
            },
        };
        assert_eq!(seed.generate(2, 2).unwrap().to_rows(), vec![vec![0, 1], vec![1, 0]]);

        let bad = Seed {
            pattern: Pattern::Custom {
                rows: vec![vec![0, 3]],
            },
        };
        assert!(bad.generate(1, 2).is_err());
    }

    #[test]
    fn test_closure_seeder() {
        let diagonal = |s: Site| s.row == s.column;
        let lattice = diagonal.seed_lattice(3, 3).unwrap();
        assert_eq!(
            lattice.to_rows(),
            vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
        );
    }

    #[test]
    fn test_zero_dimension() {
        assert!(Seed::default().generate(0, 10).unwrap().is_empty());
    }

    #[test]
    fn test_serialization() {
        let json = r#"{"pattern": {"type": "Ellipse", "center": [4.0, 4.0], "semi_axes": [2.0, 3.0]}}"#;
        let seed: Seed = serde_json::from_str(json).unwrap();
        assert_eq!(
            seed.pattern,
            Pattern::Ellipse {
                center: Some((4.0, 4.0)),
                semi_axes: (2.0, 3.0),
                inside: Spin::One,
                outside: Spin::Zero,
            }
        );

        let uniform: Seed =
            serde_json::from_str(r#"{"pattern": {"type": "Uniform", "spin": 1}}"#).unwrap();
        assert_eq!(uniform.pattern, Pattern::Uniform { spin: Spin::One });

        let invalid = serde_json::from_str::<Seed>(r#"{"pattern": {"type": "Uniform", "spin": 2}}"#);
        assert!(invalid.is_err());

        let roundtrip: Seed = serde_json::from_str(&serde_json::to_string(&seed).unwrap()).unwrap();
        assert_eq!(roundtrip, seed);
    }
}
