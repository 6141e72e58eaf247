//! Field functions: the per-point transform applied before colouring.
//!
//! Each variant maps a [`Point2D`] to another [`Point2D`]. The complex
//! variants read the point as `x + iy` and write the result back the same
//! way.

use std::fmt;
use std::str::FromStr;

use crate::complex::{self, Complex};
use crate::coords::{self, Point2D, PolarPoint};
use crate::error::ConfigError;

/// Weight of the `z⁶z̄¹` pair in the rosette.
pub const ROSETTE_A: f64 = 0.5;
/// Weight of the `z⁴z̄⁻⁶` pair in the rosette.
pub const ROSETTE_B: f64 = 0.25;

/// Rosette pairs as `(n, m, weight)`: each contributes `w·(zⁿz̄ᵐ + zᵐz̄ⁿ)`.
const ROSETTE_PAIRS: [(i32, i32, f64); 3] =
    [(5, 0, 1.0), (6, 1, ROSETTE_A), (4, -6, ROSETTE_B)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldFunction {
    #[default]
    Identity,
    /// Complex squaring.
    Square,
    /// `z⁵ + z̄⁵ + a(z⁶z̄ + zz̄⁶) + b(z⁴z̄⁻⁶ + z⁻⁶z̄⁴)` in complex arithmetic.
    RosetteExact,
    /// The same rosette summed term by term in polar form.
    ///
    /// Not guaranteed to agree with [`FieldFunction::RosetteExact`]
    /// bit for bit; the two are evaluated independently.
    RosettePolar,
}

impl FieldFunction {
    pub const ALL: [FieldFunction; 4] = [
        FieldFunction::Identity,
        FieldFunction::Square,
        FieldFunction::RosetteExact,
        FieldFunction::RosettePolar,
    ];

    pub fn apply(self, p: Point2D) -> Point2D {
        match self {
            FieldFunction::Identity => p,
            FieldFunction::Square => square(p),
            FieldFunction::RosetteExact => Point2D::from_complex(rosette_exact(p.to_complex())),
            FieldFunction::RosettePolar => rosette_polar(coords::to_polar(p)),
        }
    }
}

pub fn square(p: Point2D) -> Point2D {
    Point2D::new(p.x * p.x - p.y * p.y, 2.0 * p.x * p.y)
}

/// Reciprocal powers make the origin blow up; that is left to IEEE-754.
pub fn rosette_exact(z: Complex) -> Complex {
    ROSETTE_PAIRS
        .iter()
        .fold(Complex::new(0.0, 0.0), |acc, &(n, m, w)| {
            let pair = complex::conj_term(z, n, m) + complex::conj_term(z, m, n);
            acc + complex::scale(pair, w)
        })
}

/// `zⁿz̄ᵐ = r^(n+m) · e^(i(n-m)θ)`, so each pair becomes two polar terms
/// with opposite angles.
pub fn rosette_polar(p: PolarPoint) -> Point2D {
    let mut sum = Point2D::ORIGIN;
    for &(n, m, w) in &ROSETTE_PAIRS {
        let magnitude = w * p.r.powi(n + m);
        let k = (n - m) as f64;
        for angle in [k * p.theta, -k * p.theta] {
            let term = PolarPoint {
                r: magnitude,
                theta: angle,
            }
            .to_cartesian();
            sum.x += term.x;
            sum.y += term.y;
        }
    }
    sum
}

impl FromStr for FieldFunction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" => Ok(FieldFunction::Identity),
            "square" => Ok(FieldFunction::Square),
            "rosette" | "rosette-exact" => Ok(FieldFunction::RosetteExact),
            "rosette-polar" => Ok(FieldFunction::RosettePolar),
            other => Err(ConfigError::unknown("field function", other)),
        }
    }
}

impl fmt::Display for FieldFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldFunction::Identity => "identity",
            FieldFunction::Square => "square",
            FieldFunction::RosetteExact => "rosette",
            FieldFunction::RosettePolar => "rosette-polar",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn samples() -> Vec<Point2D> {
        vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(0.3, 0.9),
            Point2D::new(-4.0, 2.5),
            Point2D::new(1.0, -1.0),
        ]
    }

    fn rel_close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn test_identity() {
        for p in samples() {
            assert_eq!(FieldFunction::Identity.apply(p), p);
        }
    }

    #[test]
    fn test_square() {
        let sq = |x, y| FieldFunction::Square.apply(Point2D::new(x, y));
        assert_eq!(sq(1.0, 0.0), Point2D::new(1.0, 0.0));
        assert_eq!(sq(0.0, 1.0), Point2D::new(-1.0, 0.0));
        assert_eq!(sq(2.0, 3.0), Point2D::new(-5.0, 12.0));
    }

    #[test]
    fn test_square_matches_complex_mul() {
        for p in samples() {
            let z = p.to_complex();
            assert_eq!(square(p), Point2D::from_complex(z * z));
        }
    }

    #[test]
    fn test_rosette_exact_is_real() {
        // Every term is paired with its conjugate.
        for p in samples().into_iter().skip(1) {
            let out = FieldFunction::RosetteExact.apply(p);
            assert!(out.y.abs() <= 1e-9 * (1.0 + out.x.abs()), "{p:?} -> {out:?}");
        }
    }

    #[test]
    fn test_rosette_polar_is_real() {
        for p in samples().into_iter().skip(1) {
            let out = FieldFunction::RosettePolar.apply(p);
            assert!(out.y.abs() <= 1e-9 * (1.0 + out.x.abs()), "{p:?} -> {out:?}");
        }
    }

    #[test]
    fn test_rosette_exact_on_unit_real_axis() {
        // z = 1: 2 + 2a + 2b
        let out = rosette_exact(Complex::new(1.0, 0.0));
        assert!(rel_close(out.re, 2.0 + 2.0 * ROSETTE_A + 2.0 * ROSETTE_B, 1e-12));
    }

    #[test]
    fn test_rosette_fivefold_symmetry() {
        let rot = Complex::from_polar(1.0, TAU / 5.0);
        let z = Complex::new(0.8, 0.35);
        let a = rosette_exact(z);
        let b = rosette_exact(z * rot);
        assert!(rel_close(a.re, b.re, 1e-9));
    }

    #[test]
    fn test_rosette_variants_are_finite_away_from_origin() {
        for p in samples().into_iter().skip(1) {
            for f in [FieldFunction::RosetteExact, FieldFunction::RosettePolar] {
                let out = f.apply(p);
                assert!(out.x.is_finite() && out.y.is_finite(), "{f} {p:?}");
            }
        }
    }

    #[test]
    fn test_rosette_variants_agree_on_samples() {
        // Evaluated independently; agreement is checked, not assumed.
        // A consistency check: expected to change if either formula changes.
        for p in samples().into_iter().skip(1) {
            let exact = FieldFunction::RosetteExact.apply(p);
            let polar = FieldFunction::RosettePolar.apply(p);
            assert!(rel_close(exact.x, polar.x, 1e-9), "{p:?}: {exact:?} vs {polar:?}");
        }
    }

    #[test]
    fn test_rosette_at_origin_is_not_finite() {
        let out = FieldFunction::RosetteExact.apply(Point2D::ORIGIN);
        assert!(!(out.x.is_finite() && out.y.is_finite()));
        let out = FieldFunction::RosettePolar.apply(Point2D::ORIGIN);
        assert!(!(out.x.is_finite() && out.y.is_finite()));
    }

    #[test]
    fn test_parse_and_display() {
        for f in FieldFunction::ALL {
            assert_eq!(f.to_string().parse::<FieldFunction>(), Ok(f));
        }
        assert_eq!("Rosette-Exact".parse::<FieldFunction>(), Ok(FieldFunction::RosetteExact));
        assert!("cube".parse::<FieldFunction>().is_err());
    }
}
