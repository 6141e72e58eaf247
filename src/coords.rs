//! Pixel to plane coordinate mapping and polar decomposition.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::complex::Complex;
use crate::error::ConfigError;

/// Half-extent of the centred coordinate system: centred points span `[-5, 5]`.
pub const CENTER_SCALE: f64 = 10.0;

/// A Cartesian point in the image plane.
///
/// Kept distinct from [`Complex`] so call sites say which interpretation
/// they want; convert with [`Point2D::to_complex`] and [`Point2D::from_complex`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reads the point as `x + iy`.
    pub fn to_complex(self) -> Complex {
        Complex::new(self.x, self.y)
    }

    pub fn from_complex(z: Complex) -> Self {
        Self::new(z.re, z.im)
    }
}

/// Magnitude and angle of a point. `theta` is in `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub r: f64,
    pub theta: f64,
}

impl PolarPoint {
    /// The angle moved into `[0, 2π)`, ready to be used as a hue.
    pub fn hue_angle(&self) -> f64 {
        if self.theta < 0.0 {
            self.theta + TAU
        } else {
            self.theta
        }
    }

    pub fn to_cartesian(self) -> Point2D {
        Point2D::new(self.r * self.theta.cos(), self.r * self.theta.sin())
    }
}

/// Maps pixel indices to `x ∈ [0,1)`, `y ∈ (0,1]` with y pointing up.
///
/// Both dimensions must be non-zero; the renderer checks this before any
/// pixel is mapped.
pub fn normalize(px: u32, py: u32, width: u32, height: u32) -> Point2D {
    let x = px as f64 / width as f64;
    let y = (height as f64 - py as f64) / height as f64;
    Point2D::new(x, y)
}

/// Moves a unit-square point so the frame centre is the origin and the
/// frame spans `[-5, 5]` on both axes.
pub fn center(p: Point2D) -> Point2D {
    Point2D::new(CENTER_SCALE * (p.x - 0.5), CENTER_SCALE * (p.y - 0.5))
}

/// `atan2` gives the origin an angle of 0.
pub fn to_polar(p: Point2D) -> PolarPoint {
    PolarPoint {
        r: (p.x * p.x + p.y * p.y).sqrt(),
        theta: p.y.atan2(p.x),
    }
}

/// Which coordinate system pixels are mapped into before the field function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mapping {
    /// The unit square, see [`normalize`].
    #[default]
    Unit,
    /// The unit square recentred onto `[-5, 5]`, see [`center`].
    Centered,
}

impl Mapping {
    pub fn map(self, px: u32, py: u32, width: u32, height: u32) -> Point2D {
        let p = normalize(px, py, width, height);
        match self {
            Mapping::Unit => p,
            Mapping::Centered => center(p),
        }
    }
}

impl FromStr for Mapping {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unit" => Ok(Mapping::Unit),
            "centered" | "centred" => Ok(Mapping::Centered),
            other => Err(ConfigError::unknown("mapping", other)),
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mapping::Unit => write!(f, "unit"),
            Mapping::Centered => write!(f, "centered"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_normalize_two_by_two() {
        assert_eq!(normalize(0, 0, 2, 2), Point2D::new(0.0, 1.0));
        assert_eq!(normalize(1, 1, 2, 2), Point2D::new(0.5, 0.5));
        assert_eq!(normalize(1, 0, 2, 2), Point2D::new(0.5, 1.0));
    }

    #[test]
    fn test_normalize_ranges() {
        let (w, h) = (7, 5);
        for py in 0..h {
            for px in 0..w {
                let p = normalize(px, py, w, h);
                assert!((0.0..1.0).contains(&p.x));
                assert!(p.y > 0.0 && p.y <= 1.0);
            }
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(center(Point2D::new(0.5, 0.5)), Point2D::ORIGIN);
        assert_eq!(center(Point2D::new(0.0, 1.0)), Point2D::new(-5.0, 5.0));
        assert_eq!(
            Mapping::Centered.map(0, 0, 2, 2),
            Point2D::new(-5.0, 5.0)
        );
    }

    #[test]
    fn test_polar_origin_has_zero_angle() {
        let p = to_polar(Point2D::new(0.0, 0.0));
        assert_eq!(p.r, 0.0);
        assert_eq!(p.theta, 0.0);
        assert_eq!(p.hue_angle(), 0.0);
    }

    #[test]
    fn test_hue_angle_wraps_negative() {
        let p = to_polar(Point2D::new(0.0, -1.0));
        assert!((p.theta + PI / 2.0).abs() < 1e-12);
        assert!((p.hue_angle() - 3.0 * PI / 2.0).abs() < 1e-12);

        let p = to_polar(Point2D::new(-1.0, 0.0));
        assert!((p.hue_angle() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_polar_round_trip_point() {
        let p = Point2D::new(3.0, 4.0);
        let polar = to_polar(p);
        assert_eq!(polar.r, 5.0);
        let back = polar.to_cartesian();
        assert!((back.x - 3.0).abs() < 1e-12);
        assert!((back.y - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_mapping_parse() {
        assert_eq!("unit".parse::<Mapping>(), Ok(Mapping::Unit));
        assert_eq!(" Centered ".parse::<Mapping>(), Ok(Mapping::Centered));
        assert!("polar".parse::<Mapping>().is_err());
    }
}
