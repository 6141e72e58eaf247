//! Colour models and the colorizers that turn a field value into a pixel.
//!
//! None of the conversions here clamp. Out-of-range saturation or value
//! produces out-of-range channels, which are only squeezed into bytes by
//! [`Rgba::to_rgba8`].

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::coords::{self, Point2D};
use crate::error::ConfigError;

/// Hue, saturation and value, nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// One pixel of an RGBA8 frame, laid out exactly as the frame bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn opaque(self) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: 1.0,
        }
    }
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Scales each channel by 255 and rounds half to even. The float to int cast
    /// saturates, so values outside `[0, 1]` land on 0 or 255 and NaN on 0.
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8 {
            r: channel_to_byte(self.r),
            g: channel_to_byte(self.g),
            b: channel_to_byte(self.b),
            a: channel_to_byte(self.a),
        }
    }
}

fn channel_to_byte(c: f64) -> u8 {
    scaled_to_byte(c * 255.0)
}

/// Halves round to even, as a clamped byte array stores them.
fn scaled_to_byte(x: f64) -> u8 {
    x.round_ties_even() as u8
}

/// Sector-based HSV to RGB conversion.
///
/// `h` picks one of six sectors (`floor(h*6) mod 6`); no input is
/// validated, so `s > 1` or an infinite `v` propagate arithmetically.
/// A hue with no sector (NaN, infinite or negative) yields black.
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let Hsv { h, s, v } = c;
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    // `-0.0 < 0.0` is false, so a hue of -0 still lands in sector 0.
    if !sector.is_finite() || sector < 0.0 {
        return Rgb::new(0.0, 0.0, 0.0);
    }

    match (sector as i64) % 6 {
        0 => Rgb::new(v, t, p),
        1 => Rgb::new(q, v, p),
        2 => Rgb::new(p, v, t),
        3 => Rgb::new(p, q, v),
        4 => Rgb::new(t, p, v),
        _ => Rgb::new(v, p, q),
    }
}

/// How the polar colorizer derives brightness from the radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Falloff {
    /// `v = 2/r`
    #[default]
    Inverse,
    /// `v = 1/r^0.25`
    QuarterRoot,
}

impl Falloff {
    /// Both formulas are singular at `r = 0`; the centre pixel is left to
    /// whatever IEEE-754 makes of it.
    pub fn value(self, r: f64) -> f64 {
        match self {
            Falloff::Inverse => 2.0 / r,
            Falloff::QuarterRoot => 1.0 / r.powf(0.25),
        }
    }
}

/// Maps a field value to a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colorizer {
    /// `(x, y, x·y, 1)`, for inputs already in the unit square.
    Linear,
    /// Hue from `x`, saturation from `y`, full value.
    DirectHsv,
    /// Hue from the angle around the frame centre, saturation from the
    /// radius, value from [`Falloff`].
    PolarHsv(Falloff),
}

impl Default for Colorizer {
    fn default() -> Self {
        Colorizer::PolarHsv(Falloff::default())
    }
}

impl Colorizer {
    pub const ALL: [Colorizer; 4] = [
        Colorizer::Linear,
        Colorizer::DirectHsv,
        Colorizer::PolarHsv(Falloff::Inverse),
        Colorizer::PolarHsv(Falloff::QuarterRoot),
    ];

    pub fn colorize(self, p: Point2D) -> Rgba {
        match self {
            Colorizer::Linear => Rgba::new(p.x, p.y, p.x * p.y, 1.0),
            Colorizer::DirectHsv => Hsv::new(p.x, p.y, 1.0).to_rgb().opaque(),
            Colorizer::PolarHsv(falloff) => polar_hsv(p, falloff).to_rgb().opaque(),
        }
    }
}

/// Polar colour of a unit-square point, recentred onto `[-5, 5]` first.
pub fn polar_hsv(p: Point2D, falloff: Falloff) -> Hsv {
    let polar = coords::to_polar(coords::center(p));
    Hsv {
        h: polar.hue_angle() / TAU,
        s: polar.r,
        v: falloff.value(polar.r),
    }
}

impl FromStr for Colorizer {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(Colorizer::Linear),
            "hsv" | "direct-hsv" => Ok(Colorizer::DirectHsv),
            "polar" | "polar-hsv" => Ok(Colorizer::PolarHsv(Falloff::Inverse)),
            "polar-quarter" => Ok(Colorizer::PolarHsv(Falloff::QuarterRoot)),
            other => Err(ConfigError::unknown("colorizer", other)),
        }
    }
}

impl fmt::Display for Colorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Colorizer::Linear => "linear",
            Colorizer::DirectHsv => "hsv",
            Colorizer::PolarHsv(Falloff::Inverse) => "polar",
            Colorizer::PolarHsv(Falloff::QuarterRoot) => "polar-quarter",
        };
        f.write_str(name)
    }
}
