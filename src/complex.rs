//! Complex arithmetic used by the field functions.
//!
//! Multiplication and addition come from `num_complex` operators. The
//! reciprocal goes through polar form (`|1/z| = 1/r`, `arg(1/z) = -theta`)
//! so the origin yields an infinite magnitude instead of a silent `0/0`.

pub type Complex = num_complex::Complex64;

pub const ONE: Complex = Complex::new(1.0, 0.0);

pub fn scale(z: Complex, k: f64) -> Complex {
    Complex::new(z.re * k, z.im * k)
}

/// `1/z` by polar inversion. At `z = 0` the magnitude is infinite.
pub fn recip(z: Complex) -> Complex {
    let (r, theta) = z.to_polar();
    Complex::from_polar(1.0 / r, -theta)
}

/// `z^k` for any integer `k`; negative powers invert the positive one.
pub fn powi(z: Complex, k: i32) -> Complex {
    let mut acc = ONE;
    for _ in 0..k.unsigned_abs() {
        acc *= z;
    }
    if k < 0 {
        recip(acc)
    } else {
        acc
    }
}

/// `zⁿ · z̄ᵐ`, the building block of the rosette functions.
pub fn conj_term(z: Complex, n: i32, m: i32) -> Complex {
    powi(z, n) * powi(z.conj(), m)
}
