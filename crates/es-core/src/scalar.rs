//! [`Real`] trait: abstraction over `f64` and `f32` that lets the series
//! kernel and every variate be written once and monomorphized per precision.
//!
//! Special functions are routed through [`crate::special`]; the `f32`
//! implementation widens to `f64`, evaluates, and narrows the result.

use crate::special;
use std::fmt::{Debug, Display};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A floating-point scalar suitable for distribution derivatives.
pub trait Real:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Product
    + PartialOrd
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Convert an `f64` constant (rounding for narrower types).
    fn from_f64(v: f64) -> Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Machine epsilon.
    fn epsilon() -> Self;

    /// Positive infinity.
    fn infinity() -> Self;

    /// Quiet NaN.
    fn nan() -> Self;

    /// `0`.
    #[inline]
    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    /// `1`.
    #[inline]
    fn one() -> Self {
        Self::from_f64(1.0)
    }

    /// Convert a count (derivative order, term index).
    #[inline]
    fn from_usize(n: usize) -> Self {
        Self::from_f64(n as f64)
    }

    /// Square root of machine epsilon, the default series tolerance.
    #[inline]
    fn sqrt_epsilon() -> Self {
        Self::epsilon().sqrt()
    }

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Exponential.
    fn exp(self) -> Self;

    /// `ln(1 + self)`, accurate near zero.
    fn ln_1p(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Integer power.
    fn powi(self, n: i32) -> Self;

    /// Larger of two values (NaN-ignoring, as `f64::max`).
    fn max(self, other: Self) -> Self;

    /// `true` if NaN.
    fn is_nan(self) -> bool;

    /// `true` if neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Complementary error function.
    fn erfc(self) -> Self;

    /// Gamma function.
    fn gamma(self) -> Self;

    /// Log-gamma.
    fn ln_gamma(self) -> Self;

    /// Digamma.
    fn digamma(self) -> Self;

    /// Polygamma of order `m` (`m == 0` is digamma).
    fn polygamma(self, m: usize) -> Self;

    /// Regularized incomplete beta `I_self(a, b)`.
    fn beta_reg(self, a: Self, b: Self) -> Self;
}

// --- f64 implementation ---

impl Real for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn epsilon() -> Self {
        f64::EPSILON
    }

    #[inline]
    fn infinity() -> Self {
        f64::INFINITY
    }

    #[inline]
    fn nan() -> Self {
        f64::NAN
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn ln_1p(self) -> Self {
        f64::ln_1p(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        f64::powi(self, n)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        f64::max(self, other)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        special::erfc(self)
    }

    #[inline]
    fn gamma(self) -> Self {
        special::gamma(self)
    }

    #[inline]
    fn ln_gamma(self) -> Self {
        special::ln_gamma(self)
    }

    #[inline]
    fn digamma(self) -> Self {
        special::digamma(self)
    }

    #[inline]
    fn polygamma(self, m: usize) -> Self {
        special::polygamma(m, self)
    }

    #[inline]
    fn beta_reg(self, a: Self, b: Self) -> Self {
        special::beta_reg(a, b, self)
    }
}

// --- f32 implementation ---

impl Real for f32 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn epsilon() -> Self {
        f32::EPSILON
    }

    #[inline]
    fn infinity() -> Self {
        f32::INFINITY
    }

    #[inline]
    fn nan() -> Self {
        f32::NAN
    }

    #[inline]
    fn ln(self) -> Self {
        f32::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        f32::exp(self)
    }

    #[inline]
    fn ln_1p(self) -> Self {
        f32::ln_1p(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    #[inline]
    fn abs(self) -> Self {
        f32::abs(self)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        f32::powi(self, n)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        f32::max(self, other)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        special::erfc(self as f64) as f32
    }

    #[inline]
    fn gamma(self) -> Self {
        special::gamma(self as f64) as f32
    }

    #[inline]
    fn ln_gamma(self) -> Self {
        special::ln_gamma(self as f64) as f32
    }

    #[inline]
    fn digamma(self) -> Self {
        special::digamma(self as f64) as f32
    }

    #[inline]
    fn polygamma(self, m: usize) -> Self {
        special::polygamma(m, self as f64) as f32
    }

    #[inline]
    fn beta_reg(self, a: Self, b: Self) -> Self {
        special::beta_reg(a as f64, b as f64, self as f64) as f32
    }
}
