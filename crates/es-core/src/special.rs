//! Special functions used by the variates.
//!
//! Gamma, log-gamma, digamma, the complementary error function and the
//! regularized incomplete beta come from `statrs`. Polygamma of order `m >= 1`
//! goes through the Hurwitz zeta function of `special-fun` (Cephes).

use special_fun::FloatSpecial;
use statrs::function::beta::checked_beta_reg;
use statrs::function::factorial::factorial;
use statrs::function::{erf as sf_erf, gamma as sf_gamma};

/// Complementary error function `erfc(x) = 1 - erf(x)`.
#[inline]
pub fn erfc(x: f64) -> f64 {
    sf_erf::erfc(x)
}

/// Gamma function `Γ(x)`.
#[inline]
pub fn gamma(x: f64) -> f64 {
    sf_gamma::gamma(x)
}

/// Natural log of `|Γ(x)|`.
#[inline]
pub fn ln_gamma(x: f64) -> f64 {
    sf_gamma::ln_gamma(x)
}

/// Digamma `ψ(x) = d/dx ln Γ(x)`.
#[inline]
pub fn digamma(x: f64) -> f64 {
    sf_gamma::digamma(x)
}

/// Regularized incomplete beta `I_x(a, b)`.
///
/// Arguments outside `a > 0`, `b > 0`, `0 <= x <= 1` give NaN.
#[inline]
pub fn beta_reg(a: f64, b: f64, x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    checked_beta_reg(a, b, x).unwrap_or(f64::NAN)
}

/// Polygamma `ψ⁽ᵐ⁾(x)`, the `m`-th derivative of the digamma function.
///
/// `m == 0` is digamma. For `m >= 1`, `ψ⁽ᵐ⁾(x) = (-1)^(m+1) m! ζ(m+1, x)`.
///
/// Non-positive integers are poles: odd orders give `+inf`, even orders NaN.
pub fn polygamma(m: usize, x: f64) -> f64 {
    if m == 0 {
        return digamma(x);
    }
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 && x == x.floor() {
        return if m % 2 == 1 { f64::INFINITY } else { f64::NAN };
    }
    if x == f64::INFINITY {
        return 0.0;
    }

    let zeta = ((m + 1) as f64).hurwitz_zeta(x);
    let magnitude = factorial(m as u64) * zeta;
    if m % 2 == 1 { magnitude } else { -magnitude }
}
