//! Standard normal variate.
//!
//! `κ(s) = s²/2`, and the tilted law is `N(s, 1)`, so
//! `F_s(x) = Φ(x - s)` and the higher x-derivatives follow from Hermite
//! polynomials: `cdf(x, s, n) = (-1)^(n-1) φ(z) H_{n-1}(z)`, `z = x - s`.

use es_core::{Real, Result, Variate};

use crate::hermite::hermite;

/// Natural log of `sqrt(2π)`.
const LN_SQRT_2PI: f64 = 0.918_938_533_204_672_7;

/// Standard normal `N(0, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardNormal;

/// Standard normal density `φ(z)`.
#[inline]
pub fn density<T: Real>(z: T) -> T {
    (T::from_f64(-0.5) * z * z - T::from_f64(LN_SQRT_2PI)).exp()
}

/// Standard normal distribution function `Φ(z)`.
///
/// Written through `erfc` so the lower tail keeps full relative accuracy.
#[inline]
pub fn distribution<T: Real>(z: T) -> T {
    T::from_f64(0.5) * (-z / T::from_f64(std::f64::consts::SQRT_2)).erfc()
}

impl<T: Real> Variate<T> for StandardNormal {
    fn cdf(&self, x: T, s: T, n: usize) -> Result<T> {
        let z = x - s;
        if n == 0 {
            return Ok(distribution(z));
        }
        let value = density(z) * hermite(n - 1, z);
        Ok(if n % 2 == 1 { value } else { -value })
    }

    fn cumulant(&self, s: T, n: usize) -> Result<T> {
        Ok(match n {
            0 => T::from_f64(0.5) * s * s,
            1 => s,
            2 => T::one(),
            _ => T::zero(),
        })
    }

    fn tilt_sensitivity(&self, x: T, s: T) -> Result<T> {
        Ok(-density(x - s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_at_zero() {
        let v = StandardNormal;
        assert_eq!(Variate::<f64>::cdf(&v, 0.0, 0.0, 0).unwrap(), 0.5);
        assert!((v.pdf(0.0_f64, 0.0).unwrap().ln() + LN_SQRT_2PI).abs() < 1e-12);
    }

    #[test]
    fn test_cumulants_at_zero() {
        let v = StandardNormal;
        assert_eq!(Variate::<f64>::cumulant(&v, 0.0, 0).unwrap(), 0.0);
        assert_eq!(Variate::<f64>::mean(&v).unwrap(), 0.0);
        assert_eq!(Variate::<f64>::variance(&v).unwrap(), 1.0);
        for n in 3..8 {
            assert_eq!(Variate::<f64>::cumulant(&v, 0.0, n).unwrap(), 0.0);
        }
        assert_relative_eq!(v.mgf(1.0_f64).unwrap(), 0.5_f64.exp(), max_relative = 1e-15);
    }

    #[test]
    fn test_tilt_shifts_location() {
        let v = StandardNormal;
        for &(x, s) in &[(0.3_f64, 0.3), (1.0, -0.5), (-2.0, 0.1)] {
            assert_relative_eq!(v.cdf(x, s, 0).unwrap(), distribution(x - s), epsilon = 1e-15);
        }
        assert_eq!(v.cdf(0.4_f64, 0.4, 0).unwrap(), 0.5);
    }

    #[test]
    fn test_known_values() {
        let v = StandardNormal;
        assert_relative_eq!(v.cdf(1.96_f64, 0.0, 0).unwrap(), 0.975_002_104_851_780, epsilon = 1e-12);
        assert_relative_eq!(v.cdf(-8.0_f64, 0.0, 0).unwrap(), 6.220_960_574_271_785e-16, max_relative = 1e-9);
    }

    #[test]
    fn test_derivative_signs() {
        let v = StandardNormal;
        // density positive, its slope negative right of the mode
        assert!(v.cdf(1.0_f64, 0.0, 1).unwrap() > 0.0);
        assert!(v.cdf(1.0_f64, 0.0, 2).unwrap() < 0.0);
        assert!(v.cdf(-1.0_f64, 0.0, 2).unwrap() > 0.0);
        // φ''(z) = (z² - 1) φ(z)
        let z: f64 = 2.0;
        assert_relative_eq!(v.cdf(z, 0.0, 3).unwrap(), (z * z - 1.0) * density(z), max_relative = 1e-14);
    }

    #[test]
    fn test_tilt_sensitivity_is_negative_density() {
        let v = StandardNormal;
        for &(x, s) in &[(0.0_f64, 0.0), (1.2, 0.4), (-0.7, -0.3)] {
            assert_eq!(v.tilt_sensitivity(x, s).unwrap(), -v.cdf(x, s, 1).unwrap());
        }
    }

    #[test]
    fn test_single_precision() {
        let v = StandardNormal;
        let narrow: f32 = v.cdf(0.5_f32, 0.1, 0).unwrap();
        let wide: f64 = v.cdf(0.5_f64, 0.1, 0).unwrap();
        assert_relative_eq!(narrow as f64, wide, max_relative = 1e-6);
    }
}
