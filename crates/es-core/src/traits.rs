//! Core traits
//!
//! A random variable `X` is determined by its cumulative distribution
//! `F(x) = P(X <= x)`. Its cumulant is `κ(s) = log E[exp(s X)]` and its
//! Esscher transform `X_s` has distribution
//! `F_s(x) = E[1(X <= x) exp(s X - κ(s))]`.

use crate::{Real, Result};
use std::sync::Arc;

/// Derivative-order contract for a tilted distribution.
///
/// Every operation is a pure function of its arguments. Derivative orders a
/// variate cannot represent return `Ok(NaN)`; tilts outside the variate's
/// domain return [`crate::Error::DomainViolation`].
pub trait Variate<T: Real>: Send + Sync {
    /// `n`-th x-derivative of the tilted distribution `F_s(x)`.
    ///
    /// For `n >= 1` this is the `(n-1)`-th derivative of the tilted density.
    fn cdf(&self, x: T, s: T, n: usize) -> Result<T>;

    /// `n`-th derivative of the cumulant `κ(s)`.
    fn cumulant(&self, s: T, n: usize) -> Result<T>;

    /// Derivative of `F_s(x)` with respect to `s` at fixed `x`.
    fn tilt_sensitivity(&self, x: T, s: T) -> Result<T>;

    /// Tilted density, `cdf(x, s, 1)`.
    fn pdf(&self, x: T, s: T) -> Result<T> {
        self.cdf(x, s, 1)
    }

    /// Cumulant generating function, `cumulant(s, 0)`.
    fn cgf(&self, s: T) -> Result<T> {
        self.cumulant(s, 0)
    }

    /// Moment generating function `E[exp(s X)]`.
    fn mgf(&self, s: T) -> Result<T> {
        Ok(self.cumulant(s, 0)?.exp())
    }

    /// Mean, `cumulant(0, 1)`.
    fn mean(&self) -> Result<T> {
        self.cumulant(T::zero(), 1)
    }

    /// Variance, `cumulant(0, 2)`.
    fn variance(&self) -> Result<T> {
        self.cumulant(T::zero(), 2)
    }
}

impl<T: Real, V: Variate<T> + ?Sized> Variate<T> for &V {
    fn cdf(&self, x: T, s: T, n: usize) -> Result<T> {
        (**self).cdf(x, s, n)
    }

    fn cumulant(&self, s: T, n: usize) -> Result<T> {
        (**self).cumulant(s, n)
    }

    fn tilt_sensitivity(&self, x: T, s: T) -> Result<T> {
        (**self).tilt_sensitivity(x, s)
    }
}

impl<T: Real, V: Variate<T> + ?Sized> Variate<T> for Box<V> {
    fn cdf(&self, x: T, s: T, n: usize) -> Result<T> {
        (**self).cdf(x, s, n)
    }

    fn cumulant(&self, s: T, n: usize) -> Result<T> {
        (**self).cumulant(s, n)
    }

    fn tilt_sensitivity(&self, x: T, s: T) -> Result<T> {
        (**self).tilt_sensitivity(x, s)
    }
}

impl<T: Real, V: Variate<T> + ?Sized> Variate<T> for Arc<V> {
    fn cdf(&self, x: T, s: T, n: usize) -> Result<T> {
        (**self).cdf(x, s, n)
    }

    fn cumulant(&self, s: T, n: usize) -> Result<T> {
        (**self).cumulant(s, n)
    }

    fn tilt_sensitivity(&self, x: T, s: T) -> Result<T> {
        (**self).tilt_sensitivity(x, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Exponential(1): κ(s) = -ln(1 - s), tilted law is Exponential(1 - s).
    struct DummyExponential;

    impl Variate<f64> for DummyExponential {
        fn cdf(&self, x: f64, s: f64, n: usize) -> Result<f64> {
            let rate = 1.0 - s;
            if x < 0.0 {
                return Ok(0.0);
            }
            Ok(match n {
                0 => 1.0 - (-rate * x).exp(),
                _ => -(-rate).powi(n as i32) * (-rate * x).exp(),
            })
        }

        fn cumulant(&self, s: f64, n: usize) -> Result<f64> {
            Ok(match n {
                0 => -(1.0 - s).ln(),
                _ => (1..n).map(|j| j as f64).product::<f64>() / (1.0 - s).powi(n as i32),
            })
        }

        fn tilt_sensitivity(&self, x: f64, s: f64) -> Result<f64> {
            Ok(-x * (-(1.0 - s) * x).exp())
        }
    }

    #[test]
    fn test_projections() {
        let v = DummyExponential;
        assert_eq!(v.mean().unwrap(), 1.0);
        assert_eq!(v.variance().unwrap(), 1.0);
        assert_eq!(v.cgf(0.0).unwrap(), 0.0);
        assert!((v.mgf(0.5).unwrap() - 2.0).abs() < 1e-15);
        assert!((v.pdf(0.0, 0.0).unwrap() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_pointer_impls_delegate() {
        let boxed: Box<dyn Variate<f64>> = Box::new(DummyExponential);
        let shared: Arc<dyn Variate<f64>> = Arc::new(DummyExponential);
        let by_ref = &DummyExponential;
        for s in [0.0, 0.3] {
            let direct = DummyExponential.cumulant(s, 2).unwrap();
            assert_eq!(boxed.cumulant(s, 2).unwrap(), direct);
            assert_eq!(shared.cumulant(s, 2).unwrap(), direct);
            assert_eq!(by_ref.cumulant(s, 2).unwrap(), direct);
        }
        assert_eq!(boxed.tilt_sensitivity(1.0, 0.0).unwrap(), -(-1.0_f64).exp());
    }
}
