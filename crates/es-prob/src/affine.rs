//! Location-scale transform `Y = mu + sigma X`.
//!
//! Tilting `Y` by `s` is tilting `X` by `sigma s`:
//!
//! ```text
//! κ_Y(s)        = mu s + κ_X(sigma s)
//! F^Y_s(y)      = F^X_{sigma s}((y - mu) / sigma)
//! ```
//!
//! Every derivative law follows by the chain rule.

use es_core::{Error, Real, Result, Variate};
use std::marker::PhantomData;

/// `mu + sigma X` for an inner variate `X`.
///
/// The inner variate may be owned, or shared through `&V`, `Box<V>` and
/// `Arc<V>` (all of which implement [`Variate`]).
#[derive(Debug, Clone)]
pub struct Affine<T: Real, V> {
    inner: V,
    mu: T,
    sigma: T,
    _scalar: PhantomData<fn() -> T>,
}

impl<T: Real, V: Variate<T>> Affine<T, V> {
    /// Wrap `inner` with location `mu` and scale `sigma`.
    ///
    /// `sigma` must be finite and `> 0`, `mu` finite.
    pub fn new(inner: V, mu: T, sigma: T) -> Result<Self> {
        if !sigma.is_finite() || sigma <= T::zero() {
            return Err(Error::Validation(format!("sigma must be finite and > 0, got {}", sigma)));
        }
        if !mu.is_finite() {
            return Err(Error::Validation(format!("mu must be finite, got {}", mu)));
        }
        Ok(Self { inner, mu, sigma, _scalar: PhantomData })
    }

    /// Location.
    pub fn mu(&self) -> T {
        self.mu
    }

    /// Scale.
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// The wrapped variate.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    #[inline]
    fn standardize(&self, x: T) -> T {
        (x - self.mu) / self.sigma
    }
}

impl<T: Real, V: Variate<T>> Variate<T> for Affine<T, V> {
    fn cdf(&self, x: T, s: T, n: usize) -> Result<T> {
        let value = self.inner.cdf(self.standardize(x), self.sigma * s, n)?;
        Ok(value / self.sigma.powi(n as i32))
    }

    fn cumulant(&self, s: T, n: usize) -> Result<T> {
        let scaled = self.inner.cumulant(self.sigma * s, n)? * self.sigma.powi(n as i32);
        Ok(match n {
            0 => scaled + self.mu * s,
            1 => scaled + self.mu,
            _ => scaled,
        })
    }

    fn tilt_sensitivity(&self, x: T, s: T) -> Result<T> {
        Ok(self.sigma * self.inner.tilt_sensitivity(self.standardize(x), self.sigma * s)?)
    }
}
