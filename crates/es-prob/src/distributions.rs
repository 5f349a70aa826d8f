//! Closed set of variates behind one value type.
//!
//! [`AnyVariate`] is the enum counterpart of `Box<dyn Variate<T>>`: it can be
//! stored, cloned and compared without dynamic dispatch, and location-scale
//! transforms nest to any depth.

use es_core::{Real, Result, Variate};

use crate::affine::Affine;
use crate::constant::Constant;
use crate::logistic::Logistic;
use crate::normal::StandardNormal;

/// Any variate this crate provides.
#[derive(Debug, Clone)]
pub enum AnyVariate<T: Real> {
    /// Point mass.
    Constant(Constant<T>),
    /// `N(0, 1)`.
    StandardNormal,
    /// Standard logistic.
    Logistic,
    /// `mu + sigma X` over another variate.
    Affine(Box<Affine<T, AnyVariate<T>>>),
}

impl<T: Real> AnyVariate<T> {
    /// Point mass at `c`.
    pub fn constant(c: T) -> Self {
        Self::Constant(Constant::new(c))
    }

    /// `N(mu, sigma²)`.
    pub fn normal(mu: T, sigma: T) -> Result<Self> {
        Self::StandardNormal.scaled(mu, sigma)
    }

    /// Logistic with location `mu` and scale `sigma`.
    pub fn logistic(mu: T, sigma: T) -> Result<Self> {
        Self::Logistic.scaled(mu, sigma)
    }

    /// `mu + sigma self`.
    pub fn scaled(self, mu: T, sigma: T) -> Result<Self> {
        Ok(Self::Affine(Box::new(Affine::new(self, mu, sigma)?)))
    }

    /// Short name of the outermost variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant",
            Self::StandardNormal => "standard_normal",
            Self::Logistic => "logistic",
            Self::Affine(_) => "affine",
        }
    }
}

impl<T: Real> From<Constant<T>> for AnyVariate<T> {
    fn from(v: Constant<T>) -> Self {
        Self::Constant(v)
    }
}

impl<T: Real> From<StandardNormal> for AnyVariate<T> {
    fn from(_: StandardNormal) -> Self {
        Self::StandardNormal
    }
}

impl<T: Real> From<Logistic> for AnyVariate<T> {
    fn from(_: Logistic) -> Self {
        Self::Logistic
    }
}

impl<T: Real> Variate<T> for AnyVariate<T> {
    fn cdf(&self, x: T, s: T, n: usize) -> Result<T> {
        match self {
            Self::Constant(v) => v.cdf(x, s, n),
            Self::StandardNormal => StandardNormal.cdf(x, s, n),
            Self::Logistic => Logistic.cdf(x, s, n),
            Self::Affine(v) => v.cdf(x, s, n),
        }
    }

    fn cumulant(&self, s: T, n: usize) -> Result<T> {
        match self {
            Self::Constant(v) => v.cumulant(s, n),
            Self::StandardNormal => StandardNormal.cumulant(s, n),
            Self::Logistic => Logistic.cumulant(s, n),
            Self::Affine(v) => v.cumulant(s, n),
        }
    }

    fn tilt_sensitivity(&self, x: T, s: T) -> Result<T> {
        match self {
            Self::Constant(v) => v.tilt_sensitivity(x, s),
            Self::StandardNormal => StandardNormal.tilt_sensitivity(x, s),
            Self::Logistic => Logistic.tilt_sensitivity(x, s),
            Self::Affine(v) => v.tilt_sensitivity(x, s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn zoo() -> Vec<AnyVariate<f64>> {
        vec![
            AnyVariate::constant(0.7),
            StandardNormal.into(),
            Logistic.into(),
            AnyVariate::normal(-1.0, 0.5).unwrap(),
            AnyVariate::logistic(2.0, 0.3).unwrap(),
            AnyVariate::constant(1.0).scaled(1.0, 2.0).unwrap(),
        ]
    }

    #[test]
    fn test_cumulant_at_zero_vanishes() {
        for v in zoo() {
            assert_eq!(v.cumulant(0.0, 0).unwrap(), 0.0, "{}", v.name());
        }
    }

    #[test]
    fn test_dispatch_matches_concrete() {
        let any: AnyVariate<f64> = Logistic.into();
        for n in 0..4 {
            assert_eq!(any.cdf(0.4, -0.2, n).unwrap(), Logistic.cdf(0.4, -0.2, n).unwrap());
        }
        assert_eq!(any.tilt_sensitivity(0.4, -0.2).unwrap(), Logistic.tilt_sensitivity(0.4, -0.2).unwrap());
    }

    #[test]
    fn test_moments() {
        let v = AnyVariate::normal(-1.0, 0.5).unwrap();
        assert_eq!(v.mean().unwrap(), -1.0);
        assert_eq!(v.variance().unwrap(), 0.25);

        let c = AnyVariate::constant(1.0).scaled(1.0, 2.0).unwrap();
        assert_eq!(c.mean().unwrap(), 3.0);
        assert_eq!(c.cdf(3.0, 0.0, 0).unwrap(), 1.0);
        assert_eq!(c.cdf(2.9, 0.0, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_scale_is_rejected() {
        assert!(AnyVariate::<f64>::normal(0.0, 0.0).is_err());
        assert!(AnyVariate::<f64>::logistic(0.0, -1.0).is_err());
    }

    #[test]
    fn test_trait_object() {
        let boxed: Vec<Box<dyn Variate<f64>>> = zoo().into_iter().map(|v| Box::new(v) as Box<dyn Variate<f64>>).collect();
        let mean: f64 = boxed[4].mean().unwrap();
        assert_relative_eq!(mean, 2.0, epsilon = 1e-15);
    }
}
