//! Standard logistic variate.
//!
//! With `p = σ(x)` the density is `σ(x)σ(-x)` and `e^{sx} = (p/q)^s`, so the
//! tilted law is a beta law in `p`:
//!
//! ```text
//! κ(s)    = ln Γ(1+s) + ln Γ(1-s),          -1 < s < 1
//! F_s(x)  = I_{σ(x)}(1+s, 1-s)
//! ```
//!
//! Higher x-derivatives combine the sigmoid derivative table
//! ([`crate::combinatorics`]) with the Leibniz rule; the tilt sensitivity
//! differentiates the incomplete beta in its parameters through `2F1`/`3F2`
//! series evaluated by [`crate::hypergeometric`], always on the tail where
//! `σ(x) <= 1/2`.

use es_core::{Error, Real, Result, SeriesConfig, Variate};

use crate::combinatorics::{binomial, logistic_coefficients};
use crate::hypergeometric::Hypergeometric;
use crate::math::{log_sigmoid, logistic_kernel, sigmoid};

/// Term ceiling for the parameter-derivative series.
const TILT_SERIES_MAX_TERMS: usize = 5000;

/// Standard logistic distribution, `F(x) = 1 / (1 + e^{-x})`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Logistic;

impl Logistic {
    fn check_tilt<T: Real>(s: T) -> Result<()> {
        // Also rejects NaN.
        if s > -T::one() && s < T::one() {
            Ok(())
        } else {
            Err(Error::DomainViolation(format!("logistic tilt must lie in (-1, 1), got {}", s)))
        }
    }

    fn kappa<T: Real>(s: T) -> T {
        if s == T::zero() {
            return T::zero();
        }
        (T::one() + s).ln_gamma() + (T::one() - s).ln_gamma()
    }

    /// `e^{sx} · σ^(m)(x)` for `m >= 1`, without forming `e^{sx}` separately.
    fn scaled_derivative<T: Real>(x: T, m: usize, s: T) -> T {
        let Some(row) = logistic_coefficients(m) else {
            return T::nan();
        };
        row.iter()
            .enumerate()
            .map(|(j, &coef)| T::from_f64(coef as f64) * logistic_kernel(x, j + 1, s))
            .sum()
    }
}

impl<T: Real> Variate<T> for Logistic {
    fn cdf(&self, x: T, s: T, n: usize) -> Result<T> {
        Self::check_tilt(s)?;
        if x.is_nan() {
            return Ok(T::nan());
        }
        if n == 0 {
            let p = sigmoid(x);
            return Ok(if s == T::zero() { p } else { p.beta_reg(T::one() + s, T::one() - s) });
        }

        // d^(n-1)/dx^(n-1) [e^{sx - κ} σ'(x)], expanded with Leibniz.
        let mut total = T::zero();
        for k in 0..n {
            let Some(c) = binomial(n - 1, k) else {
                return Ok(T::nan());
            };
            total += T::from_f64(c as f64) * s.powi(k as i32) * Self::scaled_derivative(x, n - k, s);
        }
        Ok((-Self::kappa(s)).exp() * total)
    }

    fn cumulant(&self, s: T, n: usize) -> Result<T> {
        Self::check_tilt(s)?;
        let a = T::one() + s;
        let b = T::one() - s;
        Ok(match n {
            0 => Self::kappa(s),
            _ => {
                let m = n - 1;
                if n % 2 == 0 { a.polygamma(m) + b.polygamma(m) } else { a.polygamma(m) - b.polygamma(m) }
            }
        })
    }

    fn tilt_sensitivity(&self, x: T, s: T) -> Result<T> {
        Self::check_tilt(s)?;
        if x.is_nan() {
            return Ok(T::nan());
        }
        // F(x, s) = 1 - F(-x, -s), so the sensitivity is unchanged by (x, s) -> (-x, -s).
        let (x, s) = if x > T::zero() { (-x, -s) } else { (x, s) };
        let p = sigmoid(x);
        if p == T::zero() {
            return Ok(T::zero());
        }
        Ok(TiltDerivative::new(x, s).evaluate(p))
    }
}

/// `∂/∂s I_p(1+s, 1-s)` at `p = σ(x) <= 1/2`, via parameter derivatives of
/// the incomplete beta `B_p(a, b)`:
///
/// ```text
/// B_p(a, b)     = p^a / a · 2F1(a, 1-b; a+1; p)
/// ∂_a B_p(a, b) = ln p · B_p(a, b) - p^a / a² · 3F2(a, a, 1-b; a+1, a+1; p)
/// ∂_b B_p(a, b) = -Σ_k ∂_u[(u)_k / k!] · p^(a+k) / (a+k),   u = 1-b
/// ```
///
/// Every series runs at `p <= 1/2` and so converges geometrically.
struct TiltDerivative<T: Real> {
    a: T,
    b: T,
    s: T,
    ln_p: T,
    beta: T,
    config: SeriesConfig,
}

impl<T: Real> TiltDerivative<T> {
    fn new(x: T, s: T) -> Self {
        let config = SeriesConfig::default()
            .with_tol(T::epsilon().to_f64())
            .with_skip(4)
            .with_max_terms(TILT_SERIES_MAX_TERMS);
        Self {
            a: T::one() + s,
            b: T::one() - s,
            s,
            ln_p: log_sigmoid(x),
            beta: Logistic::kappa(s).exp(),
            config,
        }
    }

    fn series(&self, a: &[T], b: &[T], z: T) -> T {
        let summary = Hypergeometric::new(a, b).evaluate(z, &self.config);
        if !summary.converged() {
            log::warn!(
                "logistic tilt sensitivity: {}F{} at z={} stopped after {} terms (last term {})",
                a.len(),
                b.len(),
                z,
                summary.iterations,
                summary.last_term
            );
        }
        summary.value
    }

    /// `Σ_k ∂_u[(u)_k / k!] · p^(a+k) / (a+k)` at `u = s`, given `p^a`.
    ///
    /// Stops on the same rule as the `pFq` kernel: `skip` consecutive terms
    /// below `tol · max|partial sum|`, or the term ceiling.
    fn rising_factorial_slope(&self, p: T, p_a: T) -> T {
        let tol = self.config.tol.map(T::from_f64).unwrap_or_else(T::sqrt_epsilon);
        let skip = self.config.skip.max(1);
        let mut sum = T::zero();
        let mut max_magnitude = T::zero();
        let mut countdown = skip;
        // (u)_k / k!, its u-derivative, and p^(a+k).
        let (mut coef, mut slope, mut power) = (T::one(), T::zero(), p_a);
        let mut last_term = T::zero();

        for k in 0..self.config.max_terms {
            let kf = T::from_usize(k);
            last_term = slope * power / (self.a + kf);
            sum += last_term;
            max_magnitude = max_magnitude.max(sum.abs());
            if last_term.abs() < tol * max_magnitude {
                countdown -= 1;
                if countdown == 0 {
                    return sum;
                }
            } else {
                countdown = skip;
            }

            let next = T::from_usize(k + 1);
            slope = (slope * (self.s + kf) + coef) / next;
            coef = coef * (self.s + kf) / next;
            power = power * p;
        }

        log::warn!(
            "logistic tilt sensitivity: parameter series at p={} stopped after {} terms (last term {})",
            p,
            self.config.max_terms,
            last_term
        );
        sum
    }

    fn evaluate(&self, p: T) -> T {
        let (a, b, one) = (self.a, self.b, T::one());
        let p_a = (a * self.ln_p).exp();

        let lower = p_a / a * self.series(&[a, one - b], &[a + one], p);
        let d_lower_a = self.ln_p * lower - p_a / (a * a) * self.series(&[a, a, one - b], &[a + one, a + one], p);
        let d_lower_b = -self.rising_factorial_slope(p, p_a);

        let kappa_prime = a.digamma() - b.digamma();
        (d_lower_a - d_lower_b) / self.beta - lower / self.beta * kappa_prime
    }
}
