//! Generalized hypergeometric series `pFq`.
//!
//! ```text
//! pFq(a; b; x) = Σ_n (a_1)_n ... (a_p)_n / ((b_1)_n ... (b_q)_n) · x^n / n!
//! ```
//!
//! The series is summed term by term with a policy-based stop (see
//! [`SeriesConfig`]). Failing to converge within `max_terms` is not an error:
//! the partial sum is returned together with diagnostics in a
//! [`SeriesSummary`].

use es_core::{Real, SeriesConfig, Termination};

/// Outcome of one series evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary<T> {
    /// Partial sum (regularized if requested).
    pub value: T,
    /// Last term added to the sum.
    pub last_term: T,
    /// Total number of terms that fell below the tolerance.
    pub skipped: usize,
    /// Number of terms summed.
    pub iterations: usize,
    /// Which stopping rule fired.
    pub termination: Termination,
}

impl<T> SeriesSummary<T> {
    /// `false` only when the term ceiling cut the series short.
    pub fn converged(&self) -> bool {
        self.termination.converged()
    }
}

/// Transient per-call state. The rising factorials are folded into `term`
/// one factor at a time, so the state stays inside floating range even for
/// long series.
struct SeriesState<T> {
    sum: T,
    term: T,
    numerator: T,
    denominator: T,
    max_magnitude: T,
    countdown: usize,
    skipped: usize,
    iterations: usize,
}

/// A `pFq` with fixed upper (`a`) and lower (`b`) parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypergeometric<T: Real> {
    a: Vec<T>,
    b: Vec<T>,
}

impl<T: Real> Hypergeometric<T> {
    /// Create a series from its upper and lower parameter lists.
    pub fn new(a: &[T], b: &[T]) -> Self {
        Self { a: a.to_vec(), b: b.to_vec() }
    }

    /// Create a series with arities fixed at compile time.
    pub fn from_arrays<const P: usize, const Q: usize>(a: [T; P], b: [T; Q]) -> Self {
        Self { a: a.into(), b: b.into() }
    }

    /// Upper parameters.
    pub fn a(&self) -> &[T] {
        &self.a
    }

    /// Lower parameters.
    pub fn b(&self) -> &[T] {
        &self.b
    }

    /// Divide by `∏ Γ(b_i)`.
    ///
    /// Not idempotent: apply it once, to an unregularized value.
    pub fn regularize(&self, value: T) -> T {
        self.b.iter().fold(value, |acc, &bi| acc / bi.gamma())
    }

    /// Sum the series at `x` under `config`.
    pub fn evaluate(&self, x: T, config: &SeriesConfig) -> SeriesSummary<T> {
        let tol = config.tol.map(T::from_f64).unwrap_or_else(T::sqrt_epsilon);
        let mut summary = self.sum(x, tol, config.skip, config.max_terms);
        if config.regularized {
            summary.value = self.regularize(summary.value);
        }
        summary
    }

    /// Value of the series at `x` with the default policy.
    pub fn value(&self, x: T) -> T {
        self.evaluate(x, &SeriesConfig::default()).value
    }

    fn sum(&self, x: T, tol: T, skip: usize, max_terms: usize) -> SeriesSummary<T> {
        let skip = skip.max(1);
        let mut state = SeriesState {
            sum: T::zero(),
            term: T::one(),
            numerator: T::one(),
            denominator: T::one(),
            max_magnitude: T::zero(),
            countdown: skip,
            skipped: 0,
            iterations: 0,
        };
        let mut last_term = T::zero();
        let mut n = 0usize;

        let termination = loop {
            if state.iterations >= max_terms {
                break Termination::MaxTerms;
            }

            state.sum += state.term;
            last_term = state.term;
            state.iterations += 1;
            state.max_magnitude = state.max_magnitude.max(state.sum.abs());

            if state.term.abs() < tol * state.max_magnitude {
                state.skipped += 1;
                state.countdown -= 1;
            } else {
                state.countdown = skip;
            }

            let nf = T::from_usize(n);
            state.numerator = self.a.iter().map(|&ai| ai + nf).product();
            if state.numerator == T::zero() {
                break Termination::Polynomial;
            }
            if state.countdown == 0 {
                break Termination::Converged;
            }

            state.denominator =
                self.b.iter().map(|&bi| bi + nf).product::<T>() * T::from_usize(n + 1);
            state.term = state.term * state.numerator / state.denominator * x;
            n += 1;
        };

        if termination == Termination::MaxTerms {
            log::debug!(
                "{}F{} series at x={} hit the {}-term ceiling (last term {})",
                self.a.len(),
                self.b.len(),
                x,
                max_terms,
                last_term
            );
        }

        SeriesSummary {
            value: state.sum,
            last_term,
            skipped: state.skipped,
            iterations: state.iterations,
            termination,
        }
    }
}

/// Evaluate `pFq(a; b; x)` and return `(value, last_term, skipped, iterations)`.
///
/// `skip` consecutive terms below `tol · max|partial sum|` stop the sum; at
/// most `max_terms` terms are added. `regularized` divides by `∏ Γ(b_i)`.
pub fn evaluate<T: Real>(
    a: &[T],
    b: &[T],
    x: T,
    tol: T,
    skip: usize,
    max_terms: usize,
    regularized: bool,
) -> (T, T, usize, usize) {
    let series = Hypergeometric::new(a, b);
    let mut summary = series.sum(x, tol, skip, max_terms);
    if regularized {
        summary.value = series.regularize(summary.value);
    }
    (summary.value, summary.last_term, summary.skipped, summary.iterations)
}

/// `exp(x) = 0F0(;;x)`.
pub fn exp<T: Real>(x: T, config: &SeriesConfig) -> T {
    Hypergeometric::new(&[], &[]).evaluate(x, config).value
}

/// `cos(x) = 0F1(;1/2;-x²/4)`.
pub fn cos<T: Real>(x: T, config: &SeriesConfig) -> T {
    let z = -x * x / T::from_f64(4.0);
    Hypergeometric::from_arrays([], [T::from_f64(0.5)]).evaluate(z, config).value
}

/// `(1 + x)^a = 1F0(-a;;-x)`, for `|x| <= 1`.
pub fn pow1p<T: Real>(x: T, a: T, config: &SeriesConfig) -> T {
    Hypergeometric::new(&[-a], &[]).evaluate(-x, config).value
}

/// Gauss hypergeometric `2F1(a, b; c; x)`, for `|x| < 1`.
pub fn hyp2f1<T: Real>(a: T, b: T, c: T, x: T, config: &SeriesConfig) -> T {
    Hypergeometric::from_arrays([a, b], [c]).evaluate(x, config).value
}
