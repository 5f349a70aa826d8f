//! Common data types for the series kernel

use serde::{Deserialize, Serialize};

/// Convergence policy for a hypergeometric series evaluation.
///
/// Deserializes with defaults for any missing field, so a configuration
/// document only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Relative tolerance: a term is small when `|term| < tol * max|partial sum|`.
    /// `None` selects the square root of the evaluation type's machine epsilon.
    pub tol: Option<f64>,
    /// Number of consecutive small terms required to stop.
    pub skip: usize,
    /// Hard ceiling on the number of terms summed.
    pub max_terms: usize,
    /// Divide the result by `∏ Γ(b_i)`.
    pub regularized: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self { tol: None, skip: 4, max_terms: 100, regularized: false }
    }
}

impl SeriesConfig {
    /// Set an explicit tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = Some(tol);
        self
    }

    /// Set the consecutive-small-term count.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Set the term ceiling.
    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    /// Request the regularized form.
    pub fn regularized(mut self, regularized: bool) -> Self {
        self.regularized = regularized;
        self
    }
}

/// Why a series evaluation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// A numerator Pochhammer factor hit zero; the series is a finite polynomial.
    Polynomial,
    /// `skip` consecutive terms fell below the relative tolerance.
    Converged,
    /// The term ceiling was reached first.
    MaxTerms,
}

impl Termination {
    /// `true` unless the ceiling cut the series short.
    pub fn converged(self) -> bool {
        !matches!(self, Termination::MaxTerms)
    }
}
