//! Degenerate variate `X = c`.
//!
//! Tilting leaves a point mass unchanged, so every law below is independent
//! of `s`.

use es_core::{Real, Result, Variate};

/// Point mass at `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant<T: Real> {
    c: T,
}

impl<T: Real> Constant<T> {
    /// Point mass at `c`.
    pub fn new(c: T) -> Self {
        Self { c }
    }

    /// Location of the mass.
    pub fn value(&self) -> T {
        self.c
    }
}

impl<T: Real> Variate<T> for Constant<T> {
    fn cdf(&self, x: T, _s: T, n: usize) -> Result<T> {
        Ok(match n {
            0 => {
                if self.c <= x {
                    T::one()
                } else {
                    T::zero()
                }
            }
            // Dirac delta at c.
            1 => {
                if x == self.c {
                    T::infinity()
                } else {
                    T::zero()
                }
            }
            _ => T::nan(),
        })
    }

    fn cumulant(&self, s: T, n: usize) -> Result<T> {
        Ok(match n {
            0 => self.c * s,
            1 => self.c,
            _ => T::zero(),
        })
    }

    fn tilt_sensitivity(&self, _x: T, _s: T) -> Result<T> {
        Ok(T::zero())
    }
}
