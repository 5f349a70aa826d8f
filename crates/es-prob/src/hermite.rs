//! Probabilists' Hermite polynomials.
//!
//! `H_0 = 1`, `H_1 = x`, `H_n = x H_{n-1} - (n-1) H_{n-2}`, so that
//! `d^n/dx^n φ(x) = (-1)^n φ(x) H_n(x)` for the standard normal density `φ`.

use es_core::Real;

/// `H_n(x)`, evaluated iteratively in `O(n)`.
pub fn hermite<T: Real>(n: usize, x: T) -> T {
    match n {
        0 => T::one(),
        1 => x,
        _ => {
            let mut prev = T::one();
            let mut curr = x;
            for k in 2..=n {
                let next = x * curr - T::from_usize(k - 1) * prev;
                prev = curr;
                curr = next;
            }
            curr
        }
    }
}
