//! Small numerically-stable logistic helpers.

use es_core::Real;

/// Stable sigmoid: `1 / (1 + exp(-x))`.
#[inline]
pub fn sigmoid<T: Real>(x: T) -> T {
    let e = (-x.abs()).exp();
    let recip = T::one() / (T::one() + e);
    // x <  0: sigmoid = exp(x)/(1+exp(x)) = e*recip
    if x >= T::zero() { recip } else { e * recip }
}

/// Stable `log(sigmoid(x))`.
#[inline]
pub fn log_sigmoid<T: Real>(x: T) -> T {
    // log(sigmoid(x)) = -log(1 + exp(-x))
    if x >= T::zero() { -(-x).exp().ln_1p() } else { x - x.exp().ln_1p() }
}

/// Stable `e^{sx} · e^{-kx} / (1 + e^{-x})^(k+1)` for `k >= 1`, `|s| < 1`.
///
/// For `x < 0` the equal form `u^(1+s) / (1 + u)^(k+1)` with `u = e^x` is
/// used. Both stay finite for any finite `x`.
#[inline]
pub fn logistic_kernel<T: Real>(x: T, k: usize, s: T) -> T {
    let k_i = k as i32;
    if x >= T::zero() {
        let e = (-x).exp();
        (-(T::from_usize(k) - s) * x).exp() / (T::one() + e).powi(k_i + 1)
    } else {
        let u = x.exp();
        ((T::one() + s) * x).exp() / (T::one() + u).powi(k_i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_bounds_and_symmetry() {
        let xs: [f64; 7] = [-50.0, -10.0, -1.0, 0.0, 1.0, 10.0, 50.0];
        for x in xs {
            let s = sigmoid(x);
            assert!((0.0..=1.0).contains(&s), "sigmoid({})={}", x, s);
            assert!((s + sigmoid(-x) - 1.0).abs() < 1e-15, "sigmoid symmetry failed at {}", x);
        }
    }

    #[test]
    fn test_log_sigmoid_matches_naive_moderate_values() {
        let xs: [f64; 7] = [-10.0, -2.0, -0.1, 0.0, 0.1, 2.0, 10.0];
        for x in xs {
            let naive = sigmoid(x).ln();
            let stable = log_sigmoid(x);
            assert!((naive - stable).abs() < 1e-12, "x={}: {} vs {}", x, naive, stable);
        }
        assert!(log_sigmoid(-800.0_f64).is_finite());
    }

    #[test]
    fn test_logistic_kernel_is_density_for_k_one() {
        for x in [-30.0_f64, -1.5, 0.0, 0.7, 30.0] {
            let density = sigmoid(x) * sigmoid(-x);
            assert!((logistic_kernel(x, 1, 0.0) - density).abs() < 1e-15, "x={}", x);
        }
    }

    #[test]
    fn test_logistic_kernel_branches_agree() {
        // Direct evaluation is safe for moderate x; both branches must match it.
        for x in [-3.0_f64, -0.2, 0.2, 3.0] {
            for k in 1..5 {
                let s = 0.3;
                let direct = (s * x).exp() * (-(k as f64) * x).exp() / (1.0 + (-x).exp()).powi(k as i32 + 1);
                let stable = logistic_kernel(x, k, s);
                assert!((direct - stable).abs() < 1e-14 * direct.abs().max(1e-300), "x={} k={}", x, k);
            }
        }
        assert!(logistic_kernel(-800.0_f64, 3, -0.5) >= 0.0);
        assert!(logistic_kernel(800.0_f64, 3, 0.5).is_finite());
    }
}
