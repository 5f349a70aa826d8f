//! Integer coefficient tables for the logistic derivative family.
//!
//! `A(n, k)` expands the `n`-th derivative of the sigmoid:
//!
//! ```text
//! d^n/dx^n σ(x) = Σ_{k=1..n} A(n, k) e^{-kx} / (1 + e^{-x})^(k+1)
//! A(1, 1) = 1
//! A(n, k) = k (A(n-1, k-1) - A(n-1, k))
//! ```
//!
//! Rows are rebuilt per call; no table is cached between calls. All arithmetic
//! is checked, and `None` signals `i64`/`u64` overflow.

/// Row `[A(n, 1), ..., A(n, n)]`, or `None` on overflow.
///
/// `n == 0` gives an empty row.
pub fn logistic_coefficients(n: usize) -> Option<Vec<i64>> {
    if n == 0 {
        return Some(Vec::new());
    }
    let mut row: Vec<i64> = vec![1];
    for m in 2..=n {
        let mut next = Vec::with_capacity(m);
        for k in 1..=m {
            let left = if k >= 2 { row[k - 2] } else { 0 };
            let right = row.get(k - 1).copied().unwrap_or(0);
            let k = i64::try_from(k).ok()?;
            next.push(left.checked_sub(right)?.checked_mul(k)?);
        }
        row = next;
    }
    Some(row)
}

/// Binomial coefficient `C(n, k)`, or `None` on overflow.
pub fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) is exact at every step.
        let num = u64::try_from(n - i).ok()?;
        let den = u64::try_from(i + 1).ok()?;
        acc = acc.checked_mul(num)? / den;
    }
    Some(acc)
}
