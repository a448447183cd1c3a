//! Tolerance defaults.
//!
//! Policy
//! - One fixed relative tolerance for approximate float equality. Callers that
//!   need another value pass it explicitly (`Triangle::is_right_with_tol`).

/// Relative tolerance used by `Triangle::is_right`.
pub const REL_TOL: f64 = 1e-9;

/// Relative closeness: `|p - q| <= rel_tol * max(|p|, |q|)`.
///
/// No absolute floor, so only `0.0` is close to `0.0`. NaN is never close.
#[inline]
pub fn is_close(p: f64, q: f64, rel_tol: f64) -> bool {
    if p == q {
        return true;
    }
    if !(p.is_finite() && q.is_finite()) {
        return false;
    }
    (p - q).abs() <= rel_tol * p.abs().max(q.abs())
}
