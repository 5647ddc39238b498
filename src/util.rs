/*
 * Trivial to understand utility functions that need not clutter other namespaces.
 */
use crate::math::{Coeff, NumericVector};

/// Returns true when both slices have the same length and every pair of
/// elements differs by at most `margin`.
pub fn is_within_margin<T: Coeff>(a: &[T], b: &[T], margin: T) -> bool {
    if a.len() != b.len() {
        return false;
    }

    for (idx, item) in a.iter().enumerate() {
        if (b[idx] - *item).abs() > margin {
            return false;
        }
    }
    true
}

/// `is_within_margin` over two vectors.
pub fn vectors_within_margin<T: Coeff>(
    a: &NumericVector<T>,
    b: &NumericVector<T>,
    margin: T,
) -> bool {
    is_within_margin(&a.to_vec(), &b.to_vec(), margin)
}
