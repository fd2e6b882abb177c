//! Lowest-set-bit arithmetic used to walk the implicit tree.

/// Value of the lowest set bit of `i`.
///
/// Computed as `i ^ (i & (i - 1))`, which avoids relying on two's complement
/// negation of an unsigned value. Returns `0` for `i == 0`.
#[inline]
pub fn lsb(i: usize) -> usize {
    if i == 0 {
        return 0;
    }
    i ^ (i & (i - 1))
}
