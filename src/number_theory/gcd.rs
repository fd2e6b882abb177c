use super::NumberTheoryError;

/// Greatest common divisor of `a` and `b`.
///
/// Signs are ignored and `gcd(0, 0) == 0`. Returned as `u64` because
/// `gcd(i64::MIN, 0) == 2^63` has no `i64` representation.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of `|a|` and `|b|`; `lcm(x, 0) == 0`.
///
/// Fails with [`NumberTheoryError::Overflow`] when the result exceeds
/// `u64::MAX`.
pub fn lcm(a: i64, b: i64) -> Result<u64, NumberTheoryError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a.unsigned_abs() / gcd(a, b))
        .checked_mul(b.unsigned_abs())
        .ok_or(NumberTheoryError::Overflow)
}

/// Extended Euclid: returns `(g, x, y)` with `g = gcd(a, b)` and
/// `a * x + b * y == g`.
///
/// Negative inputs are folded into the sign of the matching coefficient.
/// Fails with [`NumberTheoryError::Overflow`] if a coefficient does not fit
/// in `i64`.
pub fn extended_gcd(a: i64, b: i64) -> Result<(u64, i64, i64), NumberTheoryError> {
    let (mut old_r, mut r) = (i128::from(a.unsigned_abs()), i128::from(b.unsigned_abs()));
    let (mut old_x, mut x) = (1i128, 0i128);
    let (mut old_y, mut y) = (0i128, 1i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    if a < 0 {
        old_x = -old_x;
    }
    if b < 0 {
        old_y = -old_y;
    }

    let narrow = |value: i128| i64::try_from(value).map_err(|_| NumberTheoryError::Overflow);
    let g = u64::try_from(old_r).map_err(|_| NumberTheoryError::Overflow)?;
    Ok((g, narrow(old_x)?, narrow(old_y)?))
}
