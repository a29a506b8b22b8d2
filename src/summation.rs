use std::num::NonZeroU128;

use crate::error::{Result, SumError};

/// Sum of every multiple of `d` in `[0, z]` via the arithmetic-series formula.
///
/// With `z'` the largest multiple of `d` not above `z` and `n = z' / d`, the
/// multiples are `0, d, .., n*d` and their sum is `d * n * (n + 1) / 2`.
///
/// # Errors
/// Returns [`SumError::Overflow`] if the product does not fit in `u128`.
pub fn closed_form_sum(d: NonZeroU128, z: u128) -> Result<u128> {
    let d = d.get();
    let largest = z - z % d;
    let n = largest / d;
    // halve the even factor first so the division is exact
    let (a, b) = if n % 2 == 0 { (n / 2, n + 1) } else { (n, n / 2 + 1) };
    a.checked_mul(b)
        .and_then(|t| t.checked_mul(d))
        .ok_or(SumError::Overflow)
}

/// Sum of every positive multiple of `d` strictly below `z`, one term at a time.
///
/// # Errors
/// Returns [`SumError::Overflow`] if the running total does not fit in `u128`.
pub fn brute_force_sum(d: NonZeroU128, z: u128) -> Result<u128> {
    let d = d.get();
    let mut total: u128 = 0;
    let mut multiple = d;
    while multiple < z {
        total = total.checked_add(multiple).ok_or(SumError::Overflow)?;
        match multiple.checked_add(d) {
            Some(next) => multiple = next,
            None => break,
        }
    }
    Ok(total)
}
