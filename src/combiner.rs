use std::fmt;
use std::num::{NonZeroU64, NonZeroU128};

use clap::ValueEnum;
use num_integer::Integer;
use serde::Serialize;

use crate::error::{Result, SumError};
use crate::summation::{brute_force_sum, closed_form_sum};
use crate::types::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Arithmetic-series formula, O(1) per divisor
    ClosedForm,
    /// Enumerate every multiple below the bound
    BruteForce,
}

/// Divisor whose multiples are subtracted once to undo the double count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapTerm {
    /// lcm(x, y); exact for every pair
    #[default]
    Lcm,
    /// x * y; exact only when x and y are coprime
    Product,
}

impl OverlapTerm {
    /// Resolves the overlap divisor for `x` and `y` in widened arithmetic.
    ///
    /// # Errors
    /// Returns [`SumError::Overflow`] if the divisor does not fit in `u128`.
    pub fn divisor(self, x: NonZeroU64, y: NonZeroU64) -> Result<NonZeroU128> {
        let x = u128::from(x.get());
        let y = u128::from(y.get());
        let d = match self {
            // both operands are below 2^64, so lcm and product fit in u128
            OverlapTerm::Lcm => x.lcm(&y),
            OverlapTerm::Product => x.checked_mul(y).ok_or(SumError::Overflow)?,
        };
        NonZeroU128::new(d).ok_or(SumError::Overflow)
    }
}

impl fmt::Display for OverlapTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(v) => f.write_str(v.get_name()),
            None => Ok(()),
        }
    }
}

fn sum_below(method: Method, d: NonZeroU128, z: u64) -> Result<u128> {
    let z = u128::from(z);
    match method {
        // inclusive bound: shift by one so both methods count below z
        Method::ClosedForm => match z.checked_sub(1) {
            Some(inclusive) => closed_form_sum(d, inclusive),
            None => Ok(0),
        },
        Method::BruteForce => brute_force_sum(d, z),
    }
}

/// Sum of the positive integers below `z` divisible by `x` or `y`, using
/// inclusion-exclusion over the per-divisor sums of `method`.
///
/// # Errors
/// Returns [`SumError::Overflow`] if an intermediate value does not fit in `u128`.
pub fn sum_divisible_by_either(
    method: Method,
    x: NonZeroU64,
    y: NonZeroU64,
    z: u64,
    overlap: OverlapTerm,
) -> Result<u128> {
    let both = overlap.divisor(x, y)?;
    let sum_x = sum_below(method, x.into(), z)?;
    let sum_y = sum_below(method, y.into(), z)?;
    let sum_both = sum_below(method, both, z)?;
    sum_x
        .checked_add(sum_y)
        .and_then(|s| s.checked_sub(sum_both))
        .ok_or(SumError::Overflow)
}

/// Runs both methods and records whether they agree.
///
/// # Errors
/// Propagates overflow from either method.
pub fn cross_check(x: NonZeroU64, y: NonZeroU64, z: u64, overlap: OverlapTerm) -> Result<Report> {
    let fast_total = sum_divisible_by_either(Method::ClosedForm, x, y, z, overlap)?;
    let slow_total = sum_divisible_by_either(Method::BruteForce, x, y, z, overlap)?;
    Ok(Report {
        x: x.get(),
        y: y.get(),
        z,
        overlap,
        fast_total,
        slow_total,
        agree: fast_total == slow_total,
    })
}
