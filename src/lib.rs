//! Sum of the positive integers below a bound that are divisible by either
//! of two divisors, computed by a closed-form method and by enumeration.

pub mod cli;
pub mod combiner;
pub mod error;
pub mod formatters;
pub mod input;
pub mod summation;
pub mod types;
