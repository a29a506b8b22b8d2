use std::num::NonZeroU64;

use crate::error::{Result, SumError};

pub const DEFAULT_X: u64 = 3;
pub const DEFAULT_Y: u64 = 5;
pub const DEFAULT_Z: u64 = 1000;

/// Most multiples the slow method may enumerate for a single divisor.
pub const MAX_SLOW_STEPS: u64 = 1 << 32;

/// Validated calculation inputs. Divisors are non-zero by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inputs {
    pub x: NonZeroU64,
    pub y: NonZeroU64,
    pub z: u64,
}

impl Default for Inputs {
    fn default() -> Self {
        Inputs {
            x: NonZeroU64::new(DEFAULT_X).unwrap_or(NonZeroU64::MIN),
            y: NonZeroU64::new(DEFAULT_Y).unwrap_or(NonZeroU64::MIN),
            z: DEFAULT_Z,
        }
    }
}

/// Builds [`Inputs`] from the positional tokens: none for the defaults, or
/// exactly `x y z`.
///
/// # Errors
/// [`SumError::Usage`] on any other count, [`SumError::InvalidInteger`] for a
/// token that is not a non-negative integer, [`SumError::ZeroDivisor`] when
/// `x` or `y` is zero, and [`SumError::BoundTooLarge`] when enumerating the
/// multiples of the smaller divisor would exceed [`MAX_SLOW_STEPS`].
pub fn parse_inputs<S: AsRef<str>>(tokens: &[S]) -> Result<Inputs> {
    let inputs = match tokens {
        [] => Inputs::default(),
        [x, y, z] => Inputs {
            x: parse_divisor("x", x.as_ref())?,
            y: parse_divisor("y", y.as_ref())?,
            z: parse_integer(z.as_ref())?,
        },
        other => return Err(SumError::Usage { given: other.len() }),
    };
    let steps = inputs.z / inputs.x.min(inputs.y).get();
    if steps > MAX_SLOW_STEPS {
        return Err(SumError::BoundTooLarge {
            z: inputs.z,
            steps,
            limit: MAX_SLOW_STEPS,
        });
    }
    Ok(inputs)
}

fn parse_integer(token: &str) -> Result<u64> {
    token
        .trim()
        .parse::<u64>()
        .map_err(|_| SumError::InvalidInteger {
            token: token.to_string(),
        })
}

fn parse_divisor(name: &'static str, token: &str) -> Result<NonZeroU64> {
    NonZeroU64::new(parse_integer(token)?).ok_or(SumError::ZeroDivisor { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_tokens_means_defaults() {
        let inputs = parse_inputs::<&str>(&[]).unwrap();
        assert_eq!(inputs.x.get(), 3);
        assert_eq!(inputs.y.get(), 5);
        assert_eq!(inputs.z, 1000);
    }

    #[test]
    fn three_tokens_are_parsed_in_order() {
        let inputs = parse_inputs(&["7", "11", "100"]).unwrap();
        assert_eq!((inputs.x.get(), inputs.y.get(), inputs.z), (7, 11, 100));
    }

    #[test]
    fn wrong_count_is_usage_error() {
        assert_eq!(parse_inputs(&["1"]), Err(SumError::Usage { given: 1 }));
        assert_eq!(
            parse_inputs(&["1", "2", "3", "4"]),
            Err(SumError::Usage { given: 4 })
        );
    }

    #[test]
    fn non_numeric_token_is_named() {
        let err = parse_inputs(&["3", "five", "10"]).unwrap_err();
        assert_eq!(
            err,
            SumError::InvalidInteger {
                token: "five".into()
            }
        );
        assert_eq!(err.to_string(), "invalid integer argument 'five'");
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(matches!(
            parse_inputs(&["-3", "5", "10"]),
            Err(SumError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn zero_divisor_fails_fast() {
        assert_eq!(
            parse_inputs(&["3", "0", "10"]),
            Err(SumError::ZeroDivisor { name: "y" })
        );
        // zero bound is fine
        assert_eq!(parse_inputs(&["3", "5", "0"]).unwrap().z, 0);
    }

    #[test]
    fn bound_is_capped_by_slow_method_steps() {
        let err = parse_inputs(&["1", "2", "18446744073709551615"]).unwrap_err();
        assert_eq!(
            err,
            SumError::BoundTooLarge {
                z: u64::MAX,
                steps: u64::MAX,
                limit: MAX_SLOW_STEPS,
            }
        );

        // the cap scales with the smaller divisor
        let at_limit = (MAX_SLOW_STEPS * 1000).to_string();
        assert!(parse_inputs(&["1000", "2000", at_limit.as_str()]).is_ok());
        let over = (MAX_SLOW_STEPS * 1000 + 1000).to_string();
        assert!(matches!(
            parse_inputs(&["1000", "2000", over.as_str()]),
            Err(SumError::BoundTooLarge { .. })
        ));
    }
}
