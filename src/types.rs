use serde::Serialize;

use crate::combiner::OverlapTerm;

/// Outcome of one invocation: both totals and whether they agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub x: u64,
    pub y: u64,
    pub z: u64,
    pub overlap: OverlapTerm,
    #[serde(rename = "fast")]
    pub fast_total: u128,
    #[serde(rename = "slow")]
    pub slow_total: u128,
    pub agree: bool,
}
