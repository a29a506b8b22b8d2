use std::fmt::Write as _;

use crate::types::Report;

/// Classic line-oriented output: echoed inputs, both totals, then the
/// agreement lines only when the totals match.
pub fn format(r: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "x = {}", r.x);
    let _ = writeln!(out, "y = {}", r.y);
    let _ = writeln!(out, "z = {}", r.z);
    let _ = writeln!(out, "Using the fast method, the sum is {}.", r.fast_total);
    let _ = write!(out, "Using the slow method, the sum is {}.", r.slow_total);
    if r.agree {
        out.push_str("\nThe fast method and the slow method agree!");
        let _ = write!(out, "\nThe sum is {}.", r.fast_total);
    }
    out
}
