use anyhow::{Result, bail};

use crate::combiner::{OverlapTerm, cross_check};
use crate::error::SumError;
use crate::formatters;
use crate::input::parse_inputs;
use crate::types::Report;

use super::Args;

pub const USAGE: &str = "Usage: multisum [OPTIONS] <x> <y> <z>\n\
Sums the positive integers below <z> that are divisible by <x> or <y>.\n\
Run without arguments to use x = 3, y = 5, z = 1000.";

pub fn run_with_args(args: &Args) -> Result<()> {
    let inputs = match parse_inputs(&args.values) {
        Ok(inputs) => inputs,
        Err(err @ SumError::Usage { .. }) => {
            println!("{USAGE}");
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    if args.verbose > 0 {
        eprintln!(
            "Inputs: x={}, y={}, z={} (overlap: {})",
            inputs.x, inputs.y, inputs.z, args.overlap
        );
    }
    if args.verbose > 1 {
        let both = args.overlap.divisor(inputs.x, inputs.y)?;
        eprintln!("Overlap divisor: {both}");
        if both != OverlapTerm::Lcm.divisor(inputs.x, inputs.y)? {
            eprintln!("Note: x and y share a factor; x*y misses part of the overlap");
        }
    }

    let report = cross_check(inputs.x, inputs.y, inputs.z, args.overlap)?;
    emit(&report, args)
}

/// Prints the report in the selected format and applies the divergence policy.
fn emit(report: &Report, args: &Args) -> Result<()> {
    if args.verbose > 0 {
        eprintln!(
            "Totals: fast={}, slow={}, agree={}",
            report.fast_total, report.slow_total, report.agree
        );
    }
    if !report.agree {
        eprintln!(
            "warning: methods disagree (fast={}, slow={})",
            report.fast_total, report.slow_total
        );
    }

    if args.json {
        let s = serde_json::to_string_pretty(report)?;
        println!("{}", s);
    } else if args.csv {
        println!("{}", formatters::csv::format(report));
    } else {
        println!("{}", formatters::text::format(report));
    }

    if args.fail_on_divergence && !report.agree {
        bail!(
            "fast and slow totals differ: {} != {}",
            report.fast_total,
            report.slow_total
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn diverged() -> Report {
        Report {
            x: 3,
            y: 5,
            z: 10,
            overlap: OverlapTerm::Lcm,
            fast_total: 1,
            slow_total: 2,
            agree: false,
        }
    }

    #[test]
    fn divergence_is_a_warning_by_default() {
        let args = Args::try_parse_from(["multisum"]).unwrap();
        assert!(emit(&diverged(), &args).is_ok());
    }

    #[test]
    fn divergence_fails_when_requested() {
        let args = Args::try_parse_from(["multisum", "--fail-on-divergence"]).unwrap();
        let err = emit(&diverged(), &args).unwrap_err();
        assert_eq!(err.to_string(), "fast and slow totals differ: 1 != 2");
    }

    #[test]
    fn agreement_passes_with_fail_flag() {
        let args = Args::try_parse_from(["multisum", "--fail-on-divergence", "--csv"]).unwrap();
        let report = Report {
            slow_total: 1,
            agree: true,
            ..diverged()
        };
        assert!(emit(&report, &args).is_ok());
    }
}
