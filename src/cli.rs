use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::combiner::OverlapTerm;

mod run_impl;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "multisum",
    version,
    about = "Sum of the positive integers below <z> divisible by <x> or <y>",
    long_about = None,
    allow_negative_numbers = true
)]
pub struct Args {
    /// Divisors and exclusive bound as `<x> <y> <z>`; omit all three for 3 5 1000
    #[arg(value_name = "X Y Z")]
    pub values: Vec<String>,

    /// Overlap term subtracted to undo double counting
    #[arg(long = "overlap", value_enum, default_value_t = OverlapTerm::Lcm)]
    pub overlap: OverlapTerm,

    /// Output JSON instead of text
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "csv")]
    pub json: bool,

    /// Output CSV instead of text
    #[arg(long = "csv", action = ArgAction::SetTrue, conflicts_with = "json")]
    pub csv: bool,

    /// Exit non-zero when the fast and slow methods disagree
    #[arg(long = "fail-on-divergence", action = ArgAction::SetTrue)]
    pub fail_on_divergence: bool,

    /// Verbose logging
    #[arg(long = "verbose", short = 'v', action = ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the CLI application.
///
/// # Errors
/// Returns an error on bad input or when `--fail-on-divergence` trips.
pub fn run() -> Result<()> {
    let args = Args::parse();
    run_impl::run_with_args(&args)
}
