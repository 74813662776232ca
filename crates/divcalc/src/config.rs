//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

/// DivCalc: add and divide integers from the command line.
#[derive(Parser, Debug)]
#[command(name = "divcalc", version, about)]
pub struct AppConfig {
    /// Operation to run.
    #[command(subcommand)]
    pub command: Operation,

    /// Verbose output (logs every division).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the number).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON.
    #[arg(long, global = true, env = "DIVCALC_JSON")]
    pub json: bool,
}

/// Supported operations.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Add two integers.
    #[command(allow_negative_numbers = true)]
    Add {
        a: i32,
        b: i32,
        /// Fail on overflow instead of wrapping.
        #[arg(long)]
        checked: bool,
    },

    /// Divide two integers, producing a single-precision quotient.
    #[command(allow_negative_numbers = true)]
    Divide { dividend: i32, divisor: i32 },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
