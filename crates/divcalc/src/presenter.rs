//! CLI result presenter.

use std::io::{self, Write};

use serde::Serialize;

use divcalc_core::DivisionEvent;

/// Output mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// `a + b = c` style lines.
    Human,
    /// The bare number.
    Quiet,
    /// One JSON object per result.
    Json,
}

impl OutputMode {
    /// Pick a mode from the CLI flags. JSON wins over quiet.
    #[must_use]
    pub fn from_flags(quiet: bool, json: bool) -> Self {
        if json {
            Self::Json
        } else if quiet {
            Self::Quiet
        } else {
            Self::Human
        }
    }
}

/// JSON shape for an addition.
#[derive(Debug, Serialize)]
struct SumOutput {
    a: i32,
    b: i32,
    sum: i32,
}

/// CLI result presenter.
pub struct CliPresenter<W: Write> {
    mode: OutputMode,
    out: W,
}

impl CliPresenter<io::Stdout> {
    /// Presenter writing to standard output.
    #[must_use]
    pub fn stdout(mode: OutputMode) -> Self {
        Self::new(mode, io::stdout())
    }
}

impl<W: Write> CliPresenter<W> {
    #[must_use]
    pub fn new(mode: OutputMode, out: W) -> Self {
        Self { mode, out }
    }

    /// Present the result of an addition.
    pub fn present_sum(&mut self, a: i32, b: i32, sum: i32) -> anyhow::Result<()> {
        match self.mode {
            OutputMode::Quiet => writeln!(self.out, "{sum}")?,
            OutputMode::Human => writeln!(self.out, "{a} + {b} = {sum}")?,
            OutputMode::Json => {
                serde_json::to_writer(&mut self.out, &SumOutput { a, b, sum })?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Present a completed division.
    pub fn present_division(&mut self, event: &DivisionEvent) -> anyhow::Result<()> {
        match self.mode {
            OutputMode::Quiet => writeln!(self.out, "{}", event.quotient)?,
            OutputMode::Human => writeln!(
                self.out,
                "{} / {} = {}",
                event.dividend, event.divisor, event.quotient
            )?,
            OutputMode::Json => {
                serde_json::to_writer(&mut self.out, event)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Consume the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
