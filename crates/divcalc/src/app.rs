//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use divcalc_core::observers::{ChannelObserver, LoggingObserver};
use divcalc_core::Calculator;

use crate::config::{AppConfig, Operation};
use crate::presenter::{CliPresenter, OutputMode};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let mode = OutputMode::from_flags(config.quiet, config.json);
    let mut presenter = CliPresenter::stdout(mode);
    let calc = Calculator::new();
    execute(&calc, config, &mut presenter)
}

/// Run one operation against `calc`, writing through `presenter`.
pub fn execute<W: std::io::Write>(
    calc: &Calculator,
    config: &AppConfig,
    presenter: &mut CliPresenter<W>,
) -> Result<()> {
    match config.command {
        Operation::Add { a, b, checked } => {
            let sum = if checked {
                calc.checked_add(a, b)?
            } else {
                calc.add(a, b)
            };
            presenter.present_sum(a, b, sum)
        }
        Operation::Divide { dividend, divisor } => {
            // The presenter reads the result back from the notification.
            let (tx, rx) = crossbeam_channel::bounded(1);
            let channel_id = calc.subscribe(Arc::new(ChannelObserver::new(tx)));
            let logging_id = config
                .verbose
                .then(|| calc.subscribe(Arc::new(LoggingObserver::new())));

            let outcome = calc.divide(dividend, divisor);

            calc.unsubscribe(channel_id);
            if let Some(id) = logging_id {
                calc.unsubscribe(id);
            }

            let quotient = outcome?;
            let event = rx
                .try_recv()
                .map_err(|e| anyhow::anyhow!("division notification missing: {e}"))?;
            info!(quotient, "division reported");
            presenter.present_division(&event)
        }
    }
}
