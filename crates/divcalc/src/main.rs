//! DivCalc: integer calculator with division notifications.

use anyhow::Result;
use divcalc_core::CalcError;
use divcalc_lib::{app, config, errors};

fn main() -> Result<()> {
    let config = config::AppConfig::parse();

    // Logs go to stderr so stdout only carries results.
    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = app::run(&config) {
        if let Some(calc_err) = err.downcast_ref::<CalcError>() {
            eprintln!("Error: {calc_err}");
            std::process::exit(errors::handle_error(calc_err));
        }
        return Err(err);
    }
    Ok(())
}
