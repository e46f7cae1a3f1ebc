use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crypto_prices::modules::app::run_pipeline;
use crypto_prices::modules::args::Args;
use crypto_prices::modules::error::Error;

fn init_logging() {
    // stderr only, stdout carries the price table
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let settings = args.into_settings()?;
    debug!("Settings: {:?}", settings);

    run_pipeline(&settings).context("price lookup failed")?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            let code = e.downcast_ref::<Error>().map(Error::exit_code).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
