use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use crate::modules::coins::resolve;
use crate::modules::display::render;
use crate::modules::error::{Error, Result};
use crate::modules::export::persist;
use crate::modules::prices::{fetch_prices, CoinGeckoClient, MarketApi};
use crate::modules::types::Settings;

/// Resolve -> fetch -> render -> persist, stopping at the first failure.
/// Returns the path of the file written, if any.
pub fn run<W: Write>(settings: &Settings, api: &dyn MarketApi, out: &mut W) -> Result<Option<PathBuf>> {
    let ids = resolve(&settings.selection, api)?;
    info!("Fetching prices for {} coins", ids.len());

    let quote = fetch_prices(api, &ids)?;
    if quote.is_empty() {
        return Err(Error::EmptyResult);
    }

    render(&quote, out)?;

    let saved = persist(&quote, settings.output, &settings.output_dir)?;
    if let Some(path) = &saved {
        let name = path.file_name().unwrap_or(path.as_os_str());
        writeln!(out, "✅ Saved to {}", name.to_string_lossy())?;
    }

    Ok(saved)
}

/// Runs the pipeline against the live API, printing to stdout.
pub fn run_pipeline(settings: &Settings) -> Result<Option<PathBuf>> {
    let api = CoinGeckoClient::new(&settings.api_base)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(settings, &api, &mut out)
}
