//! Command-line surface.
//!
//! Exactly one of `--coins` / `--top` is required; clap rejects the rest
//! before any request is made.
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::modules::error::{Error, Result};
use crate::modules::types::{OutputMode, Selection, Settings, COINGECKO_API_BASE};

/// CoinGecko's upper limit for `per_page` on `/coins/markets`.
pub const MAX_TOP: u32 = 250;

/// 📈 Real-time crypto price scraper using the CoinGecko API
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("selection").required(true).args(["coins", "top"])))]
pub struct Args {
    /// List of cryptocurrency IDs (e.g. bitcoin ethereum dogecoin)
    #[arg(long, num_args = 1.., value_name = "ID")]
    pub coins: Option<Vec<String>>,

    /// Fetch the top N cryptocurrencies by market cap
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=MAX_TOP as i64))]
    pub top: Option<u32>,

    /// Don't save to CSV or JSON, just print to the terminal
    #[arg(long)]
    pub no_csv: bool,

    /// Save output as JSON instead of CSV
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Builds the run settings; files land in the current directory.
    pub fn into_settings(self) -> Result<Settings> {
        let selection = match (self.coins, self.top) {
            (Some(coins), None) => Selection::Explicit(coins),
            (None, Some(n)) => Selection::TopN(n),
            (Some(_), Some(_)) => return Err(Error::Usage("--coins and --top are mutually exclusive".into())),
            (None, None) => return Err(Error::Usage("please specify coin IDs with --coins or use --top".into())),
        };

        Ok(Settings {
            selection,
            output: OutputMode::from_flags(self.no_csv, self.json),
            api_base: COINGECKO_API_BASE.to_string(),
            output_dir: PathBuf::from("."),
        })
    }
}
