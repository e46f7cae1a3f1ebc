use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Settings built once from the command line and never mutated afterwards
#[derive(Debug, Clone)]
pub struct Settings {
    pub selection: Selection,
    pub output: OutputMode,
    pub api_base: String,
    pub output_dir: PathBuf,
}

/// How the list of coin ids is determined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Explicit(Vec<String>),
    TopN(u32),
}

/// Where the fetched quote ends up besides the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    TerminalOnly,
    CsvFile,
    JsonFile,
}

impl OutputMode {
    /// `no_file` wins over the format choice.
    pub fn from_flags(no_file: bool, json: bool) -> Self {
        match (no_file, json) {
            (true, _) => OutputMode::TerminalOnly,
            (false, true) => OutputMode::JsonFile,
            (false, false) => OutputMode::CsvFile,
        }
    }
}

/// One entry of the `/simple/price` response
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsdPrice {
    pub usd: f64,
}

/// Coin id -> USD price, in the order the API returned them
pub type PriceQuote = IndexMap<String, UsdPrice>;

/// One element of the `/coins/markets` response
#[derive(Debug, Clone, Deserialize)]
pub struct MarketCoin {
    pub id: String,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub market_cap_rank: Option<u32>,
    pub current_price: Option<f64>,
}
