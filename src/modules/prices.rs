use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use crate::modules::error::{Error, Result};
use crate::modules::types::{MarketCoin, PriceQuote};
use crate::modules::utils::dedup_ids;

pub const SIMPLE_PRICE_ENDPOINT: &str = "/simple/price";
pub const MARKETS_ENDPOINT: &str = "/coins/markets";
const VS_CURRENCY: &str = "usd";

/// The two CoinGecko calls the pipeline depends on.
pub trait MarketApi {
    /// First page of `/coins/markets`, `n` coins, by descending market cap.
    fn top_coins(&self, n: u32) -> Result<Vec<MarketCoin>>;

    /// `/simple/price` in USD for the given ids.
    fn simple_prices(&self, ids: &[&str]) -> Result<PriceQuote>;
}

/// Blocking CoinGecko client. No request timeout is set, so a hung
/// connection blocks the caller indefinitely.
pub struct CoinGeckoClient {
    client: Client,
    base: String,
}

impl CoinGeckoClient {
    pub fn new(base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base, endpoint);
        debug!("Requesting {} {:?}", url, query);

        let resp = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .query(query)
            .send()?;

        let status = resp.status();
        debug!("{} -> {}", endpoint, status);
        if !status.is_success() {
            return Err(Error::RemoteFailure { endpoint, status });
        }

        let body = resp.text()?;
        serde_json::from_str(&body).map_err(|source| Error::Parse { endpoint, source })
    }
}

impl MarketApi for CoinGeckoClient {
    fn top_coins(&self, n: u32) -> Result<Vec<MarketCoin>> {
        let query = [
            ("vs_currency", VS_CURRENCY.to_string()),
            ("order", "market_cap_desc".to_string()),
            ("per_page", n.to_string()),
            ("page", "1".to_string()),
            ("sparkline", "false".to_string()),
        ];
        self.get_json(MARKETS_ENDPOINT, &query)
    }

    fn simple_prices(&self, ids: &[&str]) -> Result<PriceQuote> {
        let query = [
            ("ids", ids.join(",")),
            ("vs_currencies", VS_CURRENCY.to_string()),
        ];
        self.get_json(SIMPLE_PRICE_ENDPOINT, &query)
    }
}

/// Fetches USD prices for `ids` with a single request.
///
/// Ids the API does not know are left out of the quote rather than failing
/// the call. An empty id list fails with [`Error::EmptyResult`] without
/// touching the network.
pub fn fetch_prices(api: &dyn MarketApi, ids: &[String]) -> Result<PriceQuote> {
    if ids.is_empty() {
        return Err(Error::EmptyResult);
    }

    let unique = dedup_ids(ids);
    let quote = api.simple_prices(&unique)?;
    debug!("Received {} of {} requested prices", quote.len(), unique.len());

    for id in unique.iter().filter(|id| !quote.contains_key(**id)) {
        warn!("No price returned for '{}'", id);
    }

    Ok(quote)
}
