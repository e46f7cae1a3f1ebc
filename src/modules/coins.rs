use tracing::{debug, info};

use crate::modules::error::Result;
use crate::modules::prices::MarketApi;
use crate::modules::types::Selection;

/// Turns a selection into the ordered list of coin ids to price.
///
/// Explicit ids are returned as given, unchecked. `TopN` asks the markets
/// endpoint for one page and keeps its descending market cap order.
pub fn resolve(selection: &Selection, api: &dyn MarketApi) -> Result<Vec<String>> {
    match selection {
        Selection::Explicit(ids) => Ok(ids.clone()),
        Selection::TopN(n) => {
            let coins = api.top_coins(*n)?;
            for coin in &coins {
                debug!(
                    "#{} {} ({}) {}",
                    coin.market_cap_rank.map(|r| r.to_string()).unwrap_or_else(|| "-".into()),
                    coin.id,
                    coin.symbol.as_deref().unwrap_or("?"),
                    coin.name.as_deref().unwrap_or(""),
                );
            }

            let ids: Vec<String> = coins.into_iter().map(|c| c.id).collect();
            info!("Top {} coins by market cap: {}", n, ids.join(", "));
            Ok(ids)
        }
    }
}
