use std::io::{self, Write};

use crate::modules::types::PriceQuote;
use crate::modules::utils::format_usd;

pub const HEADER: &str = "🪙 Real-Time Prices (USD):";

/// Writes the price table in quote order, one line per coin.
pub fn render<W: Write>(quote: &PriceQuote, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", HEADER)?;
    for (coin, price) in quote {
        writeln!(out, "  {:<12} - ${}", coin.to_uppercase(), format_usd(price.usd))?;
    }
    out.flush()
}
