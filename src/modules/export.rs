use csv::Writer;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::modules::error::Result;
use crate::modules::types::{OutputMode, PriceQuote};
use crate::modules::utils::get_output_path;

/// CSV uses the display shape: upper-cased name, bare price.
#[derive(Debug, Serialize)]
struct CsvRow {
    #[serde(rename = "Cryptocurrency")]
    cryptocurrency: String,
    #[serde(rename = "Price (USD)")]
    price_usd: f64,
}

pub fn save_to_csv(quote: &PriceQuote, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    for (coin, price) in quote {
        wtr.serialize(CsvRow {
            cryptocurrency: coin.to_uppercase(),
            price_usd: price.usd,
        })?;
    }

    // serialize() only emits headers with the first row
    if quote.is_empty() {
        wtr.write_record(["Cryptocurrency", "Price (USD)"])?;
    }

    wtr.flush()?;
    Ok(())
}

/// JSON keeps the API shape: `{"bitcoin": {"usd": 65432.1}}`, 4-space indent.
pub fn save_to_json(quote: &PriceQuote, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let mut ser = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    quote.serialize(&mut ser).map_err(io::Error::from)?;

    writer.flush()?;
    Ok(())
}

/// Writes the quote into `dir` under a timestamped name, if `mode` asks
/// for a file. Returns the path written.
pub fn persist(quote: &PriceQuote, mode: OutputMode, dir: &Path) -> Result<Option<PathBuf>> {
    let path = match mode {
        OutputMode::TerminalOnly => return Ok(None),
        OutputMode::CsvFile => {
            let path = get_output_path(dir, "csv");
            save_to_csv(quote, &path)?;
            path
        }
        OutputMode::JsonFile => {
            let path = get_output_path(dir, "json");
            save_to_json(quote, &path)?;
            path
        }
    };

    debug!("Wrote {} prices to {}", quote.len(), path.display());
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::error::Error;
    use crate::modules::types::UsdPrice;
    use std::fs;
    use temp_dir::TempDir;

    fn quote(entries: &[(&str, f64)]) -> PriceQuote {
        entries
            .iter()
            .map(|(id, usd)| (id.to_string(), UsdPrice { usd: *usd }))
            .collect()
    }

    #[test]
    fn csv_has_header_and_display_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("prices.csv");
        save_to_csv(&quote(&[("bitcoin", 65432.1)]), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Cryptocurrency,Price (USD)\nBITCOIN,65432.1\n");
    }

    #[test]
    fn csv_rows_follow_quote_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("prices.csv");
        save_to_csv(&quote(&[("solana", 151.25), ("bitcoin", 65000.5), ("usd-coin", 1.0)]), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            ["Cryptocurrency,Price (USD)", "SOLANA,151.25", "BITCOIN,65000.5", "USD-COIN,1.0"]
        );
    }

    #[test]
    fn empty_csv_still_has_a_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("prices.csv");
        save_to_csv(&PriceQuote::new(), &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Cryptocurrency,Price (USD)\n");
    }

    #[test]
    fn json_round_trips_the_quote() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("prices.json");
        let original = quote(&[("ethereum", 3201.456), ("bitcoin", 65432.1), ("pepe", 0.00000987)]);
        save_to_json(&original, &path).unwrap();

        let reparsed: PriceQuote = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(reparsed, original);
        assert_eq!(
            reparsed.keys().collect::<Vec<_>>(),
            original.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn json_uses_four_space_indent_and_raw_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.child("prices.json");
        save_to_json(&quote(&[("bitcoin", 65432.1)]), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n    \"bitcoin\": {\n        \"usd\": 65432.1\n    }\n}");
    }

    #[test]
    fn terminal_only_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let written = persist(&quote(&[("bitcoin", 1.0)]), OutputMode::TerminalOnly, dir.path()).unwrap();
        assert!(written.is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn persist_picks_extension_from_mode() {
        let dir = TempDir::new().unwrap();
        let q = quote(&[("bitcoin", 1.0)]);

        let csv = persist(&q, OutputMode::CsvFile, dir.path()).unwrap().unwrap();
        assert_eq!(csv.extension().unwrap(), "csv");
        assert_eq!(csv.parent().unwrap(), dir.path());

        let json = persist(&q, OutputMode::JsonFile, dir.path()).unwrap().unwrap();
        assert_eq!(json.extension().unwrap(), "json");
        assert!(json.exists());
    }

    #[test]
    fn write_failure_surfaces_the_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = persist(&quote(&[("bitcoin", 1.0)]), OutputMode::JsonFile, &missing).unwrap_err();
        assert!(matches!(err, Error::Persistence(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
