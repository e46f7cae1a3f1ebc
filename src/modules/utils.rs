use chrono::{DateTime, Local};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub fn get_output_filename(now: &DateTime<Local>, ext: &str) -> String {
    format!("crypto_prices_{}.{}", now.format("%Y-%m-%d_%H-%M-%S"), ext)
}

/// Path for a new export in `dir`, stamped with the current local time.
pub fn get_output_path(dir: &Path, ext: &str) -> PathBuf {
    dir.join(get_output_filename(&Local::now(), ext))
}

/// Formats a price as `65,432.10`: thousands separators, two decimals.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Drops repeated ids, keeping the first occurrence of each.
pub fn dedup_ids(ids: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    ids.iter()
        .map(String::as_str)
        .filter(|id| seen.insert(*id))
        .collect()
}
