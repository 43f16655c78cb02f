//! Fetch command implementation.

use anyhow::{Context, Result};
use quotes_config::AppConfig;
use quotes_core::types::{DateStyle, QuoteSeries};
use quotes_data::{http_reconciler, write_series};
use tracing::info;

use crate::cli::{FetchArgs, OutputFormat};

pub async fn run(args: FetchArgs, config: &AppConfig) -> Result<()> {
    let cache_dir = args
        .cache_dir
        .clone()
        .unwrap_or_else(|| config.cache.dir.clone());
    let style = config.cache.date_style;
    let days = args.days.unwrap_or(config.cache.default_days);

    let reconciler = http_reconciler(
        &config.source.to_source_config(),
        config.retry.to_policy(),
        &cache_dir,
    )
    .context("Failed to set up quote source")?
    .with_date_style(style);

    info!(
        "Fetching {} symbol(s), cache at {}",
        args.symbols.len(),
        cache_dir.display()
    );

    for symbol in &args.symbols {
        let series = reconciler
            .get_series(symbol, args.fresh, args.start, args.end, Some(days))
            .await
            .with_context(|| format!("Failed to fetch {}", symbol))?;

        match series {
            Some(series) => print!("{}", render(&series, args.format, style)?),
            None => println!("{}: no data available", symbol),
        }
    }

    Ok(())
}

fn render(series: &QuoteSeries, format: OutputFormat, style: DateStyle) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(series)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => {
            let mut out = Vec::new();
            write_series(series, style, &mut out)?;
            Ok(String::from_utf8(out)?)
        }
        OutputFormat::Table => {
            let mut out = format!("{} ({} rows)\n", series.symbol, series.len());
            out.push_str(&format!("{:<12} {:>14} {:>14}\n", "Date", "Adj Close", "Volume"));
            for record in series {
                out.push_str(&format!(
                    "{:<12} {:>14.4} {:>14}\n",
                    style.format(record.date),
                    record.adj_close,
                    record.volume
                ));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use quotes_core::types::{QuoteRecord, Symbol};

    fn series() -> QuoteSeries {
        QuoteSeries::new(
            Symbol::parse("BRK.B").unwrap(),
            vec![QuoteRecord::new(
                NaiveDate::from_ymd_opt(2020, 5, 9).unwrap(),
                186.5,
                4_200_000,
            )],
        )
    }

    #[test]
    fn test_render_table() {
        let out = render(&series(), OutputFormat::Table, DateStyle::Unpadded).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "BRK-B (1 rows)");
        assert!(lines[2].starts_with("2020-5-9 "));
        assert!(lines[2].contains("186.5000"));
        assert!(lines[2].ends_with("4200000"));
    }

    #[test]
    fn test_render_csv_iso() {
        let out = render(&series(), OutputFormat::Csv, DateStyle::Iso).unwrap();
        assert_eq!(out, "Date,Adj Close,Volume\n2020-05-09,186.5,4200000\n");
    }

    #[test]
    fn test_render_json() {
        let out = render(&series(), OutputFormat::Json, DateStyle::Unpadded).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["symbol"], "BRK-B");
        assert_eq!(value["records"][0]["volume"], 4_200_000);
    }
}
