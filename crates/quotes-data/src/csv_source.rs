//! Cached CSV bodies: parsing into quote series and rendering back out.

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use quotes_core::error::DataError;
use quotes_core::types::{DateStyle, QuoteRecord, QuoteSeries, Symbol};
use serde::Deserialize;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

const DATE_COLUMN: &str = "Date";
const ADJ_CLOSE_COLUMN: &str = "Adj Close";
const VOLUME_COLUMN: &str = "Volume";

/// Cell values treated as missing.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// The three consumed columns. Everything else in the row is ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Date")]
    date: Option<String>,
    #[serde(rename = "Adj Close")]
    adj_close: Option<String>,
    #[serde(rename = "Volume")]
    volume: Option<String>,
}

/// Load a series from a cache file.
pub fn load_series(symbol: &Symbol, path: &Path) -> Result<QuoteSeries, DataError> {
    let file = std::fs::File::open(path)?;
    parse_series(symbol, file)
}

/// Parse a download body. Rows missing any consumed field are dropped.
pub fn parse_series<R: Read>(symbol: &Symbol, input: R) -> Result<QuoteSeries, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| DataError::ParseError(e.to_string()))?
        .clone();
    require_columns(&headers)?;

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in reader.deserialize() {
        let row: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;
        match complete_row(row)? {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("{}: dropped {} incomplete rows", symbol, dropped);
    }

    Ok(QuoteSeries::new(symbol.clone(), records))
}

/// Write a series as `Date,Adj Close,Volume` with dates in `style`.
pub fn write_series<W: Write>(
    series: &QuoteSeries,
    style: DateStyle,
    output: W,
) -> Result<(), DataError> {
    let mut writer = WriterBuilder::new().from_writer(output);
    writer
        .write_record([DATE_COLUMN, ADJ_CLOSE_COLUMN, VOLUME_COLUMN])
        .map_err(|e| DataError::ParseError(e.to_string()))?;

    for record in series {
        writer
            .write_record([
                style.format(record.date),
                record.adj_close.to_string(),
                record.volume.to_string(),
            ])
            .map_err(|e| DataError::ParseError(e.to_string()))?;
    }

    writer.flush()?;
    Ok(())
}

fn require_columns(headers: &StringRecord) -> Result<(), DataError> {
    let missing: Vec<&str> = [DATE_COLUMN, ADJ_CLOSE_COLUMN, VOLUME_COLUMN]
        .into_iter()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DataError::ParseError(format!(
            "missing columns: {}",
            missing.join(", ")
        )))
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !NA_VALUES.contains(&v.as_str()))
}

/// `Ok(None)` when the row has a missing field.
fn complete_row(row: CsvRecord) -> Result<Option<QuoteRecord>, DataError> {
    let (Some(date), Some(adj_close), Some(volume)) =
        (present(row.date), present(row.adj_close), present(row.volume))
    else {
        return Ok(None);
    };

    let adj_close: f64 = adj_close
        .parse()
        .map_err(|_| DataError::ParseError(format!("bad adjusted close: {}", adj_close)))?;
    if adj_close.is_nan() {
        return Ok(None);
    }

    Ok(Some(QuoteRecord::new(
        parse_date(&date)?,
        adj_close,
        parse_volume(&volume)?,
    )))
}

/// Parse the date formats seen in exported price files.
fn parse_date(date_str: &str) -> Result<NaiveDate, DataError> {
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d);
        }
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}

/// Volumes are integral; tolerate a float rendering such as `1200.0`.
fn parse_volume(volume: &str) -> Result<u64, DataError> {
    if let Ok(v) = volume.parse::<u64>() {
        return Ok(v);
    }
    match volume.parse::<f64>() {
        Ok(v) if v >= 0.0 && v < u64::MAX as f64 && v.fract() == 0.0 => Ok(v as u64),
        _ => Err(DataError::ParseError(format!("bad volume: {}", volume))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOWNLOAD: &str = "\
Date,Open,High,Low,Close,Adj Close,Volume
2020-05-11,307.049988,317.049988,307.239990,315.010010,312.899078,36486600
2020-05-12,317.829987,319.690002,310.910004,311.410004,309.323090,40575300
2020-05-13,312.149994,315.950012,303.209991,307.649994,305.588226,50155600
2020-05-14,304.510010,309.790009,301.529999,309.540009,null,null
2020-05-15,300.350006,307.899994,300.209991,307.709991,305.649231,41587100
";

    fn symbol() -> Symbol {
        Symbol::parse("AAPL").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_download() {
        let series = parse_series(&symbol(), DOWNLOAD.as_bytes()).unwrap();

        assert_eq!(series.len(), 4);
        let first = series.first().unwrap();
        assert_eq!(first.date, date(2020, 5, 11));
        assert!((first.adj_close - 312.899078).abs() < 1e-9);
        assert_eq!(first.volume, 36_486_600);
        assert_eq!(series.last().unwrap().date, date(2020, 5, 15));
    }

    #[test]
    fn test_incomplete_rows_dropped() {
        let body = "\
Date,Adj Close,Volume
2020-01-02,10.0,100
2020-01-03,,200
2020-01-06,11.0,
2020-01-07,NaN,300
,12.0,400
2020-01-08,13.0,500
";
        let series = parse_series(&symbol(), body.as_bytes()).unwrap();
        let dates: Vec<_> = series.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2020, 1, 2), date(2020, 1, 8)]);
    }

    #[test]
    fn test_missing_column_is_error() {
        let body = "Date,Close,Volume\n2020-01-02,10.0,100\n";
        let err = parse_series(&symbol(), body.as_bytes()).unwrap_err();
        match err {
            DataError::ParseError(msg) => assert!(msg.contains("Adj Close")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_is_error() {
        assert!(matches!(
            parse_series(&symbol(), &b""[..]),
            Err(DataError::ParseError(_))
        ));
    }

    #[test]
    fn test_header_only_is_empty_series() {
        let series = parse_series(&symbol(), &b"Date,Adj Close,Volume\n"[..]).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2024-01-15").unwrap(), date(2024, 1, 15));
        assert_eq!(parse_date("2024/01/15").unwrap(), date(2024, 1, 15));
        assert_eq!(parse_date("01/15/2024").unwrap(), date(2024, 1, 15));
        assert_eq!(parse_date("2024-01-15 00:00:00").unwrap(), date(2024, 1, 15));
        assert!(parse_date("15th of January").is_err());
    }

    #[test]
    fn test_parse_volume() {
        assert_eq!(parse_volume("1200").unwrap(), 1200);
        assert_eq!(parse_volume("1200.0").unwrap(), 1200);
        assert!(parse_volume("12.5").is_err());
        assert!(parse_volume("-3").is_err());
    }

    #[test]
    fn test_parse_volume_out_of_range() {
        assert!(parse_volume("1e30").is_err());
        assert!(parse_volume("18446744073709551616.0").is_err());
        assert!(parse_volume("inf").is_err());
        assert_eq!(parse_volume("1e6").unwrap(), 1_000_000);
    }

    #[test]
    fn test_write_series_unpadded() {
        let series = QuoteSeries::new(
            symbol(),
            vec![QuoteRecord::new(date(2020, 5, 9), 10.25, 1000)],
        );
        let mut out = Vec::new();
        write_series(&series, DateStyle::Unpadded, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Date,Adj Close,Volume\n2020-5-9,10.25,1000\n"
        );
    }

    #[test]
    fn test_written_series_parses_back() {
        let series = parse_series(&symbol(), DOWNLOAD.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_series(&series, DateStyle::Iso, &mut out).unwrap();

        let reparsed = parse_series(&symbol(), out.as_slice()).unwrap();
        assert_eq!(reparsed, series);
    }
}
