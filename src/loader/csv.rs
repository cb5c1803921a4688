//! CSV loading for production reports.
//!
//! The input files are `;`-separated with a header row. Required columns:
//! `Datum` (day.month.year) and `gyemant` (decimal-comma numeric). Optional
//! columns `arany` and `ezust` default to 0 at insert time when absent.

use crate::errors::{AppError, AppResult};
use crate::models::record::ProductionRecord;
use csv::{ReaderBuilder, StringRecord, Trim};

const COL_DATUM: &str = "Datum";
const COL_GOLD: &str = "arany";
const COL_SILVER: &str = "ezust";
const COL_DIAMOND: &str = "gyemant";

/// Load a production CSV into an ordered record list.
///
/// Any malformed row aborts the whole load; there is no row-level recovery.
pub fn load_csv(path: &str) -> AppResult<Vec<ProductionRecord>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();

    let idx_datum = require_column(&headers, COL_DATUM)?;
    let idx_diamond = require_column(&headers, COL_DIAMOND)?;
    let idx_gold = find_column(&headers, COL_GOLD);
    let idx_silver = find_column(&headers, COL_SILVER);

    let mut out = Vec::new();

    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        // header occupies line 1
        let line = i + 2;

        let datum = cell(&row, idx_datum)
            .ok_or_else(|| AppError::InvalidDate(format!("empty 'Datum' on line {}", line)))?;
        let (day, month, year) = split_datum(datum)
            .map_err(|e| AppError::InvalidDate(format!("{} (line {})", e, line)))?;

        let raw_diamond = cell(&row, idx_diamond)
            .ok_or_else(|| AppError::InvalidNumber(format!("empty 'gyemant' on line {}", line)))?;
        let diamond = parse_decimal_comma(raw_diamond)
            .map_err(|e| AppError::InvalidNumber(format!("{} (line {})", e, line)))?;

        let gold = optional_int(&row, idx_gold, COL_GOLD, line)?;
        let silver = optional_int(&row, idx_silver, COL_SILVER, line)?;

        out.push(ProductionRecord::new(year, month, day, gold, silver, diamond));
    }

    Ok(out)
}

fn require_column(headers: &StringRecord, name: &str) -> AppResult<usize> {
    find_column(headers, name).ok_or_else(|| AppError::MissingColumn(name.to_string()))
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

/// Non-empty cell content, if the column exists in this file at all.
fn cell<'r>(row: &'r StringRecord, idx: usize) -> Option<&'r str> {
    row.get(idx).filter(|v| !v.is_empty())
}

fn optional_int(
    row: &StringRecord,
    idx: Option<usize>,
    name: &str,
    line: usize,
) -> AppResult<Option<i64>> {
    let Some(idx) = idx else {
        return Ok(None);
    };

    match cell(row, idx) {
        None => Ok(None),
        Some(v) => v.parse::<i64>().map(Some).map_err(|_| {
            AppError::InvalidNumber(format!("invalid '{}' value '{}' (line {})", name, v, line))
        }),
    }
}

/// Split a dot-separated date into (day, month, year).
///
/// Exactly three integer parts are accepted; anything else is fatal.
pub fn split_datum(s: &str) -> Result<(i64, i64, i64), String> {
    let parts: Vec<&str> = s.split('.').collect();

    if parts.len() != 3 {
        return Err(format!("date '{}' must have exactly 3 dot-separated parts", s));
    }

    let mut nums = [0i64; 3];
    for (i, p) in parts.iter().enumerate() {
        nums[i] = p
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("non-numeric date part '{}' in '{}'", p, s))?;
    }

    Ok((nums[0], nums[1], nums[2]))
}

/// Normalize a decimal-comma numeric string and truncate it toward zero.
///
/// `"12,7"` → 12. A value left ambiguous by the replacement, such as
/// `"1,000,5"` → `"1.000.5"`, fails to parse and is rejected rather than
/// truncated to a valid prefix.
pub fn parse_decimal_comma(s: &str) -> Result<i64, String> {
    let cleaned = s.replace(',', ".");

    let value = cleaned
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid numeric value '{}'", s))?;

    if !value.is_finite() {
        return Err(format!("invalid numeric value '{}'", s));
    }

    Ok(value.trunc() as i64)
}
