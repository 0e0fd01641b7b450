use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::config::normalize_label;
use crate::models::Payment;

/// How to read one file layout.
///
/// The source variants disagree on which header names the portfolio column
/// ("Cartera_x" vs "Cartera_y" vs "Cartera_Pagos"), so every column is
/// configuration here; nothing downstream ever sees a column name.
#[derive(Debug, Clone)]
pub(crate) struct SchemaProfile {
    pub(crate) name: String,
    pub(crate) cartera_column: usize,
    pub(crate) when: WhenColumns,
    pub(crate) amount_column: usize,
    pub(crate) has_header: bool,
    pub(crate) skip_rows: usize,
    /// Fold drifted labels (underscores, stray whitespace) at load time.
    pub(crate) normalize_labels: bool,
}

/// Where a row's (month, day) comes from.
#[derive(Debug, Clone)]
pub(crate) enum WhenColumns {
    /// Separate creation-month (1-12 or a Spanish month name) and
    /// day-of-month columns.
    MonthDay { month: usize, day: usize },
    /// A single date column parsed with the given chrono format.
    Date { column: usize, format: String },
}

impl Default for SchemaProfile {
    fn default() -> Self {
        Self {
            name: "Custom".into(),
            cartera_column: 0,
            when: WhenColumns::MonthDay { month: 1, day: 2 },
            amount_column: 3,
            has_header: true,
            skip_rows: 0,
            normalize_labels: true,
        }
    }
}

/// The outcome of a parse: the typed payments plus every row that was
/// quarantined. A malformed row never aborts the load.
#[derive(Debug, Default)]
pub(crate) struct ImportReport {
    pub(crate) payments: Vec<Payment>,
    pub(crate) skipped: Vec<SkippedRow>,
}

impl ImportReport {
    pub(crate) fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SkippedRow {
    /// 1-based row number within the data rows.
    pub(crate) row: usize,
    pub(crate) reason: String,
}

pub(crate) struct CsvImporter;

impl CsvImporter {
    /// Read the CSV and return headers + all rows as strings.
    pub(crate) fn preview(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .from_path(path)
            .context("Failed to open CSV file")?;

        let mut all_rows: Vec<Vec<String>> = Vec::new();
        for result in rdr.records() {
            let record = result.context("Failed to read CSV record")?;
            all_rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        if all_rows.is_empty() {
            anyhow::bail!("CSV file is empty");
        }

        // Try to detect if first row is a header
        let first_row = &all_rows[0];
        let looks_like_header = first_row.iter().all(|field| {
            let trimmed = field.trim();
            // Headers typically don't parse as numbers or dates
            Decimal::from_str(trimmed.replace(['$', ','], "").trim()).is_err()
                && NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_err()
                && NaiveDate::parse_from_str(trimmed, "%d/%m/%Y").is_err()
        });

        if looks_like_header {
            let headers = all_rows.remove(0);
            Ok((headers, all_rows))
        } else {
            // Generate generic column names
            let headers: Vec<String> = (0..first_row.len())
                .map(|i| format!("Column {}", i + 1))
                .collect();
            Ok((headers, all_rows))
        }
    }

    /// Type every row using the given profile. Rows that cannot produce a
    /// valid `Payment` are quarantined with a reason; fully blank rows are
    /// dropped silently.
    pub(crate) fn parse(rows: &[Vec<String>], profile: &SchemaProfile) -> ImportReport {
        let mut report = ImportReport::default();

        for (i, row) in rows.iter().enumerate().skip(profile.skip_rows) {
            if row.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            match parse_row(row, profile) {
                Ok(payment) => report.payments.push(payment),
                Err(reason) => {
                    log::warn!("row {}: {reason}", i + 1);
                    report.skipped.push(SkippedRow {
                        row: i + 1,
                        reason,
                    });
                }
            }
        }

        report
    }
}

fn parse_row(row: &[String], profile: &SchemaProfile) -> std::result::Result<Payment, String> {
    let raw_label = row
        .get(profile.cartera_column)
        .map(|s| s.trim())
        .unwrap_or_default();
    if raw_label.is_empty() {
        return Err("missing portfolio label".into());
    }
    let cartera = if profile.normalize_labels {
        normalize_label(raw_label)
    } else {
        raw_label.to_string()
    };

    let (month, day) = match &profile.when {
        WhenColumns::MonthDay { month, day } => {
            let m = parse_month(field(row, *month))?;
            let d = parse_day(field(row, *day))?;
            (m, d)
        }
        WhenColumns::Date { column, format } => {
            let date = parse_date(field(row, *column), format)?;
            (date.month(), date.day())
        }
    };

    let amount = parse_decimal(field(row, profile.amount_column))
        .map_err(|e| format!("bad amount: {e}"))?;
    if amount < Decimal::ZERO {
        return Err(format!("negative amount: {amount}"));
    }

    Ok(Payment::new(cartera, month, day, amount))
}

fn field<'a>(row: &'a [String], idx: usize) -> &'a str {
    row.get(idx).map(|s| s.trim()).unwrap_or_default()
}

/// Accept a month number (1-12) or a Spanish month name.
fn parse_month(s: &str) -> std::result::Result<u32, String> {
    if s.is_empty() {
        return Err("missing month".into());
    }
    if let Ok(n) = s.parse::<u32>() {
        if (1..=12).contains(&n) {
            return Ok(n);
        }
        return Err(format!("month out of range: {n}"));
    }
    let names = [
        "enero",
        "febrero",
        "marzo",
        "abril",
        "mayo",
        "junio",
        "julio",
        "agosto",
        "septiembre",
        "octubre",
        "noviembre",
        "diciembre",
    ];
    let lower = s.to_lowercase();
    names
        .iter()
        .position(|n| *n == lower)
        .map(|i| i as u32 + 1)
        .ok_or_else(|| format!("unrecognized month: {s}"))
}

fn parse_day(s: &str) -> std::result::Result<u32, String> {
    if s.is_empty() {
        return Err("missing day".into());
    }
    match s.parse::<u32>() {
        Ok(d) if (1..=31).contains(&d) => Ok(d),
        Ok(d) => Err(format!("day out of range: {d}")),
        Err(_) => Err(format!("unrecognized day: {s}")),
    }
}

fn parse_date(s: &str, fmt: &str) -> std::result::Result<NaiveDate, String> {
    if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
        return Ok(d);
    }
    // Fallback: try common formats, day-first variants before US order
    for fallback in &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fallback) {
            return Ok(d);
        }
    }
    Err(format!("could not parse date: {s}"))
}

fn parse_decimal(s: &str) -> std::result::Result<Decimal, String> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return Err("empty value".into());
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_str(&cleaned.replace('"', "")))
        .map_err(|_| format!("'{s}' is not a number"))
}

#[cfg(test)]
#[path = "csv_import_tests.rs"]
mod tests;
