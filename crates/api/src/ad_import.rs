// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ad-details ledger import and customer-sheet export.
//!
//! The ledger is a positional CSV export with a preamble of title and header
//! rows before the first customer. Rows are parsed once into [`AdRow`] here
//! and never handled as raw cells again.

use std::collections::BTreeMap;

use adsales_domain::{AccountReport, AdRow, CustomerType, evaluate_account, format_currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Physical lines (blank ones included) preceding the first customer row.
pub const PREAMBLE_ROWS: usize = 6;

/// First and last volume given a column in the customer sheet.
pub const SHEET_FIRST_VOLUME: u32 = 550;
pub const SHEET_LAST_VOLUME: u32 = 574;

/// Ad-details import and export errors.
#[derive(Debug, Error)]
pub enum AdImportError {
    /// The ledger could not be parsed or the sheet could not be written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the sheet writer failed.
    #[error("Failed to write customer sheet: {0}")]
    Io(#[from] std::io::Error),

    /// The written sheet was not UTF-8.
    #[error("Customer sheet is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// One customer row of the ledger with its evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdPreviewRow {
    /// 1-based line number in the uploaded file.
    pub line: usize,
    pub row: AdRow,
    pub report: AccountReport,
}

/// Counts over the imported customers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdImportSummary {
    /// Rows in the file, preamble included.
    pub source_rows: usize,
    pub customer_count: usize,
    /// Customers per segment label. Rows with no size are counted as `Unclassified`.
    pub by_customer_type: BTreeMap<String, usize>,
    /// Customers whose ledger records a balance still to collect.
    pub unpaid_customer_count: usize,
}

/// Parsed ledger plus summary, nothing persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdDetailsPreview {
    pub rows: Vec<AdPreviewRow>,
    pub summary: AdImportSummary,
}

/// Delimiter of an exported customer sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    /// Tab separated, for pasting into a spreadsheet.
    Tsv,
}

impl ExportFormat {
    #[must_use]
    pub const fn delimiter(&self) -> u8 {
        match self {
            Self::Csv => b',',
            Self::Tsv => b'\t',
        }
    }

    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Tsv => "text/tab-separated-values; charset=utf-8",
        }
    }
}

const UNCLASSIFIED: &str = "Unclassified";

/// Reads the customer rows of an ad-details ledger.
///
/// Skips the preamble and every row without a customer name.
///
/// # Errors
///
/// Returns an error if the CSV cannot be parsed.
pub fn parse_ad_details(csv_text: &str) -> Result<Vec<(usize, AdRow)>, AdImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut rows: Vec<(usize, AdRow)> = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record: csv::StringRecord = record?;
        // The preamble is counted in physical lines; the reader drops blank ones.
        let line: usize = record
            .position()
            .and_then(|position| usize::try_from(position.line()).ok())
            .unwrap_or(index + 1);
        if line <= PREAMBLE_ROWS {
            continue;
        }
        let row: AdRow = AdRow::from_fields(record.iter());
        if row.has_customer() {
            rows.push((line, row));
        }
    }
    Ok(rows)
}

/// Parses and evaluates a ledger without persisting anything.
///
/// # Arguments
///
/// * `csv_text` - The raw ledger export
/// * `current_volume` - The volume contract and payment status are judged against
///
/// # Errors
///
/// Returns an error if the CSV cannot be parsed.
pub fn preview_ad_details(
    csv_text: &str,
    current_volume: u32,
) -> Result<AdDetailsPreview, AdImportError> {
    let source_rows: usize = csv_text.lines().count();
    let parsed: Vec<(usize, AdRow)> = parse_ad_details(csv_text)?;

    let mut summary: AdImportSummary = AdImportSummary {
        source_rows,
        customer_count: parsed.len(),
        ..AdImportSummary::default()
    };

    let rows: Vec<AdPreviewRow> = parsed
        .into_iter()
        .map(|(line, row)| {
            let segment: &str = row.customer_type().map_or(UNCLASSIFIED, |t| t.label());
            *summary
                .by_customer_type
                .entry(segment.to_string())
                .or_insert(0) += 1;
            if row.recorded_unpaid() > 0.0 {
                summary.unpaid_customer_count += 1;
            }
            let report: AccountReport = evaluate_account(&row, current_volume);
            AdPreviewRow { line, row, report }
        })
        .collect();

    info!(
        source_rows = summary.source_rows,
        customers = summary.customer_count,
        unpaid_customers = summary.unpaid_customer_count,
        "Ad details parsed"
    );
    for (segment, count) in &summary.by_customer_type {
        info!(segment = %segment, count, "Customers by segment");
    }

    Ok(AdDetailsPreview { rows, summary })
}

fn sheet_header() -> Vec<String> {
    let mut header: Vec<String> = [
        "Customer Type",
        "Customer",
        "Address",
        "Phone",
        "Mobile",
        "Ad Size",
        "Contract Total",
        "Start Volume",
        "End Volume",
        "Unit Price",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    header.extend((SHEET_FIRST_VOLUME..=SHEET_LAST_VOLUME).map(|v| format!("Vol {v}")));
    header.push(String::from("Accumulated Unpaid"));
    header.push(String::from("Remarks"));
    header
}

fn currency_or_blank(amount: f64) -> String {
    if amount > 0.0 {
        format_currency(amount)
    } else {
        String::new()
    }
}

fn volume_or_blank(volume: Option<u32>) -> String {
    volume.map(|v| v.to_string()).unwrap_or_default()
}

fn sheet_record(row: &AdRow) -> Vec<String> {
    let window = row.contract_window();
    let price: f64 = row.price_per_issue();
    let phones = row.phone_numbers();
    // Unknown windows get no total in the sheet.
    let total: f64 = window
        .issue_count()
        .map_or(0.0, |issues| price * f64::from(issues));
    let price_cell: String = format_currency(price);

    let mut record: Vec<String> = vec![
        row.customer_type()
            .map_or("", |segment: CustomerType| segment.label())
            .to_string(),
        row.customer.trim().to_string(),
        row.address.trim().to_string(),
        phones.phone,
        phones.mobile,
        row.size.trim().to_string(),
        currency_or_blank(total),
        volume_or_blank(window.start_volume),
        volume_or_blank(window.end_volume),
        currency_or_blank(price),
    ];
    record.extend((SHEET_FIRST_VOLUME..=SHEET_LAST_VOLUME).map(|volume| {
        if window.issue_count().is_some() && window.contains(volume) {
            price_cell.clone()
        } else {
            String::new()
        }
    }));
    record.push(format_currency(row.recorded_unpaid()));
    record.push(row.remarks.trim().to_string());
    record
}

/// Writes one customer-sheet row per ledger row.
///
/// # Arguments
///
/// * `rows` - Parsed ledger rows
/// * `format` - CSV or TSV output
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn export_customer_sheet(rows: &[AdRow], format: ExportFormat) -> Result<String, AdImportError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .from_writer(Vec::new());

    writer.write_record(sheet_header())?;
    for row in rows {
        writer.write_record(sheet_record(row))?;
    }

    let bytes: Vec<u8> = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;
    Ok(String::from_utf8(bytes)?)
}
