use crate::categorizer::categorize;
use crate::errors::{AppError, AppResult};
use crate::models::{RawTable, TenderRecord};
use tracing::info;

/// Canonical column labels for the nine-column tender award table, in
/// source order.
pub const COLUMN_HEADERS: [&str; 9] = [
    "Hospital",
    "Tender Reference",
    "Subject",
    "Tendering Procedure",
    "Contractor(s) & Address(es)",
    "Item",
    "Contract Period",
    "Estimated Contract Amount",
    "Date of Award",
];

/// The source table repeats its header as the first row.
const HEADER_ROWS: usize = 1;

/// Number of leading boilerplate rows after the header (notes and legend
/// text published above the data).
const BOILERPLATE_ROWS: usize = 6;

/// Cleans a raw scraped table into categorized tender records.
///
/// Steps, in order:
/// 1. Require at least the header and boilerplate rows to be present.
/// 2. Skip the header row and the fixed run of boilerplate rows.
/// 3. Validate that every remaining row has exactly nine cells; a row with
///    any other width fails loudly with `StructureMismatch` instead of
///    silently misaligning fields.
/// 4. Build records and assign each its category from the Subject text.
/// 5. Scrub: drop rows with an empty Subject and rows whose Item field is a
///    stray repeated header.
///
/// # Errors
///
/// Returns `ParseError` when the table is shorter than the fixed
/// header/boilerplate prefix, and `StructureMismatch` when any data row
/// does not have nine columns.
pub fn clean(raw: &RawTable) -> AppResult<Vec<TenderRecord>> {
    let skip = HEADER_ROWS + BOILERPLATE_ROWS;
    if raw.rows.len() < skip {
        return Err(AppError::ParseError(format!(
            "table has {} rows, shorter than the {skip}-row header/boilerplate prefix",
            raw.rows.len()
        )));
    }

    let mut records = Vec::with_capacity(raw.rows.len() - skip);
    for (offset, row) in raw.rows.iter().enumerate().skip(skip) {
        if row.len() != COLUMN_HEADERS.len() {
            return Err(AppError::StructureMismatch {
                row: offset,
                expected: COLUMN_HEADERS.len(),
                found: row.len(),
            });
        }
        records.push(record_from_row(row));
    }

    let total = records.len();
    let records = scrub(records);
    info!(
        rows_scraped = raw.rows.len(),
        rows_kept = records.len(),
        rows_scrubbed = total - records.len(),
        "Table cleaned"
    );
    Ok(records)
}

/// Drops rows that carry no data: an empty Subject, or an Item field
/// containing the literal substring "item" (the source table repeats its
/// header mid-table and those rows come through with "Item" in the Item
/// column).
///
/// Idempotent: scrubbing an already-scrubbed set drops nothing.
pub fn scrub(records: Vec<TenderRecord>) -> Vec<TenderRecord> {
    records
        .into_iter()
        .filter(|r| !r.subject.trim().is_empty())
        .filter(|r| !r.item.to_lowercase().contains("item"))
        .collect()
}

fn record_from_row(row: &[String]) -> TenderRecord {
    TenderRecord {
        hospital: row[0].clone(),
        tender_reference: row[1].clone(),
        subject: row[2].clone(),
        tendering_procedure: row[3].clone(),
        contractors: row[4].clone(),
        item: row[5].clone(),
        contract_period: row[6].clone(),
        estimated_amount: row[7].clone(),
        date_of_award: row[8].clone(),
        category: categorize(&row[2]),
    }
}
