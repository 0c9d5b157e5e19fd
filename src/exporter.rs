use crate::errors::AppResult;
use crate::models::TenderRecord;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Columns written to the exported CSV, in order.
pub const EXPORT_COLUMNS: [&str; 5] = [
    "Contractor(s) & Address(es)",
    "Subject",
    "Hospital",
    "Category",
    "Estimated Contract Amount",
];

/// Writes the filtered record set as CSV to any writer.
pub fn write_csv<W: Write>(records: &[&TenderRecord], writer: W) -> AppResult<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(EXPORT_COLUMNS)?;

    for record in records {
        csv_writer.write_record([
            record.contractors.as_str(),
            record.subject.as_str(),
            record.hospital.as_str(),
            record.category.display_name(),
            record.estimated_amount.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Exports the filtered record set to a CSV file.
pub fn export_to_file(records: &[&TenderRecord], output_path: &Path) -> AppResult<()> {
    let file = File::create(output_path)?;
    write_csv(records, file)?;
    info!(
        path = %output_path.display(),
        rows = records.len(),
        "CSV export written"
    );
    Ok(())
}
