use crate::errors::AppResult;
use crate::models::TenderRecord;
use std::io::Write;

/// Widths for the on-screen table columns: contractor, subject, hospital,
/// category, amount. Long cells are truncated with an ellipsis; the CSV
/// export carries the full text.
const TABLE_WIDTHS: [usize; 5] = [38, 44, 20, 20, 16];

const TABLE_TITLES: [&str; 5] = [
    "Contractor(s) & Address(es)",
    "Subject",
    "Hospital",
    "Category",
    "Est. Amount",
];

/// Maximum bar length for the contractor distribution chart.
const CHART_WIDTH: usize = 40;

/// Renders the filtered records as a fixed-width text table.
pub fn render_table<W: Write>(records: &[&TenderRecord], out: &mut W) -> AppResult<()> {
    writeln!(out, "Total records: {}", records.len())?;
    write_row(&TABLE_TITLES.map(String::from), out)?;
    write_separator(out)?;

    for record in records {
        let cells = [
            record.contractors.clone(),
            record.subject.clone(),
            record.hospital.clone(),
            record.category.display_name().to_string(),
            record.estimated_amount.clone(),
        ];
        write_row(&cells, out)?;
    }
    Ok(())
}

/// Renders the contractor distribution as a horizontal bar chart, one line
/// per contractor, bars scaled so the largest count fills `CHART_WIDTH`.
pub fn render_bar_chart<W: Write>(counts: &[(String, usize)], out: &mut W) -> AppResult<()> {
    writeln!(out, "Contractor Distribution")?;
    if counts.is_empty() {
        writeln!(out, "(no records)")?;
        return Ok(());
    }

    // First entry holds the maximum; counts are sorted descending.
    let max = counts[0].1.max(1);
    let label_width = counts
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    for (label, count) in counts {
        let bar_len = (count * CHART_WIDTH).div_ceil(max);
        writeln!(
            out,
            "{label:<label_width$}  {bar} {count}",
            bar = "#".repeat(bar_len),
        )?;
    }
    Ok(())
}

fn write_row<W: Write>(cells: &[String; 5], out: &mut W) -> AppResult<()> {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(TABLE_WIDTHS) {
        line.push_str(&format!("{:<width$}  ", clip(cell, width)));
    }
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

fn write_separator<W: Write>(out: &mut W) -> AppResult<()> {
    let total: usize = TABLE_WIDTHS.iter().sum::<usize>() + 2 * (TABLE_WIDTHS.len() - 1);
    writeln!(out, "{}", "-".repeat(total))?;
    Ok(())
}

/// Truncates a cell to the column width, marking the cut with an ellipsis.
fn clip(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return text.to_string();
    }
    let mut clipped: String = chars[..width.saturating_sub(1)].iter().collect();
    clipped.push('…');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TenderRecord};

    fn record(contractors: &str) -> TenderRecord {
        TenderRecord {
            hospital: "QMH".to_string(),
            tender_reference: "T-001".to_string(),
            subject: "Paracetamol Tablet".to_string(),
            tendering_procedure: "Open Tender".to_string(),
            contractors: contractors.to_string(),
            item: "1".to_string(),
            contract_period: "2024".to_string(),
            estimated_amount: "HK$1,000".to_string(),
            date_of_award: "2024-01-01".to_string(),
            category: Category::Pharma,
        }
    }

    fn render_to_string<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> crate::errors::AppResult<()>,
    {
        let mut buffer = Vec::new();
        render(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("valid utf8")
    }

    #[test]
    fn test_render_table_includes_count_and_rows() {
        let records = vec![record("ACME Ltd"), record("Beta Corp")];
        let refs: Vec<&TenderRecord> = records.iter().collect();
        let output = render_to_string(|out| render_table(&refs, out));

        assert!(output.contains("Total records: 2"));
        assert!(output.contains("ACME Ltd"));
        assert!(output.contains("Pharma"));
        assert!(output.contains("Contractor(s) & Address(es)"));
    }

    #[test]
    fn test_render_table_clips_long_cells() {
        let long_name = "X".repeat(80);
        let records = vec![record(&long_name)];
        let refs: Vec<&TenderRecord> = records.iter().collect();
        let output = render_to_string(|out| render_table(&refs, out));

        assert!(!output.contains(&long_name));
        assert!(output.contains('…'));
    }

    #[test]
    fn test_render_bar_chart_scales_to_max() {
        let counts = vec![("ACME Ltd".to_string(), 4), ("Beta Corp".to_string(), 1)];
        let output = render_to_string(|out| render_bar_chart(&counts, out));

        assert!(output.contains("Contractor Distribution"));
        assert!(output.contains(&"#".repeat(40)));
        assert!(output.contains(&format!("Beta Corp  {} 1", "#".repeat(10))));
    }

    #[test]
    fn test_render_bar_chart_empty() {
        let output = render_to_string(|out| render_bar_chart(&[], out));
        assert!(output.contains("(no records)"));
    }

    #[test]
    fn test_clip_short_text_unchanged() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("exact", 5), "exact");
    }
}
