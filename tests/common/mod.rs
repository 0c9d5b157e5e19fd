//! Common test utilities for integration tests

/// Builds a nine-cell data row for the tender award table.
#[allow(dead_code)]
pub fn data_row(hospital: &str, subject: &str, contractors: &str, item: &str) -> [String; 9] {
    [
        hospital.to_string(),
        "HKEH/T/001/24".to_string(),
        subject.to_string(),
        "Open Tender".to_string(),
        contractors.to_string(),
        item.to_string(),
        "1 Apr 2024 - 31 Mar 2025".to_string(),
        "HK$1,234,567".to_string(),
        "15 Mar 2024".to_string(),
    ]
}

/// Renders a complete page in the shape published by the source site: a
/// title outside the table, then one table whose first row is the header,
/// followed by six boilerplate note rows and the given data rows.
#[allow(dead_code)]
pub fn tender_page(data_rows: &[[String; 9]]) -> String {
    let mut html = String::from(
        "<html><body><h1>Tender Awards</h1><table>\n\
         <tr><th>Hospital</th><th>Tender Ref.</th><th>Subject</th>\
         <th>Procedure</th><th>Contractor</th><th>Item</th>\
         <th>Period</th><th>Amount</th><th>Award Date</th></tr>\n",
    );
    for i in 0..6 {
        html.push_str("<tr>");
        for _ in 0..9 {
            html.push_str(&format!("<td>Note {i}</td>"));
        }
        html.push_str("</tr>\n");
    }
    for row in data_rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table></body></html>");
    html
}

/// Page without any table, for ParseError coverage.
#[allow(dead_code)]
pub const TABLELESS_PAGE: &str = "<html><body><p>Maintenance in progress</p></body></html>";
