use crate::errors::{AppError, AppResult};
use crate::models::RawTable;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::info;
use url::Url;

// Selectors
const TABLE_SELECTOR: &str = "table";
const ROW_SELECTOR: &str = "tr";
const CELL_SELECTOR: &str = "th, td";

/// Upper bound on the blocking network fetch. Surfaced as a FetchError
/// rather than hanging the session.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Cached CSS selectors, compiled once at initialization.
static TABLE_SELECTOR_CACHED: OnceLock<Selector> = OnceLock::new();
static ROW_SELECTOR_CACHED: OnceLock<Selector> = OnceLock::new();
static CELL_SELECTOR_CACHED: OnceLock<Selector> = OnceLock::new();

/// Builds the HTTP client used for page fetches, with the request timeout
/// applied.
pub fn build_client() -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| AppError::FetchError(format!("failed to build HTTP client: {e}")))
}

/// Fetches a page and extracts its first `<table>` element.
///
/// # Arguments
///
/// * `client` - HTTP client to use for the request
/// * `input_url` - URL of the page containing the tender award table
///
/// # Errors
///
/// Returns `FetchError` on network failure, timeout, or a non-2xx status,
/// and `ParseError` when the page contains no table. No retry is attempted;
/// the error is surfaced to the caller for display.
pub async fn fetch_table(client: &reqwest::Client, input_url: &str) -> AppResult<RawTable> {
    let url = Url::parse(input_url)?;

    info!(url = %url, "Fetching tender award page");
    let response = client
        .get(url.as_str())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let table = extract_first_table(&response)?;
    info!(rows = table.row_count(), "Table extracted");
    Ok(table)
}

/// Parses HTML content and extracts the first `<table>` element as rows of
/// cell texts.
///
/// Both `<th>` and `<td>` cells are collected so the header row comes
/// through like any other row; the cleaner is responsible for dropping it.
/// Cell text is whitespace-normalized (nested tags flattened, runs of
/// whitespace collapsed to single spaces).
///
/// # Errors
///
/// Returns `ParseError` when the document has no `<table>` element or the
/// first table contains no rows.
pub fn extract_first_table(html: &str) -> AppResult<RawTable> {
    let document = Html::parse_document(html);

    let table_selector = TABLE_SELECTOR_CACHED.get_or_init(|| {
        Selector::parse(TABLE_SELECTOR).expect("TABLE_SELECTOR is a valid CSS selector")
    });
    let row_selector = ROW_SELECTOR_CACHED.get_or_init(|| {
        Selector::parse(ROW_SELECTOR).expect("ROW_SELECTOR is a valid CSS selector")
    });
    let cell_selector = CELL_SELECTOR_CACHED.get_or_init(|| {
        Selector::parse(CELL_SELECTOR).expect("CELL_SELECTOR is a valid CSS selector")
    });

    let table = document
        .select(table_selector)
        .next()
        .ok_or_else(|| AppError::ParseError("no <table> element found in page".to_string()))?;

    let rows: Vec<Vec<String>> = table
        .select(row_selector)
        .map(|row| {
            row.select(cell_selector)
                .map(|cell| normalize_whitespace(&cell.text().collect::<String>()))
                .collect()
        })
        .collect();

    if rows.is_empty() {
        return Err(AppError::ParseError(
            "first <table> element contains no rows".to_string(),
        ));
    }

    Ok(RawTable { rows })
}

/// Collapses runs of whitespace (including newlines from nested markup) to
/// single spaces and trims the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::{extract_first_table, normalize_whitespace};
    use crate::errors::AppError;

    #[test]
    fn test_extract_first_table_basic() {
        let html = r#"
            <html><body>
              <table>
                <tr><th>Hospital</th><th>Subject</th></tr>
                <tr><td>QMH</td><td>Surgical Gloves</td></tr>
              </table>
            </body></html>
        "#;

        let table = extract_first_table(html).expect("parse succeeds");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["Hospital", "Subject"]);
        assert_eq!(table.rows[1], vec!["QMH", "Surgical Gloves"]);
    }

    #[test]
    fn test_extract_first_table_only_first_table_is_read() {
        let html = r#"
            <table><tr><td>first</td></tr></table>
            <table><tr><td>second</td></tr></table>
        "#;

        let table = extract_first_table(html).expect("parse succeeds");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["first"]);
    }

    #[test]
    fn test_extract_first_table_flattens_nested_markup() {
        let html = r#"
            <table>
              <tr><td>ABC   Medical
                <br/> Supplies <b>Ltd</b></td></tr>
            </table>
        "#;

        let table = extract_first_table(html).expect("parse succeeds");
        assert_eq!(table.rows[0], vec!["ABC Medical Supplies Ltd"]);
    }

    #[test]
    fn test_extract_first_table_no_table_is_parse_error() {
        let html = "<html><body><p>nothing here</p></body></html>";
        let err = extract_first_table(html).unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn test_extract_first_table_empty_table_is_parse_error() {
        let html = "<table></table>";
        let err = extract_first_table(html).unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
        assert_eq!(normalize_whitespace(""), "");
    }
}
