use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Network request failed (non-2xx status, timeout, transport error)
    FetchError(String),
    /// Failed to extract a usable table from the HTML content
    ParseError(String),
    /// Table shape does not match the expected nine-column schema
    StructureMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Invalid URL format
    UrlError(String),
    /// Selector parsing failed
    SelectorError(String),
    /// Invalid input format
    InvalidInput(String),
    /// CSV serialization failed
    CsvError(String),
    /// IO operation failed
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FetchError(msg) => write!(f, "Fetch error: {msg}"),
            AppError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            AppError::StructureMismatch {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Structure mismatch at row {row}: expected {expected} columns, found {found}"
                )
            }
            AppError::UrlError(msg) => write!(f, "Invalid URL: {msg}"),
            AppError::SelectorError(msg) => write!(f, "CSS selector error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            AppError::CsvError(msg) => write!(f, "CSV error: {msg}"),
            AppError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::FetchError(format!("request timed out: {err}"))
        } else {
            AppError::FetchError(err.to_string())
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::CsvError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn test_structure_mismatch_display() {
        let err = AppError::StructureMismatch {
            row: 12,
            expected: 9,
            found: 7,
        };

        let error_msg = err.to_string();
        assert!(error_msg.contains("row 12"));
        assert!(error_msg.contains("expected 9"));
        assert!(error_msg.contains("found 7"));
    }

    #[test]
    fn test_fetch_error_display() {
        let err = AppError::FetchError("Connection timeout".to_string());
        assert!(err.to_string().contains("Fetch error"));
        assert!(err.to_string().contains("Connection timeout"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = AppError::ParseError("no <table> element found".to_string());
        assert!(err.to_string().contains("Parse error"));
        assert!(err.to_string().contains("no <table> element found"));
    }

    #[test]
    fn test_url_error_display() {
        let err = AppError::UrlError("relative URL without a base".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_invalid_input_error_display() {
        let err = AppError::InvalidInput("unknown category".to_string());
        assert!(err.to_string().contains("Invalid input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AppError::from(io_err);
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_app_error_implements_error_trait() {
        use std::error::Error;
        let err: Box<dyn Error> = Box::new(AppError::FetchError("test".to_string()));
        assert!(!err.to_string().is_empty());
    }
}
