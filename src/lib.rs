//! hata-cli library
//!
//! This crate provides the core functionality for the `hata-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that mirror the stages of the
//! tender award pipeline:
//!
//! - [`fetcher`] - Fetches a page over HTTP and extracts its first HTML table
//! - [`cleaner`] - Validates the table shape, drops header/boilerplate rows and relabels columns
//! - [`categorizer`] - Assigns a procurement category from ordered keyword rules
//! - [`filter`] - Hospital/category filtering and contractor aggregation
//! - [`exporter`] - CSV export of the filtered record set
//! - [`session`] - Session-scoped state for the interactive shell
//! - [`ui`] - Text table and bar chart rendering
//! - [`cli`] - Command-line interface for the one-shot and interactive modes
//! - [`models`] - Data structures for records and categories
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! The typical workflow fetches a page, cleans the scraped table into
//! categorized records, then filters and renders them:
//!
//! ```no_run
//! use hata_cli::{cleaner, fetcher, filter, errors::AppResult};
//!
//! # async fn example() -> AppResult<()> {
//! let client = fetcher::build_client()?;
//! let raw = fetcher::fetch_table(&client, "https://example.com/awards.html").await?;
//! let records = cleaner::clean(&raw)?;
//!
//! let filters = filter::FilterSet::default();
//! let visible = filter::apply(&records, &filters);
//! println!("{} records", visible.len());
//! # Ok(())
//! # }
//! ```

pub mod categorizer;
pub mod cleaner;
pub mod cli;
pub mod errors;
pub mod exporter;
pub mod fetcher;
pub mod filter;
pub mod models;
pub mod session;
pub mod ui;
