use crate::cleaner::clean;
use crate::errors::{AppError, AppResult};
use crate::exporter::export_to_file;
use crate::fetcher::{build_client, fetch_table};
use crate::filter::{contractor_counts, FilterSet};
use crate::models::{Category, TenderRecord, ALL_CATEGORIES};
use crate::session::Session;
use crate::ui::{render_bar_chart, render_table};
use clap::{Arg, ArgAction, Command};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

const SHELL_HELP: &str = "\
Commands:
  load <url>              Fetch the tender award table from a URL
  hospitals [a; b; ...]   Filter by hospitals (no names clears the filter)
  categories [a; b; ...]  Filter by categories (no names clears the filter)
  show                    Print the filtered records as a table
  chart                   Print the contractor distribution bar chart
  export <path>           Write the filtered records to a CSV file
  status                  Show loaded URL, record counts and active filters
  clear                   Clear all filters
  help                    Show this help
  quit                    Exit the shell";

/// Parses command-line arguments and runs the selected mode.
///
/// Two subcommands share the same fetch/clean/categorize pipeline:
/// - `fetch`: one-shot — fetch a URL, apply filters given as flags, print
///   the table and chart, optionally export a CSV.
/// - `shell`: interactive session with `load`/filter/`show`/`export`
///   commands.
///
/// No subcommand prints the help text.
pub async fn run() -> AppResult<()> {
    let cmd = Command::new("hata-cli")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("fetch")
                .about("Fetch a tender award table once, print it and optionally export CSV")
                .after_help(
                    "Example:\n  hata-cli fetch -u https://example.com/awards.html \\\n      -H \"Queen Mary Hospital\" -c Pharma -e pharma.csv",
                )
                .arg(
                    Arg::new("url")
                        .short('u')
                        .long("url")
                        .help("URL of the page containing the tender award table")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("hospital")
                        .short('H')
                        .long("hospital")
                        .help("Only include this hospital (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .help("Only include this category (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("export")
                        .short('e')
                        .long("export")
                        .help("Write the filtered records to this CSV file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(Command::new("shell").about("Interactive session for exploring tender awards"));

    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("fetch", sub)) => {
            let url = sub.get_one::<String>("url").expect("url is required");
            let hospitals: Vec<String> = sub
                .get_many::<String>("hospital")
                .map(|vals| vals.cloned().collect())
                .unwrap_or_default();
            let categories = parse_categories(
                &sub.get_many::<String>("category")
                    .map(|vals| vals.cloned().collect::<Vec<_>>())
                    .unwrap_or_default(),
            )?;
            let export_path = sub.get_one::<PathBuf>("export").cloned();

            run_fetch(url, &hospitals, &categories, export_path.as_deref()).await?;
        }
        Some(("shell", _)) => {
            run_shell().await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

/// One-shot workflow: fetch, clean, filter, render, export.
async fn run_fetch(
    url: &str,
    hospitals: &[String],
    categories: &[Category],
    export_path: Option<&std::path::Path>,
) -> AppResult<()> {
    let client = build_client()?;
    let records = load_records(&client, url).await?;

    let mut filters = FilterSet::default();
    filters.set_hospitals(hospitals);
    filters.set_categories(categories.iter().copied());
    let filtered: Vec<&TenderRecord> = crate::filter::apply(&records, &filters);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_table(&filtered, &mut out)?;
    writeln!(out)?;
    render_bar_chart(&contractor_counts(&filtered), &mut out)?;

    if let Some(path) = export_path {
        export_to_file(&filtered, path)?;
        writeln!(out, "Exported {} records to {}", filtered.len(), path.display())?;
    }
    Ok(())
}

/// Interactive shell owning one [`Session`]. Command errors are reported
/// inline and never terminate the loop; a failed `load` resets the session
/// to the empty state.
async fn run_shell() -> AppResult<()> {
    let client = build_client()?;
    let mut session = Session::new();

    println!("hata-cli {APP_VERSION} interactive shell. Type 'help' for commands.");
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match dispatch(&client, &mut session, line.trim()).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

/// Executes one shell command. Returns `Ok(false)` when the shell should
/// exit.
async fn dispatch(
    client: &reqwest::Client,
    session: &mut Session,
    input: &str,
) -> AppResult<bool> {
    let (command, rest) = match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "" => {}
        "load" => {
            if rest.is_empty() {
                return Err(AppError::InvalidInput("usage: load <url>".to_string()));
            }
            match load_records(client, rest).await {
                Ok(records) => {
                    println!("Loaded {} records from {rest}", records.len());
                    session.load(records, rest.to_string());
                    let options = session.hospital_options();
                    if !options.is_empty() {
                        println!("Hospitals: {}", options.join("; "));
                    }
                }
                Err(e) => {
                    // Stale records from the previous URL must not survive a
                    // failed load.
                    session.reset();
                    return Err(e);
                }
            }
        }
        "hospitals" => {
            session.filters_mut().set_hospitals(split_names(rest));
            report_filters(session);
        }
        "categories" => {
            let categories = parse_categories(&split_names(rest))?;
            session.filters_mut().set_categories(categories);
            report_filters(session);
        }
        "show" => {
            if require_loaded(session) {
                let filtered = session.filtered();
                let stdout = io::stdout();
                render_table(&filtered, &mut stdout.lock())?;
            }
        }
        "chart" => {
            if require_loaded(session) {
                let counts = contractor_counts(&session.filtered());
                let stdout = io::stdout();
                render_bar_chart(&counts, &mut stdout.lock())?;
            }
        }
        "export" => {
            if rest.is_empty() {
                return Err(AppError::InvalidInput("usage: export <path>".to_string()));
            }
            if require_loaded(session) {
                let filtered = session.filtered();
                export_to_file(&filtered, std::path::Path::new(rest))?;
                println!("Exported {} records to {rest}", filtered.len());
            }
        }
        "status" => {
            match session.source_url() {
                Some(url) => println!("Source: {url}"),
                None => println!("Source: (none)"),
            }
            println!(
                "Records: {} loaded, {} after filters",
                session.records().len(),
                session.filtered().len()
            );
            report_filters(session);
        }
        "clear" => {
            session.filters_mut().clear();
            println!("Filters cleared");
        }
        "help" => println!("{SHELL_HELP}"),
        "quit" | "exit" => return Ok(false),
        other => {
            return Err(AppError::InvalidInput(format!(
                "unknown command '{other}'; type 'help' for commands"
            )));
        }
    }
    Ok(true)
}

/// Fetch + clean + categorize for one URL.
async fn load_records(client: &reqwest::Client, url: &str) -> AppResult<Vec<TenderRecord>> {
    let raw = fetch_table(client, url).await?;
    let records = clean(&raw)?;
    info!(url = url, records = records.len(), "Records loaded");
    Ok(records)
}

/// Splits a semicolon-separated name list, dropping empty segments.
/// Semicolons rather than spaces so multi-word hospital and category names
/// need no quoting.
fn split_names(input: &str) -> Vec<String> {
    input
        .split(';')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Parses category names, rejecting anything unrecognized so a typo does
/// not silently become an empty filter.
fn parse_categories(names: &[String]) -> AppResult<Vec<Category>> {
    names
        .iter()
        .map(|name| {
            Category::parse(name).ok_or_else(|| {
                let options = ALL_CATEGORIES
                    .iter()
                    .map(|c| c.display_name())
                    .collect::<Vec<_>>()
                    .join(", ");
                AppError::InvalidInput(format!(
                    "unknown category '{name}'; expected one of: {options}"
                ))
            })
        })
        .collect()
}

fn report_filters(session: &Session) {
    let filters = session.filters();
    let hospitals = if filters.hospitals().is_empty() {
        "(all)".to_string()
    } else {
        filters
            .hospitals()
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join("; ")
    };
    let categories = if filters.categories().is_empty() {
        "(all)".to_string()
    } else {
        filters
            .categories()
            .iter()
            .map(|c| c.display_name())
            .collect::<Vec<_>>()
            .join("; ")
    };
    println!("Filter hospitals: {hospitals}");
    println!("Filter categories: {categories}");
}

fn require_loaded(session: &Session) -> bool {
    if session.is_loaded() {
        true
    } else {
        println!("No data loaded. Use: load <url>");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_categories, split_names};
    use crate::models::Category;

    #[test]
    fn test_split_names_semicolons() {
        assert_eq!(
            split_names("Queen Mary Hospital; Prince of Wales Hospital"),
            vec!["Queen Mary Hospital", "Prince of Wales Hospital"]
        );
    }

    #[test]
    fn test_split_names_empty_segments_dropped() {
        assert_eq!(split_names(" ; Pharma ;; "), vec!["Pharma"]);
        assert!(split_names("").is_empty());
    }

    #[test]
    fn test_parse_categories_valid() {
        let parsed = parse_categories(&[
            "Pharma".to_string(),
            "injection & infusion".to_string(),
        ])
        .expect("parse succeeds");
        assert_eq!(parsed, vec![Category::Pharma, Category::InjectionInfusion]);
    }

    #[test]
    fn test_parse_categories_unknown_errors_with_options() {
        let err = parse_categories(&["furniture".to_string()]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("furniture"));
        assert!(msg.contains("Pharma"));
        assert!(msg.contains("Others"));
    }

    #[test]
    fn test_parse_categories_empty_list() {
        assert!(parse_categories(&[]).expect("ok").is_empty());
    }
}
