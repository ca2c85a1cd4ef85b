//! # dsquery
//!
//! A CLI tool for ad-hoc views over directories of pipe-delimited datastore files.
//!
//! ## Overview
//!
//! dsquery is built on top of dsquerylib and provides a command-line interface
//! for selecting, ordering and filtering rows exported into a datastore
//! directory, without loading them into a database.
//!
//! ## Usage
//!
//! ```bash
//! # Every row of every file in the default datastore directory
//! dsquery
//!
//! # Pick columns, sort by revenue, keep one day
//! dsquery -s TITLE,PROVIDER,REV -o REV -f DATE=2014-04-01
//!
//! # Query another directory, only .csv files, as JSON
//! dsquery -r /var/exports --include '*.csv' --output json
//! ```
//!
//! The default directory is `./output`, overridden by `DSQUERY_OUTPUT_DIR`.
//! Set `RUST_LOG=debug` to trace which files are read.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use dsquerylib::{render_json, DelimitedInput, FileFilter, Query, QueryConfig, Record};

/// Parse a comma-separated column list.
fn parse_columns(value: &str) -> Result<Vec<String>, String> {
    DelimitedInput::<String>::new()
        .coerce(value)
        .map_err(|e| e.to_string())
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("dsquery")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Select, order and filter rows of pipe-delimited datastore files")
        .arg(
            Arg::new("select")
                .short('s')
                .long("select")
                .value_name("COLUMNS")
                .value_parser(parse_columns)
                .help("Columns to output, comma-separated (default: all)"),
        )
        .arg(
            Arg::new("order")
                .short('o')
                .long("order")
                .value_name("COLUMNS")
                .value_parser(parse_columns)
                .help("Columns to sort by, comma-separated"),
        )
        .arg(
            Arg::new("filter")
                .short('f')
                .long("filter")
                .value_name("COLUMN=VALUE")
                .action(ArgAction::Append)
                .help("Keep rows where COLUMN equals VALUE (can be specified multiple times)"),
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Datastore directory (defaults to $DSQUERY_OUTPUT_DIR or ./output)"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Only read files whose name matches glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Skip files whose name matches glob pattern"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
}

/// Extract a comma-separated column list from matches
fn extract_columns(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches.get_one::<Vec<String>>(id).cloned().unwrap_or_default()
}

/// Extract filters list from matches
fn extract_filters(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("filter")
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Build file filter from matches
fn build_file_filter(matches: &ArgMatches) -> Result<FileFilter, anyhow::Error> {
    let patterns = |id: &str| -> Vec<String> {
        matches
            .get_many::<String>(id)
            .map(|v| v.cloned().collect())
            .unwrap_or_default()
    };
    Ok(FileFilter::from_globs(patterns("include"), patterns("exclude"))?)
}

/// Resolve the datastore directory: `--root`, else the environment config
fn resolve_root(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| QueryConfig::from_env().output_directory)
}

fn format_text(records: &[Record]) -> String {
    dsquerylib::render_rows(records)
        .into_iter()
        .map(|row| row + "\n")
        .collect()
}

fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let query = Query::new(
        extract_columns(matches, "select"),
        extract_columns(matches, "order"),
        extract_filters(matches),
    )?
    .files(build_file_filter(matches)?);

    let root = resolve_root(matches);
    log::debug!("querying datastore at {}", root.display());

    let records = query.records(&root)?;

    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => Ok(render_json(&records)? + "\n"),
        _ => Ok(format_text(&records)),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
