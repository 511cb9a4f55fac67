//! # fdr
//!
//! A CLI tool that turns an OS-version usage report export into ASCII tables.
//!
//! ## Overview
//!
//! fdr is built on top of fdrlib. It reads a report file, aggregates user
//! counts by platform and major OS version, and prints them either as one
//! combined table or as one table per platform.
//!
//! ## Usage
//!
//! ```bash
//! # One table per platform (iOS, then Android)
//! fdr osversions report.csv
//!
//! # A single table with per-platform percentage columns
//! fdr osversions report.csv --join
//!
//! # Two fractional digits instead of one
//! fdr osversions report.csv --precision 2
//!
//! # Aggregated data as JSON
//! fdr osversions report.csv --output json
//!
//! # Debug logging on stderr
//! fdr -vv osversions report.csv
//! ```

mod render;

use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::style;
use fdrlib::{aggregate_file, Layout, ReportOptions, MAX_PRECISION};

use render::OutputMode;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("fdr")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Parse OS-version usage reports into ASCII tables")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Disable logging"),
        )
        .subcommand(
            Command::new("osversions")
                .about("Table view with OS versions")
                .arg(
                    Arg::new("csvfilepath")
                        .required(true)
                        .help("Path to the exported report file"),
                )
                .arg(
                    Arg::new("layout")
                        .short('l')
                        .long("layout")
                        .value_parser(["split", "combined"])
                        .default_value("split")
                        .help("Table arrangement: one table per platform, or one for both"),
                )
                .arg(
                    Arg::new("join")
                        .long("join")
                        .action(ArgAction::SetTrue)
                        .help("Same as --layout combined"),
                )
                .arg(
                    Arg::new("precision")
                        .short('p')
                        .long("precision")
                        .value_parser(value_parser!(u32).range(0..=i64::from(MAX_PRECISION)))
                        .default_value("1")
                        .help("Fractional digits for percentages"),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_parser(["table", "json"])
                        .default_value("table")
                        .help("Output format"),
                ),
        )
}

/// Route tracing output to stderr; stdout is reserved for tables.
fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handler for the osversions command
fn osversions_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let path = matches
        .get_one::<String>("csvfilepath")
        .context("missing report path")?;
    let precision = matches.get_one::<u32>("precision").copied().unwrap_or(1);
    let output_mode: OutputMode = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let layout: Layout = if matches.get_flag("join") {
        Layout::Combined
    } else {
        matches
            .get_one::<String>("layout")
            .map(|s| s.as_str())
            .unwrap_or("split")
            .parse()
            .map_err(anyhow::Error::msg)?
    };
    let options = ReportOptions::new().layout(layout).precision(precision);

    tracing::info!(path = %path, ?layout, precision, "processing report");
    let summary = aggregate_file(path)?;
    tracing::info!(
        records = summary.records.len(),
        total_users = summary.total_users,
        "report aggregated"
    );

    render::render_summary(&summary, output_mode, options)
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    setup_logging(matches.get_count("verbose"), matches.get_flag("quiet"));

    let result = match matches.subcommand() {
        Some(("osversions", sub_matches)) => osversions_handler(sub_matches),
        Some((name, _)) => Err(anyhow::anyhow!("unknown command '{name}'")),
        None => Err(anyhow::anyhow!("no command given, see --help")),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold().for_stderr());
            ExitCode::FAILURE
        }
    }
}
