//! CLI argument definitions for closeboard.
//!
//! Every command reads a record dump (the backend's `/getData` body or a bare
//! JSON array of records) from `--input` or stdin, runs one aggregation, and
//! prints the result inside a response envelope.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `companies` | List distinct companies in first-seen order |
//! | `cross-section` | Per-parameter comparison across companies |
//! | `time-series` | Per-company series on a shared date axis |
//! | `context` | Question-answering request for one company |
//! | `upload-date` | Extract the trading date from an upload file name |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--input` | stdin | Record dump to read |
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Fail (exit code 5) when the result carries warnings |
//! | `--log-level` | `RUST_LOG` or `warn` | Tracing filter directive |
//!
//! # Examples
//!
//! ```bash
//! closeboard --input rates.json cross-section --latest --pretty
//! closeboard --input rates.json time-series --param last_rate --param turnover
//! closeboard --input rates.json context --company AVN --question "Is AVN trending up?"
//! closeboard upload-date closingRates_202401nov.pdf
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use closeboard_core::Parameter;

/// Closing-rates aggregation CLI.
#[derive(Debug, Parser)]
#[command(
    name = "closeboard",
    author,
    version,
    about = "Build chart series and question context from closing-rates records"
)]
pub struct Cli {
    /// Record dump to read; stdin when omitted.
    #[arg(long, global = true)]
    pub input: Option<PathBuf>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings (skipped duplicates, malformed dates) as failures.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Tracing filter, e.g. `debug` or `closeboard_core=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List distinct companies in first-seen order.
    Companies,

    /// Compare companies at one snapshot, one series per parameter.
    ///
    /// # Examples
    ///
    ///   closeboard cross-section --latest
    ///   closeboard cross-section --date 2024-10-21 --param turnover
    CrossSection(CrossSectionArgs),

    /// Per-company series over every date in the input.
    ///
    /// # Examples
    ///
    ///   closeboard time-series --param last_rate
    ///   closeboard time-series --param open_rate --param last_rate --company AVN
    TimeSeries(TimeSeriesArgs),

    /// Build the question-answering request for one company.
    ///
    /// # Examples
    ///
    ///   closeboard context --company AVN --question "How did AVN close?"
    ///   closeboard context --company AVN --question "Trend?" --full-history
    Context(ContextArgs),

    /// Extract the trading date from an upload file name.
    UploadDate(UploadDateArgs),
}

/// Arguments for the `cross-section` command.
#[derive(Debug, Args)]
pub struct CrossSectionArgs {
    /// Parameters to include; all seven when omitted.
    #[arg(long = "param")]
    pub params: Vec<Parameter>,

    /// Reduce to the most recent record per company first.
    #[arg(long, default_value_t = false, conflicts_with = "date")]
    pub latest: bool,

    /// Only use records from this date.
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `time-series` command.
#[derive(Debug, Args)]
pub struct TimeSeriesArgs {
    /// Parameters to chart.
    #[arg(long = "param", required = true, num_args = 1..)]
    pub params: Vec<Parameter>,

    /// Restrict to these companies; all when omitted.
    #[arg(long = "company")]
    pub companies: Vec<String>,
}

/// Arguments for the `context` command.
#[derive(Debug, Args)]
pub struct ContextArgs {
    /// Company whose records go into the context.
    #[arg(long)]
    pub company: String,

    /// Question passed through verbatim.
    #[arg(long)]
    pub question: String,

    /// Include every record instead of only the latest.
    #[arg(long, default_value_t = false)]
    pub full_history: bool,
}

/// Arguments for the `upload-date` command.
#[derive(Debug, Args)]
pub struct UploadDateArgs {
    /// File name such as `closingRates_202401nov.pdf`.
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_parameters_by_name() {
        let cli = Cli::try_parse_from([
            "closeboard",
            "time-series",
            "--param",
            "last_rate",
            "--param",
            "turnover",
        ])
        .expect("must parse");

        match cli.command {
            Command::TimeSeries(args) => {
                assert_eq!(args.params, vec![Parameter::LastRate, Parameter::Turnover]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn latest_conflicts_with_date() {
        let result = Cli::try_parse_from([
            "closeboard",
            "cross-section",
            "--latest",
            "--date",
            "2024-01-01",
        ]);
        assert!(result.is_err());
    }
}
