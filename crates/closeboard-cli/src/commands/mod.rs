mod companies;
mod context;
mod cross_section;
mod time_series;
mod upload_date;

use std::fs::File;
use std::io::{self, BufReader};

use closeboard_core::{Envelope, RecordSet};
use serde_json::Value;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::metadata::Metadata;

pub struct CommandResult {
    pub data: Value,
    pub record_count: usize,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value, record_count: usize) -> Self {
        Self {
            data,
            record_count,
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

pub fn run(cli: &Cli) -> Result<Envelope<Value>, CliError> {
    let command_result = match &cli.command {
        Command::Companies => companies::run(&load_records(cli)?)?,
        Command::CrossSection(args) => cross_section::run(args, &load_records(cli)?)?,
        Command::TimeSeries(args) => time_series::run(args, &load_records(cli)?)?,
        Command::Context(args) => context::run(args, &load_records(cli)?)?,
        Command::UploadDate(args) => upload_date::run(args)?,
    };

    let CommandResult {
        data,
        record_count,
        warnings,
    } = command_result;

    let mut metadata = Metadata::new(record_count);
    for warning in warnings {
        metadata.push_warning(warning);
    }

    Ok(Envelope::success(metadata.into_envelope_meta()?, data))
}

fn load_records(cli: &Cli) -> Result<RecordSet, CliError> {
    let records = match &cli.input {
        Some(path) => RecordSet::from_reader(BufReader::new(File::open(path)?))?,
        None => RecordSet::from_reader(io::stdin().lock())?,
    };
    debug!(records = records.len(), "loaded record dump");
    Ok(records)
}

/// Warnings shared by the aggregation commands.
fn degraded_input_warnings(duplicates_skipped: usize, malformed_dates: usize) -> Vec<String> {
    let mut warnings = Vec::new();
    if duplicates_skipped > 0 {
        warnings.push(format!(
            "{duplicates_skipped} duplicate row(s) skipped; first occurrence kept"
        ));
    }
    if malformed_dates > 0 {
        warnings.push(format!(
            "{malformed_dates} record(s) with unparseable dates placed last"
        ));
    }
    warnings
}
