use closeboard_core::{cross_sectional, Palette, Parameter, RecordDate, RecordSet};

use crate::cli::CrossSectionArgs;
use crate::error::CliError;

use super::{degraded_input_warnings, CommandResult};

pub fn run(args: &CrossSectionArgs, records: &RecordSet) -> Result<CommandResult, CliError> {
    let parameters: &[Parameter] = if args.params.is_empty() {
        &Parameter::ALL
    } else {
        &args.params
    };

    let snapshot = match (&args.date, args.latest) {
        (Some(date), _) => {
            let date = RecordDate::new(date.as_str());
            if date.is_malformed() {
                return Err(CliError::Command(format!(
                    "--date '{}' is not a recognizable date",
                    date.raw()
                )));
            }
            records.snapshot(&date)
        }
        (None, true) => records.latest_per_company(),
        (None, false) => records.clone(),
    };

    let result = cross_sectional(snapshot.records(), parameters, &Palette::default());
    let warnings = degraded_input_warnings(result.duplicates_skipped, snapshot.malformed_dates());
    let mut command_result = CommandResult::ok(serde_json::to_value(&result)?, snapshot.len());
    for warning in warnings {
        command_result = command_result.with_warning(warning);
    }
    if snapshot.is_empty() && !records.is_empty() {
        command_result =
            command_result.with_warning("no records matched the requested snapshot");
    }
    Ok(command_result)
}
