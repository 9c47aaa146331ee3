use closeboard_core::{time_series, Palette, RecordSet};

use crate::cli::TimeSeriesArgs;
use crate::error::CliError;

use super::{degraded_input_warnings, CommandResult};

pub fn run(args: &TimeSeriesArgs, records: &RecordSet) -> Result<CommandResult, CliError> {
    let selected: RecordSet = if args.companies.is_empty() {
        records.clone()
    } else {
        records
            .into_iter()
            .filter(|record| {
                args.companies
                    .iter()
                    .any(|company| company.trim() == record.company_name)
            })
            .cloned()
            .collect()
    };

    let result = time_series(selected.records(), &args.params, &Palette::default());
    let mut command_result = CommandResult::ok(serde_json::to_value(&result)?, selected.len());
    for warning in degraded_input_warnings(result.duplicates_skipped, result.malformed_dates) {
        command_result = command_result.with_warning(warning);
    }
    Ok(command_result)
}
