use closeboard_core::{HistoryPolicy, QuestionRequest, RecordSet};

use crate::cli::ContextArgs;
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &ContextArgs, records: &RecordSet) -> Result<CommandResult, CliError> {
    let policy = if args.full_history {
        HistoryPolicy::FullHistory
    } else {
        HistoryPolicy::LatestOnly
    };

    let company = records.for_company(&args.company);
    let request = QuestionRequest::new(company.records(), args.question.as_str(), policy);

    let mut command_result = CommandResult::ok(serde_json::to_value(&request)?, company.len());
    if company.is_empty() {
        command_result =
            command_result.with_warning(format!("no records found for '{}'", args.company));
    }
    Ok(command_result)
}
