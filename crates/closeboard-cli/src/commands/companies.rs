use closeboard_core::RecordSet;
use serde::Serialize;

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CompaniesResponseData<'a> {
    companies: Vec<&'a str>,
}

pub fn run(records: &RecordSet) -> Result<CommandResult, CliError> {
    let data = serde_json::to_value(CompaniesResponseData {
        companies: records.companies(),
    })?;
    Ok(CommandResult::ok(data, records.len()))
}
