use closeboard_core::{parse_upload_date, RecordDate};
use serde::Serialize;

use crate::cli::UploadDateArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct UploadDateResponseData {
    file_name: String,
    date: String,
}

pub fn run(args: &UploadDateArgs) -> Result<CommandResult, CliError> {
    let date = parse_upload_date(&args.file_name)?;
    let date = String::from(RecordDate::from_date(date));

    let data = serde_json::to_value(UploadDateResponseData {
        file_name: args.file_name.clone(),
        date,
    })?;
    Ok(CommandResult::ok(data, 0))
}
