mod cli;
mod commands;
mod error;
mod metadata;
mod output;

use clap::Parser;
use closeboard_core::EnvelopeMeta;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let envelope = commands::run(cli)?;
    output::render(&envelope, cli.format, cli.pretty)?;
    enforce_strict(cli.strict, &envelope.meta)?;

    Ok(ExitCode::SUCCESS)
}

/// Under `--strict` any warning fails the run once output has been written.
fn enforce_strict(strict: bool, meta: &EnvelopeMeta) -> Result<(), CliError> {
    if strict && !meta.warnings.is_empty() {
        return Err(CliError::StrictModeViolation {
            warning_count: meta.warnings.len(),
        });
    }
    Ok(())
}

/// `--log-level` wins over `RUST_LOG`; the fallback is `warn`.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn run_on(dump: &str, args: &[&str]) -> (Cli, EnvelopeMeta) {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(dump.as_bytes()).expect("write dump");
        let path = file.path().to_str().expect("utf-8 temp path").to_owned();

        let mut argv = vec!["closeboard", "--input", path.as_str()];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).expect("valid arguments");
        let envelope = commands::run(&cli).expect("command succeeds");
        (cli, envelope.meta)
    }

    #[test]
    fn strict_mode_fails_with_exit_code_5_when_warnings_exist() {
        let dump = r#"[
            {"company_name": "A", "date": "2024-01-01", "turnover": 1.0},
            {"company_name": "B", "date": "whenever", "turnover": 2.0}
        ]"#;
        let (cli, meta) = run_on(dump, &["--strict", "time-series", "--param", "turnover"]);

        assert!(cli.strict);
        let error = enforce_strict(cli.strict, &meta).expect_err("warnings must fail");
        assert!(matches!(
            error,
            CliError::StrictModeViolation { warning_count: 1 }
        ));
        assert_eq!(error.exit_code(), 5);
        assert!(enforce_strict(false, &meta).is_ok());
    }

    #[test]
    fn strict_mode_passes_clean_output() {
        let dump = r#"[{"company_name": "A", "date": "2024-01-01", "turnover": 1.0}]"#;
        let (cli, meta) = run_on(dump, &["--strict", "companies"]);

        assert!(meta.warnings.is_empty());
        assert!(enforce_strict(cli.strict, &meta).is_ok());
    }
}
