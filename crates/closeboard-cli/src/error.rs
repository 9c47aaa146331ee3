use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] closeboard_core::ValidationError),

    #[error(transparent)]
    Core(#[from] closeboard_core::CoreError),

    #[error("command error: {0}")]
    Command(String),

    #[error("strict mode failed: warnings={warning_count}")]
    StrictModeViolation { warning_count: usize },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Command(_) => 2,
            Self::Core(closeboard_core::CoreError::Validation(_)) => 2,
            Self::Core(_) => 4,
            Self::StrictModeViolation { .. } => 5,
            Self::Serialization(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use closeboard_core::{CoreError, ValidationError};

    use super::*;

    fn serde_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").expect_err("truncated JSON")
    }

    #[test]
    fn validation_failures_exit_with_2_wherever_they_surface() {
        assert_eq!(CliError::from(ValidationError::EmptyPalette).exit_code(), 2);
        assert_eq!(
            CliError::from(CoreError::from(ValidationError::EmptyCompanyName)).exit_code(),
            2
        );
        assert_eq!(CliError::Command(String::from("bad --date")).exit_code(), 2);
    }

    #[test]
    fn data_io_and_strict_failures_have_distinct_codes() {
        assert_eq!(CliError::from(CoreError::from(serde_error())).exit_code(), 4);
        assert_eq!(CliError::from(serde_error()).exit_code(), 4);
        assert_eq!(
            CliError::StrictModeViolation { warning_count: 2 }.exit_code(),
            5
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing dump");
        assert_eq!(CliError::from(io).exit_code(), 10);
    }
}
