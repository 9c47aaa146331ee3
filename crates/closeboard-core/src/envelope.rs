use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::ValidationError;

/// Standard response envelope for all `closeboard` machine-readable outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub meta: EnvelopeMeta,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(meta: EnvelopeMeta, data: T) -> Self {
        Self { meta, data }
    }
}

/// Metadata attached to every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMeta {
    pub request_id: String,
    pub schema_version: String,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub record_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    pub fn new(
        request_id: impl Into<String>,
        schema_version: impl Into<String>,
        record_count: usize,
    ) -> Result<Self, ValidationError> {
        let meta = Self {
            request_id: request_id.into(),
            schema_version: schema_version.into(),
            generated_at: OffsetDateTime::now_utc(),
            record_count,
            warnings: Vec::new(),
        };
        meta.validate()?;
        Ok(meta)
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.request_id.trim().len() < 8 {
            return Err(ValidationError::InvalidRequestId);
        }

        if !is_valid_schema_version(&self.schema_version) {
            return Err(ValidationError::InvalidSchemaVersion {
                value: self.schema_version.clone(),
            });
        }

        Ok(())
    }
}

fn is_valid_schema_version(value: &str) -> bool {
    let Some(rest) = value.strip_prefix('v') else {
        return false;
    };

    let parts: Vec<&str> = rest.split('.').collect();
    parts.len() == 3
        && parts
            .iter()
            .all(|part| !part.is_empty() && part.chars().all(|ch| ch.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_request_id_and_schema_version() {
        assert!(EnvelopeMeta::new("req-12345", "v1.0.0", 0).is_ok());
        assert_eq!(
            EnvelopeMeta::new("short", "v1.0.0", 0),
            Err(ValidationError::InvalidRequestId)
        );
        assert!(matches!(
            EnvelopeMeta::new("req-12345", "1.0", 0),
            Err(ValidationError::InvalidSchemaVersion { .. })
        ));
    }

    #[test]
    fn warnings_are_omitted_when_empty() {
        let meta = EnvelopeMeta::new("req-12345", "v1.0.0", 3).expect("valid meta");
        let json = serde_json::to_value(Envelope::success(meta, 1)).expect("serializes");
        assert!(json["meta"].get("warnings").is_none());
        assert_eq!(json["meta"]["record_count"], 3);
    }
}
