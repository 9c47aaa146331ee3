use closeboard_core::Envelope;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => print!("{}", render_table(envelope)?),
    }

    Ok(())
}

fn render_table(envelope: &Envelope<Value>) -> Result<String, CliError> {
    let generated_at = envelope
        .meta
        .generated_at
        .format(&Rfc3339)
        .map_err(|error| CliError::Command(error.to_string()))?;

    let mut out = String::new();
    out.push_str(&format!("request_id  : {}\n", envelope.meta.request_id));
    out.push_str(&format!("schema      : {}\n", envelope.meta.schema_version));
    out.push_str(&format!("generated_at: {generated_at}\n"));
    out.push_str(&format!("records     : {}\n", envelope.meta.record_count));

    if !envelope.meta.warnings.is_empty() {
        out.push_str("warnings:\n");
        for warning in &envelope.meta.warnings {
            out.push_str(&format!("  - {warning}\n"));
        }
    }

    out.push_str("data:\n");
    if let Some(series) = envelope.data.get("series").and_then(Value::as_array) {
        for entry in series {
            out.push_str(&render_series(entry));
        }
    } else if let Some(context) = envelope.data.get("context").and_then(Value::as_str) {
        for line in context.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    } else {
        let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
        for line in pretty_data.lines() {
            out.push_str(&format!("  {line}\n"));
        }
    }

    Ok(out)
}

/// One block per series: a header row of dataset labels, then one row per key.
fn render_series(series: &Value) -> String {
    let label = series.get("label").and_then(Value::as_str).unwrap_or("?");
    let keys: Vec<&str> = series
        .get("keys")
        .and_then(Value::as_array)
        .map(|keys| keys.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();
    let datasets: Vec<&Value> = series
        .get("datasets")
        .and_then(Value::as_array)
        .map(|datasets| datasets.iter().collect())
        .unwrap_or_default();

    let mut out = format!("  [{label}]\n");
    let header: Vec<&str> = datasets
        .iter()
        .map(|dataset| dataset.get("label").and_then(Value::as_str).unwrap_or("?"))
        .collect();
    out.push_str(&format!("    {:<24} {}\n", "key", header.join(" | ")));

    for (index, key) in keys.iter().enumerate() {
        let cells: Vec<String> = datasets
            .iter()
            .map(|dataset| match dataset["values"].get(index) {
                Some(Value::Number(number)) => number.to_string(),
                _ => String::from("-"),
            })
            .collect();
        out.push_str(&format!("    {:<24} {}\n", key, cells.join(" | ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use closeboard_core::EnvelopeMeta;
    use serde_json::json;

    use super::*;

    #[test]
    fn table_renders_series_rows_with_missing_markers() {
        let meta = EnvelopeMeta::new("req-12345", "v1.0.0", 3).expect("valid meta");
        let data = json!({
            "series": [{
                "label": "turnover",
                "keys": ["2024-01-01", "2024-01-02"],
                "datasets": [
                    {"label": "A", "values": [5.0, 10.0]},
                    {"label": "B", "values": [7.0, null]}
                ]
            }]
        });

        let table = render_table(&Envelope::success(meta, data)).expect("renders");
        assert!(table.contains("[turnover]"));
        assert!(table.contains("A | B"));
        assert!(table.contains("2024-01-02"));
        assert!(table.contains("10.0 | -"));
    }

    #[test]
    fn table_renders_context_lines() {
        let meta = EnvelopeMeta::new("req-12345", "v1.0.0", 0).expect("valid meta");
        let data = json!({
            "context": "No data available for this company.\nQuestion: Why?",
            "question": "Why?"
        });

        let table = render_table(&Envelope::success(meta, data)).expect("renders");
        assert!(table.contains("  No data available for this company.\n  Question: Why?\n"));
    }
}
