//! Text context for the question-answering backend.
//!
//! A [`ContextBlock`] is a header, one line per record (most recent first) and
//! a trailing question line. Output is fully determined by the records, the
//! question and the [`HistoryPolicy`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{compare_dates, Parameter, Record, SortDirection};

/// Preamble the question-answering backend puts in front of every context.
pub const SYSTEM_PROMPT: &str = "You are a chatbot specialized in the stock market. \
You analyze the performance of listed companies from their daily closing rates and \
answer general questions about market patterns and trading. \
Keep your responses concise and to the point.";

const NO_DATA_LINE: &str = "No data available for this company.";
const MISSING_VALUE: &str = "N/A";

/// How much of a company's history goes into the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryPolicy {
    /// Only the most recent record.
    LatestOnly,
    /// Every record, most recent first.
    FullHistory,
}

/// Self-contained plain-text context.
///
/// Serializes as the bare text. The record line count is tracked at
/// construction so a multi-line question never reads as data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ContextBlock {
    text: String,
    record_lines: usize,
}

impl ContextBlock {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of record lines between the header and the question.
    pub fn record_count(&self) -> usize {
        self.record_lines
    }

    /// Record lines only, without header or question.
    pub fn data_lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().skip(1).take(self.record_lines)
    }
}

impl From<ContextBlock> for String {
    fn from(block: ContextBlock) -> Self {
        block.text
    }
}

impl Display for ContextBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render one company's records plus the user's question.
///
/// `records` must already be filtered to a single company; the header names
/// the company of the most recent record. The question is appended verbatim.
pub fn format_context(records: &[Record], question: &str, policy: HistoryPolicy) -> ContextBlock {
    let mut sorted: Vec<&Record> = records.iter().collect();
    sorted.sort_by(|a, b| compare_dates(&a.date, &b.date, SortDirection::Descending));
    if policy == HistoryPolicy::LatestOnly {
        sorted.truncate(1);
    }

    let mut lines = Vec::with_capacity(sorted.len() + 2);
    match sorted.first() {
        Some(latest) => {
            lines.push(format!("Stock data for {}:", latest.company_name));
            lines.extend(sorted.iter().map(|record| format_record(record)));
        }
        None => lines.push(NO_DATA_LINE.to_owned()),
    }
    lines.push(format!("Question: {question}"));

    debug!(
        records = records.len(),
        emitted = sorted.len(),
        ?policy,
        "formatted context block"
    );

    ContextBlock {
        text: lines.join("\n"),
        record_lines: sorted.len(),
    }
}

fn format_record(record: &Record) -> String {
    let mut line = format!("Date: {}", record.date);
    for parameter in Parameter::ALL {
        line.push_str(", ");
        line.push_str(parameter.label());
        line.push_str(": ");
        match record.value(parameter) {
            Some(value) => line.push_str(&value.to_string()),
            None => line.push_str(MISSING_VALUE),
        }
    }
    line
}

/// The two fields sent to the question-answering backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRequest {
    pub context: ContextBlock,
    pub question: String,
}

impl QuestionRequest {
    pub fn new(records: &[Record], question: impl Into<String>, policy: HistoryPolicy) -> Self {
        let question = question.into();
        Self {
            context: format_context(records, &question, policy),
            question,
        }
    }

    /// Full prompt text: system preamble followed by the context block.
    pub fn prompt(&self) -> String {
        format!("{SYSTEM_PROMPT}\n\n{}", self.context)
    }
}
