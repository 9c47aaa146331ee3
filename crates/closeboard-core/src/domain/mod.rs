//! # Domain Models
//!
//! Record types for daily closing-rates data.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Record`] | One company's observation on one date |
//! | [`RecordSet`] | Immutable collection of records from the backend |
//! | [`RecordDate`] | Date text plus its normalized calendar date |
//! | [`Parameter`] | The seven numeric fields of a record |
//! | [`ChartKind`] | Chart family used to draw a parameter |
//!
//! ## Missing values
//!
//! Numeric fields are `Option<f64>`. A field the backend did not report is
//! `None` and stays `None` through every aggregation; it is never read as zero.
//!
//! ## Dates
//!
//! Dates arrive as text in several shapes (`2024-10-21`, `21-10-24`,
//! `2024-10-21T00:00:00Z`). [`RecordDate`] normalizes them for ordering and
//! keeps the original text for display. Text that does not normalize is kept
//! too; it sorts after every real date instead of failing the aggregation.

mod date;
mod parameter;
mod record;

pub use date::{compare_dates, parse_upload_date, RecordDate, SortDirection};
pub use parameter::{ChartKind, Parameter};
pub use record::{Record, RecordSet};
