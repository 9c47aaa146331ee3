//! # Closeboard Core
//!
//! Aggregation and series construction for the closeboard closing-rates
//! dashboard.
//!
//! ## Overview
//!
//! The backend hands over a flat list of per-company, per-date records. This
//! crate turns that list into the structures the dashboard consumes:
//!
//! - **Cross-sectional series**: one series per parameter comparing companies
//!   at a single snapshot (bar and polar charts)
//! - **Time series**: one series per parameter with one dataset per company on
//!   a shared, ascending date axis (line charts)
//! - **Context blocks**: a deterministic text rendering of one company's
//!   history plus a user question, for the question-answering backend
//!
//! Every operation is a pure function over borrowed records. Nothing here does
//! I/O, holds state between calls, or needs locking.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Records, record sets, dates, parameters |
//! | [`cross_section`] | Per-parameter comparison across companies |
//! | [`time_series`] | Per-company series on a shared date axis |
//! | [`context`] | Context block formatting for question answering |
//! | [`series`] | Chart-ready output shape |
//! | [`palette`] | Index-based color assignment |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//!
//! ## Quick Start
//!
//! ```rust
//! use closeboard_core::{time_series, Palette, Parameter, Record};
//!
//! let records = vec![
//!     Record::new("A", "2024-01-02").unwrap().with(Parameter::Turnover, 10.0),
//!     Record::new("A", "2024-01-01").unwrap().with(Parameter::Turnover, 5.0),
//!     Record::new("B", "2024-01-01").unwrap().with(Parameter::Turnover, 7.0),
//! ];
//!
//! let result = time_series(&records, &[Parameter::Turnover], &Palette::default());
//! let turnover = &result.series[0];
//! assert_eq!(turnover.keys, vec!["2024-01-01", "2024-01-02"]);
//! assert_eq!(turnover.datasets[1].values, vec![Some(7.0), None]);
//! ```
//!
//! ## Error Handling
//!
//! Aggregation never fails. Degraded input is handled locally:
//!
//! - unparseable dates sort last and are counted
//! - missing numeric fields stay `None`
//! - duplicate rows resolve to the first occurrence and are counted
//! - empty input yields empty series or a "no data" context block
//!
//! Only construction and parsing return [`ValidationError`].

pub mod context;
pub mod cross_section;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod palette;
pub mod series;
pub mod time_series;

// Domain models
pub use domain::{
    compare_dates, parse_upload_date, ChartKind, Parameter, Record, RecordDate, RecordSet,
    SortDirection,
};

// Aggregation
pub use context::{format_context, ContextBlock, HistoryPolicy, QuestionRequest, SYSTEM_PROMPT};
pub use cross_section::{cross_sectional, cross_sectional_all, CrossSection};
pub use time_series::{time_series, TimeSeries};

// Output shapes
pub use palette::{Palette, Rgb, SeriesColor};
pub use series::{Dataset, Series};

// Envelope types
pub use envelope::{Envelope, EnvelopeMeta};

// Error types
pub use error::{CoreError, ValidationError};
