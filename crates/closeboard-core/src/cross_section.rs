//! Single-snapshot comparison across companies.
//!
//! Callers reduce the input to one record per company first (see
//! [`RecordSet::latest_per_company`](crate::RecordSet::latest_per_company)).
//! When a company still appears more than once, the first occurrence wins and
//! later rows are skipped and counted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Palette, Parameter, Record, Series};

/// Output of [`cross_sectional`]: one series per requested parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossSection {
    pub series: Vec<Series>,
    pub duplicates_skipped: usize,
}

/// Build one series per parameter keyed by company name in first-seen order.
pub fn cross_sectional(
    records: &[Record],
    parameters: &[Parameter],
    palette: &Palette,
) -> CrossSection {
    let mut seen = HashSet::new();
    let mut rows: Vec<&Record> = Vec::with_capacity(records.len());
    for record in records {
        if seen.insert(record.company_name.as_str()) {
            rows.push(record);
        }
    }

    let duplicates_skipped = records.len() - rows.len();
    if duplicates_skipped > 0 {
        warn!(
            duplicates_skipped,
            "cross-section input repeats companies; keeping first occurrence"
        );
    }

    let keys: Vec<String> = rows
        .iter()
        .map(|record| record.company_name.clone())
        .collect();

    let series = parameters
        .iter()
        .enumerate()
        .map(|(index, &parameter)| {
            let mut series = Series::new(parameter, parameter.chart_kind(), keys.clone());
            let values = rows.iter().map(|record| record.value(parameter)).collect();
            series.push_aligned(parameter.as_str(), values, palette.color(index));
            series
        })
        .collect();

    debug!(
        companies = keys.len(),
        parameters = parameters.len(),
        "built cross-sectional series"
    );

    CrossSection {
        series,
        duplicates_skipped,
    }
}

/// [`cross_sectional`] over every [`Parameter`] with the default palette.
pub fn cross_sectional_all(records: &[Record]) -> CrossSection {
    cross_sectional(records, &Parameter::ALL, &Palette::default())
}
