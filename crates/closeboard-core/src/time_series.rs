//! Per-company, date-ordered series on a shared date axis.
//!
//! Every company's dataset for a parameter has exactly one value per axis
//! date, so multi-company line charts stay aligned. A company with no record
//! on some axis date gets `None` there.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    compare_dates, ChartKind, Palette, Parameter, Record, RecordDate, Series, SortDirection,
};

/// Output of [`time_series`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub series: Vec<Series>,
    /// Later rows for an already-seen (company, date) pair.
    pub duplicates_skipped: usize,
    /// Records whose date could not be normalized; their dates sit at the
    /// end of the axis.
    pub malformed_dates: usize,
}

/// Build one series per parameter; datasets are companies in first-seen
/// order, colored by that index.
pub fn time_series(records: &[Record], parameters: &[Parameter], palette: &Palette) -> TimeSeries {
    let mut axis: Vec<&RecordDate> = Vec::new();
    let mut distinct_dates: HashSet<&RecordDate> = HashSet::new();
    let mut companies: Vec<&str> = Vec::new();
    let mut company_index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if distinct_dates.insert(&record.date) {
            axis.push(&record.date);
        }
        let name = record.company_name.as_str();
        if !company_index.contains_key(name) {
            company_index.insert(name, companies.len());
            companies.push(name);
        }
    }

    axis.sort_by(|a, b| compare_dates(a, b, SortDirection::Ascending));
    let date_index: HashMap<&RecordDate, usize> = axis
        .iter()
        .enumerate()
        .map(|(index, date)| (*date, index))
        .collect();

    let mut grid: Vec<Vec<Option<&Record>>> = vec![vec![None; axis.len()]; companies.len()];
    let mut duplicates_skipped = 0;
    let mut malformed_dates = 0;
    for record in records {
        if record.date.is_malformed() {
            malformed_dates += 1;
        }
        let row = company_index[record.company_name.as_str()];
        let column = date_index[&record.date];
        let cell = &mut grid[row][column];
        if cell.is_some() {
            duplicates_skipped += 1;
        } else {
            *cell = Some(record);
        }
    }

    if duplicates_skipped > 0 {
        warn!(
            duplicates_skipped,
            "time-series input repeats (company, date) pairs; keeping first occurrence"
        );
    }
    if malformed_dates > 0 {
        warn!(malformed_dates, "dates could not be normalized; placed at end of axis");
    }

    let keys: Vec<String> = axis.iter().map(|date| date.raw().to_owned()).collect();
    let series = parameters
        .iter()
        .map(|&parameter| {
            let mut series = Series::new(parameter, ChartKind::Line, keys.clone());
            for (index, (company, cells)) in companies.iter().zip(&grid).enumerate() {
                let values = cells
                    .iter()
                    .map(|cell| cell.and_then(|record| record.value(parameter)))
                    .collect();
                series.push_aligned(*company, values, palette.color(index));
            }
            series
        })
        .collect();

    debug!(
        dates = keys.len(),
        companies = companies.len(),
        parameters = parameters.len(),
        "built time series"
    );

    TimeSeries {
        series,
        duplicates_skipped,
        malformed_dates,
    }
}
