//! Shared fixtures for closeboard integration tests.

pub use closeboard_core::{
    compare_dates, cross_sectional, cross_sectional_all, format_context, time_series,
    HistoryPolicy, Palette, Parameter, Record, RecordDate, RecordSet, SortDirection,
};

/// Record with only `turnover` set.
pub fn turnover_record(company: &str, date: &str, turnover: f64) -> Record {
    Record::new(company, date)
        .expect("fixture record must be valid")
        .with(Parameter::Turnover, turnover)
}

/// Three-row scenario: A on two days, B on the earlier one.
pub fn two_company_scenario() -> Vec<Record> {
    vec![
        turnover_record("A", "2024-01-02", 10.0),
        turnover_record("A", "2024-01-01", 5.0),
        turnover_record("B", "2024-01-01", 7.0),
    ]
}

/// Backend `/getData` body covering two trading days in the stored
/// `DD-MM-YY` format, one row with a null field and one with a bad date.
pub const BACKEND_DUMP: &str = r#"{
  "data": [
    {"company_name": "AVANCEON", "date": "21-10-24", "turnover": 125000.0, "prev_rate": 71.5,
     "open_rate": 72.0, "highest_rate": 74.9, "lowest_rate": 71.8, "last_rate": 74.1, "difference": 2.6},
    {"company_name": "SYSTEMS LTD", "date": "21-10-24", "turnover": 98000.0, "prev_rate": 412.3,
     "open_rate": 413.0, "highest_rate": 420.0, "lowest_rate": 410.1, "last_rate": 418.7, "difference": 6.4},
    {"company_name": "TRG PAKISTAN", "date": "21-10-24", "turnover": 2300000.0, "prev_rate": 66.2,
     "open_rate": 66.5, "highest_rate": 67.9, "lowest_rate": 65.8, "last_rate": 65.9, "difference": -0.3},
    {"company_name": "AVANCEON", "date": "22-10-24", "turnover": 88000.0, "prev_rate": 74.1,
     "open_rate": 74.5, "highest_rate": 75.0, "lowest_rate": 73.2, "last_rate": 73.6, "difference": -0.5},
    {"company_name": "TRG PAKISTAN", "date": "22-10-24", "turnover": 1900000.0, "prev_rate": 65.9,
     "open_rate": 66.0, "highest_rate": 68.2, "lowest_rate": 65.5, "last_rate": 68.0, "difference": null},
    {"company_name": "NETSOL", "date": "not-a-date", "turnover": 5000.0}
  ]
}"#;

pub fn backend_dump() -> RecordSet {
    RecordSet::from_json(BACKEND_DUMP).expect("fixture dump must parse")
}
