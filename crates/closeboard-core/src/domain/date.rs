use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::ValidationError;

/// Sort direction requested by a caller of [`compare_dates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Record date as received from the backend, normalized when possible.
///
/// The raw text is kept for display so axis labels match what the backend
/// sent. Dates that cannot be normalized are still valid values; they only
/// lose their place in chronological order and sort after every parsed date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RecordDate {
    raw: String,
    parsed: Option<Date>,
}

/// Ordering key: every parsed date sorts before every unparseable one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum DateKey<'a> {
    Parsed(Date),
    Unparsed(&'a str),
}

impl RecordDate {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = normalize(&raw);
        Self { raw, parsed }
    }

    pub fn from_date(date: Date) -> Self {
        let raw = format_iso(date);
        Self {
            raw,
            parsed: Some(date),
        }
    }

    /// Text exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Calendar date, if the raw text could be normalized.
    pub fn date(&self) -> Option<Date> {
        self.parsed
    }

    pub fn is_malformed(&self) -> bool {
        self.parsed.is_none()
    }

    /// `YYYY-MM-DD` rendering of the normalized date.
    pub fn iso(&self) -> Option<String> {
        self.parsed.map(format_iso)
    }

    fn key(&self) -> DateKey<'_> {
        match self.parsed {
            Some(date) => DateKey::Parsed(date),
            None => DateKey::Unparsed(self.raw.trim()),
        }
    }
}

impl PartialEq for RecordDate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RecordDate {}

impl Hash for RecordDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for RecordDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RecordDate {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_dates(self, other, SortDirection::Ascending)
    }
}

impl Display for RecordDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<String> for RecordDate {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for RecordDate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<RecordDate> for String {
    fn from(value: RecordDate) -> Self {
        value.raw
    }
}

/// Relative order of two record dates.
///
/// Parsed dates follow `direction`. Unparseable dates sort last in both
/// directions and compare among themselves by raw text, so the order is total.
pub fn compare_dates(a: &RecordDate, b: &RecordDate, direction: SortDirection) -> Ordering {
    match (a.parsed, b.parsed) {
        (Some(left), Some(right)) => match direction {
            SortDirection::Ascending => left.cmp(&right),
            SortDirection::Descending => right.cmp(&left),
        },
        _ => a.key().cmp(&b.key()),
    }
}

/// Extract the trading date from an uploaded closing-rates file name.
///
/// Names look like `closingRates_202401nov.pdf`: four-digit year, two-digit
/// day, then a three-letter month abbreviation.
pub fn parse_upload_date(file_name: &str) -> Result<Date, ValidationError> {
    let invalid = || ValidationError::InvalidUploadName {
        value: file_name.to_owned(),
    };

    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name);
    let mut parts = stem.split('_');
    let (Some(_), Some(raw), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    if !starts_with_digit(raw) {
        return Err(invalid());
    }

    Date::parse(
        raw,
        format_description!("[year][day][month repr:short case_sensitive:false]"),
    )
    .map_err(|_| invalid())
}

fn normalize(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    // `[year]` tolerates a leading sign; backend dates never carry one.
    if !starts_with_digit(trimmed) {
        return None;
    }

    Date::parse(
        trimmed,
        format_description!("[year]-[month padding:none]-[day padding:none]"),
    )
    .or_else(|_| {
        Date::parse(
            trimmed,
            format_description!("[day padding:none]-[month padding:none]-[year]"),
        )
    })
    .or_else(|_| {
        Date::parse(
            trimmed,
            format_description!("[year]/[month padding:none]/[day padding:none]"),
        )
    })
    .or_else(|_| OffsetDateTime::parse(trimmed, &Rfc3339).map(OffsetDateTime::date))
    .or_else(|_| {
        PrimitiveDateTime::parse(
            trimmed,
            format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        )
        .map(PrimitiveDateTime::date)
    })
    .or_else(|_| {
        PrimitiveDateTime::parse(
            trimmed,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        )
        .map(PrimitiveDateTime::date)
    })
    .ok()
    .or_else(|| parse_short_year(trimmed))
}

/// Backend storage format `DD-MM-YY`, read as `DD-MM-20YY`.
fn parse_short_year(trimmed: &str) -> Option<Date> {
    let (day_month, year) = trimmed.rsplit_once('-')?;
    if year.len() != 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Date::parse(
        &format!("{day_month}-20{year}"),
        format_description!("[day padding:none]-[month padding:none]-[year]"),
    )
    .ok()
}

fn starts_with_digit(value: &str) -> bool {
    value.starts_with(|ch: char| ch.is_ascii_digit())
}

fn format_iso(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn normalizes_supported_formats() {
        assert_eq!(RecordDate::new("2024-01-02").date(), Some(date!(2024 - 01 - 02)));
        assert_eq!(RecordDate::new(" 2024-01-02 ").date(), Some(date!(2024 - 01 - 02)));
        assert_eq!(
            RecordDate::new("2024-01-02T09:30:00Z").date(),
            Some(date!(2024 - 01 - 02))
        );
        assert_eq!(RecordDate::new("21-10-24").date(), Some(date!(2024 - 10 - 21)));
        assert_eq!(RecordDate::new("21-10-2024").date(), Some(date!(2024 - 10 - 21)));
        assert_eq!(RecordDate::new("2024/10/21").date(), Some(date!(2024 - 10 - 21)));
        assert_eq!(RecordDate::new("2024-1-2").date(), Some(date!(2024 - 01 - 02)));
        assert_eq!(
            RecordDate::new("2024-01-02 09:30:00").date(),
            Some(date!(2024 - 01 - 02))
        );
        assert_eq!(
            RecordDate::new("2024-01-02T09:30:00").date(),
            Some(date!(2024 - 01 - 02))
        );
    }

    #[test]
    fn unparseable_text_is_malformed_not_an_error() {
        for raw in [
            "",
            "yesterday",
            "2024-13-01",
            "31-02-24",
            "2024-01",
            "24/10/21",
            "2024-01-02Tgarbage",
            "2024-01-02 noon",
            "+2024-01-02",
            "21-10-24x",
        ] {
            assert!(RecordDate::new(raw).is_malformed(), "{raw} should be malformed");
        }
    }

    #[test]
    fn malformed_dates_sort_last_in_both_directions() {
        let good = RecordDate::new("2024-01-01");
        let bad = RecordDate::new("n/a");

        assert_eq!(compare_dates(&good, &bad, SortDirection::Ascending), Ordering::Less);
        assert_eq!(compare_dates(&good, &bad, SortDirection::Descending), Ordering::Less);
        assert_eq!(compare_dates(&bad, &good, SortDirection::Descending), Ordering::Greater);
    }

    #[test]
    fn direction_flips_parsed_dates_only() {
        let earlier = RecordDate::new("01-01-24");
        let later = RecordDate::new("2024-01-02");

        assert_eq!(compare_dates(&earlier, &later, SortDirection::Ascending), Ordering::Less);
        assert_eq!(
            compare_dates(&earlier, &later, SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn equal_calendar_dates_compare_equal_across_formats() {
        assert_eq!(RecordDate::new("01-01-24"), RecordDate::new("2024-01-01"));
        assert_ne!(RecordDate::new("junk"), RecordDate::new("other junk"));
    }

    #[test]
    fn serializes_as_raw_text() {
        let value = serde_json::to_string(&RecordDate::new("21-10-24")).expect("serializes");
        assert_eq!(value, "\"21-10-24\"");
    }

    #[test]
    fn parses_upload_file_names() {
        assert_eq!(
            parse_upload_date("closingRates_202401nov.pdf").expect("must parse"),
            date!(2024 - 11 - 01)
        );
        assert_eq!(
            parse_upload_date("closingRates_202421OCT").expect("must parse"),
            date!(2024 - 10 - 21)
        );
    }

    #[test]
    fn rejects_bad_upload_file_names() {
        for name in [
            "closingRates.pdf",
            "closingRates_2024xxnov",
            "closingRates_202401foo",
            "closing_+12301nov",
            "closingRates_+202401nov.pdf",
            "closing_rates_202401nov.pdf",
            "closingRates_202401november.pdf",
        ] {
            assert!(matches!(
                parse_upload_date(name),
                Err(ValidationError::InvalidUploadName { .. })
            ));
        }
    }
}
