use std::collections::{HashMap, HashSet};
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Parameter, RecordDate, ValidationError};

/// One closing-rates observation for one company on one date.
///
/// Numeric fields are `None` when the source did not report them; a missing
/// value is never the same thing as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordWire")]
pub struct Record {
    pub company_name: String,
    pub date: RecordDate,
    pub turnover: Option<f64>,
    pub prev_rate: Option<f64>,
    pub open_rate: Option<f64>,
    pub highest_rate: Option<f64>,
    pub lowest_rate: Option<f64>,
    pub last_rate: Option<f64>,
    pub difference: Option<f64>,
}

impl Record {
    /// Create a record with every numeric field missing.
    pub fn new(
        company_name: impl AsRef<str>,
        date: impl Into<RecordDate>,
    ) -> Result<Self, ValidationError> {
        let company_name = company_name.as_ref().trim();
        if company_name.is_empty() {
            return Err(ValidationError::EmptyCompanyName);
        }

        Ok(Self {
            company_name: company_name.to_owned(),
            date: date.into(),
            turnover: None,
            prev_rate: None,
            open_rate: None,
            highest_rate: None,
            lowest_rate: None,
            last_rate: None,
            difference: None,
        })
    }

    /// Builder-style setter for one numeric field.
    pub fn with(mut self, parameter: Parameter, value: impl Into<Option<f64>>) -> Self {
        *self.slot_mut(parameter) = value.into();
        self
    }

    pub fn value(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Turnover => self.turnover,
            Parameter::PrevRate => self.prev_rate,
            Parameter::OpenRate => self.open_rate,
            Parameter::HighestRate => self.highest_rate,
            Parameter::LowestRate => self.lowest_rate,
            Parameter::LastRate => self.last_rate,
            Parameter::Difference => self.difference,
        }
    }

    fn slot_mut(&mut self, parameter: Parameter) -> &mut Option<f64> {
        match parameter {
            Parameter::Turnover => &mut self.turnover,
            Parameter::PrevRate => &mut self.prev_rate,
            Parameter::OpenRate => &mut self.open_rate,
            Parameter::HighestRate => &mut self.highest_rate,
            Parameter::LowestRate => &mut self.lowest_rate,
            Parameter::LastRate => &mut self.last_rate,
            Parameter::Difference => &mut self.difference,
        }
    }
}

/// Backend row shape. Missing keys and `null` both mean "no value".
#[derive(Debug, Deserialize)]
struct RecordWire {
    #[serde(alias = "companyName")]
    company_name: String,
    date: RecordDate,
    #[serde(default)]
    turnover: Option<f64>,
    #[serde(default, alias = "prevRate")]
    prev_rate: Option<f64>,
    #[serde(default, alias = "openRate")]
    open_rate: Option<f64>,
    #[serde(default, alias = "highestRate")]
    highest_rate: Option<f64>,
    #[serde(default, alias = "lowestRate")]
    lowest_rate: Option<f64>,
    #[serde(default, alias = "lastRate")]
    last_rate: Option<f64>,
    #[serde(default)]
    difference: Option<f64>,
}

impl TryFrom<RecordWire> for Record {
    type Error = ValidationError;

    fn try_from(wire: RecordWire) -> Result<Self, Self::Error> {
        Ok(Record::new(wire.company_name, wire.date)?
            .with(Parameter::Turnover, wire.turnover)
            .with(Parameter::PrevRate, wire.prev_rate)
            .with(Parameter::OpenRate, wire.open_rate)
            .with(Parameter::HighestRate, wire.highest_rate)
            .with(Parameter::LowestRate, wire.lowest_rate)
            .with(Parameter::LastRate, wire.last_rate)
            .with(Parameter::Difference, wire.difference))
    }
}

/// Immutable collection of records as received from the backend.
///
/// Accepts either a bare JSON array or the backend's `{"data": [...]}` body.
/// Insertion order carries no meaning for consumers; every aggregation
/// re-sorts what it needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordSetWire", into = "Vec<Record>")]
pub struct RecordSet {
    records: Vec<Record>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordSetWire {
    Bare(Vec<Record>),
    Envelope { data: Vec<Record> },
}

impl From<RecordSetWire> for RecordSet {
    fn from(wire: RecordSetWire) -> Self {
        match wire {
            RecordSetWire::Bare(records) | RecordSetWire::Envelope { data: records } => {
                Self { records }
            }
        }
    }
}

impl From<RecordSet> for Vec<Record> {
    fn from(set: RecordSet) -> Self {
        set.records
    }
}

impl RecordSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a backend body: a bare array or `{"data": [...]}`.
    pub fn from_json(input: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CoreError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct company names in first-seen order.
    pub fn companies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut companies = Vec::new();
        for record in &self.records {
            let name = record.company_name.as_str();
            if seen.insert(name) {
                companies.push(name);
            }
        }
        companies
    }

    /// Records of a single company, input order preserved.
    pub fn for_company(&self, company_name: &str) -> RecordSet {
        let company_name = company_name.trim();
        self.records
            .iter()
            .filter(|record| record.company_name == company_name)
            .cloned()
            .collect()
    }

    /// Records observed on `date`.
    pub fn snapshot(&self, date: &RecordDate) -> RecordSet {
        self.records
            .iter()
            .filter(|record| &record.date == date)
            .cloned()
            .collect()
    }

    /// Most recent record per company, companies in first-seen order.
    ///
    /// A record replaces the current pick only when its date parses and is
    /// strictly later, or the current pick's date does not parse. Ties keep
    /// the first occurrence.
    pub fn latest_per_company(&self) -> RecordSet {
        let mut index_by_company: HashMap<&str, usize> = HashMap::new();
        let mut latest: Vec<&Record> = Vec::new();

        for record in &self.records {
            match index_by_company.get(record.company_name.as_str()) {
                Some(&index) => {
                    let current = latest[index];
                    let newer = match (record.date.date(), current.date.date()) {
                        (Some(candidate), Some(existing)) => candidate > existing,
                        (Some(_), None) => true,
                        (None, _) => false,
                    };
                    if newer {
                        latest[index] = record;
                    }
                }
                None => {
                    index_by_company.insert(record.company_name.as_str(), latest.len());
                    latest.push(record);
                }
            }
        }

        latest.into_iter().cloned().collect()
    }

    /// Number of records whose date could not be normalized.
    pub fn malformed_dates(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.date.is_malformed())
            .count()
    }
}

impl AsRef<[Record]> for RecordSet {
    fn as_ref(&self) -> &[Record] {
        &self.records
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
