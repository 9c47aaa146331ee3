use serde::{Deserialize, Serialize};

use crate::{ChartKind, Parameter, SeriesColor, ValidationError};

/// One line/bar group inside a [`Series`].
///
/// `values` is aligned with the owning series' keys; `None` marks a missing
/// point and serializes as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<Option<f64>>,
    pub color: SeriesColor,
}

/// Chart-ready structure: category keys plus aligned value sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub parameter: Parameter,
    pub chart: ChartKind,
    pub keys: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl Series {
    pub fn new(parameter: Parameter, chart: ChartKind, keys: Vec<String>) -> Self {
        Self {
            label: parameter.as_str().to_owned(),
            parameter,
            chart,
            keys,
            datasets: Vec::new(),
        }
    }

    /// Append a dataset. `values` must hold exactly one entry per key.
    pub fn push_dataset(
        &mut self,
        label: impl Into<String>,
        values: Vec<Option<f64>>,
        color: SeriesColor,
    ) -> Result<(), ValidationError> {
        let label = label.into();
        if values.len() != self.keys.len() {
            return Err(ValidationError::MisalignedDataset {
                label,
                expected: self.keys.len(),
                actual: values.len(),
            });
        }

        self.push_aligned(label, values, color);
        Ok(())
    }

    /// Aggregators build `values` from the key list itself.
    pub(crate) fn push_aligned(
        &mut self,
        label: impl Into<String>,
        values: Vec<Option<f64>>,
        color: SeriesColor,
    ) {
        debug_assert_eq!(values.len(), self.keys.len());
        self.datasets.push(Dataset {
            label: label.into(),
            values,
            color,
        });
    }

    /// Every dataset has exactly one value per key.
    pub fn is_aligned(&self) -> bool {
        self.datasets
            .iter()
            .all(|dataset| dataset.values.len() == self.keys.len())
    }

    pub fn dataset(&self, label: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|dataset| dataset.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Palette;

    #[test]
    fn push_dataset_rejects_short_and_long_value_lists() {
        let palette = Palette::default();
        let mut series = Series::new(
            Parameter::Turnover,
            ChartKind::Line,
            vec![String::from("2024-01-01"), String::from("2024-01-02")],
        );

        assert_eq!(
            series.push_dataset("A", vec![Some(1.0)], palette.color(0)),
            Err(ValidationError::MisalignedDataset {
                label: String::from("A"),
                expected: 2,
                actual: 1,
            })
        );
        assert_eq!(
            series.push_dataset("B", vec![Some(1.0), None, Some(3.0)], palette.color(1)),
            Err(ValidationError::MisalignedDataset {
                label: String::from("B"),
                expected: 2,
                actual: 3,
            })
        );
        assert!(series.datasets.is_empty());

        series
            .push_dataset("C", vec![Some(1.0), None], palette.color(2))
            .expect("aligned dataset");
        assert!(series.is_aligned());
        assert_eq!(series.dataset("C").expect("C").values, vec![Some(1.0), None]);
    }

    #[test]
    fn missing_values_serialize_as_null() {
        let mut series = Series::new(Parameter::Turnover, ChartKind::Bar, vec![String::from("A")]);
        series
            .push_dataset("turnover", vec![None], Palette::default().color(0))
            .expect("aligned dataset");

        let json = serde_json::to_value(&series).expect("serializes");
        assert_eq!(json["datasets"][0]["values"][0], serde_json::Value::Null);
        assert_eq!(json["chart"], "bar");
    }
}
