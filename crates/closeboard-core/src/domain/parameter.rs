use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Numeric field of a closing-rates record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Turnover,
    PrevRate,
    OpenRate,
    HighestRate,
    LowestRate,
    LastRate,
    Difference,
}

/// Chart family a series is meant to be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    PolarArea,
}

impl Parameter {
    /// Every parameter, in dashboard order.
    pub const ALL: [Parameter; 7] = [
        Parameter::Turnover,
        Parameter::PrevRate,
        Parameter::OpenRate,
        Parameter::HighestRate,
        Parameter::LowestRate,
        Parameter::LastRate,
        Parameter::Difference,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Turnover => "turnover",
            Self::PrevRate => "prev_rate",
            Self::OpenRate => "open_rate",
            Self::HighestRate => "highest_rate",
            Self::LowestRate => "lowest_rate",
            Self::LastRate => "last_rate",
            Self::Difference => "difference",
        }
    }

    /// Human-readable label used in context blocks.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Turnover => "Turnover",
            Self::PrevRate => "Previous Rate",
            Self::OpenRate => "Open Rate",
            Self::HighestRate => "Highest Rate",
            Self::LowestRate => "Lowest Rate",
            Self::LastRate => "Last Rate",
            Self::Difference => "Difference",
        }
    }

    /// Chart used for the cross-sectional view of this parameter.
    pub const fn chart_kind(self) -> ChartKind {
        match self {
            Self::Turnover => ChartKind::Bar,
            Self::Difference => ChartKind::PolarArea,
            Self::PrevRate
            | Self::OpenRate
            | Self::HighestRate
            | Self::LowestRate
            | Self::LastRate => ChartKind::Line,
        }
    }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = ValidationError;

    /// Accepts snake_case or camelCase, case-insensitively.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let folded: String = input
            .trim()
            .chars()
            .filter(|ch| *ch != '_' && *ch != '-')
            .map(|ch| ch.to_ascii_lowercase())
            .collect();

        match folded.as_str() {
            "turnover" => Ok(Self::Turnover),
            "prevrate" => Ok(Self::PrevRate),
            "openrate" => Ok(Self::OpenRate),
            "highestrate" => Ok(Self::HighestRate),
            "lowestrate" => Ok(Self::LowestRate),
            "lastrate" => Ok(Self::LastRate),
            "difference" => Ok(Self::Difference),
            _ => Err(ValidationError::UnknownParameter {
                value: input.to_owned(),
            }),
        }
    }
}
