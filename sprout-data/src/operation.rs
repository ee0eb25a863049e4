use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How child periods are folded into their parent period.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Operation {
    Min,
    Max,
    Sum,
    /// Day-weighted mean of the child values
    Average,
    /// Value of the chronologically last valid child
    End,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Min,
        Operation::Max,
        Operation::Sum,
        Operation::Average,
        Operation::End,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Min => "Min",
            Operation::Max => "Max",
            Operation::Sum => "Sum",
            Operation::Average => "Average",
            Operation::End => "End",
        }
    }

    /// Min and Max pick one child per channel, so an in-minus-out net is meaningless.
    pub fn is_extremum(&self) -> bool {
        matches!(self, Operation::Min | Operation::Max)
    }

    /// Fold `(value, days_covered)` entries of valid children into one value.
    ///
    /// `total_days` is the sum of the entries' day counts and is the divisor
    /// for `Average`. Returns 0 for an empty entry list.
    pub fn apply(&self, entries: &[(i64, u32)], total_days: u32) -> i64 {
        let Some(&(last, _)) = entries.last() else {
            return 0;
        };
        let values = entries.iter().map(|&(value, _)| value);
        match self {
            Operation::Min => values.min().unwrap_or(0),
            Operation::Max => values.max().unwrap_or(0),
            Operation::Sum => values.sum(),
            Operation::Average => {
                if total_days == 0 {
                    return 0;
                }
                let weighted: i64 = entries
                    .iter()
                    .map(|&(value, days)| value * i64::from(days))
                    .sum();
                (weighted as f64 / f64::from(total_days)).round_ties_even() as i64
            }
            Operation::End => last,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text names no known operation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown operation '{}' (expected one of min, max, sum, average, end)",
            self.0
        )
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("avg") {
            return Ok(Operation::Average);
        }
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownOperation(trimmed.to_string()))
    }
}

/// Whether a metric carries one value per day or an in/out pair.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum Channels {
    Single,
    InOut,
}

/// The aggregate of one subtree of the calendar.
///
/// For in/out metrics `value` is the in channel and `secondary` the out channel.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct AggValue {
    pub value: i64,
    /// False for today, the future, and periods with no elapsed days
    pub is_valid: bool,
    /// Number of valid days folded into `value`
    pub total_days_covered: u32,
    pub secondary: Option<i64>,
}

impl AggValue {
    /// A single calendar day.
    pub fn day(value: i64, secondary: Option<i64>, is_valid: bool) -> AggValue {
        AggValue {
            value,
            is_valid,
            total_days_covered: 1,
            secondary,
        }
    }

    /// Nothing to aggregate: zero, invalid, no days.
    pub fn empty(channels: Channels) -> AggValue {
        AggValue {
            value: 0,
            is_valid: false,
            total_days_covered: 0,
            secondary: match channels {
                Channels::Single => None,
                Channels::InOut => Some(0),
            },
        }
    }

    /// In minus out for in/out values; `None` for single-channel values.
    pub fn net(&self) -> Option<i64> {
        self.secondary.map(|out| self.value - out)
    }

    /// Combine child aggregates with `operation`, skipping invalid children.
    pub fn aggregate(operation: Operation, children: &[AggValue], channels: Channels) -> AggValue {
        let valid: Vec<&AggValue> = children.iter().filter(|child| child.is_valid).collect();
        let total_days: u32 = valid.iter().map(|child| child.total_days_covered).sum();
        if valid.is_empty() {
            return AggValue::empty(channels);
        }
        let primary: Vec<(i64, u32)> = valid
            .iter()
            .map(|child| (child.value, child.total_days_covered))
            .collect();
        let secondary = match channels {
            Channels::Single => None,
            Channels::InOut => {
                let entries: Vec<(i64, u32)> = valid
                    .iter()
                    .map(|child| (child.secondary.unwrap_or(0), child.total_days_covered))
                    .collect();
                Some(operation.apply(&entries, total_days))
            }
        };
        AggValue {
            value: operation.apply(&primary, total_days),
            is_valid: total_days > 0,
            total_days_covered: total_days,
            secondary,
        }
    }
}
