//! Aggregation Policy
//!
//! Reduces partial scores (per class pair for F2, per feature for F1) to one
//! scalar. Every reduction is order-independent, so partial scores may be
//! produced in any order.

use crate::error::ComplexityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reduction applied to partial scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregator {
    /// Arithmetic mean
    #[default]
    Mean,
    /// Plain sum (bounded by the number of partial scores)
    Sum,
    /// Largest partial score
    Max,
}

impl Aggregator {
    /// All aggregators
    pub const ALL: [Aggregator; 3] = [Aggregator::Mean, Aggregator::Sum, Aggregator::Max];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Aggregator::Mean => "mean",
            Aggregator::Sum => "sum",
            Aggregator::Max => "max",
        }
    }

    /// Reduce partial scores. An empty slice reduces to 0.
    pub fn reduce(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }

        match self {
            Aggregator::Mean => values.iter().sum::<f64>() / values.len() as f64,
            Aggregator::Sum => values.iter().sum(),
            Aggregator::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }
}

impl FromStr for Aggregator {
    type Err = ComplexityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Aggregator::Mean),
            "sum" => Ok(Aggregator::Sum),
            "max" => Ok(Aggregator::Max),
            _ => Err(ComplexityError::UnknownAggregator(s.to_string())),
        }
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
