use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Relative size input: one value for a single cell, or one value per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatioInput {
    Scalar(f64),
    List(Vec<f64>),
}

impl Default for RatioInput {
    fn default() -> Self {
        Self::Scalar(1.0)
    }
}

impl From<f64> for RatioInput {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<u32> for RatioInput {
    fn from(value: u32) -> Self {
        Self::Scalar(f64::from(value))
    }
}

impl From<Vec<f64>> for RatioInput {
    fn from(values: Vec<f64>) -> Self {
        Self::List(values)
    }
}

impl From<&[f64]> for RatioInput {
    fn from(values: &[f64]) -> Self {
        Self::List(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for RatioInput {
    fn from(values: [f64; N]) -> Self {
        Self::List(values.to_vec())
    }
}

impl From<Vec<u32>> for RatioInput {
    fn from(values: Vec<u32>) -> Self {
        Self::List(values.into_iter().map(f64::from).collect())
    }
}

/// Canonical ratio list plus its summed cell count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ratios {
    total: f64,
    values: Vec<f64>,
}

impl Ratios {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.total
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Partial sums preceding each entry: the cell offset where it starts.
    #[must_use]
    pub fn offsets(&self) -> Vec<f64> {
        self.values
            .iter()
            .scan(0.0, |acc, value| {
                let start = *acc;
                *acc += value;
                Some(start)
            })
            .collect()
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

/// Turns a scalar or list ratio input into `(total, list)` form.
pub fn normalize_ratios(input: impl Into<RatioInput>) -> GridResult<Ratios> {
    let values = match input.into() {
        RatioInput::Scalar(value) => vec![value],
        RatioInput::List(values) => values,
    };

    if values.is_empty() {
        return Err(GridError::InvalidRatio {
            reason: "ratio list must not be empty".to_owned(),
        });
    }
    if let Some((index, bad)) = values
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite() || **value <= 0.0)
    {
        return Err(GridError::InvalidRatio {
            reason: format!("ratio at index {index} must be finite and > 0, got {bad}"),
        });
    }

    let total = values.iter().sum();
    Ok(Ratios { total, values })
}
