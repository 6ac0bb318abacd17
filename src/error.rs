use thiserror::Error;

use crate::core::PanelId;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid ratio input: {reason}")]
    InvalidRatio { reason: String },

    /// Length of a per-axis input disagrees with the dimension it targets.
    ///
    /// Shift setters never return this; they log it and broadcast the first
    /// element instead.
    #[error("{target} list has {actual} entries, expected {expected}")]
    ShapeMismatch {
        target: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown side: `{0}`")]
    UnknownSide(String),

    #[error("unknown orientation: `{0}`")]
    UnknownOrientation(String),

    #[error("no twin instance {instance} exists for stacked index {stack_index}")]
    TwinLookup { stack_index: usize, instance: usize },

    #[error("panel position out of range: stack={stack_index}, main={main_index}")]
    PanelOutOfRange {
        stack_index: usize,
        main_index: usize,
    },

    #[error("unknown panel: {0:?}")]
    UnknownPanel(PanelId),

    #[error("invalid figure size: width={width}, height={height}")]
    InvalidFigureSize { width: f64, height: f64 },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
