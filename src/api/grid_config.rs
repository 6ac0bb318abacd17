use serde::{Deserialize, Serialize};

use crate::core::{FigureSize, Orientation, RatioInput, Side, SubplotParams};
use crate::error::{GridError, GridResult};

/// Public grid bootstrap configuration.
///
/// Serializable so host applications can persist/load a figure layout
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub stack_ratios: RatioInput,
    #[serde(default)]
    pub main_axis_ratios: RatioInput,
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub figure_size: FigureSize,
    /// Data side of the first stacked index; `None` uses the orientation default.
    #[serde(default)]
    pub start_side: Option<Side>,
    #[serde(default = "default_alternate_sides")]
    pub alternate_sides: bool,
    /// With a single stacked index, show both main-axis spines instead of one.
    #[serde(default)]
    pub singleton_both_spines: bool,
    #[serde(default = "default_spine_width")]
    pub spine_width: f64,
    #[serde(default)]
    pub subplot: SubplotParams,
}

impl GridConfig {
    /// Creates a config with one main-axis section and default styling.
    #[must_use]
    pub fn new(stack_ratios: impl Into<RatioInput>, orientation: Orientation) -> Self {
        Self {
            stack_ratios: stack_ratios.into(),
            main_axis_ratios: RatioInput::default(),
            orientation,
            figure_size: FigureSize::default(),
            start_side: None,
            alternate_sides: default_alternate_sides(),
            singleton_both_spines: false,
            spine_width: default_spine_width(),
            subplot: SubplotParams::default(),
        }
    }

    /// Splits the main axis into sections of the given relative sizes.
    #[must_use]
    pub fn with_main_axis_ratios(mut self, ratios: impl Into<RatioInput>) -> Self {
        self.main_axis_ratios = ratios.into();
        self
    }

    #[must_use]
    pub fn with_figure_size(mut self, figure_size: FigureSize) -> Self {
        self.figure_size = figure_size;
        self
    }

    #[must_use]
    pub fn with_start_side(mut self, side: Side) -> Self {
        self.start_side = Some(side);
        self
    }

    #[must_use]
    pub fn with_alternate_sides(mut self, alternate: bool) -> Self {
        self.alternate_sides = alternate;
        self
    }

    #[must_use]
    pub fn with_singleton_both_spines(mut self, both: bool) -> Self {
        self.singleton_both_spines = both;
        self
    }

    #[must_use]
    pub fn with_spine_width(mut self, width: f64) -> Self {
        self.spine_width = width;
        self
    }

    #[must_use]
    pub fn with_subplot(mut self, subplot: SubplotParams) -> Self {
        self.subplot = subplot;
        self
    }

    #[must_use]
    pub fn resolved_start_side(&self) -> Side {
        self.start_side
            .unwrap_or_else(|| self.orientation.default_start_side())
    }

    pub fn to_json_pretty(&self) -> GridResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GridError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> GridResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GridError::InvalidData(format!("failed to parse config json: {e}")))
    }
}

fn default_alternate_sides() -> bool {
    true
}

fn default_spine_width() -> f64 {
    1.0
}
