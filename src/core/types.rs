use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Pixel dimensions of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Physical figure size in inches plus the resolution used when rasterizing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
    #[serde(default = "default_dpi")]
    pub dpi: f64,
}

impl Default for FigureSize {
    fn default() -> Self {
        Self::new(10.0, 10.0)
    }
}

impl FigureSize {
    #[must_use]
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
            dpi: default_dpi(),
        }
    }

    #[must_use]
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn validate(self) -> GridResult<Self> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width_in) || !positive(self.height_in) {
            return Err(GridError::InvalidFigureSize {
                width: self.width_in,
                height: self.height_in,
            });
        }
        if !positive(self.dpi) {
            return Err(GridError::InvalidData(
                "figure dpi must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Rasterized pixel size, rounded and clamped to at least one pixel.
    #[must_use]
    pub fn viewport(self) -> Viewport {
        let px = |inches: f64| (inches * self.dpi).round().clamp(1.0, f64::from(u32::MAX)) as u32;
        Viewport::new(px(self.width_in), px(self.height_in))
    }
}

fn default_dpi() -> f64 {
    100.0
}

/// A point in some panel's data coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// One edge of a panel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// The axis whose scale a spine on this edge carries.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::X,
            Self::Left | Self::Right => Axis::Y,
        }
    }

    /// `true` for the edge at panel fraction 0 along its perpendicular (left, bottom).
    #[must_use]
    pub const fn is_low(self) -> bool {
        matches!(self, Self::Bottom | Self::Left)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(GridError::UnknownSide(s.to_owned())),
        }
    }
}

/// Role of a stacked index within the stack sequence.
///
/// Governs which main-axis edges keep their spine, ticks and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackPosition {
    EdgeA,
    Interior,
    EdgeB,
    Both,
}

impl StackPosition {
    pub const ALL: [StackPosition; 4] = [
        StackPosition::EdgeA,
        StackPosition::Interior,
        StackPosition::EdgeB,
        StackPosition::Both,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EdgeA => "edge-a",
            Self::Interior => "interior",
            Self::EdgeB => "edge-b",
            Self::Both => "both",
        }
    }

    /// Whether the main-axis (edge-A, edge-B) edges are shown for this position.
    #[must_use]
    pub const fn main_edges_shown(self) -> (bool, bool) {
        match self {
            Self::EdgeA => (true, false),
            Self::Interior => (false, false),
            Self::EdgeB => (false, true),
            Self::Both => (true, true),
        }
    }
}

impl fmt::Display for StackPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
