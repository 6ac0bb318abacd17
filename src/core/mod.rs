pub mod figure;
pub mod gridspec;
pub mod orientation;
pub mod panel;
pub mod ratios;
pub mod scale;
pub mod types;

pub use figure::{Figure, FigureRectangle, Patch, PatchStyle};
pub use gridspec::{CellSpan, FigureRect, GridSpec, SubplotParams};
pub use orientation::Orientation;
pub use panel::{
    AxisLabel, AxisTicks, CutoutMark, Panel, PanelId, ScaleId, Spine, SpineSet, TickSides,
    native_position,
};
pub use ratios::{RatioInput, Ratios, normalize_ratios};
pub use scale::LinearScale;
pub use types::{Axis, DataPoint, FigureSize, Side, StackPosition, Viewport};
