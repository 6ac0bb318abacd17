use serde::{Deserialize, Serialize};

use crate::core::{Axis, CellSpan, FigureRect, Side};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(u32);

impl PanelId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Index of a shared coordinate range in the grid's scale arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleId(pub(crate) usize);

impl ScaleId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One rectangle edge that can carry a scale line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spine {
    pub visible: bool,
    /// Position along the perpendicular axis in panel fraction (0 = low edge,
    /// 1 = high edge). Values outside 0..1 move the spine off the panel.
    pub position: f64,
    pub color: Color,
    pub width: f64,
}

impl Spine {
    #[must_use]
    pub fn native(side: Side, width: f64) -> Self {
        Self {
            visible: true,
            position: native_position(side),
            color: Color::BLACK,
            width,
        }
    }
}

#[must_use]
pub const fn native_position(side: Side) -> f64 {
    if side.is_low() { 0.0 } else { 1.0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpineSet {
    pub top: Spine,
    pub bottom: Spine,
    pub left: Spine,
    pub right: Spine,
}

impl SpineSet {
    #[must_use]
    pub fn native(width: f64) -> Self {
        Self {
            top: Spine::native(Side::Top, width),
            bottom: Spine::native(Side::Bottom, width),
            left: Spine::native(Side::Left, width),
            right: Spine::native(Side::Right, width),
        }
    }

    #[must_use]
    pub fn get(&self, side: Side) -> &Spine {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut Spine {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &Spine)> {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
    }

    #[must_use]
    pub fn visible_sides(&self) -> Vec<Side> {
        self.iter()
            .filter(|(_, spine)| spine.visible)
            .map(|(side, _)| side)
            .collect()
    }
}

/// Presence flags for the two edges of one axis (low = bottom/left, high = top/right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickSides {
    pub low: bool,
    pub high: bool,
}

impl TickSides {
    pub const NONE: TickSides = TickSides {
        low: false,
        high: false,
    };

    #[must_use]
    pub const fn new(low: bool, high: bool) -> Self {
        Self { low, high }
    }

    #[must_use]
    pub const fn only(side: Side) -> Self {
        if side.is_low() {
            Self::new(true, false)
        } else {
            Self::new(false, true)
        }
    }

    #[must_use]
    pub const fn contains(self, side: Side) -> bool {
        if side.is_low() { self.low } else { self.high }
    }

    pub fn set(&mut self, side: Side, on: bool) {
        if side.is_low() {
            self.low = on;
        } else {
            self.high = on;
        }
    }
}

/// Tick mark and tick label placement for one axis of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTicks {
    pub marks: TickSides,
    pub labels: TickSides,
    pub color: Color,
}

impl AxisTicks {
    /// Default placement: marks and labels on the low edge only.
    #[must_use]
    pub const fn low_only() -> Self {
        Self {
            marks: TickSides::new(true, false),
            labels: TickSides::new(true, false),
            color: Color::BLACK,
        }
    }

    pub fn hide(&mut self) {
        self.marks = TickSides::NONE;
        self.labels = TickSides::NONE;
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.marks == TickSides::NONE && self.labels == TickSides::NONE
    }
}

/// Stacked-axis title text anchored on one edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub side: Side,
}

/// Short break-mark segment drawn in panel-fraction coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutoutMark {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub width: f64,
}

/// One rectangular subplot, owned by its grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub(crate) id: PanelId,
    pub(crate) stack_index: usize,
    pub(crate) main_index: usize,
    pub(crate) rows: CellSpan,
    pub(crate) cols: CellSpan,
    pub(crate) bounds: FigureRect,
    pub(crate) x_scale: ScaleId,
    pub(crate) y_scale: ScaleId,
    pub(crate) spines: SpineSet,
    pub(crate) x_ticks: AxisTicks,
    pub(crate) y_ticks: AxisTicks,
    pub(crate) z_order: i32,
    pub(crate) twin_of: Option<PanelId>,
    pub(crate) label: Option<AxisLabel>,
    pub(crate) cutouts: Vec<CutoutMark>,
}

impl Panel {
    #[must_use]
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// Storage row/column of this panel in the grid matrix (twins are `>= stack_dim`).
    #[must_use]
    pub fn stack_index(&self) -> usize {
        self.stack_index
    }

    #[must_use]
    pub fn main_index(&self) -> usize {
        self.main_index
    }

    /// Current bounding box in figure fraction. Moves whenever spacing changes.
    #[must_use]
    pub fn bounds(&self) -> FigureRect {
        self.bounds
    }

    #[must_use]
    pub fn scale_id(&self, axis: Axis) -> ScaleId {
        match axis {
            Axis::X => self.x_scale,
            Axis::Y => self.y_scale,
        }
    }

    #[must_use]
    pub fn spines(&self) -> &SpineSet {
        &self.spines
    }

    #[must_use]
    pub fn spine(&self, side: Side) -> &Spine {
        self.spines.get(side)
    }

    #[must_use]
    pub fn ticks(&self, axis: Axis) -> &AxisTicks {
        match axis {
            Axis::X => &self.x_ticks,
            Axis::Y => &self.y_ticks,
        }
    }

    pub(crate) fn ticks_mut(&mut self, axis: Axis) -> &mut AxisTicks {
        match axis {
            Axis::X => &mut self.x_ticks,
            Axis::Y => &mut self.y_ticks,
        }
    }

    #[must_use]
    pub fn z_order(&self) -> i32 {
        self.z_order
    }

    #[must_use]
    pub fn twin_of(&self) -> Option<PanelId> {
        self.twin_of
    }

    #[must_use]
    pub fn is_twin(&self) -> bool {
        self.twin_of.is_some()
    }

    #[must_use]
    pub fn label(&self) -> Option<&AxisLabel> {
        self.label.as_ref()
    }

    #[must_use]
    pub fn cutouts(&self) -> &[CutoutMark] {
        &self.cutouts
    }
}
