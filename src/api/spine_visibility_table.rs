use smallvec::SmallVec;

use crate::core::{Orientation, Side, StackPosition, TickSides};
use crate::error::GridResult;

/// Orientation-free name for one panel edge.
///
/// `EdgeA`/`EdgeB` are the two main-axis edges (top/bottom for a horizontal
/// main axis, left/right for a vertical one); `StackLow`/`StackHigh` are the
/// edges that can carry a stacked scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SpineRole {
    EdgeA,
    EdgeB,
    StackLow,
    StackHigh,
}

impl SpineRole {
    pub(super) fn side(self, orientation: Orientation) -> Side {
        let (edge_a, edge_b) = orientation.main_edges();
        match self {
            Self::EdgeA => edge_a,
            Self::EdgeB => edge_b,
            Self::StackLow => orientation.low_side(),
            Self::StackHigh => orientation.high_side(),
        }
    }
}

/// Stacked edge kept on a panel, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DataSlot {
    Low,
    High,
    None,
}

impl DataSlot {
    pub(super) fn for_side(orientation: Orientation, side: Option<Side>) -> Self {
        match side {
            Some(side) if side == orientation.low_side() => Self::Low,
            Some(side) if side == orientation.high_side() => Self::High,
            _ => Self::None,
        }
    }
}

/// Edges hidden by cleanup for a panel at `position` keeping `slot`.
///
/// Every edge not listed stays visible.
pub(super) fn hidden_roles(position: StackPosition, slot: DataSlot) -> &'static [SpineRole] {
    use SpineRole::{EdgeA, EdgeB, StackHigh, StackLow};

    match (position, slot) {
        (StackPosition::EdgeA, DataSlot::Low) => &[EdgeB, StackHigh],
        (StackPosition::EdgeA, DataSlot::High) => &[EdgeB, StackLow],
        (StackPosition::EdgeA, DataSlot::None) => &[EdgeB, StackLow, StackHigh],
        (StackPosition::Interior, DataSlot::Low) => &[EdgeA, EdgeB, StackHigh],
        (StackPosition::Interior, DataSlot::High) => &[EdgeA, EdgeB, StackLow],
        (StackPosition::Interior, DataSlot::None) => &[EdgeA, EdgeB, StackLow, StackHigh],
        (StackPosition::EdgeB, DataSlot::Low) => &[EdgeA, StackHigh],
        (StackPosition::EdgeB, DataSlot::High) => &[EdgeA, StackLow],
        (StackPosition::EdgeB, DataSlot::None) => &[EdgeA, StackLow, StackHigh],
        (StackPosition::Both, DataSlot::Low) => &[StackHigh],
        (StackPosition::Both, DataSlot::High) => &[StackLow],
        (StackPosition::Both, DataSlot::None) => &[StackLow, StackHigh],
    }
}

/// Concrete sides hidden for one panel. `data_side` is `None` for panels that
/// do not carry their row's stacked scale.
pub(super) fn hidden_sides(
    orientation: Orientation,
    position: StackPosition,
    data_side: Option<Side>,
) -> GridResult<SmallVec<[Side; 4]>> {
    if let Some(side) = data_side {
        // Rejects main-axis sides passed as data sides.
        orientation.opposite(side)?;
    }
    let slot = DataSlot::for_side(orientation, data_side);
    Ok(hidden_roles(position, slot)
        .iter()
        .map(|role| role.side(orientation))
        .collect())
}

/// Main-axis tick placement for a row at `position`.
pub(super) fn main_tick_sides(orientation: Orientation, position: StackPosition) -> TickSides {
    let (edge_a, edge_b) = orientation.main_edges();
    let (show_a, show_b) = position.main_edges_shown();
    let mut sides = TickSides::NONE;
    sides.set(edge_a, show_a);
    sides.set(edge_b, show_b);
    sides
}
