use indexmap::IndexMap;

use crate::core::{
    Axis, CellSpan, Figure, GridSpec, LinearScale, Orientation, Panel, PanelId, Ratios, ScaleId,
    Side, StackPosition,
};
use crate::error::{GridError, GridResult};

use super::overlay_registry::Overlay;

/// Requested relative spine offsets, kept so they can be reapplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct ShiftState {
    pub(super) stack_relative: Option<Vec<f64>>,
    pub(super) twin_relative: Option<Vec<f64>>,
}

/// Mutable grid state owned by the `StackGrid` facade.
///
/// `matrix[row]` holds the panel ids of one stacked row in main-axis order.
/// Rows `0..stack_dim` are the original stacked indices; rows after that are
/// twin rows in creation order.
#[derive(Debug, Clone)]
pub(super) struct GridState {
    pub(super) orientation: Orientation,
    pub(super) figure: Figure,
    pub(super) stack_ratios: Ratios,
    pub(super) main_ratios: Ratios,
    pub(super) panels: IndexMap<PanelId, Panel>,
    pub(super) matrix: Vec<Vec<PanelId>>,
    pub(super) next_panel_id: u32,
    pub(super) scales: Vec<LinearScale>,
    pub(super) base_scale_count: usize,
    pub(super) data_sides: Vec<Side>,
    pub(super) stack_positions: Vec<StackPosition>,
    pub(super) twin_hosts: Vec<usize>,
    pub(super) shifts: ShiftState,
    pub(super) is_clean: bool,
    pub(super) spine_width: f64,
    pub(super) overlays: Vec<Overlay>,
}

impl GridState {
    pub(super) fn stack_dim(&self) -> usize {
        self.stack_ratios.len()
    }

    pub(super) fn main_axis_dim(&self) -> usize {
        self.main_ratios.len()
    }

    pub(super) fn twin_dim(&self) -> usize {
        self.twin_hosts.len()
    }

    pub(super) fn total_stack_dim(&self) -> usize {
        self.matrix.len()
    }

    pub(super) fn allocate_panel_id(&mut self) -> PanelId {
        let id = PanelId::new(self.next_panel_id);
        self.next_panel_id += 1;
        id
    }

    pub(super) fn panel(&self, id: PanelId) -> GridResult<&Panel> {
        self.panels.get(&id).ok_or(GridError::UnknownPanel(id))
    }

    pub(super) fn panel_mut(&mut self, id: PanelId) -> GridResult<&mut Panel> {
        self.panels.get_mut(&id).ok_or(GridError::UnknownPanel(id))
    }

    pub(super) fn panel_at(&self, stack_index: usize, main_index: usize) -> GridResult<PanelId> {
        self.matrix
            .get(stack_index)
            .and_then(|row| row.get(main_index))
            .copied()
            .ok_or(GridError::PanelOutOfRange {
                stack_index,
                main_index,
            })
    }

    pub(super) fn row(&self, stack_index: usize) -> GridResult<&[PanelId]> {
        self.matrix
            .get(stack_index)
            .map(Vec::as_slice)
            .ok_or(GridError::PanelOutOfRange {
                stack_index,
                main_index: 0,
            })
    }

    pub(super) fn scale(&self, id: ScaleId) -> GridResult<LinearScale> {
        self.scales.get(id.index()).copied().ok_or_else(|| {
            GridError::InvalidLayout(format!("scale {} is not allocated", id.index()))
        })
    }

    pub(super) fn scale_mut(&mut self, id: ScaleId) -> GridResult<&mut LinearScale> {
        self.scales.get_mut(id.index()).ok_or_else(|| {
            GridError::InvalidLayout(format!("scale {} is not allocated", id.index()))
        })
    }

    pub(super) fn push_scale(&mut self, scale: LinearScale) -> ScaleId {
        self.scales.push(scale);
        ScaleId(self.scales.len() - 1)
    }

    pub(super) fn panel_scale(&self, id: PanelId, axis: Axis) -> GridResult<LinearScale> {
        let scale_id = self.panel(id)?.scale_id(axis);
        self.scale(scale_id)
    }

    /// Continuous grid dimensions in ratio units as (rows, cols).
    pub(super) fn grid_spec(&self) -> GridSpec {
        let stack = self.stack_ratios.total();
        let main = self.main_ratios.total();
        match self.orientation {
            Orientation::MainHorizontal => GridSpec::new(stack, main),
            Orientation::MainVertical => GridSpec::new(main, stack),
        }
    }

    /// Grid cell occupied by the panel at (stack, main) as (rows, cols).
    pub(super) fn cell_spans(&self, stack_index: usize, main_index: usize) -> (CellSpan, CellSpan) {
        let stack = CellSpan::new(
            self.stack_ratios.offsets()[stack_index],
            self.stack_ratios.values()[stack_index],
        );
        let main = CellSpan::new(
            self.main_ratios.offsets()[main_index],
            self.main_ratios.values()[main_index],
        );
        match self.orientation {
            Orientation::MainHorizontal => (stack, main),
            Orientation::MainVertical => (main, stack),
        }
    }

    /// Recomputes every panel's figure bounds from the current subplot params.
    ///
    /// Bounds are computed before any panel is touched, so a failing layout
    /// leaves the previous bounds in place.
    pub(super) fn relayout(&mut self) -> GridResult<()> {
        let spec = self.grid_spec();
        let params = self.figure.subplot();
        let bounds = self
            .panels
            .values()
            .map(|panel| spec.panel_rect(params, panel.rows, panel.cols))
            .collect::<GridResult<Vec<_>>>()?;
        for (panel, rect) in self.panels.values_mut().zip(bounds) {
            panel.bounds = rect;
        }
        Ok(())
    }

    /// Structural consistency check used by tests and debug builds.
    pub(super) fn check_invariants(&self) -> GridResult<()> {
        let stack_dim = self.stack_dim();
        let main_dim = self.main_axis_dim();
        let total = stack_dim + self.twin_dim();
        let fail = |message: String| Err(GridError::InvalidLayout(message));

        if self.matrix.len() != total {
            return fail(format!("matrix has {} rows, expected {total}", self.matrix.len()));
        }
        if self.data_sides.len() != total || self.stack_positions.len() != total {
            return fail(format!(
                "side/position lengths {}/{} differ from {total}",
                self.data_sides.len(),
                self.stack_positions.len()
            ));
        }
        if self.panels.len() != total * main_dim {
            return fail(format!("{} panels stored for {total} rows", self.panels.len()));
        }
        for (row_index, row) in self.matrix.iter().enumerate() {
            if row.len() != main_dim {
                return fail(format!("row {row_index} has {} panels", row.len()));
            }
            for (main_index, id) in row.iter().enumerate() {
                let panel = self.panel(*id)?;
                if panel.stack_index != row_index || panel.main_index != main_index {
                    return fail(format!("panel {} is filed in the wrong cell", id.raw()));
                }
            }
        }
        for (twin, &host) in self.twin_hosts.iter().enumerate() {
            let row = stack_dim + twin;
            if host >= stack_dim {
                return fail(format!("twin row {row} has host {host} outside the stack"));
            }
            if self.stack_positions[row] != StackPosition::Interior {
                return fail(format!("twin row {row} is not interior"));
            }
            if Some(self.data_sides[row]) != self.orientation.opposite(self.data_sides[host]).ok() {
                return fail(format!("twin row {row} does not face away from host"));
            }
        }
        for side in &self.data_sides {
            if !self.orientation.is_stack_side(*side) {
                return fail(format!("{side} is not a stacked side"));
            }
        }
        Ok(())
    }

    pub(super) fn debug_assert_invariants(&self) {
        debug_assert!(
            self.check_invariants().is_ok(),
            "grid invariants violated: {:?}",
            self.check_invariants()
        );
    }
}
