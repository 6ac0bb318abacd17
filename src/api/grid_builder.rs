use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    AxisTicks, Figure, LinearScale, Orientation, Panel, ScaleId, SpineSet, normalize_ratios,
};
use crate::error::{GridError, GridResult};

use super::grid_state::{GridState, ShiftState};
use super::spine_assigner::{assign_positions, assign_sides};
use super::GridConfig;

impl GridState {
    /// Builds the panel matrix described by `config`.
    ///
    /// Panels in the same main-axis section share one main scale; panels in
    /// the same stacked row share one stacked scale.
    pub(super) fn build(config: &GridConfig) -> GridResult<Self> {
        if !config.spine_width.is_finite() || config.spine_width <= 0.0 {
            return Err(GridError::InvalidData(format!(
                "spine width must be finite and > 0, got {}",
                config.spine_width
            )));
        }
        let stack_ratios = normalize_ratios(config.stack_ratios.clone())?;
        let main_ratios = normalize_ratios(config.main_axis_ratios.clone())?;
        let figure = Figure::new(config.figure_size, config.subplot)?;
        let orientation = config.orientation;

        let stack_dim = stack_ratios.len();
        let main_dim = main_ratios.len();
        let data_sides = assign_sides(
            orientation,
            config.resolved_start_side(),
            config.alternate_sides,
            stack_dim,
        )?;
        let stack_positions = assign_positions(stack_dim, config.singleton_both_spines);

        let mut state = Self {
            orientation,
            figure,
            stack_ratios,
            main_ratios,
            panels: IndexMap::with_capacity(stack_dim * main_dim),
            matrix: Vec::with_capacity(stack_dim),
            next_panel_id: 0,
            scales: Vec::with_capacity(stack_dim + main_dim),
            base_scale_count: 0,
            data_sides,
            stack_positions,
            twin_hosts: Vec::new(),
            shifts: ShiftState::default(),
            is_clean: false,
            spine_width: config.spine_width,
            overlays: Vec::new(),
        };

        let main_scales = (0..main_dim)
            .map(|_| state.push_scale(LinearScale::default()))
            .collect::<Vec<_>>();
        for stack_index in 0..stack_dim {
            let stack_scale = state.push_scale(LinearScale::default());
            let row = main_scales
                .iter()
                .enumerate()
                .map(|(main_index, &main_scale)| {
                    state.insert_panel(stack_index, stack_index, main_index, main_scale, stack_scale)
                })
                .collect::<GridResult<Vec<_>>>()?;
            state.matrix.push(row);
        }
        state.base_scale_count = state.scales.len();

        debug!(
            %orientation,
            stack_dim,
            main_dim,
            panels = state.panels.len(),
            "built stacked grid"
        );
        state.debug_assert_invariants();
        Ok(state)
    }

    /// Creates one panel in grid cell (`cell_row`, `main_index`) and files it
    /// under matrix row `stack_index`.
    pub(super) fn insert_panel(
        &mut self,
        stack_index: usize,
        cell_row: usize,
        main_index: usize,
        main_scale: ScaleId,
        stack_scale: ScaleId,
    ) -> GridResult<crate::core::PanelId> {
        let (rows, cols) = self.cell_spans(cell_row, main_index);
        let bounds = self
            .grid_spec()
            .panel_rect(self.figure.subplot(), rows, cols)?;
        let (x_scale, y_scale) = match self.orientation {
            Orientation::MainHorizontal => (main_scale, stack_scale),
            Orientation::MainVertical => (stack_scale, main_scale),
        };
        let id = self.allocate_panel_id();
        self.panels.insert(
            id,
            Panel {
                id,
                stack_index,
                main_index,
                rows,
                cols,
                bounds,
                x_scale,
                y_scale,
                spines: SpineSet::native(self.spine_width),
                x_ticks: AxisTicks::low_only(),
                y_ticks: AxisTicks::low_only(),
                z_order: 0,
                twin_of: None,
                label: None,
                cutouts: Vec::new(),
            },
        );
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::GridConfig;
    use crate::api::grid_state::GridState;
    use crate::core::{Axis, Orientation, Side, StackPosition};

    #[test]
    fn shares_main_scale_per_section_and_stack_scale_per_row() {
        let config = GridConfig::new(vec![2.0, 1.0, 1.0], Orientation::MainHorizontal)
            .with_main_axis_ratios(vec![3.0, 1.0]);
        let state = GridState::build(&config).expect("valid grid");

        assert_eq!(state.matrix.len(), 3);
        assert!(state.matrix.iter().all(|row| row.len() == 2));
        assert_eq!(state.scales.len(), 5);

        let a = state.panel(state.matrix[0][0]).expect("panel");
        let b = state.panel(state.matrix[2][0]).expect("panel");
        let c = state.panel(state.matrix[0][1]).expect("panel");
        assert_eq!(a.scale_id(Axis::X), b.scale_id(Axis::X));
        assert_ne!(a.scale_id(Axis::X), c.scale_id(Axis::X));
        assert_eq!(a.scale_id(Axis::Y), c.scale_id(Axis::Y));
        assert_ne!(a.scale_id(Axis::Y), b.scale_id(Axis::Y));
    }

    #[test]
    fn vertical_main_axis_lays_stack_out_in_columns() {
        let config = GridConfig::new(vec![1.0, 1.0], Orientation::MainVertical)
            .with_main_axis_ratios(vec![1.0, 1.0]);
        let state = GridState::build(&config).expect("valid grid");

        let left = state.panel(state.matrix[0][0]).expect("panel").bounds();
        let right = state.panel(state.matrix[1][0]).expect("panel").bounds();
        let lower = state.panel(state.matrix[0][1]).expect("panel").bounds();
        assert!(left.x1() < right.x0);
        assert!(lower.y1() < left.y0);
        assert_eq!(state.data_sides, vec![Side::Top, Side::Bottom]);
        assert_eq!(
            state.stack_positions,
            vec![StackPosition::EdgeA, StackPosition::EdgeB]
        );
    }

    #[test]
    fn rejects_bad_ratios_and_widths() {
        let bad_ratio = GridConfig::new(vec![1.0, 0.0], Orientation::MainHorizontal);
        assert!(GridState::build(&bad_ratio).is_err());

        let bad_width =
            GridConfig::new(1.0, Orientation::MainHorizontal).with_spine_width(f64::NAN);
        assert!(GridState::build(&bad_width).is_err());

        let bad_side = GridConfig::new(vec![1.0, 1.0], Orientation::MainHorizontal)
            .with_start_side(Side::Top);
        assert!(GridState::build(&bad_side).is_err());
    }
}
