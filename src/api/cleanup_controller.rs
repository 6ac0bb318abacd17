use tracing::{debug, trace};

use crate::core::{PanelId, Side, TickSides};
use crate::error::GridResult;
use crate::render::Renderer;

use super::StackGrid;
use super::spine_visibility_table::{hidden_sides, main_tick_sides};

impl<R: Renderer> StackGrid<R> {
    /// Hides redundant spines, ticks and tick labels.
    ///
    /// Each row keeps its stacked scale on one panel only (the data panel on
    /// the row's data side); main-axis spines and ticks survive only on the
    /// edges its stack position allows. Does nothing when already clean.
    pub fn cleanup(&mut self) -> GridResult<()> {
        if self.state.is_clean {
            trace!("grid already clean");
            return Ok(());
        }

        let orientation = self.state.orientation;
        let main_axis = orientation.main_axis();
        let stack_axis = orientation.stack_axis();
        let main_dim = self.state.main_axis_dim();

        for row_index in 0..self.state.total_stack_dim() {
            let position = self.state.stack_positions[row_index];
            let data_side = self.state.data_sides[row_index];
            let data_index = orientation.data_panel_index(data_side, main_dim)?;
            let main_ticks = main_tick_sides(orientation, position);
            let data_hidden = hidden_sides(orientation, position, Some(data_side))?;
            let other_hidden = hidden_sides(orientation, position, None)?;

            let row = self.state.row(row_index)?.to_vec();
            for (main_index, id) in row.into_iter().enumerate() {
                let panel = self.state.panel_mut(id)?;
                let ticks = panel.ticks_mut(main_axis);
                ticks.marks = main_ticks;
                ticks.labels = main_ticks;

                let hidden = if main_index == data_index {
                    let ticks = panel.ticks_mut(stack_axis);
                    ticks.marks = TickSides::only(data_side);
                    ticks.labels = TickSides::only(data_side);
                    &data_hidden
                } else {
                    panel.ticks_mut(stack_axis).hide();
                    &other_hidden
                };
                for side in Side::ALL {
                    panel.spines.get_mut(side).visible = !hidden.contains(&side);
                }
            }
        }

        self.state.is_clean = true;
        debug!(rows = self.state.total_stack_dim(), "cleaned grid spines and ticks");
        Ok(())
    }

    /// Makes every spine of every panel visible again.
    ///
    /// Ticks and spine positions are left as they are.
    pub fn reveal_all_spines(&mut self) {
        for panel in self.state.panels.values_mut() {
            for side in Side::ALL {
                panel.spines.get_mut(side).visible = true;
            }
        }
        self.state.is_clean = false;
        debug!("revealed all spines");
    }

    /// Shows or hides one edge of one panel: its spine, tick marks and tick
    /// labels.
    pub fn set_edge_visibility(
        &mut self,
        panel: PanelId,
        side: Side,
        visible: bool,
    ) -> GridResult<()> {
        let target = self.state.panel_mut(panel)?;
        target.spines.get_mut(side).visible = visible;
        let ticks = target.ticks_mut(side.axis());
        ticks.marks.set(side, visible);
        ticks.labels.set(side, visible);
        self.state.is_clean = false;
        trace!(panel = panel.raw(), %side, visible, "set edge visibility");
        Ok(())
    }
}
