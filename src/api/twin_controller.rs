use tracing::{debug, warn};

use crate::core::{AxisTicks, LinearScale, PanelId, StackPosition, TickSides};
use crate::error::{GridError, GridResult};
use crate::render::Renderer;

use super::StackGrid;

impl<R: Renderer> StackGrid<R> {
    /// Adds one twin row per entry of `stack_indices`, in order.
    ///
    /// A twin shares its host's main scale, gets a fresh stacked scale shared
    /// across the twin row, faces the side opposite its host and paints above
    /// it. Twin rows are interior, so they never carry main-axis edges.
    /// Repeating an index creates additional twins of that row.
    pub fn make_twins(&mut self, stack_indices: &[usize]) -> GridResult<()> {
        let stack_dim = self.state.stack_dim();
        if let Some(&bad) = stack_indices.iter().find(|&&index| index >= stack_dim) {
            return Err(GridError::PanelOutOfRange {
                stack_index: bad,
                main_index: 0,
            });
        }

        let orientation = self.state.orientation;
        for &host in stack_indices {
            let twin_side = orientation.opposite(self.state.data_sides[host])?;
            let row_index = self.state.total_stack_dim();
            let stack_scale = self.state.push_scale(LinearScale::default());
            let host_row = self.state.row(host)?.to_vec();

            let mut row = Vec::with_capacity(host_row.len());
            for (main_index, host_id) in host_row.into_iter().enumerate() {
                let (main_scale, host_z) = {
                    let host_panel = self.state.panel(host_id)?;
                    (
                        host_panel.scale_id(orientation.main_axis()),
                        host_panel.z_order,
                    )
                };
                let id =
                    self.state
                        .insert_panel(row_index, host, main_index, main_scale, stack_scale)?;
                let panel = self.state.panel_mut(id)?;
                panel.twin_of = Some(host_id);
                panel.z_order = host_z + 1;
                panel.ticks_mut(orientation.main_axis()).hide();
                *panel.ticks_mut(orientation.stack_axis()) = AxisTicks {
                    marks: TickSides::only(twin_side),
                    labels: TickSides::only(twin_side),
                    ..AxisTicks::low_only()
                };
                row.push(id);
            }

            self.state.matrix.push(row);
            self.state.twin_hosts.push(host);
            self.state.data_sides.push(twin_side);
            self.state.stack_positions.push(StackPosition::Interior);
            debug!(host, row = row_index, side = %twin_side, "created twin row");
        }

        if !stack_indices.is_empty() {
            self.state.shifts.twin_relative = None;
            self.state.is_clean = false;
        }
        self.state.debug_assert_invariants();
        Ok(())
    }

    /// Removes every twin row and its stacked scale.
    ///
    /// Overlays anchored on removed twins stay in the figure but are skipped
    /// by later realignment.
    pub fn remove_twins(&mut self) {
        let stack_dim = self.state.stack_dim();
        if self.state.twin_dim() == 0 {
            return;
        }

        let removed = self.state.matrix.split_off(stack_dim);
        let mut removed_panels = 0usize;
        for id in removed.into_iter().flatten() {
            if self.state.panels.shift_remove(&id).is_some() {
                removed_panels += 1;
            }
        }
        let orphaned = self
            .state
            .overlays
            .iter()
            .filter(|overlay| !self.state.overlay_anchors_exist(overlay))
            .count();
        if orphaned > 0 {
            warn!(orphaned, "overlays anchored on removed twins will no longer realign");
        }

        self.state.data_sides.truncate(stack_dim);
        self.state.stack_positions.truncate(stack_dim);
        self.state.twin_hosts.clear();
        self.state.scales.truncate(self.state.base_scale_count);
        self.state.shifts.twin_relative = None;
        self.state.is_clean = false;
        debug!(removed_panels, "removed twin rows");
        self.state.debug_assert_invariants();
    }

    /// Resolves a panel by stacked row and main-axis section.
    ///
    /// With `twin == Some(n)` the lookup returns the `n`-th twin (creation
    /// order) of original row `stack_index` instead of the row itself.
    pub fn get_panel(
        &self,
        stack_index: usize,
        main_index: usize,
        twin: Option<usize>,
    ) -> GridResult<PanelId> {
        let row = match twin {
            None => stack_index,
            Some(instance) => self
                .twin_indices(stack_index)
                .get(instance)
                .copied()
                .ok_or(GridError::TwinLookup {
                    stack_index,
                    instance,
                })?,
        };
        self.state.panel_at(row, main_index)
    }

    /// Storage rows of the twins hosted by `stack_index`, in creation order.
    #[must_use]
    pub fn twin_indices(&self, stack_index: usize) -> Vec<usize> {
        let stack_dim = self.state.stack_dim();
        self.state
            .twin_hosts
            .iter()
            .enumerate()
            .filter(|&(_, &host)| host == stack_index)
            .map(|(twin, _)| stack_dim + twin)
            .collect()
    }

    /// Host stacked index for every twin row, in creation order.
    #[must_use]
    pub fn twin_hosts(&self) -> &[usize] {
        &self.state.twin_hosts
    }
}
