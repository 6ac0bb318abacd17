use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::core::{Axis, LinearScale, Orientation, PanelId, ScaleId, SubplotParams};
use crate::error::GridResult;
use crate::render::Renderer;

use super::StackGrid;

impl<R: Renderer> StackGrid<R> {
    /// Sets the gap between stacked rows (relative to one average cell) and
    /// re-solves panel bounds. Negative gaps overlap neighbouring rows.
    ///
    /// With `realign`, overlays are moved to follow their anchor panels.
    pub fn adjust_spacing(&mut self, gap: f64, realign: bool) -> GridResult<()> {
        let params = self.state.figure.subplot();
        let params = match self.state.orientation {
            Orientation::MainHorizontal => SubplotParams {
                hspace: gap,
                ..params
            },
            Orientation::MainVertical => SubplotParams {
                wspace: gap,
                ..params
            },
        };
        self.apply_subplot(params, realign)?;
        debug!(gap, "adjusted stack spacing");
        Ok(())
    }

    /// Sets the gap between main-axis sections.
    pub fn adjust_section_spacing(&mut self, gap: f64, realign: bool) -> GridResult<()> {
        let params = self.state.figure.subplot();
        let params = match self.state.orientation {
            Orientation::MainHorizontal => SubplotParams {
                wspace: gap,
                ..params
            },
            Orientation::MainVertical => SubplotParams {
                hspace: gap,
                ..params
            },
        };
        self.apply_subplot(params, realign)?;
        debug!(gap, "adjusted section spacing");
        Ok(())
    }

    /// Replaces figure margins and gaps together.
    pub fn set_subplot_params(&mut self, params: SubplotParams, realign: bool) -> GridResult<()> {
        self.apply_subplot(params, realign)
    }

    fn apply_subplot(&mut self, params: SubplotParams, realign: bool) -> GridResult<()> {
        let previous = self.state.figure.subplot();
        self.state.figure.set_subplot(params)?;
        if let Err(err) = self.state.relayout() {
            warn!(error = %err, "rejected subplot params, restoring previous layout");
            self.state.figure.set_subplot(previous)?;
            return Err(err);
        }
        if realign {
            self.realign_overlays()?;
        }
        Ok(())
    }

    /// Sets the shared main-axis range of one main-axis section.
    pub fn set_main_limits(
        &mut self,
        main_index: usize,
        start: f64,
        end: f64,
        realign: bool,
    ) -> GridResult<()> {
        let scale = self.main_scale_id(main_index)?;
        self.set_scale(scale, LinearScale::new(start, end)?, realign)
    }

    /// Sets the stacked-axis range of one storage row (original or twin).
    pub fn set_stack_limits(
        &mut self,
        stack_index: usize,
        start: f64,
        end: f64,
        realign: bool,
    ) -> GridResult<()> {
        let scale = self.stack_scale_id(stack_index)?;
        self.set_scale(scale, LinearScale::new(start, end)?, realign)
    }

    /// Sets the range of `panel` along `axis`. Every panel sharing that scale
    /// follows.
    pub fn set_panel_limits(
        &mut self,
        panel: PanelId,
        axis: Axis,
        start: f64,
        end: f64,
        realign: bool,
    ) -> GridResult<()> {
        let scale = self.state.panel(panel)?.scale_id(axis);
        self.set_scale(scale, LinearScale::new(start, end)?, realign)
    }

    /// Flips the main-axis direction of the listed sections; an empty list
    /// flips every section. Each section flips once however often it is
    /// listed.
    pub fn reverse_main_axis(&mut self, main_indices: &[usize], realign: bool) -> GridResult<()> {
        let all = (0..self.state.main_axis_dim()).collect::<Vec<_>>();
        let indices: &[usize] = if main_indices.is_empty() { &all } else { main_indices };
        let scales = indices
            .iter()
            .map(|&index| self.main_scale_id(index))
            .collect::<GridResult<IndexSet<_>>>()?;
        self.invert_scales(&scales, realign)
    }

    /// Flips the stacked-axis direction of the listed storage rows; an empty
    /// list flips every original row. Rows sharing a scale flip it once.
    pub fn reverse_stack_axis(&mut self, stack_indices: &[usize], realign: bool) -> GridResult<()> {
        let all = (0..self.state.stack_dim()).collect::<Vec<_>>();
        let indices: &[usize] = if stack_indices.is_empty() { &all } else { stack_indices };
        let scales = indices
            .iter()
            .map(|&index| self.stack_scale_id(index))
            .collect::<GridResult<IndexSet<_>>>()?;
        self.invert_scales(&scales, realign)
    }

    fn main_scale_id(&self, main_index: usize) -> GridResult<ScaleId> {
        let id = self.state.panel_at(0, main_index)?;
        Ok(self
            .state
            .panel(id)?
            .scale_id(self.state.orientation.main_axis()))
    }

    fn stack_scale_id(&self, stack_index: usize) -> GridResult<ScaleId> {
        let id = self.state.panel_at(stack_index, 0)?;
        Ok(self
            .state
            .panel(id)?
            .scale_id(self.state.orientation.stack_axis()))
    }

    fn set_scale(&mut self, id: ScaleId, scale: LinearScale, realign: bool) -> GridResult<()> {
        *self.state.scale_mut(id)? = scale;
        debug!(scale = id.index(), domain = ?scale.domain(), "set scale limits");
        if realign {
            self.realign_overlays()?;
        }
        Ok(())
    }

    fn invert_scales(&mut self, ids: &IndexSet<ScaleId>, realign: bool) -> GridResult<()> {
        for &id in ids {
            let scale = self.state.scale_mut(id)?;
            *scale = scale.inverted();
        }
        debug!(count = ids.len(), "reversed axes");
        if realign {
            self.realign_overlays()?;
        }
        Ok(())
    }
}
