use tracing::trace;

use crate::core::{
    Axis, Figure, LinearScale, Orientation, Panel, PanelId, Ratios, Side, StackPosition,
};
use crate::error::GridResult;
use crate::render::Renderer;

use super::GridConfig;
use super::grid_state::GridState;

/// Stacked panel grid: one shared main axis, one independent scale per
/// stacked row, plus optional twin rows.
///
/// The grid owns its figure, panels and overlays. Mutators keep the panel
/// matrix, data sides and stack positions consistent with each other.
pub struct StackGrid<R: Renderer> {
    pub(super) renderer: R,
    pub(super) state: GridState,
}

impl<R: Renderer> StackGrid<R> {
    pub fn new(renderer: R, config: GridConfig) -> GridResult<Self> {
        let state = GridState::build(&config)?;
        Ok(Self { renderer, state })
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.state.orientation
    }

    #[must_use]
    pub fn stack_dim(&self) -> usize {
        self.state.stack_dim()
    }

    #[must_use]
    pub fn main_axis_dim(&self) -> usize {
        self.state.main_axis_dim()
    }

    #[must_use]
    pub fn twin_dim(&self) -> usize {
        self.state.twin_dim()
    }

    /// Original stacked rows plus twin rows.
    #[must_use]
    pub fn total_stack_dim(&self) -> usize {
        self.state.total_stack_dim()
    }

    #[must_use]
    pub fn stack_ratios(&self) -> &Ratios {
        &self.state.stack_ratios
    }

    #[must_use]
    pub fn main_axis_ratios(&self) -> &Ratios {
        &self.state.main_ratios
    }

    #[must_use]
    pub fn data_sides(&self) -> &[Side] {
        &self.state.data_sides
    }

    #[must_use]
    pub fn stack_positions(&self) -> &[StackPosition] {
        &self.state.stack_positions
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.state.is_clean
    }

    #[must_use]
    pub fn spine_width(&self) -> f64 {
        self.state.spine_width
    }

    #[must_use]
    pub fn figure(&self) -> &Figure {
        &self.state.figure
    }

    /// Panels in creation order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.state.panels.values()
    }

    pub fn panel(&self, id: PanelId) -> GridResult<&Panel> {
        self.state.panel(id)
    }

    /// Panel ids of one storage row in main-axis order.
    pub fn row(&self, stack_index: usize) -> GridResult<&[PanelId]> {
        self.state.row(stack_index)
    }

    /// Current coordinate range of `panel` along `axis`.
    pub fn limits(&self, panel: PanelId, axis: Axis) -> GridResult<(f64, f64)> {
        Ok(self.state.panel_scale(panel, axis)?.domain())
    }

    pub fn scale(&self, panel: PanelId, axis: Axis) -> GridResult<LinearScale> {
        self.state.panel_scale(panel, axis)
    }

    /// Verifies matrix shape, twin bookkeeping and side validity.
    pub fn check_invariants(&self) -> GridResult<()> {
        self.state.check_invariants()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&mut self) -> GridResult<()> {
        let frame = self.build_render_frame()?;
        trace!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "render grid frame"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
