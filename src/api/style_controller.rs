use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AxisLabel, PanelId, Side};
use crate::error::{GridError, GridResult};
use crate::render::{Color, Renderer};

use super::StackGrid;

/// Which stacked-axis elements a color change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTarget {
    #[default]
    SpinesAndTicks,
    SpinesOnly,
    TicksOnly,
}

impl ColorTarget {
    const fn spines(self) -> bool {
        matches!(self, Self::SpinesAndTicks | Self::SpinesOnly)
    }

    const fn ticks(self) -> bool {
        matches!(self, Self::SpinesAndTicks | Self::TicksOnly)
    }
}

impl<R: Renderer> StackGrid<R> {
    /// Sets the line width (points) of every spine; later frames and cutouts
    /// default to it.
    pub fn set_spine_width(&mut self, width: f64) -> GridResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GridError::InvalidData(format!(
                "spine width must be finite and > 0, got {width}"
            )));
        }
        for panel in self.state.panels.values_mut() {
            for side in Side::ALL {
                panel.spines.get_mut(side).width = width;
            }
        }
        self.state.spine_width = width;
        debug!(width, "set spine width");
        Ok(())
    }

    /// Colors the stacked-axis spines and/or stacked-axis ticks of one panel.
    pub fn set_axis_color(
        &mut self,
        panel: PanelId,
        color: Color,
        target: ColorTarget,
    ) -> GridResult<()> {
        color.validate()?;
        let orientation = self.state.orientation;
        let target_panel = self.state.panel_mut(panel)?;
        if target.ticks() {
            target_panel.ticks_mut(orientation.stack_axis()).color = color;
        }
        if target.spines() {
            for side in orientation.stack_sides() {
                target_panel.spines.get_mut(side).color = color;
            }
        }
        Ok(())
    }

    /// Returns every stacked-axis spine and tick to black.
    pub fn reset_spine_color(&mut self) {
        let orientation = self.state.orientation;
        for panel in self.state.panels.values_mut() {
            panel.ticks_mut(orientation.stack_axis()).color = Color::BLACK;
            for side in orientation.stack_sides() {
                panel.spines.get_mut(side).color = Color::BLACK;
            }
        }
    }

    /// Labels each storage row (originals, then twins in creation order) on
    /// its data panel at its data side. `None` leaves a row unlabelled.
    pub fn set_stack_labels(&mut self, labels: &[Option<&str>]) -> GridResult<()> {
        let total = self.state.total_stack_dim();
        if labels.len() != total {
            warn!(
                expected = total,
                actual = labels.len(),
                "stack label count differs from row count, extra rows or labels ignored"
            );
        }

        let orientation = self.state.orientation;
        let main_dim = self.state.main_axis_dim();
        for (row_index, label) in labels.iter().enumerate().take(total) {
            let Some(text) = label else {
                continue;
            };
            let side = self.state.data_sides[row_index];
            let data_index = orientation.data_panel_index(side, main_dim)?;
            let row = self.state.row(row_index)?.to_vec();
            for (main_index, id) in row.into_iter().enumerate() {
                let panel = self.state.panel_mut(id)?;
                panel.label = (main_index == data_index).then(|| AxisLabel {
                    text: (*text).to_owned(),
                    side,
                });
            }
        }
        debug!(count = labels.len(), "set stack labels");
        Ok(())
    }
}
