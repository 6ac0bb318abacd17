use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Axis, DataPoint, Orientation, Patch, PatchStyle, PanelId};
use crate::error::{GridError, GridResult};
use crate::render::{Color, Renderer};

use super::StackGrid;
use super::grid_state::GridState;

pub const DEFAULT_BAR_ALPHA: f64 = 0.25;
const FRAME_Z_ORDER: i32 = -1;
const BAR_Z_ORDER: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayKind {
    Frame,
    Bar,
}

/// Stroke width for frame outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LineWidth {
    /// Use the grid's spine width.
    #[default]
    Default,
    Points(f64),
}

/// Direction a bar spans across the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BarOrientation {
    /// Spans an x interval, full height between the anchors.
    Vertical,
    /// Spans a y interval, full width between the anchors.
    Horizontal,
}

/// Figure patch anchored to data coordinates in two panels.
///
/// The data corners are fixed at creation; realignment recomputes the figure
/// rectangle from them after the panels move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub lower_left_panel: PanelId,
    pub upper_right_panel: PanelId,
    pub data_lower_left: DataPoint,
    pub data_upper_right: DataPoint,
    /// Index of the backing patch in the figure's drawing list.
    pub patch_index: usize,
}

/// Outcome of one realignment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RealignReport {
    pub realigned: usize,
    pub orphaned: usize,
}

impl GridState {
    pub(super) fn overlay_anchors_exist(&self, overlay: &Overlay) -> bool {
        self.panels.contains_key(&overlay.lower_left_panel)
            && self.panels.contains_key(&overlay.upper_right_panel)
    }

    fn register_overlay(
        &mut self,
        kind: OverlayKind,
        lower_left_panel: PanelId,
        data_lower_left: DataPoint,
        upper_right_panel: PanelId,
        data_upper_right: DataPoint,
        style: PatchStyle,
    ) -> GridResult<usize> {
        let bounds = self.rectangle_from_corners(
            lower_left_panel,
            data_lower_left,
            upper_right_panel,
            data_upper_right,
        )?;
        let patch_index = self.figure.push_patch(Patch { bounds, style });
        self.overlays.push(Overlay {
            kind,
            lower_left_panel,
            upper_right_panel,
            data_lower_left,
            data_upper_right,
            patch_index,
        });
        debug!(?kind, patch_index, ?bounds, "registered overlay");
        Ok(self.overlays.len() - 1)
    }

    pub(super) fn realign_overlays(&mut self) -> GridResult<RealignReport> {
        let mut report = RealignReport::default();
        for overlay in self.overlays.clone() {
            if !self.overlay_anchors_exist(&overlay) {
                warn!(
                    patch_index = overlay.patch_index,
                    "overlay anchor panel no longer exists, skipping realign"
                );
                report.orphaned += 1;
                continue;
            }
            let bounds = self.rectangle_from_corners(
                overlay.lower_left_panel,
                overlay.data_lower_left,
                overlay.upper_right_panel,
                overlay.data_upper_right,
            )?;
            self.figure.set_patch_bounds(overlay.patch_index, bounds)?;
            report.realigned += 1;
        }
        Ok(report)
    }

    pub(super) fn resolve_line_width(&self, width: LineWidth) -> GridResult<f64> {
        match width {
            LineWidth::Default => Ok(self.spine_width),
            LineWidth::Points(points) if points.is_finite() && points > 0.0 => Ok(points),
            LineWidth::Points(points) => Err(GridError::InvalidData(format!(
                "line width must be finite and > 0, got {points}"
            ))),
        }
    }
}

impl<R: Renderer> StackGrid<R> {
    /// Outlines the region between two panels' current limits.
    ///
    /// The lower-left corner is `lower_left`'s minimum x/y limits, the
    /// upper-right corner is `upper_right`'s maximum limits. Returns the
    /// overlay index.
    pub fn draw_frame(
        &mut self,
        lower_left: PanelId,
        upper_right: PanelId,
        line_width: LineWidth,
    ) -> GridResult<usize> {
        let width = self.state.resolve_line_width(line_width)?;
        let (x0, _) = self.state.panel_scale(lower_left, Axis::X)?.domain();
        let (y0, _) = self.state.panel_scale(lower_left, Axis::Y)?.domain();
        let (_, x1) = self.state.panel_scale(upper_right, Axis::X)?.domain();
        let (_, y1) = self.state.panel_scale(upper_right, Axis::Y)?.domain();
        self.state.register_overlay(
            OverlayKind::Frame,
            lower_left,
            DataPoint::new(x0, y0),
            upper_right,
            DataPoint::new(x1, y1),
            PatchStyle {
                face: None,
                edge: Some(Color::BLACK),
                line_width: width,
                alpha: 1.0,
                z_order: FRAME_Z_ORDER,
            },
        )
    }

    /// Frames every main-axis section across the full stack.
    pub fn draw_frames(&mut self, line_width: LineWidth) -> GridResult<Vec<usize>> {
        let last_row = self.state.stack_dim() - 1;
        let (low_row, high_row) = match self.state.orientation {
            Orientation::MainHorizontal => (last_row, 0),
            Orientation::MainVertical => (0, last_row),
        };
        (0..self.state.main_axis_dim())
            .map(|main_index| {
                let lower_left = self.state.panel_at(low_row, main_index)?;
                let upper_right = self.state.panel_at(high_row, main_index)?;
                self.draw_frame(lower_left, upper_right, line_width)
            })
            .collect()
    }

    /// Shades `span` (data units along the bar's axis) across the stack.
    ///
    /// The other dimension runs from `lower_left`'s minimum limit to
    /// `upper_right`'s maximum limit. Returns the overlay index.
    pub fn draw_bar(
        &mut self,
        lower_left: PanelId,
        upper_right: PanelId,
        span: (f64, f64),
        orientation: BarOrientation,
        color: Color,
        alpha: Option<f64>,
    ) -> GridResult<usize> {
        color.validate()?;
        let alpha = alpha.unwrap_or(DEFAULT_BAR_ALPHA);
        if !(0.0..=1.0).contains(&alpha) {
            return Err(GridError::InvalidData(format!(
                "bar alpha must be in [0, 1], got {alpha}"
            )));
        }
        let (start, end) = span;
        let (corner_low, corner_high) = match orientation {
            BarOrientation::Vertical => {
                let (y0, _) = self.state.panel_scale(lower_left, Axis::Y)?.domain();
                let (_, y1) = self.state.panel_scale(upper_right, Axis::Y)?.domain();
                (DataPoint::new(start, y0), DataPoint::new(end, y1))
            }
            BarOrientation::Horizontal => {
                let (x0, _) = self.state.panel_scale(lower_left, Axis::X)?.domain();
                let (_, x1) = self.state.panel_scale(upper_right, Axis::X)?.domain();
                (DataPoint::new(x0, start), DataPoint::new(x1, end))
            }
        };
        self.state.register_overlay(
            OverlayKind::Bar,
            lower_left,
            corner_low,
            upper_right,
            corner_high,
            PatchStyle {
                face: Some(color),
                edge: None,
                line_width: 0.0,
                alpha,
                z_order: BAR_Z_ORDER,
            },
        )
    }

    /// Recomputes every overlay rectangle from its stored data corners.
    pub fn realign_overlays(&mut self) -> GridResult<RealignReport> {
        let report = self.state.realign_overlays()?;
        debug!(
            realigned = report.realigned,
            orphaned = report.orphaned,
            "realigned overlays"
        );
        Ok(report)
    }

    #[must_use]
    pub fn overlays(&self) -> &[Overlay] {
        &self.state.overlays
    }
}
