use crate::core::{DataPoint, FigureRectangle, PanelId};
use crate::error::GridResult;
use crate::render::Renderer;

use super::StackGrid;
use super::grid_state::GridState;

impl GridState {
    pub(super) fn to_figure_fraction(
        &self,
        panel: PanelId,
        point: DataPoint,
    ) -> GridResult<(f64, f64)> {
        let target = self.panel(panel)?;
        let fx = self.scale(target.x_scale)?.domain_to_fraction(point.x)?;
        let fy = self.scale(target.y_scale)?.domain_to_fraction(point.y)?;
        Ok(target.bounds.fraction_to_figure(fx, fy))
    }

    /// Figure rectangle spanning two data points, each in its own panel.
    ///
    /// Width or height come out negative when an anchor axis is inverted.
    pub(super) fn rectangle_from_corners(
        &self,
        lower_left_panel: PanelId,
        lower_left: DataPoint,
        upper_right_panel: PanelId,
        upper_right: DataPoint,
    ) -> GridResult<FigureRectangle> {
        let (x0, y0) = self.to_figure_fraction(lower_left_panel, lower_left)?;
        let (x1, y1) = self.to_figure_fraction(upper_right_panel, upper_right)?;
        Ok(FigureRectangle {
            origin: (x0, y0),
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

impl<R: Renderer> StackGrid<R> {
    /// Maps a point in `panel`'s data coordinates to figure fraction.
    pub fn to_figure_fraction(
        &self,
        panel: PanelId,
        point: impl Into<DataPoint>,
    ) -> GridResult<(f64, f64)> {
        self.state.to_figure_fraction(panel, point.into())
    }

    pub fn rectangle_from_corners(
        &self,
        lower_left_panel: PanelId,
        lower_left: impl Into<DataPoint>,
        upper_right_panel: PanelId,
        upper_right: impl Into<DataPoint>,
    ) -> GridResult<FigureRectangle> {
        self.state.rectangle_from_corners(
            lower_left_panel,
            lower_left.into(),
            upper_right_panel,
            upper_right.into(),
        )
    }
}
