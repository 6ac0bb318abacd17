use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};

/// Figure-fraction margins and inter-cell gaps shared by every panel.
///
/// Gaps are expressed relative to one average cell. Negative gaps overlap
/// neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubplotParams {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub wspace: f64,
    pub hspace: f64,
}

impl Default for SubplotParams {
    fn default() -> Self {
        Self {
            left: 0.125,
            right: 0.9,
            bottom: 0.11,
            top: 0.88,
            wspace: 0.2,
            hspace: 0.2,
        }
    }
}

impl SubplotParams {
    pub fn validate(self) -> GridResult<Self> {
        for (name, value) in [
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
            ("top", self.top),
            ("wspace", self.wspace),
            ("hspace", self.hspace),
        ] {
            if !value.is_finite() {
                return Err(GridError::InvalidLayout(format!(
                    "subplot parameter `{name}` must be finite"
                )));
            }
        }
        if self.left >= self.right || self.bottom >= self.top {
            return Err(GridError::InvalidLayout(
                "subplot margins must satisfy left < right and bottom < top".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Axis-aligned rectangle in figure-fraction units, origin at the lower left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureRect {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
}

impl FigureRect {
    #[must_use]
    pub const fn new(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }

    #[must_use]
    pub fn x1(self) -> f64 {
        self.x0 + self.width
    }

    #[must_use]
    pub fn y1(self) -> f64 {
        self.y0 + self.height
    }

    /// Maps a panel-fraction point (0..1 on both axes) into figure fraction.
    #[must_use]
    pub fn fraction_to_figure(self, fx: f64, fy: f64) -> (f64, f64) {
        (self.x0 + fx * self.width, self.y0 + fy * self.height)
    }
}

/// Placement of one panel along one grid dimension, in ratio units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSpan {
    pub offset: f64,
    pub extent: f64,
}

impl CellSpan {
    #[must_use]
    pub const fn new(offset: f64, extent: f64) -> Self {
        Self { offset, extent }
    }
}

/// Continuous grid of `rows_total` by `cols_total` unit cells.
///
/// Rows are counted from the top of the figure, columns from the left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows_total: f64,
    pub cols_total: f64,
}

impl GridSpec {
    #[must_use]
    pub const fn new(rows_total: f64, cols_total: f64) -> Self {
        Self {
            rows_total,
            cols_total,
        }
    }

    pub fn panel_rect(
        self,
        params: SubplotParams,
        rows: CellSpan,
        cols: CellSpan,
    ) -> GridResult<FigureRect> {
        let (x0, width) = span_along(
            params.left,
            params.right,
            self.cols_total,
            params.wspace,
            cols,
        )?;
        let (from_top, height) = span_along(
            params.bottom,
            params.top,
            self.rows_total,
            params.hspace,
            rows,
        )?;
        // `span_along` measures from the low end; rows grow downward from `top`.
        let top_edge = params.top - (from_top - params.bottom);
        Ok(FigureRect::new(x0, top_edge - height, width, height))
    }
}

fn span_along(
    start: f64,
    end: f64,
    total_units: f64,
    gap: f64,
    span: CellSpan,
) -> GridResult<(f64, f64)> {
    let available = end - start;
    let denominator = total_units + gap * (total_units - 1.0);
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(GridError::InvalidLayout(format!(
            "gap {gap} leaves no room for {total_units} cells"
        )));
    }
    let cell = available / denominator;
    let separator = gap * cell;
    let lo = start + span.offset * (cell + separator);
    let length = span.extent * cell + (span.extent - 1.0) * separator;
    if !length.is_finite() || length <= 0.0 {
        return Err(GridError::InvalidLayout(format!(
            "gap {gap} collapses a cell of extent {}",
            span.extent
        )));
    }
    Ok((lo, length))
}

#[cfg(test)]
mod tests {
    use super::{CellSpan, GridSpec, SubplotParams};

    const EPS: f64 = 1e-12;

    #[test]
    fn stacked_rows_tile_the_plot_area_with_gaps() {
        let params = SubplotParams {
            hspace: 0.0,
            ..SubplotParams::default()
        };
        let spec = GridSpec::new(8.0, 1.0);
        let cols = CellSpan::new(0.0, 1.0);
        let first = spec
            .panel_rect(params, CellSpan::new(0.0, 2.0), cols)
            .expect("first row");
        let last = spec
            .panel_rect(params, CellSpan::new(6.0, 2.0), cols)
            .expect("last row");

        assert!((first.y1() - params.top).abs() <= EPS);
        assert!((last.y0 - params.bottom).abs() <= EPS);
        let unit = (params.top - params.bottom) / 8.0;
        assert!((first.height - 2.0 * unit).abs() <= EPS);
        assert!((first.x0 - params.left).abs() <= EPS);
        assert!((first.x1() - params.right).abs() <= EPS);
    }

    #[test]
    fn gap_is_a_fraction_of_the_average_cell() {
        let params = SubplotParams::default();
        let spec = GridSpec::new(1.0, 2.0);
        let rows = CellSpan::new(0.0, 1.0);
        let left = spec
            .panel_rect(params, rows, CellSpan::new(0.0, 1.0))
            .expect("left cell");
        let right = spec
            .panel_rect(params, rows, CellSpan::new(1.0, 1.0))
            .expect("right cell");

        let cell = (params.right - params.left) / (2.0 + params.wspace);
        assert!((left.width - cell).abs() <= EPS);
        assert!((right.x0 - left.x1() - params.wspace * cell).abs() <= EPS);
        assert!((right.x1() - params.right).abs() <= EPS);
    }

    #[test]
    fn negative_gap_overlaps_rows_until_cells_collapse() {
        let overlapping = SubplotParams {
            hspace: -0.35,
            ..SubplotParams::default()
        };
        let spec = GridSpec::new(4.0, 1.0);
        let cols = CellSpan::new(0.0, 1.0);
        let a = spec
            .panel_rect(overlapping, CellSpan::new(0.0, 1.0), cols)
            .expect("row a");
        let b = spec
            .panel_rect(overlapping, CellSpan::new(1.0, 1.0), cols)
            .expect("row b");
        assert!(b.y1() > a.y0, "rows should overlap");

        let collapsing = SubplotParams {
            hspace: -2.0,
            ..SubplotParams::default()
        };
        assert!(spec.panel_rect(collapsing, CellSpan::new(0.0, 1.0), cols).is_err());
    }
}
