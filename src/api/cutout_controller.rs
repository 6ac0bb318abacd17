use tracing::debug;

use crate::core::{CutoutMark, Orientation, Ratios};
use crate::error::{GridError, GridResult};
use crate::render::Renderer;

use super::StackGrid;
use super::overlay_registry::LineWidth;

pub const DEFAULT_CUTOUT_SIZE: f64 = 0.025;

/// One break mark and the (row, section) panel it is drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PlacedMark {
    pub(super) row: usize,
    pub(super) main_index: usize,
    pub(super) mark: CutoutMark,
}

/// Break marks for every main-axis break, on the two outer stacked rows.
///
/// Marks are scaled by `smallest ratio / own ratio` so they look the same
/// size on panels of different extent.
pub(super) fn cutout_marks(
    orientation: Orientation,
    main_ratios: &Ratios,
    stack_ratios: &Ratios,
    size: f64,
    width: f64,
) -> Vec<PlacedMark> {
    let main_dim = main_ratios.len();
    if main_dim < 2 {
        return Vec::new();
    }
    let main_min = main_ratios.min();
    let along = main_ratios
        .values()
        .iter()
        .map(|ratio| size * (main_min / ratio))
        .collect::<Vec<_>>();
    let stack_min = stack_ratios.min();
    let first = size * (stack_min / stack_ratios.values()[0]);
    let last = size * (stack_min / stack_ratios.values()[stack_ratios.len() - 1]);
    let last_row = stack_ratios.len() - 1;

    // Across-stack extents for the first and last stacked rows.
    let (first_across, last_across) = match orientation {
        Orientation::MainHorizontal => (
            (1.0 - 2.0 * first, 1.0 + 2.0 * first),
            (-2.0 * last, 2.0 * last),
        ),
        Orientation::MainVertical => ((-first, first), (1.0 - last, 1.0 + last)),
    };

    let mut marks = Vec::with_capacity(4 * main_dim);
    for (main_index, &d) in along.iter().enumerate() {
        // Break before this section (left / above) and after it (right / below).
        let mut breaks = Vec::with_capacity(2);
        match orientation {
            Orientation::MainHorizontal => {
                if main_index > 0 {
                    breaks.push((-d, d));
                }
                if main_index + 1 < main_dim {
                    breaks.push((1.0 - d, 1.0 + d));
                }
            }
            Orientation::MainVertical => {
                if main_index > 0 {
                    breaks.push((1.0 - d, 1.0 + d));
                }
                if main_index + 1 < main_dim {
                    breaks.push((-d, d));
                }
            }
        }

        for (row, across) in [(0, first_across), (last_row, last_across)] {
            for &along_span in &breaks {
                let (from, to) = match orientation {
                    Orientation::MainHorizontal => {
                        ((along_span.0, across.0), (along_span.1, across.1))
                    }
                    Orientation::MainVertical => {
                        ((across.0, along_span.0), (across.1, along_span.1))
                    }
                };
                marks.push(PlacedMark {
                    row,
                    main_index,
                    mark: CutoutMark { from, to, width },
                });
            }
        }
    }
    marks
}

impl<R: Renderer> StackGrid<R> {
    /// Draws diagonal break marks where the main axis is split.
    ///
    /// `size` is the mark extent as a fraction of the smallest panel. Does
    /// nothing with a single main-axis section. Returns the mark count.
    pub fn draw_cutouts(&mut self, size: f64, line_width: LineWidth) -> GridResult<usize> {
        if !size.is_finite() || size <= 0.0 {
            return Err(GridError::InvalidData(format!(
                "cutout size must be finite and > 0, got {size}"
            )));
        }
        let width = self.state.resolve_line_width(line_width)?;
        let marks = cutout_marks(
            self.state.orientation,
            &self.state.main_ratios,
            &self.state.stack_ratios,
            size,
            width,
        );
        for placed in &marks {
            let id = self.state.panel_at(placed.row, placed.main_index)?;
            self.state.panel_mut(id)?.cutouts.push(placed.mark);
        }
        debug!(marks = marks.len(), size, "drew cutout marks");
        Ok(marks.len())
    }
}
