use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{PanelId, Side, native_position};
use crate::error::{GridError, GridResult};
use crate::render::Renderer;

use super::StackGrid;
use super::grid_state::GridState;

/// Requested spine offset: one value for every row, or one per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShiftInput {
    Uniform(f64),
    PerRow(Vec<f64>),
}

impl From<f64> for ShiftInput {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Vec<f64>> for ShiftInput {
    fn from(values: Vec<f64>) -> Self {
        Self::PerRow(values)
    }
}

impl From<&[f64]> for ShiftInput {
    fn from(values: &[f64]) -> Self {
        Self::PerRow(values.to_vec())
    }
}

/// Which rows a shift applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftTarget {
    /// Original stacked rows only.
    Stack,
    /// Twin rows only.
    Twin,
    /// Original rows followed by twin rows, indexed as one list.
    All,
}

/// Expands `input` to exactly `len` values.
///
/// A wrong-length list falls back to broadcasting its first value. Input
/// holding a non-finite value is ignored.
pub(super) fn broadcast_shift(input: &ShiftInput, len: usize, target: &str) -> Option<Vec<f64>> {
    let finite = match input {
        ShiftInput::Uniform(value) => value.is_finite(),
        ShiftInput::PerRow(values) => values.iter().all(|value| value.is_finite()),
    };
    if !finite {
        warn!(target_rows = target, "non-finite shift ignored");
        return None;
    }
    match input {
        ShiftInput::Uniform(value) => Some(vec![*value; len]),
        ShiftInput::PerRow(values) if values.len() == len => Some(values.clone()),
        ShiftInput::PerRow(values) => match values.first() {
            Some(&first) => {
                warn!(
                    target_rows = target,
                    expected = len,
                    actual = values.len(),
                    "shift list length mismatch, broadcasting first value"
                );
                Some(vec![first; len])
            }
            None => {
                warn!(target_rows = target, "empty shift list ignored");
                None
            }
        },
    }
}

/// Converts relative offsets into absolute spine positions for each side.
///
/// Offsets move spines outward: below 0 on the low side, above 1 on the high
/// side.
#[must_use]
pub fn to_absolute(relative: &[f64], sides: &[Side]) -> Vec<f64> {
    relative
        .iter()
        .zip(sides)
        .map(|(&shift, &side)| {
            if side.is_low() {
                0.0 - shift
            } else {
                1.0 + shift
            }
        })
        .collect()
}

impl GridState {
    /// Moves the data-side spine of every panel in `rows` to the absolute
    /// positions derived from `relative`.
    fn apply_rows(&mut self, first_row: usize, relative: &[f64]) -> GridResult<()> {
        let end = first_row + relative.len();
        let sides = self.data_sides[first_row..end].to_vec();
        let positions = to_absolute(relative, &sides);
        for (offset, (side, position)) in sides.into_iter().zip(positions).enumerate() {
            let row = self.row(first_row + offset)?.to_vec();
            for id in row {
                self.panel_mut(id)?.spines.get_mut(side).position = position;
            }
        }
        Ok(())
    }

    pub(super) fn apply_shifts(&mut self) -> GridResult<()> {
        if let Some(relative) = self.shifts.stack_relative.clone() {
            self.apply_rows(0, &relative)?;
        }
        if let Some(relative) = self.shifts.twin_relative.clone() {
            let first = self.stack_dim();
            self.apply_rows(first, &relative)?;
        }
        Ok(())
    }
}

impl<R: Renderer> StackGrid<R> {
    /// Stores relative spine offsets for `target` rows without moving spines.
    ///
    /// Call `apply_spine_shift` afterwards. A twin target is ignored while
    /// the grid has no twins.
    pub fn set_relative_shift(&mut self, shift: impl Into<ShiftInput>, target: ShiftTarget) {
        let shift = shift.into();
        let stack_dim = self.state.stack_dim();
        let twin_dim = self.state.twin_dim();

        match target {
            ShiftTarget::Stack => {
                if let Some(values) = broadcast_shift(&shift, stack_dim, "stack") {
                    self.state.shifts.stack_relative = Some(values);
                }
            }
            ShiftTarget::Twin => {
                if twin_dim == 0 {
                    debug!("no twin rows, twin shift ignored");
                    return;
                }
                if let Some(values) = broadcast_shift(&shift, twin_dim, "twin") {
                    self.state.shifts.twin_relative = Some(values);
                }
            }
            ShiftTarget::All => {
                let Some(mut values) = broadcast_shift(&shift, stack_dim + twin_dim, "all")
                else {
                    return;
                };
                let twins = values.split_off(stack_dim);
                self.state.shifts.stack_relative = Some(values);
                if twin_dim > 0 {
                    self.state.shifts.twin_relative = Some(twins);
                }
            }
        }
        debug!(?target, shifts = ?self.state.shifts, "stored relative spine shift");
    }

    /// Moves data-side spines to the positions stored by `set_relative_shift`.
    pub fn apply_spine_shift(&mut self) -> GridResult<()> {
        self.state.apply_shifts()?;
        debug!("applied spine shifts");
        Ok(())
    }

    /// Stores and applies a shift in one call.
    pub fn shift_spines(
        &mut self,
        shift: impl Into<ShiftInput>,
        target: ShiftTarget,
    ) -> GridResult<()> {
        self.set_relative_shift(shift, target);
        self.apply_spine_shift()
    }

    /// Returns every stacked-side spine to the panel edge and forgets stored
    /// shifts.
    pub fn reset_spine_shift(&mut self) {
        let [low, high] = self.state.orientation.stack_sides();
        for panel in self.state.panels.values_mut() {
            panel.spines.get_mut(low).position = native_position(low);
            panel.spines.get_mut(high).position = native_position(high);
        }
        self.state.shifts.stack_relative = None;
        self.state.shifts.twin_relative = None;
        debug!("reset spine shifts");
    }

    /// Places one stacked-side spine of one panel at `shift` outside its edge.
    pub fn move_spine(&mut self, panel: PanelId, side: Side, shift: f64) -> GridResult<()> {
        if !shift.is_finite() {
            return Err(GridError::InvalidData(format!(
                "spine shift must be finite, got {shift}"
            )));
        }
        if !self.state.orientation.is_stack_side(side) {
            return Err(GridError::UnknownSide(format!(
                "{side} is not a stacked side for {}",
                self.state.orientation
            )));
        }
        let position = to_absolute(&[shift], &[side])[0];
        self.state.panel_mut(panel)?.spines.get_mut(side).position = position;
        Ok(())
    }

    /// Stored relative offsets for original rows and twin rows.
    #[must_use]
    pub fn relative_shifts(&self) -> (Option<&[f64]>, Option<&[f64]>) {
        (
            self.state.shifts.stack_relative.as_deref(),
            self.state.shifts.twin_relative.as_deref(),
        )
    }
}
