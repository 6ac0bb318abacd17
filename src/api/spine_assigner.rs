use tracing::debug;

use crate::core::{Orientation, Side, StackPosition};
use crate::error::{GridError, GridResult};
use crate::render::Renderer;

use super::StackGrid;

/// Data side for each of `stack_dim` stacked indices.
///
/// Alternation flips the side on every index after the first.
pub fn assign_sides(
    orientation: Orientation,
    start_side: Side,
    alternate: bool,
    stack_dim: usize,
) -> GridResult<Vec<Side>> {
    let other = orientation.opposite(start_side)?;
    Ok((0..stack_dim)
        .map(|index| {
            if alternate && index % 2 == 1 {
                other
            } else {
                start_side
            }
        })
        .collect())
}

/// Stack position for each of `stack_dim` stacked indices.
///
/// A lone index without `singleton_both` takes `EdgeA` in either
/// orientation, so a one-row horizontal grid keeps its main axis on top.
/// Pass `[StackPosition::EdgeB]` to `set_stack_positions` for a bottom axis.
pub fn assign_positions(stack_dim: usize, singleton_both: bool) -> Vec<StackPosition> {
    match stack_dim {
        0 => Vec::new(),
        1 if singleton_both => vec![StackPosition::Both],
        1 => vec![StackPosition::EdgeA],
        n => {
            let mut positions = Vec::with_capacity(n);
            positions.push(StackPosition::EdgeA);
            positions.extend(std::iter::repeat_n(StackPosition::Interior, n - 2));
            positions.push(StackPosition::EdgeB);
            positions
        }
    }
}

/// Twin data sides: each twin faces away from its host row.
pub(super) fn twin_sides(
    orientation: Orientation,
    host_sides: &[Side],
    twin_hosts: &[usize],
) -> GridResult<Vec<Side>> {
    twin_hosts
        .iter()
        .map(|&host| {
            let side = host_sides
                .get(host)
                .copied()
                .ok_or_else(|| GridError::InvalidLayout(format!("twin host {host} missing")))?;
            orientation.opposite(side)
        })
        .collect()
}

impl<R: Renderer> StackGrid<R> {
    /// Replaces the data sides of the original stacked indices.
    ///
    /// Twin sides are rederived as opposite of their hosts. Clears the clean
    /// flag; call `cleanup` again to apply.
    pub fn set_data_sides(&mut self, sides: &[Side]) -> GridResult<()> {
        let stack_dim = self.state.stack_dim();
        if sides.len() != stack_dim {
            return Err(GridError::ShapeMismatch {
                target: "data sides",
                expected: stack_dim,
                actual: sides.len(),
            });
        }
        let orientation = self.state.orientation;
        for &side in sides {
            orientation.opposite(side)?;
        }
        let twins = twin_sides(orientation, sides, &self.state.twin_hosts)?;

        self.state.data_sides = sides.iter().copied().chain(twins).collect();
        self.state.is_clean = false;
        debug!(?sides, "set data sides");
        self.state.debug_assert_invariants();
        Ok(())
    }

    /// Regenerates data sides from a start side and alternation flag.
    pub fn reassign_data_sides(&mut self, start_side: Side, alternate: bool) -> GridResult<()> {
        let sides = assign_sides(
            self.state.orientation,
            start_side,
            alternate,
            self.state.stack_dim(),
        )?;
        self.set_data_sides(&sides)
    }

    /// Replaces the stack positions of the original stacked indices. Twin
    /// rows stay interior.
    pub fn set_stack_positions(&mut self, positions: &[StackPosition]) -> GridResult<()> {
        let stack_dim = self.state.stack_dim();
        if positions.len() != stack_dim {
            return Err(GridError::ShapeMismatch {
                target: "stack positions",
                expected: stack_dim,
                actual: positions.len(),
            });
        }
        let twins = std::iter::repeat_n(StackPosition::Interior, self.state.twin_dim());

        self.state.stack_positions = positions.iter().copied().chain(twins).collect();
        self.state.is_clean = false;
        debug!(?positions, "set stack positions");
        self.state.debug_assert_invariants();
        Ok(())
    }

    /// Regenerates stack positions for the original stacked indices.
    pub fn reassign_stack_positions(&mut self, singleton_both: bool) -> GridResult<()> {
        let positions = assign_positions(self.state.stack_dim(), singleton_both);
        self.set_stack_positions(&positions)
    }
}

#[cfg(test)]
mod tests {
    use super::{assign_positions, assign_sides, twin_sides};
    use crate::core::{Orientation, Side, StackPosition};

    #[test]
    fn alternation_flips_every_other_index() {
        let sides = assign_sides(Orientation::MainHorizontal, Side::Left, true, 4)
            .expect("left is a stacked side");
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Left, Side::Right]);

        let fixed = assign_sides(Orientation::MainVertical, Side::Bottom, false, 3)
            .expect("bottom is a stacked side");
        assert_eq!(fixed, vec![Side::Bottom; 3]);
    }

    #[test]
    fn start_side_on_main_axis_is_rejected() {
        assert!(assign_sides(Orientation::MainHorizontal, Side::Top, true, 2).is_err());
        assert!(assign_sides(Orientation::MainVertical, Side::Left, true, 2).is_err());
    }

    #[test]
    fn positions_mark_outer_indices() {
        assert_eq!(
            assign_positions(4, false),
            vec![
                StackPosition::EdgeA,
                StackPosition::Interior,
                StackPosition::Interior,
                StackPosition::EdgeB,
            ]
        );
        assert_eq!(
            assign_positions(2, true),
            vec![StackPosition::EdgeA, StackPosition::EdgeB]
        );
        assert_eq!(assign_positions(1, true), vec![StackPosition::Both]);
        assert_eq!(assign_positions(1, false), vec![StackPosition::EdgeA]);
    }

    #[test]
    fn twins_face_away_from_hosts() {
        let hosts = [Side::Left, Side::Right, Side::Left];
        let twins = twin_sides(Orientation::MainHorizontal, &hosts, &[2, 0, 1])
            .expect("valid hosts");
        assert_eq!(twins, vec![Side::Right, Side::Right, Side::Left]);
        assert!(twin_sides(Orientation::MainHorizontal, &hosts, &[5]).is_err());
    }
}
