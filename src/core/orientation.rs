use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Axis, Side};
use crate::error::{GridError, GridResult};

/// Which axis is shared across the whole stack.
///
/// Every orientation-dependent fact of the grid is answered here so the grid
/// itself stays a single type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Shared horizontal (x) axis, stacked y scales in rows from top to bottom.
    #[default]
    MainHorizontal,
    /// Shared vertical (y) axis, stacked x scales in columns from left to right.
    MainVertical,
}

impl Orientation {
    #[must_use]
    pub const fn main_axis(self) -> Axis {
        match self {
            Self::MainHorizontal => Axis::X,
            Self::MainVertical => Axis::Y,
        }
    }

    #[must_use]
    pub const fn stack_axis(self) -> Axis {
        match self {
            Self::MainHorizontal => Axis::Y,
            Self::MainVertical => Axis::X,
        }
    }

    /// The "low" stacked side: shifts on it move toward panel fraction 0.
    #[must_use]
    pub const fn low_side(self) -> Side {
        match self {
            Self::MainHorizontal => Side::Left,
            Self::MainVertical => Side::Bottom,
        }
    }

    #[must_use]
    pub const fn high_side(self) -> Side {
        match self {
            Self::MainHorizontal => Side::Right,
            Self::MainVertical => Side::Top,
        }
    }

    /// The two legal data sides, low first.
    #[must_use]
    pub const fn stack_sides(self) -> [Side; 2] {
        [self.low_side(), self.high_side()]
    }

    #[must_use]
    pub const fn default_start_side(self) -> Side {
        match self {
            Self::MainHorizontal => Side::Left,
            Self::MainVertical => Side::Top,
        }
    }

    /// Main-axis edges as (edge-A, edge-B): the edge facing the first stacked
    /// index and the edge facing the last one.
    #[must_use]
    pub const fn main_edges(self) -> (Side, Side) {
        match self {
            Self::MainHorizontal => (Side::Top, Side::Bottom),
            Self::MainVertical => (Side::Left, Side::Right),
        }
    }

    #[must_use]
    pub fn is_stack_side(self, side: Side) -> bool {
        self.stack_sides().contains(&side)
    }

    pub fn opposite(self, side: Side) -> GridResult<Side> {
        match (self, side) {
            (Self::MainHorizontal, Side::Left) => Ok(Side::Right),
            (Self::MainHorizontal, Side::Right) => Ok(Side::Left),
            (Self::MainVertical, Side::Top) => Ok(Side::Bottom),
            (Self::MainVertical, Side::Bottom) => Ok(Side::Top),
            _ => Err(GridError::UnknownSide(format!(
                "{side} is not a stacked side for {self}"
            ))),
        }
    }

    /// Main-axis section index of the panel carrying the visible stacked spine.
    pub fn data_panel_index(self, data_side: Side, main_axis_dim: usize) -> GridResult<usize> {
        let last = main_axis_dim.saturating_sub(1);
        match (self, data_side) {
            (Self::MainHorizontal, Side::Left) | (Self::MainVertical, Side::Top) => Ok(0),
            (Self::MainHorizontal, Side::Right) | (Self::MainVertical, Side::Bottom) => Ok(last),
            _ => Err(GridError::UnknownSide(format!(
                "{data_side} is not a stacked side for {self}"
            ))),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MainHorizontal => "main-horizontal",
            Self::MainVertical => "main-vertical",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main-horizontal" | "horizontal" | "x" => Ok(Self::MainHorizontal),
            "main-vertical" | "vertical" | "y" => Ok(Self::MainVertical),
            _ => Err(GridError::UnknownOrientation(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Orientation;
    use crate::core::{Axis, Side};
    use crate::error::GridError;

    #[test]
    fn orientation_table_is_mirrored() {
        let h = Orientation::MainHorizontal;
        let v = Orientation::MainVertical;
        assert_eq!((h.main_axis(), h.stack_axis()), (Axis::X, Axis::Y));
        assert_eq!((v.main_axis(), v.stack_axis()), (Axis::Y, Axis::X));
        assert_eq!(h.stack_sides(), [Side::Left, Side::Right]);
        assert_eq!(v.stack_sides(), [Side::Bottom, Side::Top]);
        assert_eq!(h.main_edges(), (Side::Top, Side::Bottom));
        assert_eq!(v.main_edges(), (Side::Left, Side::Right));
        assert_eq!(h.default_start_side(), Side::Left);
        assert_eq!(v.default_start_side(), Side::Top);
    }

    #[test]
    fn opposite_is_an_involution_on_stack_sides() {
        for orientation in [Orientation::MainHorizontal, Orientation::MainVertical] {
            for side in orientation.stack_sides() {
                let flipped = orientation.opposite(side).expect("stack side");
                assert_ne!(flipped, side);
                assert_eq!(orientation.opposite(flipped).expect("stack side"), side);
            }
        }
    }

    #[test]
    fn opposite_rejects_main_axis_edges() {
        let err = Orientation::MainHorizontal
            .opposite(Side::Top)
            .expect_err("top is a main edge");
        assert!(matches!(err, GridError::UnknownSide(_)));
    }

    #[test]
    fn data_panel_index_picks_outer_sections() {
        let h = Orientation::MainHorizontal;
        assert_eq!(h.data_panel_index(Side::Left, 3).expect("left"), 0);
        assert_eq!(h.data_panel_index(Side::Right, 3).expect("right"), 2);
        let v = Orientation::MainVertical;
        assert_eq!(v.data_panel_index(Side::Top, 4).expect("top"), 0);
        assert_eq!(v.data_panel_index(Side::Bottom, 4).expect("bottom"), 3);
    }

    #[test]
    fn orientation_parses_known_keys_only() {
        assert_eq!(
            "x".parse::<Orientation>().expect("x"),
            Orientation::MainHorizontal
        );
        assert_eq!(
            "main-vertical".parse::<Orientation>().expect("vertical"),
            Orientation::MainVertical
        );
        assert!(matches!(
            "diagonal".parse::<Orientation>(),
            Err(GridError::UnknownOrientation(_))
        ));
    }
}
