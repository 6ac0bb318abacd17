use serde::{Deserialize, Serialize};

use crate::core::{FigureSize, SubplotParams};
use crate::error::{GridError, GridResult};
use crate::render::Color;

/// Rectangle placed in figure-fraction coordinates.
///
/// `width`/`height` may be negative when an anchor axis is inverted; the
/// rectangle then extends left/down from `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureRectangle {
    pub origin: (f64, f64),
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatchStyle {
    pub face: Option<Color>,
    pub edge: Option<Color>,
    pub line_width: f64,
    pub alpha: f64,
    pub z_order: i32,
}

/// Figure-level shape drawn outside any panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub bounds: FigureRectangle,
    pub style: PatchStyle,
}

/// Figure surface: size, subplot parameters and the ordered patch list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    size: FigureSize,
    subplot: SubplotParams,
    patches: Vec<Patch>,
}

impl Figure {
    pub fn new(size: FigureSize, subplot: SubplotParams) -> GridResult<Self> {
        Ok(Self {
            size: size.validate()?,
            subplot: subplot.validate()?,
            patches: Vec::new(),
        })
    }

    #[must_use]
    pub fn size(&self) -> FigureSize {
        self.size
    }

    #[must_use]
    pub fn subplot(&self) -> SubplotParams {
        self.subplot
    }

    pub(crate) fn set_subplot(&mut self, subplot: SubplotParams) -> GridResult<()> {
        self.subplot = subplot.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Appends a patch and returns its position in the drawing list.
    pub(crate) fn push_patch(&mut self, patch: Patch) -> usize {
        self.patches.push(patch);
        self.patches.len() - 1
    }

    pub(crate) fn set_patch_bounds(
        &mut self,
        index: usize,
        bounds: FigureRectangle,
    ) -> GridResult<()> {
        let patch = self.patches.get_mut(index).ok_or_else(|| {
            GridError::InvalidData(format!("no patch at drawing-list index {index}"))
        })?;
        patch.bounds = bounds;
        Ok(())
    }
}
