//! stackgrid: stacked-axis panel grid engine.
//!
//! Lays out a 1-D stack of panels that share one main axis (optionally broken
//! into sections), gives every stacked row its own scale on alternating
//! sides, and keeps spines, ticks, twins and figure overlays consistent as the
//! layout changes.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{GridConfig, StackGrid};
pub use error::{GridError, GridResult};
