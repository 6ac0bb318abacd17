mod cleanup_controller;
mod coordinate_bridge;
mod cutout_controller;
mod grid;
mod grid_builder;
mod grid_config;
mod grid_snapshot;
mod grid_state;
mod layout_controller;
mod overlay_registry;
mod render_frame_builder;
mod spine_assigner;
mod spine_shift_controller;
mod spine_visibility_table;
mod style_controller;
mod twin_controller;

pub use cutout_controller::DEFAULT_CUTOUT_SIZE;
pub use grid::StackGrid;
pub use grid_config::GridConfig;
pub use grid_snapshot::{GRID_SNAPSHOT_JSON_SCHEMA_V1, GridSnapshot, GridSnapshotJsonContractV1};
pub use overlay_registry::{
    BarOrientation, DEFAULT_BAR_ALPHA, LineWidth, Overlay, OverlayKind, RealignReport,
};
pub use spine_assigner::{assign_positions, assign_sides};
pub use spine_shift_controller::{ShiftInput, ShiftTarget, to_absolute};
pub use style_controller::ColorTarget;
