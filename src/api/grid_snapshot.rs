use serde::{Deserialize, Serialize};

use crate::core::{
    LinearScale, Orientation, Panel, Patch, Side, StackPosition, SubplotParams,
};
use crate::error::{GridError, GridResult};
use crate::render::Renderer;

use super::StackGrid;
use super::overlay_registry::Overlay;

pub const GRID_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub orientation: Orientation,
    pub stack_dim: usize,
    pub main_axis_dim: usize,
    pub twin_dim: usize,
    pub stack_ratios: Vec<f64>,
    pub main_axis_ratios: Vec<f64>,
    pub data_sides: Vec<Side>,
    pub stack_positions: Vec<StackPosition>,
    pub twin_hosts: Vec<usize>,
    pub is_clean: bool,
    pub spine_width: f64,
    pub subplot: SubplotParams,
    pub stack_shift: Option<Vec<f64>>,
    pub twin_shift: Option<Vec<f64>>,
    pub panels: Vec<Panel>,
    pub scales: Vec<LinearScale>,
    pub overlays: Vec<Overlay>,
    pub patches: Vec<Patch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: GridSnapshot,
}

impl GridSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> GridResult<String> {
        let payload = GridSnapshotJsonContractV1 {
            schema_version: GRID_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GridError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> GridResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<GridSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: GridSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GridError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != GRID_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(GridError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> StackGrid<R> {
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        let state = &self.state;
        GridSnapshot {
            orientation: state.orientation,
            stack_dim: state.stack_dim(),
            main_axis_dim: state.main_axis_dim(),
            twin_dim: state.twin_dim(),
            stack_ratios: state.stack_ratios.values().to_vec(),
            main_axis_ratios: state.main_ratios.values().to_vec(),
            data_sides: state.data_sides.clone(),
            stack_positions: state.stack_positions.clone(),
            twin_hosts: state.twin_hosts.clone(),
            is_clean: state.is_clean,
            spine_width: state.spine_width,
            subplot: state.figure.subplot(),
            stack_shift: state.shifts.stack_relative.clone(),
            twin_shift: state.shifts.twin_relative.clone(),
            panels: state.panels.values().cloned().collect(),
            scales: state.scales.clone(),
            overlays: state.overlays.clone(),
            patches: state.figure.patches().to_vec(),
        }
    }
}
