//! Per-session configuration structs with sensible defaults.

use std::time::Duration;

use crate::constants;

/// Snap engine tuning.
#[derive(Debug, Clone, Copy)]
pub struct SnapConfig {
    /// Attraction radius in screen pixels. Divided by the current
    /// zoom before comparing against world-space distances.
    pub threshold_px: f64,
    /// Grid cell size in canvas units.
    pub grid_cell: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            threshold_px: constants::SNAP_THRESHOLD_PX,
            grid_cell: constants::GRID_CELL_SIZE,
        }
    }
}

/// Auto-save tuning.
#[derive(Debug, Clone, Copy)]
pub struct AutoSaveConfig {
    /// Quiesce period after the last mutation before a save fires.
    pub debounce: Duration,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_secs(constants::AUTOSAVE_DEBOUNCE_SECS),
        }
    }
}
