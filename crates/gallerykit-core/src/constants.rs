//! Named limits and defaults shared across the workspace.

/// Maximum number of retained undo steps.
pub const HISTORY_CAPACITY: usize = 50;

/// Grid cell size in canvas units.
pub const GRID_CELL_SIZE: f64 = 10.0;

/// Snap attraction radius in screen pixels.
pub const SNAP_THRESHOLD_PX: f64 = 10.0;

/// Delay between the last mutation and the auto-save firing.
pub const AUTOSAVE_DEBOUNCE_SECS: u64 = 60;

/// Zoom clamp range and step factor for the viewport.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 8.0;
pub const ZOOM_STEP: f64 = 1.2;

/// Default canvas dimensions for a new gallery page.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1080.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1080.0;

/// Default canvas background (CSS color).
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
