//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between screen coordinates (pixels, origin at
//! the top-left of the editor surface) and canvas coordinates (the
//! document's own space). Manages zoom and pan. Both spaces are
//! y-down; the transform is scale-then-translate.
//!
//! Viewport state is ephemeral UI state: it is never serialized and
//! does not survive a reload.

use std::fmt;

use gallerykit_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use gallerykit_core::Point;

#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    view_width: f64,
    view_height: f64,
}

impl Viewport {
    /// Creates a viewport for an editor surface of the given pixel size.
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            view_width,
            view_height,
        }
    }

    /// Sets the surface dimensions (called when the window resizes).
    pub fn set_view_size(&mut self, width: f64, height: f64) {
        self.view_width = width;
        self.view_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the supported range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts a screen pixel to canvas coordinates.
    ///
    /// ```text
    /// canvas_x = (screen_x - pan_x) / zoom
    /// canvas_y = (screen_y - pan_y) / zoom
    /// ```
    pub fn screen_to_canvas(&self, screen_x: f64, screen_y: f64) -> Point {
        Point::new(
            (screen_x - self.pan_x) / self.zoom,
            (screen_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts a canvas point to screen pixels.
    ///
    /// ```text
    /// screen_x = canvas_x * zoom + pan_x
    /// screen_y = canvas_y * zoom + pan_y
    /// ```
    pub fn canvas_to_screen(&self, canvas_x: f64, canvas_y: f64) -> (f64, f64) {
        (
            canvas_x * self.zoom + self.pan_x,
            canvas_y * self.zoom + self.pan_y,
        )
    }

    /// Fits the given canvas-space box into the view with padding.
    ///
    /// `padding` is the fraction of the view reserved on each side
    /// (0.0 - 0.5). Centers the content and picks the zoom that fits.
    pub fn fit_to_bounds(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, padding: f64) {
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let width = max_x - min_x;
        let height = max_y - min_y;

        let usable = 1.0 - (padding * 2.0);
        let zoom_x = (self.view_width * usable) / width;
        let zoom_y = (self.view_height * usable) / height;
        let new_zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);

        self.zoom = new_zoom;
        // Center the content: place the box's midpoint at the view's.
        self.pan_x = self.view_width / 2.0 - (min_x + width / 2.0) * new_zoom;
        self.pan_y = self.view_height / 2.0 - (min_y + height / 2.0) * new_zoom;
    }

    /// Zooms while keeping the given canvas point fixed on screen,
    /// for zoom-to-cursor behavior.
    pub fn zoom_to_point(&mut self, canvas_point: &Point, new_zoom: f64) {
        let new_zoom = new_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let (screen_x, screen_y) = self.canvas_to_screen(canvas_point.x, canvas_point.y);
        self.zoom = new_zoom;
        self.pan_x = screen_x - canvas_point.x * new_zoom;
        self.pan_y = screen_y - canvas_point.y * new_zoom;
    }

    /// Centers the view on a canvas point at the current zoom.
    pub fn center_on(&mut self, point: &Point) {
        self.pan_x = self.view_width / 2.0 - point.x * self.zoom;
        self.pan_y = self.view_height / 2.0 - point.y * self.zoom;
    }

    /// Resets to 1:1 zoom with no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}
