//! Alignment snapping for drag interactions.
//!
//! Given an object's proposed position mid-drag, finds the best snap
//! adjustment per axis and the transient guide lines to draw. The X
//! and Y axes are evaluated independently. Candidate sources in
//! priority order: canvas center lines, the fixed grid, then sibling
//! edges and centers; the nearest candidate within the threshold wins,
//! with source priority breaking exact ties.
//!
//! Comparisons use the object's visual center: the unrotated center
//! carried through the object's rotation around its anchor. For
//! circles the anchor is the center itself, so a rotated circle snaps
//! exactly like an unrotated one.

use gallerykit_core::{Point, SnapConfig};
use smallvec::SmallVec;
use uuid::Uuid;

use crate::model::CanvasObject;

/// Orientation of a guide line. `Vertical` is a line of constant x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideOrientation {
    Vertical,
    Horizontal,
}

/// Where a snap candidate came from; doubles as tie-break priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SnapSource {
    CanvasCenter,
    Grid,
    Sibling,
}

/// Transient alignment line shown while the drag is near a target.
/// Guides are display-only and vanish when the drag ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guide {
    pub orientation: GuideOrientation,
    pub position: f64,
    pub source: SnapSource,
}

/// Outcome of a snap query: the adjusted position plus the guides to
/// render. When nothing is in range the position passes through
/// unchanged and `guides` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    pub x: f64,
    pub y: f64,
    pub guides: SmallVec<[Guide; 4]>,
}

/// Everything the engine needs to know about the surroundings.
pub struct SnapContext<'a> {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Objects at the same nesting level; the moving object itself is
    /// filtered out by id.
    pub siblings: &'a [CanvasObject],
    /// Current viewport zoom; thresholds are screen-space pixels.
    pub zoom: f64,
    pub grid_enabled: bool,
    pub config: SnapConfig,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    /// Adjustment to the object's anchor on this axis.
    delta: f64,
    source: SnapSource,
    guide: f64,
}

/// Computes the snapped position for `moving` dragged to `proposed`.
pub fn snap_position(moving: &CanvasObject, proposed: Point, ctx: &SnapContext) -> SnapResult {
    // Project the object to its proposed position before measuring.
    let mut probe = moving.clone();
    probe.x = proposed.x;
    probe.y = proposed.y;

    let bounds = probe.bounds();
    let center = probe.visual_center();
    let threshold = ctx.config.threshold_px / ctx.zoom.max(f64::EPSILON);

    let x_best = best_candidate(&collect_axis_candidates(
        ctx,
        probe.id,
        Axis::X,
        bounds.min_x,
        center.x,
        bounds.max_x,
        threshold,
    ));
    let y_best = best_candidate(&collect_axis_candidates(
        ctx,
        probe.id,
        Axis::Y,
        bounds.min_y,
        center.y,
        bounds.max_y,
        threshold,
    ));

    let mut guides = SmallVec::new();
    let mut x = proposed.x;
    let mut y = proposed.y;

    if let Some(c) = x_best {
        x += c.delta;
        guides.push(Guide {
            orientation: GuideOrientation::Vertical,
            position: c.guide,
            source: c.source,
        });
    }
    if let Some(c) = y_best {
        y += c.delta;
        guides.push(Guide {
            orientation: GuideOrientation::Horizontal,
            position: c.guide,
            source: c.source,
        });
    }

    SnapResult { x, y, guides }
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Gathers in-range candidates for one axis. `low`/`mid`/`high` are
/// the moving object's leading edge, visual center, and trailing edge
/// on that axis, already at the proposed position.
fn collect_axis_candidates(
    ctx: &SnapContext,
    moving_id: Uuid,
    axis: Axis,
    low: f64,
    mid: f64,
    high: f64,
    threshold: f64,
) -> SmallVec<[Candidate; 8]> {
    let mut out: SmallVec<[Candidate; 8]> = SmallVec::new();

    // 1. Canvas center line, compared against the visual center.
    let canvas_mid = match axis {
        Axis::X => ctx.canvas_width / 2.0,
        Axis::Y => ctx.canvas_height / 2.0,
    };
    let delta = canvas_mid - mid;
    if delta.abs() <= threshold {
        out.push(Candidate {
            delta,
            source: SnapSource::CanvasCenter,
            guide: canvas_mid,
        });
    }

    // 2. Grid lines, compared against the leading edge.
    if ctx.grid_enabled && ctx.config.grid_cell > 0.0 {
        let nearest = (low / ctx.config.grid_cell).round() * ctx.config.grid_cell;
        let delta = nearest - low;
        if delta.abs() <= threshold {
            out.push(Candidate {
                delta,
                source: SnapSource::Grid,
                guide: nearest,
            });
        }
    }

    // 3. Sibling edges and centers, every feature pair.
    for sibling in ctx.siblings {
        if sibling.id == moving_id || !sibling.visible {
            continue;
        }
        let b = sibling.bounds();
        let c = sibling.visual_center();
        let targets = match axis {
            Axis::X => [b.min_x, c.x, b.max_x],
            Axis::Y => [b.min_y, c.y, b.max_y],
        };
        for feature in [low, mid, high] {
            for target in targets {
                let delta = target - feature;
                if delta.abs() <= threshold {
                    out.push(Candidate {
                        delta,
                        source: SnapSource::Sibling,
                        guide: target,
                    });
                }
            }
        }
    }

    out
}

/// Nearest candidate wins; source priority breaks exact ties.
fn best_candidate(candidates: &[Candidate]) -> Option<Candidate> {
    candidates.iter().copied().min_by(|a, b| {
        a.delta
            .abs()
            .partial_cmp(&b.delta.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.source.cmp(&b.source))
    })
}
