//! The panel's geometry model.
//!
//! Four rectangles fully describe a panel's travel: the main and secondary
//! surfaces each have a closed and an opened position. They are recomputed
//! once per layout pass and read everywhere else; no other module derives
//! bounds on its own.
//!
//! Every rule here is direction-sensitive, so each function is an explicit
//! exhaustive match over [`Edge`] rather than one signed formula.

use swipekit_graphics::{IntRect, IntSize};

use crate::config::{DragMode, Edge};

/// Closed and opened rectangles for both surfaces, in panel-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelBounds {
    pub main_closed: IntRect,
    pub main_open: IntRect,
    pub secondary_closed: IntRect,
    pub secondary_open: IntRect,
}

impl PanelBounds {
    /// Derives the opened rectangles from the closed ones.
    ///
    /// The main surface opens offset by the secondary surface's extent along
    /// the drag axis. The secondary surface only moves in
    /// [`DragMode::SameLevel`], where it slides back on-screen by its own
    /// extent.
    pub fn compute(
        main_closed: IntRect,
        secondary_closed: IntRect,
        edge: Edge,
        mode: DragMode,
    ) -> Self {
        let sec = secondary_closed.size();

        let main_open_left = match edge {
            Edge::Left => main_closed.left + sec.width,
            Edge::Right => main_closed.left - sec.width,
            Edge::Top | Edge::Bottom => main_closed.left,
        };
        let main_open_top = match edge {
            Edge::Top => main_closed.top + sec.height,
            Edge::Bottom => main_closed.top - sec.height,
            Edge::Left | Edge::Right => main_closed.top,
        };

        let secondary_open_left = match (mode, edge) {
            (DragMode::Normal, _) | (_, Edge::Top) | (_, Edge::Bottom) => secondary_closed.left,
            (DragMode::SameLevel, Edge::Left) => secondary_closed.left + sec.width,
            (DragMode::SameLevel, Edge::Right) => secondary_closed.left - sec.width,
        };
        let secondary_open_top = match (mode, edge) {
            (DragMode::Normal, _) | (_, Edge::Left) | (_, Edge::Right) => secondary_closed.top,
            (DragMode::SameLevel, Edge::Top) => secondary_closed.top + sec.height,
            (DragMode::SameLevel, Edge::Bottom) => secondary_closed.top - sec.height,
        };

        Self {
            main_closed,
            main_open: main_closed.at_position(main_open_left, main_open_top),
            secondary_closed,
            secondary_open: secondary_closed.at_position(secondary_open_left, secondary_open_top),
        }
    }

    /// Extent of the secondary surface, the main surface's travel distance.
    pub fn secondary_size(&self) -> IntSize {
        self.secondary_closed.size()
    }
}

/// Clamps a candidate main-surface position to its legal travel interval.
///
/// The drag-axis coordinate is held between the closed and opened positions;
/// the perpendicular coordinate is pinned to the closed position.
pub fn clamp_position(
    edge: Edge,
    bounds: &PanelBounds,
    candidate: (i32, i32),
) -> (i32, i32) {
    let closed = bounds.main_closed;
    let sec = bounds.secondary_size();
    let (left, top) = candidate;

    match edge {
        Edge::Left => (
            left.clamp(closed.left, closed.left + sec.width),
            closed.top,
        ),
        Edge::Right => (
            left.clamp(closed.left - sec.width, closed.left),
            closed.top,
        ),
        Edge::Top => (
            closed.left,
            top.clamp(closed.top, closed.top + sec.height),
        ),
        Edge::Bottom => (
            closed.left,
            top.clamp(closed.top - sec.height, closed.top),
        ),
    }
}

/// The halfway coordinate between closed and opened on the horizontal axis.
pub fn halfway_pivot_horizontal(edge: Edge, bounds: &PanelBounds) -> i32 {
    let closed = bounds.main_closed;
    let sec = bounds.secondary_size();
    match edge {
        Edge::Left => closed.left + sec.width / 2,
        Edge::Right | Edge::Top | Edge::Bottom => closed.right - sec.width / 2,
    }
}

/// The halfway coordinate between closed and opened on the vertical axis.
pub fn halfway_pivot_vertical(edge: Edge, bounds: &PanelBounds) -> i32 {
    let closed = bounds.main_closed;
    let sec = bounds.secondary_size();
    match edge {
        Edge::Top => closed.top + sec.height / 2,
        Edge::Bottom | Edge::Left | Edge::Right => closed.bottom - sec.height / 2,
    }
}

/// Distance from the main surface's leading edge to the nearer of its two
/// rest positions along the drag axis.
pub fn dist_to_closest_pivot(edge: Edge, main: IntRect, bounds: &PanelBounds) -> i32 {
    let closed = bounds.main_closed;
    let sec = bounds.secondary_size();

    match edge {
        Edge::Left => {
            let pivot_right = closed.left + sec.width;
            (main.left - closed.left).min(pivot_right - main.left)
        }
        Edge::Right => {
            let pivot_left = closed.right - sec.width;
            (main.right - pivot_left).min(closed.right - main.right)
        }
        Edge::Top => {
            let pivot_bottom = closed.top + sec.height;
            (main.bottom - pivot_bottom).min(pivot_bottom - main.top)
        }
        Edge::Bottom => {
            let pivot_top = closed.bottom - sec.height;
            (closed.bottom - main.bottom).min(main.bottom - pivot_top)
        }
    }
}

/// Normalized travel of the main surface: 0.0 at closed, 1.0 at fully
/// opened, unclamped beyond. Zero when the secondary surface has no extent.
pub fn slide_offset(edge: Edge, main: IntRect, bounds: &PanelBounds) -> f32 {
    let closed = bounds.main_closed;
    let sec = bounds.secondary_size();

    match edge {
        Edge::Left => {
            if sec.width == 0 {
                0.0
            } else {
                (main.left - closed.left) as f32 / sec.width as f32
            }
        }
        Edge::Right => {
            if sec.width == 0 {
                0.0
            } else {
                (closed.left - main.left) as f32 / sec.width as f32
            }
        }
        Edge::Top => {
            if sec.height == 0 {
                0.0
            } else {
                (main.top - closed.top) as f32 / sec.height as f32
            }
        }
        Edge::Bottom => {
            if sec.height == 0 {
                0.0
            } else {
                (closed.top - main.top) as f32 / sec.height as f32
            }
        }
    }
}
