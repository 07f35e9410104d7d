//! Tap/drag disambiguation and ancestor-scroll arbitration.
//!
//! A panel nested in a scrollable ancestor has two gesture hazards: a small
//! tap must not be misread as a drag, and an in-progress swipe must not be
//! stolen by the ancestor's scroll handling. This tracker watches one pointer
//! session and answers both questions.

use swipekit_graphics::{Axis, Point};

/// Per-gesture interception state.
///
/// `on_down` starts a session; `on_move` accumulates displacement along the
/// drag axis and computes whether the ancestor must be told to keep its hands
/// off. The disallow decision latches: once the pointer has travelled far
/// enough from the nearest rest position, the ancestor stays locked out for
/// the remainder of the session even if the pointer doubles back.
pub struct InterceptionTracker {
    axis: Axis,
    touch_slop: f32,
    min_dist_disallow_parent: f32,
    drag_dist: f32,
    prev_position: Option<Point>,
    scrolling: bool,
    has_disallowed: bool,
}

impl InterceptionTracker {
    pub fn new(axis: Axis, touch_slop: f32, min_dist_disallow_parent: f32) -> Self {
        Self {
            axis,
            touch_slop,
            min_dist_disallow_parent,
            drag_dist: 0.0,
            prev_position: None,
            scrolling: false,
            has_disallowed: false,
        }
    }

    /// Reconfigures the drag axis (edge change). Takes effect for the next
    /// gesture.
    pub fn set_axis(&mut self, axis: Axis) {
        self.axis = axis;
    }

    /// Starts a new pointer session.
    pub fn on_down(&mut self, position: Point) {
        self.drag_dist = 0.0;
        self.prev_position = Some(position);
        self.scrolling = false;
        self.has_disallowed = false;
    }

    /// Feeds a move sample. `dist_to_closest_pivot` is the main surface's
    /// current distance to the nearer of its rest positions along the drag
    /// axis, in px. Returns whether the ancestor must be disallowed from
    /// intercepting.
    pub fn on_move(&mut self, position: Point, dist_to_closest_pivot: f32) -> bool {
        self.scrolling = true;

        if let Some(prev) = self.prev_position {
            let travelled = if self.axis.is_horizontal() {
                (position.x - prev.x).abs()
            } else {
                (position.y - prev.y).abs()
            };
            self.drag_dist += travelled;
        }
        self.prev_position = Some(position);

        if !self.has_disallowed && dist_to_closest_pivot >= self.min_dist_disallow_parent {
            self.has_disallowed = true;
            log::trace!(
                "disallowing ancestor interception at {:.1}px from pivot",
                dist_to_closest_pivot
            );
        }
        self.has_disallowed
    }

    /// True while the cumulative drag distance is still under touch slop —
    /// the gesture could end as a tap and must pass through untouched.
    pub fn could_become_tap(&self) -> bool {
        self.drag_dist < self.touch_slop
    }

    /// True once any movement was seen this session.
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Cumulative displacement along the drag axis since the press.
    pub fn drag_distance(&self) -> f32 {
        self.drag_dist
    }
}
