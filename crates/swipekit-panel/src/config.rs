//! Panel configuration.

use swipekit_graphics::{Axis, Dp};

/// Default minimum fling velocity, in dp per second.
pub const DEFAULT_MIN_FLING_VELOCITY: i32 = 300;

/// Default minimum travel, in dp, before the panel disallows ancestor
/// interception of the gesture.
pub const DEFAULT_MIN_DIST_REQUEST_DISALLOW_PARENT: f32 = 1.0;

/// The side the secondary surface is revealed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// The axis the main surface travels along for this edge.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::Horizontal,
            Edge::Top | Edge::Bottom => Axis::Vertical,
        }
    }
}

/// How the secondary surface behaves while the main surface moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    /// The secondary surface stays put underneath the main surface.
    Normal,
    /// The secondary surface starts hidden flush behind the main surface's
    /// edge and slides in lock-step with it.
    ///
    /// The secondary surface's extent is assumed stable between layout
    /// passes; resizing it mid-gesture is undefined until the next pass.
    SameLevel,
}

/// Construction-time configuration for a panel.
///
/// `lock_drag` and `min_fling_velocity` may also be mutated on a live panel;
/// edge and mode changes take effect at the next layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelConfig {
    pub drag_edge: Edge,
    pub mode: DragMode,
    /// Minimum fling velocity in dp/s for a release to override the
    /// halfway-pivot settle rule.
    pub min_fling_velocity: i32,
    /// Distance from the nearest rest position before ancestor interception
    /// is disallowed.
    pub min_dist_request_disallow_parent: Dp,
    pub lock_drag: bool,
    /// Snap open (instead of closed) at the first layout pass.
    pub open_before_init: bool,
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drag_edge(mut self, edge: Edge) -> Self {
        self.drag_edge = edge;
        self
    }

    pub fn with_mode(mut self, mode: DragMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_min_fling_velocity(mut self, dp_per_second: i32) -> Self {
        self.min_fling_velocity = dp_per_second;
        self
    }

    pub fn with_min_dist_request_disallow_parent(mut self, dist: Dp) -> Self {
        self.min_dist_request_disallow_parent = dist;
        self
    }

    pub fn with_lock_drag(mut self, locked: bool) -> Self {
        self.lock_drag = locked;
        self
    }

    pub fn with_open_before_init(mut self, open: bool) -> Self {
        self.open_before_init = open;
        self
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            drag_edge: Edge::Left,
            mode: DragMode::Normal,
            min_fling_velocity: DEFAULT_MIN_FLING_VELOCITY,
            min_dist_request_disallow_parent: Dp(DEFAULT_MIN_DIST_REQUEST_DISALLOW_PARENT),
            lock_drag: false,
            open_before_init: false,
        }
    }
}
