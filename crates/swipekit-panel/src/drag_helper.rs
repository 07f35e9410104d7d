//! Drag session mechanics: capture, candidate positions, settle driving.
//!
//! The helper owns the *mechanics* of one pointer session — where it
//! started, whether the main surface is captured, the velocity window, the
//! in-flight settle animation — and reports plain values. All panel
//! semantics (clamping, settle decisions, notifications) stay with the
//! panel.

use swipekit_animation::{AnimationSpec, SlideAnimation};
use swipekit_graphics::{IntRect, Point};
use swipekit_input::{PointerEvent, Velocity, VelocityTracker, MAX_FLING_VELOCITY};

/// The helper's mechanical state, distinct from the panel's lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragHelperState {
    Idle,
    Dragging,
    Settling,
}

/// A physical side of the panel's own bounds, for edge-band drag starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhysicalEdge {
    Left,
    Right,
    Top,
    Bottom,
}

pub(crate) struct DragHelper {
    state: DragHelperState,
    /// Edge band width in px.
    edge_size: f32,
    captured: bool,
    down_position: Option<Point>,
    /// Main surface top-left at capture time; candidates are offsets of it.
    capture_origin: (i32, i32),
    edge_touched: Option<PhysicalEdge>,
    edge_drag_dispatched: bool,
    velocity: VelocityTracker,
    slide: Option<SlideAnimation>,
}

impl DragHelper {
    pub fn new(edge_size: f32) -> Self {
        Self {
            state: DragHelperState::Idle,
            edge_size,
            captured: false,
            down_position: None,
            capture_origin: (0, 0),
            edge_touched: None,
            edge_drag_dispatched: false,
            velocity: VelocityTracker::new(),
            slide: None,
        }
    }

    pub fn state(&self) -> DragHelperState {
        self.state
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Starts a pointer session: resets velocity tracking and records which
    /// physical edge band, if any, the press landed in.
    pub fn begin_session(&mut self, event: &PointerEvent, container: IntRect) {
        self.velocity.reset();
        self.velocity.add_sample(event.time_ms, event.position);
        self.down_position = Some(event.position);
        self.edge_touched = edge_band_under(event.position, container, self.edge_size);
        self.edge_drag_dispatched = false;
    }

    pub fn record_sample(&mut self, event: &PointerEvent) {
        self.velocity.add_sample(event.time_ms, event.position);
    }

    /// Captures the main surface at its current position. Any in-flight
    /// settle is dropped; the session continues as a drag.
    pub fn capture(&mut self, main_position: (i32, i32)) {
        self.captured = true;
        self.capture_origin = main_position;
        self.slide = None;
        self.state = DragHelperState::Dragging;
    }

    /// Candidate main-surface position for this move, before clamping.
    pub fn drag_position(&self, event: &PointerEvent) -> Option<(i32, i32)> {
        if !self.captured {
            return None;
        }
        let down = self.down_position?;
        Some((
            self.capture_origin.0 + (event.position.x - down.x).round() as i32,
            self.capture_origin.1 + (event.position.y - down.y).round() as i32,
        ))
    }

    /// Reports an edge-band drag start, at most once per session, once the
    /// pointer has moved past touch slop without anything being captured.
    pub fn edge_drag_start(
        &mut self,
        event: &PointerEvent,
        touch_slop: f32,
    ) -> Option<PhysicalEdge> {
        if self.captured || self.edge_drag_dispatched {
            return None;
        }
        let edge = self.edge_touched?;
        let down = self.down_position?;
        let dx = event.position.x - down.x;
        let dy = event.position.y - down.y;
        if dx.hypot(dy) < touch_slop {
            return None;
        }
        self.edge_drag_dispatched = true;
        Some(edge)
    }

    /// Tracked release velocity, capped to the fling ceiling.
    pub fn release_velocity(&self) -> Velocity {
        self.velocity.velocity_capped(MAX_FLING_VELOCITY)
    }

    /// Ends the pointer session. The helper returns to idle unless a settle
    /// is started right after.
    pub fn end_session(&mut self) {
        self.captured = false;
        self.down_position = None;
        self.edge_touched = None;
        self.edge_drag_dispatched = false;
        if self.state == DragHelperState::Dragging {
            self.state = DragHelperState::Idle;
        }
    }

    /// Starts an eased slide of the main surface towards `target`. Returns
    /// false when already there (no animation; caller resolves immediately).
    pub fn start_settle(
        &mut self,
        from: (i32, i32),
        target: (i32, i32),
        spec: AnimationSpec,
    ) -> bool {
        let slide = SlideAnimation::new(from, target, spec);
        if slide.is_finished() {
            self.slide = None;
            self.state = DragHelperState::Idle;
            false
        } else {
            self.slide = Some(slide);
            self.state = DragHelperState::Settling;
            true
        }
    }

    /// Advances the settle animation to the given frame time. Returns the
    /// position for this frame and whether the slide finished (in which case
    /// the helper is idle again).
    pub fn tick_settle(&mut self, frame_time_nanos: u64) -> Option<((i32, i32), bool)> {
        let slide = self.slide.as_mut()?;
        let position = slide.tick(frame_time_nanos);
        let finished = slide.is_finished();
        if finished {
            self.slide = None;
            self.state = DragHelperState::Idle;
        }
        Some((position, finished))
    }

    /// Halts any drag or settle in place. Idempotent. Returns the state the
    /// helper was in.
    pub fn abort(&mut self) -> DragHelperState {
        let previous = self.state;
        if let Some(mut slide) = self.slide.take() {
            slide.cancel();
        }
        self.captured = false;
        self.state = DragHelperState::Idle;
        previous
    }
}

/// The single physical edge band the point lies in, if any. A press in a
/// corner touches two bands and matches neither, mirroring the exact-flag
/// comparison edge capture is defined with.
fn edge_band_under(position: Point, container: IntRect, edge_size: f32) -> Option<PhysicalEdge> {
    let mut touched: Option<PhysicalEdge> = None;
    let mut count = 0;

    if position.x <= container.left as f32 + edge_size {
        touched = Some(PhysicalEdge::Left);
        count += 1;
    }
    if position.x >= container.right as f32 - edge_size {
        touched = Some(PhysicalEdge::Right);
        count += 1;
    }
    if position.y <= container.top as f32 + edge_size {
        touched = Some(PhysicalEdge::Top);
        count += 1;
    }
    if position.y >= container.bottom as f32 - edge_size {
        touched = Some(PhysicalEdge::Bottom);
        count += 1;
    }

    if count == 1 {
        touched
    } else {
        None
    }
}
