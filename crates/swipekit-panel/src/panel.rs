//! The swipe-reveal panel engine.
//!
//! A container holding exactly two child surfaces: the main surface, always
//! visible when closed, and the secondary surface revealed by dragging the
//! main one aside along the configured edge. The engine turns raw pointer
//! events into clamped surface positions, a discrete lifecycle state, and a
//! settle decision on release; the host toolkit does the drawing.
//!
//! Everything runs on one logical UI thread: pointer events, layout passes,
//! and animation frames arrive sequentially and each callback runs to
//! completion. The two externally toggled flags (drag lock, abort) are
//! atomics so an out-of-band toggle is visible at the next event.

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use swipekit_animation::{AnimationSpec, Easing};
use swipekit_graphics::{Density, Dp, IntInsets, IntRect, IntSize};
use swipekit_input::{
    InterceptionTracker, PointerEvent, PointerEventKind, Velocity, EDGE_SIZE, TOUCH_SLOP,
};

use crate::bounds::{self, PanelBounds};
use crate::config::{DragMode, Edge, PanelConfig};
use crate::drag_helper::{DragHelper, DragHelperState, PhysicalEdge};
use crate::layout::{measure_panel, place_surfaces, MeasureSpec, Surface, SurfacePair};
use crate::listener::{DragStateHook, SwipeListener};
use crate::settle::{decide_settle, SettleTarget};
use crate::state::PanelState;

/// Duration of the eased settle slide after a release or programmatic
/// animated open/close.
const SETTLE_DURATION_MS: u64 = 250;

const TWO_SURFACES_REQUIRED: &str =
    "swipe panel requires exactly two child surfaces (secondary, then main)";

/// Pending public notification for one position update.
enum MotionNotification {
    Closed,
    Opened,
    Slide(f32),
}

/// The swipe-reveal panel.
pub struct SwipePanel {
    drag_edge: Edge,
    mode: DragMode,
    /// dp per second; a release faster than this settles by fling direction.
    min_fling_velocity: i32,
    density: Density,
    padding: IntInsets,
    touch_slop: f32,

    state: PanelState,
    drag_locked: AtomicBool,
    aborted: AtomicBool,
    open_before_init: bool,
    layout_count: u32,

    surfaces: Option<SurfacePair>,
    bounds: PanelBounds,
    container: IntRect,
    last_main_position: (i32, i32),

    helper: DragHelper,
    interception: InterceptionTracker,
    settle_spec: AnimationSpec,

    swipe_listener: Option<Rc<dyn SwipeListener>>,
    drag_state_hook: Option<DragStateHook>,
    disallow_intercept_hook: Option<Rc<dyn Fn(bool)>>,
}

impl SwipePanel {
    pub fn new(config: PanelConfig, density: Density) -> Self {
        let touch_slop = Dp(TOUCH_SLOP).to_px(density);
        let edge_size = Dp(EDGE_SIZE).to_px(density);
        let min_dist_px = config.min_dist_request_disallow_parent.to_px(density);

        Self {
            drag_edge: config.drag_edge,
            mode: config.mode,
            min_fling_velocity: config.min_fling_velocity,
            density,
            padding: IntInsets::default(),
            touch_slop,
            state: PanelState::Closed,
            drag_locked: AtomicBool::new(config.lock_drag),
            aborted: AtomicBool::new(false),
            open_before_init: config.open_before_init,
            layout_count: 0,
            surfaces: None,
            bounds: PanelBounds::default(),
            container: IntRect::ZERO,
            last_main_position: (0, 0),
            helper: DragHelper::new(edge_size),
            interception: InterceptionTracker::new(
                config.drag_edge.axis(),
                touch_slop,
                min_dist_px,
            ),
            settle_spec: AnimationSpec::tween(SETTLE_DURATION_MS, Easing::EaseOut),
            swipe_listener: None,
            drag_state_hook: None,
            disallow_intercept_hook: None,
        }
    }

    /// Registers the two child surfaces: the secondary underneath, the main
    /// on top. Must happen before the first measurement.
    pub fn set_surfaces(&mut self, secondary: Surface, main: Surface) {
        self.surfaces = Some(SurfacePair { secondary, main });
    }

    pub fn set_padding(&mut self, padding: IntInsets) {
        self.padding = padding;
    }

    // ---- measurement & layout -------------------------------------------

    /// Computes the panel's desired size for the host's sizing modes.
    ///
    /// Panics unless both surfaces have been registered; a panel with fewer
    /// than two children is a configuration error, not a degraded mode.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> IntSize {
        let padding = self.padding;
        let Some(surfaces) = self.surfaces.as_mut() else {
            panic!("{}", TWO_SURFACES_REQUIRED);
        };
        measure_panel(surfaces, padding, width_spec, height_spec)
    }

    /// Runs a layout pass: assigns closed-state bounds per the drag edge,
    /// recomputes the four travel rectangles, and snaps to the configured
    /// resting state without animation.
    pub fn layout(&mut self, container: IntSize) {
        self.aborted.store(false, Ordering::Relaxed);

        let padding = self.padding;
        let edge = self.drag_edge;
        let mode = self.mode;
        let Some(surfaces) = self.surfaces.as_mut() else {
            panic!("{}", TWO_SURFACES_REQUIRED);
        };
        place_surfaces(surfaces, container, padding, edge, mode);
        let main_closed = surfaces.main.bounds();
        let secondary_closed = surfaces.secondary.bounds();

        if secondary_closed.size().is_empty() {
            log::warn!("zero-sized secondary surface; the panel has no travel");
        }

        self.bounds = PanelBounds::compute(main_closed, secondary_closed, edge, mode);
        self.container = IntRect::new(0, 0, container.width, container.height);
        self.interception.set_axis(edge.axis());

        if self.open_before_init {
            self.open(false);
        } else {
            self.close(false);
        }

        let main = self.main_bounds();
        self.last_main_position = (main.left, main.top);
        self.layout_count += 1;
    }

    /// True until two layout passes have completed. Hosts that lay out twice
    /// before first paint (recycling lists) use this to force the second
    /// pass.
    pub fn should_request_layout(&self) -> bool {
        self.layout_count < 2
    }

    // ---- pointer input ---------------------------------------------------

    /// Feeds a pointer event the panel owns (the host routed it here).
    pub fn on_pointer_event(&mut self, event: &PointerEvent) {
        self.track_interception(event);
        self.process_drag(event);
    }

    /// Feeds a pointer event during the host's intercept pass. Returns true
    /// when the panel claims the gesture; a gesture that could still become
    /// a tap on the main surface is always passed through.
    pub fn on_intercept_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if self.is_drag_locked() {
            return false;
        }

        self.process_drag(event);
        self.track_interception(event);

        let could_become_tap =
            self.interception.could_become_tap() && self.main_bounds().contains(event.position);
        let settling = self.helper.state() == DragHelperState::Settling;
        let idle_after_scrolled =
            self.helper.state() == DragHelperState::Idle && self.interception.is_scrolling();

        !could_become_tap && (settling || idle_after_scrolled)
    }

    /// Advances any in-flight settle slide to the given frame time.
    pub fn on_frame(&mut self, frame_time_nanos: u64) {
        if self.helper.state() != DragHelperState::Settling {
            return;
        }
        if let Some((position, finished)) = self.helper.tick_settle(frame_time_nanos) {
            self.move_main_to(position.0, position.1);
            if finished {
                self.resolve_resting_state();
            }
        }
    }

    // ---- programmatic control -------------------------------------------

    /// Opens the panel to reveal the secondary surface. An unanimated open
    /// snaps both surfaces and fires no slide/open/closed notifications.
    pub fn open(&mut self, animated: bool) {
        self.open_before_init = true;
        self.aborted.store(false, Ordering::Relaxed);

        if animated {
            self.set_state(PanelState::Opening);
            let target = self.bounds.main_open;
            self.smooth_slide_main_to(target);
        } else {
            self.set_state(PanelState::Open);
            self.helper.abort();
            self.snap_surfaces(self.bounds.main_open, self.bounds.secondary_open);
        }
    }

    /// Closes the panel to hide the secondary surface. An unanimated close
    /// snaps both surfaces and fires no slide/open/closed notifications.
    pub fn close(&mut self, animated: bool) {
        self.open_before_init = false;
        self.aborted.store(false, Ordering::Relaxed);

        if animated {
            self.set_state(PanelState::Closing);
            let target = self.bounds.main_closed;
            self.smooth_slide_main_to(target);
        } else {
            self.set_state(PanelState::Closed);
            self.helper.abort();
            self.snap_surfaces(self.bounds.main_closed, self.bounds.secondary_closed);
        }
    }

    /// Halts any in-flight drag or slide where it is and suppresses the
    /// drag-state notifications that would result. Idempotent. Used by
    /// controllers that reposition the panel out of band.
    pub fn abort(&mut self) {
        self.aborted.store(true, Ordering::Relaxed);
        let previous = self.helper.abort();
        if previous != DragHelperState::Idle {
            // The surface rests wherever the abort left it; bring the state
            // field in line without notifying.
            self.resolve_resting_state();
        }
    }

    /// Locks or unlocks dragging. May be called from outside the event
    /// sequence; takes effect at the next incoming event.
    pub fn set_lock_drag(&self, locked: bool) {
        self.drag_locked.store(locked, Ordering::Relaxed);
    }

    pub fn is_drag_locked(&self) -> bool {
        self.drag_locked.load(Ordering::Relaxed)
    }

    // ---- queries & accessors --------------------------------------------

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// True if the panel is fully opened.
    pub fn is_opened(&self) -> bool {
        self.state == PanelState::Open
    }

    /// True if the panel is fully closed.
    pub fn is_closed(&self) -> bool {
        self.state == PanelState::Closed
    }

    /// Normalized travel of the main surface, 0.0 closed to 1.0 open.
    pub fn slide_offset(&self) -> f32 {
        bounds::slide_offset(self.drag_edge, self.main_bounds(), &self.bounds)
    }

    pub fn drag_edge(&self) -> Edge {
        self.drag_edge
    }

    /// Reconfigures the reveal edge. Geometry refreshes at the next layout
    /// pass.
    pub fn set_drag_edge(&mut self, edge: Edge) {
        self.drag_edge = edge;
        self.interception.set_axis(edge.axis());
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Reconfigures the drag mode. Geometry refreshes at the next layout
    /// pass.
    pub fn set_mode(&mut self, mode: DragMode) {
        self.mode = mode;
    }

    /// Minimum fling velocity in dp/s.
    pub fn min_fling_velocity(&self) -> i32 {
        self.min_fling_velocity
    }

    pub fn set_min_fling_velocity(&mut self, dp_per_second: i32) {
        self.min_fling_velocity = dp_per_second;
    }

    /// Current placement of the main surface.
    pub fn main_bounds(&self) -> IntRect {
        self.surfaces
            .as_ref()
            .expect(TWO_SURFACES_REQUIRED)
            .main
            .bounds()
    }

    /// Current placement of the secondary surface.
    pub fn secondary_bounds(&self) -> IntRect {
        self.surfaces
            .as_ref()
            .expect(TWO_SURFACES_REQUIRED)
            .secondary
            .bounds()
    }

    /// The four travel rectangles from the last layout pass.
    pub fn geometry(&self) -> &PanelBounds {
        &self.bounds
    }

    pub fn set_swipe_listener(&mut self, listener: Rc<dyn SwipeListener>) {
        self.swipe_listener = Some(listener);
    }

    /// Hook invoked with the ancestor-disallow decision while the gesture
    /// scrolls; hosts forward it to their parent container.
    pub fn set_disallow_intercept_hook(&mut self, hook: Rc<dyn Fn(bool)>) {
        self.disallow_intercept_hook = Some(hook);
    }

    pub(crate) fn set_drag_state_hook(&mut self, hook: DragStateHook) {
        self.drag_state_hook = Some(hook);
    }

    // ---- internals -------------------------------------------------------

    fn process_drag(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => {
                self.helper.begin_session(event, self.container);
                if self.is_drag_locked() {
                    return;
                }
                let Some(surfaces) = self.surfaces.as_ref() else {
                    return;
                };
                let on_surface = surfaces.main.bounds().contains(event.position)
                    || surfaces.secondary.bounds().contains(event.position);
                if on_surface {
                    self.aborted.store(false, Ordering::Relaxed);
                    self.capture_main();
                }
            }
            PointerEventKind::Move => {
                self.helper.record_sample(event);

                if !self.helper.is_captured() {
                    let slop = self.touch_slop;
                    if let Some(edge) = self.helper.edge_drag_start(event, slop) {
                        if !self.is_drag_locked() && edge_capture_allowed(self.drag_edge, edge) {
                            self.capture_main();
                        }
                    }
                }

                if self.helper.is_captured() {
                    if let Some(candidate) = self.helper.drag_position(event) {
                        let (left, top) =
                            bounds::clamp_position(self.drag_edge, &self.bounds, candidate);
                        self.move_main_to(left, top);
                    }
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if !self.helper.is_captured() {
                    self.helper.end_session();
                    return;
                }

                // A cancelled pointer carries no usable fling.
                let velocity_px = if event.kind == PointerEventKind::Up {
                    self.helper.release_velocity()
                } else {
                    Velocity::ZERO
                };
                self.helper.end_session();

                let velocity_dp = Velocity {
                    x: self.density.px_to_dp(velocity_px.x),
                    y: self.density.px_to_dp(velocity_px.y),
                };
                let main = self.main_bounds();
                let target = decide_settle(
                    self.drag_edge,
                    velocity_dp,
                    self.min_fling_velocity,
                    main,
                    &self.bounds,
                );
                log::debug!(
                    "release at ({}, {}), velocity ({:.0}, {:.0}) dp/s -> {:?}",
                    main.left,
                    main.top,
                    velocity_dp.x,
                    velocity_dp.y,
                    target
                );
                match target {
                    SettleTarget::Open => self.open(true),
                    SettleTarget::Close => self.close(true),
                }
            }
        }
    }

    fn track_interception(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => self.interception.on_down(event.position),
            PointerEventKind::Move => {
                let main = self.main_bounds();
                let dist = bounds::dist_to_closest_pivot(self.drag_edge, main, &self.bounds) as f32;
                let disallow = self.interception.on_move(event.position, dist);
                if let Some(hook) = self.disallow_intercept_hook.clone() {
                    (*hook)(disallow);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {}
        }
    }

    fn capture_main(&mut self) {
        let main = self.main_bounds();
        self.helper.capture((main.left, main.top));
        log::trace!("captured main surface at ({}, {})", main.left, main.top);
        self.set_state(PanelState::Dragging);
    }

    /// Applies one main-surface position update: keeps the secondary surface
    /// in lock-step in SameLevel mode and fires the motion notifications in
    /// position-update order.
    fn move_main_to(&mut self, left: i32, top: i32) {
        let mode = self.mode;
        let horizontal = self.drag_edge.axis().is_horizontal();
        {
            let Some(surfaces) = self.surfaces.as_mut() else {
                panic!("{}", TWO_SURFACES_REQUIRED);
            };
            let old = surfaces.main.bounds();
            if old.left == left && old.top == top {
                return;
            }
            surfaces.main.set_bounds(old.at_position(left, top));
            if mode == DragMode::SameLevel {
                if horizontal {
                    surfaces.secondary.offset_bounds(left - old.left, 0);
                } else {
                    surfaces.secondary.offset_bounds(0, top - old.top);
                }
            }
        }

        let moved = left != self.last_main_position.0 || top != self.last_main_position.1;
        let notification = if !moved {
            None
        } else if left == self.bounds.main_closed.left && top == self.bounds.main_closed.top {
            Some(MotionNotification::Closed)
        } else if left == self.bounds.main_open.left && top == self.bounds.main_open.top {
            Some(MotionNotification::Opened)
        } else {
            Some(MotionNotification::Slide(self.slide_offset()))
        };
        self.last_main_position = (left, top);

        if let Some(notification) = notification {
            if let Some(listener) = self.swipe_listener.clone() {
                match notification {
                    MotionNotification::Closed => listener.on_closed(self),
                    MotionNotification::Opened => listener.on_opened(self),
                    MotionNotification::Slide(offset) => listener.on_slide(self, offset),
                }
            }
        }
    }

    /// Starts an eased slide towards `target`; a zero-distance slide resolves
    /// to the resting state immediately.
    fn smooth_slide_main_to(&mut self, target: IntRect) {
        let main = self.main_bounds();
        let animating = self.helper.start_settle(
            (main.left, main.top),
            (target.left, target.top),
            self.settle_spec,
        );
        if !animating {
            self.resolve_resting_state();
        }
    }

    /// Snaps both surfaces to the given rectangles with no interpolation and
    /// no motion notifications.
    fn snap_surfaces(&mut self, main: IntRect, secondary: IntRect) {
        let Some(surfaces) = self.surfaces.as_mut() else {
            panic!("{}", TWO_SURFACES_REQUIRED);
        };
        surfaces.main.set_bounds(main);
        surfaces.secondary.set_bounds(secondary);
        self.last_main_position = (main.left, main.top);
    }

    /// Sets the resting state from the main surface's position on the drag
    /// axis once the helper goes idle.
    fn resolve_resting_state(&mut self) {
        let main = self.main_bounds();
        let at_closed = if self.drag_edge.axis().is_horizontal() {
            main.left == self.bounds.main_closed.left
        } else {
            main.top == self.bounds.main_closed.top
        };
        self.set_state(if at_closed {
            PanelState::Closed
        } else {
            PanelState::Open
        });
    }

    /// Records a state transition and notifies the drag-state hook, unless
    /// the state is unchanged or the transition resulted from an abort.
    fn set_state(&mut self, new_state: PanelState) {
        let previous = self.state;
        self.state = new_state;
        if previous != new_state && !self.aborted.load(Ordering::Relaxed) {
            if let Some(hook) = self.drag_state_hook.clone() {
                (*hook)(new_state);
            }
        }
    }
}

/// An edge-band drag may only capture when it starts at the physical edge
/// opposite the configured reveal edge. The asymmetry is intentional: it
/// lets a far-side edge swipe pull the panel open.
fn edge_capture_allowed(reveal_edge: Edge, touched: PhysicalEdge) -> bool {
    matches!(
        (reveal_edge, touched),
        (Edge::Right, PhysicalEdge::Left)
            | (Edge::Left, PhysicalEdge::Right)
            | (Edge::Bottom, PhysicalEdge::Top)
            | (Edge::Top, PhysicalEdge::Bottom)
    )
}

#[cfg(test)]
#[path = "tests/panel_tests.rs"]
mod tests;
