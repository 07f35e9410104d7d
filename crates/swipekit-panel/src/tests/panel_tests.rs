use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use swipekit_graphics::Point;

use crate::binder::PanelBinder;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Closed,
    Opened,
    Slide(f32),
}

#[derive(Default)]
struct RecordingListener {
    motions: RefCell<Vec<Motion>>,
}

impl SwipeListener for RecordingListener {
    fn on_closed(&self, _panel: &SwipePanel) {
        self.motions.borrow_mut().push(Motion::Closed);
    }

    fn on_opened(&self, _panel: &SwipePanel) {
        self.motions.borrow_mut().push(Motion::Opened);
    }

    fn on_slide(&self, _panel: &SwipePanel, slide_offset: f32) {
        self.motions.borrow_mut().push(Motion::Slide(slide_offset));
    }
}

/// A 200x100 panel: main surface covers it fully, the secondary surface is
/// 100 px wide (or 40 px tall for vertical edges). Left-edge travel is
/// closed at 0, opened at 100, pivot at 50.
fn build_panel(config: PanelConfig) -> SwipePanel {
    let mut panel = SwipePanel::new(config, Density::new(1.0));
    let secondary = match panel.drag_edge() {
        Edge::Left | Edge::Right => IntSize::new(100, 100),
        Edge::Top | Edge::Bottom => IntSize::new(200, 40),
    };
    panel.set_surfaces(Surface::new(secondary), Surface::new(IntSize::new(200, 100)));
    panel.measure(MeasureSpec::Exactly(200), MeasureSpec::Exactly(100));
    panel.layout(IntSize::new(200, 100));
    panel
}

fn left_panel() -> SwipePanel {
    build_panel(PanelConfig::new().with_drag_edge(Edge::Left))
}

/// A padded 200x150 panel whose surfaces stop short of the edge bands, so
/// edge-band capture is observable separately from surface presses.
fn padded_panel(edge: Edge) -> SwipePanel {
    let mut panel = SwipePanel::new(PanelConfig::new().with_drag_edge(edge), Density::new(1.0));
    panel.set_padding(IntInsets::uniform(25));
    panel.set_surfaces(
        Surface::new(IntSize::new(100, 90)),
        Surface::new(IntSize::new(140, 90)),
    );
    panel.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    panel.layout(IntSize::new(200, 150));
    panel
}

fn press(panel: &mut SwipePanel, x: f32, y: f32, time_ms: i64) {
    panel.on_pointer_event(&PointerEvent::down(Point::new(x, y), time_ms));
}

fn drag_to(panel: &mut SwipePanel, x: f32, y: f32, time_ms: i64) {
    panel.on_pointer_event(&PointerEvent::moved(Point::new(x, y), time_ms));
}

fn lift(panel: &mut SwipePanel, x: f32, y: f32, time_ms: i64) {
    panel.on_pointer_event(&PointerEvent::up(Point::new(x, y), time_ms));
}

/// Runs the settle slide to completion.
fn finish_settle(panel: &mut SwipePanel) {
    panel.on_frame(0);
    panel.on_frame(400_000_000);
}

/// Drags slowly enough (100 ms between samples) that no fling registers.
fn slow_drag_and_release(panel: &mut SwipePanel, from_x: f32, to_x: f32) {
    press(panel, from_x, 50.0, 0);
    let steps = 4;
    for step in 1..=steps {
        let x = from_x + (to_x - from_x) * step as f32 / steps as f32;
        drag_to(panel, x, 50.0, step as i64 * 100);
    }
    lift(panel, to_x, 50.0, steps as i64 * 100 + 100);
}

// ---- lifecycle & programmatic control -----------------------------------

#[test]
fn starts_closed_after_first_layout() {
    let panel = left_panel();
    assert!(panel.is_closed());
    assert_eq!(panel.main_bounds(), panel.geometry().main_closed);
    assert_eq!(panel.slide_offset(), 0.0);
}

#[test]
fn open_before_init_snaps_open_at_first_layout() {
    let panel = build_panel(
        PanelConfig::new()
            .with_drag_edge(Edge::Left)
            .with_open_before_init(true),
    );
    assert!(panel.is_opened());
    assert_eq!(panel.main_bounds(), panel.geometry().main_open);
    assert_eq!(panel.slide_offset(), 1.0);
}

#[test]
fn unanimated_open_snaps_both_surfaces_silently() {
    let mut panel = left_panel();
    let listener = Rc::new(RecordingListener::default());
    panel.set_swipe_listener(listener.clone());

    panel.open(false);

    assert!(panel.is_opened());
    assert_eq!(panel.main_bounds(), panel.geometry().main_open);
    assert_eq!(panel.secondary_bounds(), panel.geometry().secondary_open);
    assert!(listener.motions.borrow().is_empty());
}

#[test]
fn close_when_already_closed_changes_nothing_and_stays_silent() {
    let mut panel = left_panel();
    let listener = Rc::new(RecordingListener::default());
    panel.set_swipe_listener(listener.clone());
    let states = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&states);
    panel.set_drag_state_hook(Rc::new(move |state| recorded.borrow_mut().push(state)));

    let geometry_before = *panel.geometry();
    let main_before = panel.main_bounds();
    let secondary_before = panel.secondary_bounds();

    panel.close(false);

    assert!(panel.is_closed());
    assert_eq!(*panel.geometry(), geometry_before);
    assert_eq!(panel.main_bounds(), main_before);
    assert_eq!(panel.secondary_bounds(), secondary_before);
    assert!(listener.motions.borrow().is_empty());
    assert!(states.borrow().is_empty());
}

#[test]
fn animated_open_walks_through_opening_to_open() {
    let mut panel = left_panel();
    let listener = Rc::new(RecordingListener::default());
    panel.set_swipe_listener(listener.clone());
    let states = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&states);
    panel.set_drag_state_hook(Rc::new(move |state| recorded.borrow_mut().push(state)));

    panel.open(true);
    assert_eq!(panel.state(), PanelState::Opening);

    finish_settle(&mut panel);

    assert!(panel.is_opened());
    assert_eq!(panel.main_bounds(), panel.geometry().main_open);
    assert_eq!(*states.borrow(), vec![PanelState::Opening, PanelState::Open]);
    assert_eq!(listener.motions.borrow().last(), Some(&Motion::Opened));
}

#[test]
fn animated_open_when_already_open_resolves_immediately() {
    let mut panel = left_panel();
    panel.open(false);

    panel.open(true);

    assert!(panel.is_opened());
    assert_eq!(panel.main_bounds(), panel.geometry().main_open);
}

#[test]
fn should_request_layout_until_two_passes() {
    let mut panel = left_panel();
    assert!(panel.should_request_layout());
    panel.layout(IntSize::new(200, 100));
    assert!(!panel.should_request_layout());
}

#[test]
#[should_panic(expected = "two child surfaces")]
fn measuring_without_surfaces_is_fatal() {
    let mut panel = SwipePanel::new(PanelConfig::new(), Density::new(1.0));
    panel.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
}

// ---- dragging ------------------------------------------------------------

#[test]
fn drag_follows_the_pointer_within_the_travel_interval() {
    let mut panel = left_panel();

    press(&mut panel, 150.0, 50.0, 0);
    assert_eq!(panel.state(), PanelState::Dragging);

    drag_to(&mut panel, 190.0, 50.0, 16);
    assert_eq!(panel.main_bounds().left, 40);

    // Overshooting either way clamps to the travel interval.
    drag_to(&mut panel, 500.0, 50.0, 32);
    assert_eq!(panel.main_bounds().left, 100);
    drag_to(&mut panel, -500.0, 50.0, 48);
    assert_eq!(panel.main_bounds().left, 0);
}

#[test]
fn drag_never_moves_off_axis() {
    let mut panel = left_panel();

    press(&mut panel, 150.0, 50.0, 0);
    drag_to(&mut panel, 190.0, 90.0, 16);

    let main = panel.main_bounds();
    assert_eq!(main.left, 40);
    assert_eq!(main.top, panel.geometry().main_closed.top);
}

#[test]
fn slide_offsets_are_monotonic_during_a_unidirectional_drag() {
    let mut panel = left_panel();
    let listener = Rc::new(RecordingListener::default());
    panel.set_swipe_listener(listener.clone());

    press(&mut panel, 100.0, 50.0, 0);
    for step in 1..=9 {
        drag_to(&mut panel, 100.0 + step as f32 * 10.0, 50.0, step * 16);
    }

    let offsets: Vec<f32> = listener
        .motions
        .borrow()
        .iter()
        .filter_map(|motion| match motion {
            Motion::Slide(offset) => Some(*offset),
            _ => None,
        })
        .collect();
    assert!(!offsets.is_empty());
    for pair in offsets.windows(2) {
        assert!(pair[1] > pair[0], "offsets reversed: {:?}", offsets);
    }
}

#[test]
fn same_level_secondary_slides_in_lock_step() {
    let mut panel = build_panel(
        PanelConfig::new()
            .with_drag_edge(Edge::Left)
            .with_mode(DragMode::SameLevel),
    );
    // Hidden flush behind the main surface after layout.
    assert_eq!(panel.secondary_bounds(), IntRect::new(-100, 0, 0, 100));

    press(&mut panel, 100.0, 50.0, 0);
    drag_to(&mut panel, 160.0, 50.0, 16);
    assert_eq!(panel.main_bounds().left, 60);
    assert_eq!(panel.secondary_bounds(), IntRect::new(-40, 0, 60, 100));

    panel.open(false);
    assert_eq!(panel.secondary_bounds(), panel.geometry().secondary_open);
    assert_eq!(panel.secondary_bounds(), IntRect::new(0, 0, 100, 100));
}

#[test]
fn normal_mode_secondary_stays_put() {
    let mut panel = left_panel();
    let secondary_before = panel.secondary_bounds();

    press(&mut panel, 100.0, 50.0, 0);
    drag_to(&mut panel, 160.0, 50.0, 16);

    assert_eq!(panel.secondary_bounds(), secondary_before);
}

// ---- settle decisions ----------------------------------------------------

#[test]
fn slow_release_past_the_pivot_settles_open() {
    let mut panel = left_panel();

    slow_drag_and_release(&mut panel, 10.0, 70.0);
    assert_eq!(panel.state(), PanelState::Opening);

    finish_settle(&mut panel);
    assert!(panel.is_opened());
    assert_eq!(panel.main_bounds().left, 100);
}

#[test]
fn slow_release_short_of_the_pivot_settles_closed() {
    let mut panel = left_panel();

    slow_drag_and_release(&mut panel, 10.0, 50.0);
    assert_eq!(panel.state(), PanelState::Closing);

    finish_settle(&mut panel);
    assert!(panel.is_closed());
    assert_eq!(panel.main_bounds().left, 0);
}

#[test]
fn fast_fling_opens_regardless_of_position() {
    let mut panel = left_panel();

    // 10 px per 10 ms = 1000 px/s rightward, well over the 300 dp/s default.
    press(&mut panel, 100.0, 50.0, 0);
    drag_to(&mut panel, 105.0, 50.0, 5);
    drag_to(&mut panel, 110.0, 50.0, 10);
    assert_eq!(panel.main_bounds().left, 10);
    lift(&mut panel, 110.0, 50.0, 15);

    finish_settle(&mut panel);
    assert!(panel.is_opened());
}

#[test]
fn cancel_settles_by_position_alone() {
    let mut panel = left_panel();

    press(&mut panel, 100.0, 50.0, 0);
    drag_to(&mut panel, 105.0, 50.0, 5);
    drag_to(&mut panel, 110.0, 50.0, 10);
    panel.on_pointer_event(&PointerEvent::cancel(Point::new(110.0, 50.0), 15));

    finish_settle(&mut panel);
    assert!(panel.is_closed());
}

// ---- capture rules -------------------------------------------------------

#[test]
fn opposite_edge_band_captures_a_left_reveal_panel() {
    let mut panel = padded_panel(Edge::Left);

    // Press inside the right-hand edge band, outside both surfaces.
    press(&mut panel, 190.0, 75.0, 0);
    assert_eq!(panel.state(), PanelState::Closed);

    drag_to(&mut panel, 150.0, 75.0, 16);
    assert_eq!(panel.state(), PanelState::Dragging);
}

#[test]
fn same_side_edge_band_does_not_capture() {
    let mut panel = padded_panel(Edge::Left);

    press(&mut panel, 10.0, 75.0, 0);
    drag_to(&mut panel, 60.0, 75.0, 16);

    assert_eq!(panel.state(), PanelState::Closed);
    assert_eq!(panel.main_bounds(), panel.geometry().main_closed);
}

#[test]
fn drag_lock_blocks_gestures_but_not_programmatic_control() {
    let mut panel = left_panel();
    panel.set_lock_drag(true);

    press(&mut panel, 100.0, 50.0, 0);
    drag_to(&mut panel, 180.0, 50.0, 16);
    lift(&mut panel, 180.0, 50.0, 32);
    finish_settle(&mut panel);

    assert!(panel.is_closed());
    assert_eq!(panel.main_bounds(), panel.geometry().main_closed);

    panel.open(false);
    assert!(panel.is_opened());
}

// ---- interception --------------------------------------------------------

#[test]
fn small_movement_on_the_main_surface_is_not_intercepted() {
    let mut panel = left_panel();

    let down = PointerEvent::down(Point::new(100.0, 50.0), 0);
    assert!(!panel.on_intercept_pointer_event(&down));
    let nudge = PointerEvent::moved(Point::new(103.0, 50.0), 16);
    assert!(!panel.on_intercept_pointer_event(&nudge));
}

#[test]
fn settling_panel_intercepts_gestures_outside_the_main_surface() {
    let mut panel = padded_panel(Edge::Left);
    panel.open(true);

    let down = PointerEvent::down(Point::new(10.0, 75.0), 0);
    assert!(panel.on_intercept_pointer_event(&down));
}

#[test]
fn disallow_latch_survives_a_return_towards_rest() {
    let mut panel = build_panel(
        PanelConfig::new()
            .with_drag_edge(Edge::Left)
            .with_min_dist_request_disallow_parent(Dp(10.0)),
    );
    let decisions = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&decisions);
    panel.set_disallow_intercept_hook(Rc::new(move |disallow| {
        recorded.borrow_mut().push(disallow)
    }));

    press(&mut panel, 100.0, 50.0, 0);
    drag_to(&mut panel, 105.0, 50.0, 16);
    drag_to(&mut panel, 115.0, 50.0, 32);
    drag_to(&mut panel, 125.0, 50.0, 48);
    // Pointer doubles back to almost where it started.
    drag_to(&mut panel, 102.0, 50.0, 64);

    assert_eq!(*decisions.borrow(), vec![false, false, true, true]);
}

// ---- abort ---------------------------------------------------------------

#[test]
fn abort_halts_the_slide_and_suppresses_notifications() {
    let mut panel = left_panel();
    let states = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&states);
    panel.set_drag_state_hook(Rc::new(move |state| recorded.borrow_mut().push(state)));

    panel.open(true);
    panel.on_frame(0);
    panel.on_frame(100_000_000);
    let partway = panel.main_bounds().left;
    assert!(partway > 0 && partway < 100);

    panel.abort();
    panel.abort();

    // The surface rests where the abort left it and no further transition
    // was published.
    assert_eq!(panel.main_bounds().left, partway);
    assert_eq!(*states.borrow(), vec![PanelState::Opening]);

    // Ticking after the abort moves nothing.
    panel.on_frame(400_000_000);
    assert_eq!(panel.main_bounds().left, partway);

    // The next programmatic snap takes over cleanly.
    panel.close(false);
    assert!(panel.is_closed());
    assert_eq!(panel.main_bounds(), panel.geometry().main_closed);
}

// ---- binder --------------------------------------------------------------

#[test]
fn binder_restores_saved_state_on_rebind() {
    let binder = PanelBinder::new();
    let mut panel = left_panel();

    binder.bind(&mut panel, "row-1");
    assert!(panel.is_closed());

    binder.open_panel(&mut panel, "row-1");
    finish_settle(&mut panel);
    assert!(panel.is_opened());

    // Recycle the panel for another row, then bring row 1 back.
    binder.bind(&mut panel, "row-2");
    assert!(panel.is_closed());
    binder.bind(&mut panel, "row-1");
    assert!(panel.is_opened());
}

#[test]
fn binder_open_only_one_marks_other_rows_closed() {
    let binder = PanelBinder::new();
    binder.set_open_only_one(true);
    let mut panel = left_panel();

    binder.bind(&mut panel, "row-2");
    binder.open_panel(&mut panel, "row-2");
    finish_settle(&mut panel);
    assert_eq!(binder.saved_state("row-2"), PanelState::Open);

    binder.bind(&mut panel, "row-1");
    binder.open_panel(&mut panel, "row-1");
    finish_settle(&mut panel);

    assert_eq!(binder.saved_state("row-1"), PanelState::Open);
    assert_eq!(binder.saved_state("row-2"), PanelState::Closed);
}

#[test]
fn binder_applies_the_lock_on_bind() {
    let binder = PanelBinder::new();
    let mut panel = left_panel();

    binder.lock("row-1");
    binder.bind(&mut panel, "row-1");
    assert!(panel.is_drag_locked());

    binder.unlock("row-1");
    binder.bind(&mut panel, "row-1");
    assert!(!panel.is_drag_locked());
}
