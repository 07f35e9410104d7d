//! Frame-driven position tween used for settle transitions.

use crate::AnimationSpec;

/// Interpolated move of an integer position towards a target.
///
/// The first `tick` latches the animation's start time; each subsequent tick
/// reports the eased position for that frame. A zero-distance slide is
/// finished from the outset.
#[derive(Clone, Debug)]
pub struct SlideAnimation {
    start: (i32, i32),
    target: (i32, i32),
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl SlideAnimation {
    pub fn new(start: (i32, i32), target: (i32, i32), spec: AnimationSpec) -> Self {
        Self {
            start,
            target,
            spec,
            start_time_nanos: None,
            finished: start == target,
        }
    }

    pub fn target(&self) -> (i32, i32) {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Stops the animation where it is; further ticks keep reporting the
    /// target but the caller is expected to drop the animation.
    pub fn cancel(&mut self) {
        self.finished = true;
    }

    /// Advances to the given frame time and returns the position for it.
    pub fn tick(&mut self, frame_time_nanos: u64) -> (i32, i32) {
        if self.finished {
            return self.target;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed = frame_time_nanos.saturating_sub(start_time);
        let duration = (self.spec.duration_millis * 1_000_000).max(1);
        let linear = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);

        if linear >= 1.0 {
            self.finished = true;
            return self.target;
        }

        let progress = self.spec.easing.transform(linear);
        (
            lerp_i32(self.start.0, self.target.0, progress),
            lerp_i32(self.start.1, self.target.1, progress),
        )
    }
}

fn lerp_i32(start: i32, end: i32, fraction: f32) -> i32 {
    start + ((end - start) as f32 * fraction).round() as i32
}
