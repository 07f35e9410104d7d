//! Pointer velocity tracking for fling detection.
//!
//! Uses the impulse strategy: velocity is recovered from the kinetic energy
//! the gesture's recent samples would impart to a unit mass. Samples older
//! than a short horizon, or separated by a pause, are ignored.

use smallvec::SmallVec;
use swipekit_graphics::Point;

/// Number of samples kept in the window.
const SAMPLE_WINDOW: usize = 20;

/// Only samples within the last 100 ms contribute to the estimate.
const HORIZON_MS: i64 = 100;

/// A gap this long between adjacent samples means the pointer paused;
/// anything before the pause is discarded.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: i64,
    x: f32,
    y: f32,
}

/// Per-axis pointer velocity in px/s.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };
}

/// Two-axis pointer velocity tracker.
///
/// Feed it every sample of the active gesture and read the estimate on
/// release:
///
/// ```ignore
/// tracker.add_sample(time_ms, position);
/// // ... more samples ...
/// let velocity = tracker.velocity_capped(MAX_FLING_VELOCITY);
/// ```
#[derive(Clone, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; SAMPLE_WINDOW]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer sample. The window keeps the most recent
    /// `SAMPLE_WINDOW` entries.
    pub fn add_sample(&mut self, time_ms: i64, position: Point) {
        if self.samples.len() == SAMPLE_WINDOW {
            self.samples.remove(0);
        }
        self.samples.push(Sample {
            time_ms,
            x: position.x,
            y: position.y,
        });
    }

    /// Discards all samples, ending the tracked gesture.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Estimated velocity in px/s. Zero when fewer than two usable samples
    /// remain inside the horizon.
    pub fn velocity(&self) -> Velocity {
        let window = self.recent_window();
        if window.len() < 2 {
            return Velocity::ZERO;
        }

        Velocity {
            x: impulse_velocity(window, |s| s.x),
            y: impulse_velocity(window, |s| s.y),
        }
    }

    /// Estimated velocity with each axis clamped to `[-max, max]`.
    pub fn velocity_capped(&self, max: f32) -> Velocity {
        if !max.is_finite() || max <= 0.0 {
            return Velocity::ZERO;
        }
        let raw = self.velocity();
        Velocity {
            x: raw.x.clamp(-max, max),
            y: raw.y.clamp(-max, max),
        }
    }

    /// The chronological run of samples ending at the newest one that sits
    /// inside the horizon and contains no pause-length gap.
    fn recent_window(&self) -> &[Sample] {
        let Some(newest) = self.samples.last() else {
            return &[];
        };

        let mut start = self.samples.len() - 1;
        while start > 0 {
            let candidate = &self.samples[start - 1];
            let age = newest.time_ms - candidate.time_ms;
            let gap = self.samples[start].time_ms - candidate.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            start -= 1;
        }

        &self.samples[start..]
    }
}

/// Impulse-strategy velocity over a chronological sample run, in px/s.
fn impulse_velocity(window: &[Sample], axis: impl Fn(&Sample) -> f32) -> f32 {
    let mut work = 0.0f32;

    for i in 1..window.len() {
        let dt = (window[i].time_ms - window[i - 1].time_ms) as f32;
        if dt == 0.0 {
            continue;
        }
        let v_prev = kinetic_energy_to_velocity(work);
        let v_curr = (axis(&window[i]) - axis(&window[i - 1])) / dt;
        work += (v_curr - v_prev) * v_curr.abs();
        if i == 1 {
            // The oldest segment only contributes half its energy.
            work *= 0.5;
        }
    }

    // work accumulates in (px/ms)^2 terms; scale the result to px/s.
    kinetic_energy_to_velocity(work) * 1000.0
}

/// E = 0.5 * m * v^2 with unit mass, solved for v with the sign of E.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
