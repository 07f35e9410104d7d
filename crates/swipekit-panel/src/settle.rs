//! Settle decision on pointer release.
//!
//! A qualifying fling towards reveal or hide wins outright; otherwise the
//! main surface settles to whichever side of the halfway pivot it rests on.
//! Reveal direction mirrors per edge, so the decision is four explicit arms.

use swipekit_graphics::IntRect;
use swipekit_input::Velocity;

use crate::bounds::{halfway_pivot_horizontal, halfway_pivot_vertical, PanelBounds};
use crate::config::Edge;

/// Where the main surface should come to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleTarget {
    Open,
    Close,
}

/// Decides open vs. close for a release.
///
/// `velocity` is in dp/s (resolution-independent); `min_fling_velocity` is
/// the configured dp/s threshold; `main` is the main surface's bounds at
/// release time.
pub fn decide_settle(
    edge: Edge,
    velocity: Velocity,
    min_fling_velocity: i32,
    main: IntRect,
    bounds: &PanelBounds,
) -> SettleTarget {
    let threshold = min_fling_velocity as f32;
    let vel_right_exceeded = velocity.x >= threshold;
    let vel_left_exceeded = velocity.x <= -threshold;
    let vel_up_exceeded = velocity.y <= -threshold;
    let vel_down_exceeded = velocity.y >= threshold;

    match edge {
        Edge::Right => {
            if vel_right_exceeded {
                SettleTarget::Close
            } else if vel_left_exceeded {
                SettleTarget::Open
            } else if main.right < halfway_pivot_horizontal(edge, bounds) {
                SettleTarget::Open
            } else {
                SettleTarget::Close
            }
        }
        Edge::Left => {
            if vel_right_exceeded {
                SettleTarget::Open
            } else if vel_left_exceeded {
                SettleTarget::Close
            } else if main.left < halfway_pivot_horizontal(edge, bounds) {
                SettleTarget::Close
            } else {
                SettleTarget::Open
            }
        }
        Edge::Top => {
            if vel_up_exceeded {
                SettleTarget::Close
            } else if vel_down_exceeded {
                SettleTarget::Open
            } else if main.top < halfway_pivot_vertical(edge, bounds) {
                SettleTarget::Close
            } else {
                SettleTarget::Open
            }
        }
        Edge::Bottom => {
            if vel_up_exceeded {
                SettleTarget::Open
            } else if vel_down_exceeded {
                SettleTarget::Close
            } else if main.bottom < halfway_pivot_vertical(edge, bounds) {
                SettleTarget::Open
            } else {
                SettleTarget::Close
            }
        }
    }
}
