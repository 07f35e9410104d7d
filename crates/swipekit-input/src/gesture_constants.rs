//! Shared gesture constants for consistent pointer handling.
//!
//! Distance values are in density-independent units and are converted to
//! pixels with the panel's `Density` at construction time.

/// Touch slop in dp.
///
/// A pointer that stays within this distance of its press position is still
/// a potential tap; crossing it commits the gesture to a drag. 8 dp matches
/// the common platform convention for touch slop.
pub const TOUCH_SLOP: f32 = 8.0;

/// Width of the edge band, in dp, that qualifies a press as an
/// edge-originated drag start.
pub const EDGE_SIZE: f32 = 20.0;

/// Cap applied to tracked fling velocities, in px/s.
///
/// Guards the settle decision against wild velocity estimates produced by
/// erratic final samples.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
