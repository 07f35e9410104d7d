//! Measurement and closed-state placement of the two surfaces.
//!
//! The host toolkit measures each surface and hands the engine its desired
//! size plus fill policy; the engine computes the panel's desired size and
//! assigns closed-state bounds once per layout pass.

use swipekit_graphics::{IntInsets, IntRect, IntSize};

use crate::config::{DragMode, Edge};

/// Sizing mode requested by the host container, per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeasureSpec {
    /// The panel must be exactly this large.
    Exactly(i32),
    /// The panel may be at most this large.
    AtMost(i32),
    /// The panel picks its own size.
    Unspecified,
}

/// Whether a surface stretches to the panel's extent on an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SizePolicy {
    pub fill_width: bool,
    pub fill_height: bool,
}

impl SizePolicy {
    pub const FIXED: SizePolicy = SizePolicy {
        fill_width: false,
        fill_height: false,
    };

    pub const FILL: SizePolicy = SizePolicy {
        fill_width: true,
        fill_height: true,
    };
}

/// One child surface: its measured size from the host, fill policy, and the
/// bounds the engine currently places it at.
#[derive(Clone, Copy, Debug)]
pub struct Surface {
    desired: IntSize,
    policy: SizePolicy,
    measured: IntSize,
    bounds: IntRect,
}

impl Surface {
    pub fn new(desired: IntSize) -> Self {
        Self {
            desired,
            policy: SizePolicy::FIXED,
            measured: desired,
            bounds: IntRect::ZERO,
        }
    }

    pub fn with_policy(mut self, policy: SizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The surface's current placement, updated by layout, drags, and
    /// transitions.
    pub fn bounds(&self) -> IntRect {
        self.bounds
    }

    pub fn measured(&self) -> IntSize {
        self.measured
    }

    pub(crate) fn set_bounds(&mut self, bounds: IntRect) {
        self.bounds = bounds;
    }

    pub(crate) fn offset_bounds(&mut self, dx: i32, dy: i32) {
        self.bounds = self.bounds.offset(dx, dy);
    }
}

/// The panel's two children. Index order matters: the secondary surface sits
/// underneath and is declared first, the main surface on top second.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SurfacePair {
    pub secondary: Surface,
    pub main: Surface,
}

/// Computes the panel's desired size from its surfaces and the host's specs.
///
/// The largest surface drives the size; fill surfaces adopt it, padding is
/// added on top, and the host's sizing mode caps the result against the
/// largest-surface extent.
pub(crate) fn measure_panel(
    surfaces: &mut SurfacePair,
    padding: IntInsets,
    width_spec: MeasureSpec,
    height_spec: MeasureSpec,
) -> IntSize {
    let mut desired_width = 0;
    let mut desired_height = 0;

    for surface in [&mut surfaces.secondary, &mut surfaces.main] {
        surface.measured = surface.desired;
        desired_width = desired_width.max(surface.measured.width);
        desired_height = desired_height.max(surface.measured.height);
    }

    // The largest surface's extent doubles as the reference size the host
    // modes cap against.
    let reference_width = desired_width;
    let reference_height = desired_height;

    for surface in [&mut surfaces.secondary, &mut surfaces.main] {
        if surface.policy.fill_width {
            surface.measured.width = reference_width;
        }
        if surface.policy.fill_height {
            surface.measured.height = reference_height;
        }
        desired_width = desired_width.max(surface.measured.width);
        desired_height = desired_height.max(surface.measured.height);
    }

    desired_width += padding.horizontal_sum();
    desired_height += padding.vertical_sum();

    desired_width = match width_spec {
        MeasureSpec::Exactly(_) => reference_width,
        MeasureSpec::AtMost(_) => desired_width.min(reference_width),
        MeasureSpec::Unspecified => desired_width,
    };
    desired_height = match height_spec {
        MeasureSpec::Exactly(_) => reference_height,
        MeasureSpec::AtMost(_) => desired_height.min(reference_height),
        MeasureSpec::Unspecified => desired_height,
    };

    IntSize::new(desired_width, desired_height)
}

/// Assigns closed-state bounds to both surfaces for the given container
/// size, then applies the SameLevel off-screen offset to the secondary
/// surface so it starts hidden flush behind the main one.
pub(crate) fn place_surfaces(
    surfaces: &mut SurfacePair,
    container: IntSize,
    padding: IntInsets,
    edge: Edge,
    mode: DragMode,
) {
    let min_left = padding.left;
    let max_right = (container.width - padding.right).max(0);
    let min_top = padding.top;
    let max_bottom = (container.height - padding.bottom).max(0);

    for surface in [&mut surfaces.secondary, &mut surfaces.main] {
        let mut width = surface.measured.width;
        let mut height = surface.measured.height;
        if surface.policy.fill_width {
            width = max_right - min_left;
        }
        if surface.policy.fill_height {
            height = max_bottom - min_top;
        }

        let bounds = match edge {
            Edge::Right => IntRect::new(
                (container.width - width - padding.right).max(min_left),
                padding.top.min(max_bottom),
                (container.width - padding.right).max(min_left),
                (height + padding.top).min(max_bottom),
            ),
            Edge::Left | Edge::Top => IntRect::new(
                padding.left.min(max_right),
                padding.top.min(max_bottom),
                (width + padding.left).min(max_right),
                (height + padding.top).min(max_bottom),
            ),
            Edge::Bottom => IntRect::new(
                padding.left.min(max_right),
                (container.height - height - padding.bottom).max(min_top),
                (width + padding.left).min(max_right),
                (container.height - padding.bottom).max(min_top),
            ),
        };
        surface.set_bounds(bounds);
    }

    if mode == DragMode::SameLevel {
        let sec = surfaces.secondary.bounds().size();
        match edge {
            Edge::Left => surfaces.secondary.offset_bounds(-sec.width, 0),
            Edge::Right => surfaces.secondary.offset_bounds(sec.width, 0),
            Edge::Top => surfaces.secondary.offset_bounds(0, -sec.height),
            Edge::Bottom => surfaces.secondary.offset_bounds(0, sec.height),
        }
    }
}
