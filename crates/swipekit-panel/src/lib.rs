//! Swipe-reveal panel widget engine for Swipekit
//!
//! A container with two child surfaces: a main surface that is always
//! visible when closed and a secondary surface revealed by dragging the main
//! one aside along a configured edge. This crate is the interaction engine —
//! it turns pointer events into clamped positions, lifecycle states, and
//! settle decisions; rendering belongs to the host toolkit.

mod binder;
mod bounds;
mod config;
mod drag_helper;
mod layout;
mod listener;
mod panel;
mod settle;
mod state;

pub use binder::PanelBinder;
pub use bounds::{
    clamp_position, dist_to_closest_pivot, halfway_pivot_horizontal, halfway_pivot_vertical,
    slide_offset, PanelBounds,
};
pub use config::{
    DragMode, Edge, PanelConfig, DEFAULT_MIN_DIST_REQUEST_DISALLOW_PARENT,
    DEFAULT_MIN_FLING_VELOCITY,
};
pub use layout::{MeasureSpec, SizePolicy, Surface};
pub use listener::SwipeListener;
pub use panel::SwipePanel;
pub use settle::{decide_settle, SettleTarget};
pub use state::PanelState;

pub mod prelude {
    pub use crate::config::{DragMode, Edge, PanelConfig};
    pub use crate::layout::{MeasureSpec, SizePolicy, Surface};
    pub use crate::listener::SwipeListener;
    pub use crate::panel::SwipePanel;
    pub use crate::state::PanelState;
}
