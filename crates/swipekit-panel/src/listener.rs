//! Listener registrations.
//!
//! Two independent channels: the public [`SwipeListener`] for hosts that
//! care about the panel's visible motion, and a crate-private drag-state
//! hook reserved for the binder registry, which needs every transition
//! including transient ones.

use std::rc::Rc;

use crate::panel::SwipePanel;
use crate::state::PanelState;

/// Notifications about a panel's visible motion.
///
/// All methods default to no-ops so partial subscribers only override what
/// they need. Slide/open/closed notifications fire for drags and animated
/// transitions only; unanimated snaps are silent by contract.
pub trait SwipeListener {
    /// The main surface reached its fully closed position.
    fn on_closed(&self, panel: &SwipePanel) {
        let _ = panel;
    }

    /// The main surface reached its fully opened position.
    fn on_opened(&self, panel: &SwipePanel) {
        let _ = panel;
    }

    /// The main surface moved; `slide_offset` is 0.0 at closed and 1.0 at
    /// fully opened, unclamped beyond that range.
    fn on_slide(&self, panel: &SwipePanel, slide_offset: f32) {
        let _ = (panel, slide_offset);
    }
}

/// Raw state-transition hook. Fires on every transition, transient states
/// included, independently of the public listener.
pub(crate) type DragStateHook = Rc<dyn Fn(PanelState)>;
