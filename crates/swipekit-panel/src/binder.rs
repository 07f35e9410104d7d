//! Saved-state registry for panels hosted in recycling lists.
//!
//! A recycling list reuses a handful of panel instances for many rows, so
//! the open/closed state must live outside the panels, keyed by a stable row
//! id. The binder restores the saved state on every rebind (snap, no
//! animation), records live transitions through the panel's raw drag-state
//! hook, and can keep at most one row open at a time.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

use crate::panel::SwipePanel;
use crate::state::PanelState;

#[derive(Default)]
struct BinderInner {
    /// Saved state per row key, in first-bind order.
    states: IndexMap<String, PanelState>,
    /// Keys whose panels must stay drag-locked.
    locked: IndexSet<String>,
    /// Keep at most one row open at a time.
    open_only_one: bool,
}

/// Shared panel-state registry.
///
/// Clones share the same registry, so the hook installed into each bound
/// panel and the host-side handle observe one set of states.
#[derive(Clone, Default)]
pub struct PanelBinder {
    inner: Rc<RefCell<BinderInner>>,
}

impl PanelBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most one row open: whenever a bound panel starts opening or
    /// dragging, every other key's saved state is marked closed, so the
    /// other rows close on their next bind.
    pub fn set_open_only_one(&self, enabled: bool) {
        self.inner.borrow_mut().open_only_one = enabled;
    }

    /// Binds a (possibly recycled) panel to a row key: installs the
    /// recording hook, applies the key's drag lock, and restores the saved
    /// state without animation. The panel must already have its surfaces
    /// registered.
    pub fn bind(&self, panel: &mut SwipePanel, key: &str) {
        let key = key.to_string();
        {
            let mut inner = self.inner.borrow_mut();
            inner
                .states
                .entry(key.clone())
                .or_insert(PanelState::Closed);
        }

        let registry = Rc::clone(&self.inner);
        let hook_key = key.clone();
        panel.set_drag_state_hook(Rc::new(move |state| {
            let mut inner = registry.borrow_mut();
            inner.states.insert(hook_key.clone(), state);
            if inner.open_only_one
                && matches!(state, PanelState::Opening | PanelState::Dragging)
            {
                for (other, saved) in inner.states.iter_mut() {
                    if other != &hook_key {
                        *saved = PanelState::Closed;
                    }
                }
            }
        }));

        panel.set_lock_drag(self.is_locked(&key));
        if self.is_open(&key) {
            panel.open(false);
        } else {
            panel.close(false);
        }
    }

    /// Opens the bound panel with animation and records the key as open.
    pub fn open_panel(&self, panel: &mut SwipePanel, key: &str) {
        self.inner
            .borrow_mut()
            .states
            .insert(key.to_string(), PanelState::Open);
        panel.open(true);
    }

    /// Closes the bound panel with animation and records the key as closed.
    pub fn close_panel(&self, panel: &mut SwipePanel, key: &str) {
        self.inner
            .borrow_mut()
            .states
            .insert(key.to_string(), PanelState::Closed);
        panel.close(true);
    }

    /// Drag-locks the key; applied to its panel at the next bind.
    pub fn lock(&self, key: &str) {
        self.inner.borrow_mut().locked.insert(key.to_string());
    }

    pub fn unlock(&self, key: &str) {
        self.inner.borrow_mut().locked.shift_remove(key);
    }

    pub fn is_locked(&self, key: &str) -> bool {
        self.inner.borrow().locked.contains(key)
    }

    /// The key's saved state; unknown keys are closed.
    pub fn saved_state(&self, key: &str) -> PanelState {
        self.inner
            .borrow()
            .states
            .get(key)
            .copied()
            .unwrap_or(PanelState::Closed)
    }

    fn is_open(&self, key: &str) -> bool {
        matches!(
            self.saved_state(key),
            PanelState::Open | PanelState::Opening
        )
    }
}
