//! Discrete panel state.

use std::fmt;

/// The panel's position in its open/close lifecycle.
///
/// `Closed` and `Open` are resting states; the rest are transient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Closing,
    Open,
    Opening,
    Dragging,
}

impl PanelState {
    /// Stable diagnostic name for logs and state registries.
    pub fn as_str(self) -> &'static str {
        match self {
            PanelState::Closed => "closed",
            PanelState::Closing => "closing",
            PanelState::Open => "open",
            PanelState::Opening => "opening",
            PanelState::Dragging => "dragging",
        }
    }

    /// True for the two states a panel can rest in.
    #[inline]
    pub fn is_resting(self) -> bool {
        matches!(self, PanelState::Closed | PanelState::Open)
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
