//! Pointer events, velocity tracking, and gesture disambiguation for Swipekit

mod gesture_constants;
mod interception;
mod pointer;
mod velocity;

pub use gesture_constants::*;
pub use interception::*;
pub use pointer::*;
pub use velocity::*;
