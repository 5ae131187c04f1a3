//! Time subsystem.
//!
//! Frame timing for a single render loop: measure the elapsed delta once per
//! iteration, then sleep out whatever is left of the frame budget. One
//! `FrameClock` per loop; nothing here touches the windowing layer.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
