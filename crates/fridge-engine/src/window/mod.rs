//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer,
//! the input state, and the frame clock. Single window only.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
