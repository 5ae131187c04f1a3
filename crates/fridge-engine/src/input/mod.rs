//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. The
//! window runtime translates platform events into `InputEvent`s. Scope is
//! keyboard-only; this engine's applications never consult the pointer.

mod frame;
mod snapshot;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use snapshot::DirectionSnapshot;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
