//! Scene state.
//!
//! The mutable world of this engine is a single sprite position; the update
//! step is pure arithmetic and never fails.

mod state;

pub use state::SceneState;
