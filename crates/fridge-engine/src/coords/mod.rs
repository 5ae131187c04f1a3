//! Coordinate types.
//!
//! All CPU-side geometry is in logical pixels, top-left origin, +Y down.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
