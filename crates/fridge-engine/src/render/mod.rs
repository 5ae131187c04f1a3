//! GPU rendering.
//!
//! One renderer, one job: a single textured quad at a given position.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod sprite;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use sprite::SpriteRenderer;
pub use texture::SpriteTexture;
