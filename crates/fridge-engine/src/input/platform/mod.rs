//! Platform event translation. Internal to the runtime.

pub(crate) mod winit;
