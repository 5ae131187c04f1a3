//! Fridge engine crate.
//!
//! A small fixed-cadence render loop: window + GPU runtime, keyboard input,
//! frame timing, and a single textured-sprite renderer. The application
//! implements [`core::App`] and hands it to [`window::Runtime::run`].

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
