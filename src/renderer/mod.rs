//! Rendering module
//!
//! The scene is drawn through the `Surface` trait; the browser backs it with
//! a Canvas2D context, tests with a recording surface.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use scene::draw_frame;
pub use surface::{Glow, GradientStop, Paint, RadialGradient, Surface};
