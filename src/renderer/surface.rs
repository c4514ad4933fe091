//! Drawing primitives the scene needs from a host surface

use glam::Vec2;

use crate::sim::Rgb;

/// Solid color with alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub alpha: f32,
}

impl Paint {
    pub fn new(color: Rgb, alpha: f32) -> Self {
        Self { color, alpha }
    }

    pub fn opaque(color: Rgb) -> Self {
        Self::new(color, 1.0)
    }

    pub fn css(&self) -> String {
        self.color.css(self.alpha)
    }
}

/// Soft blur drawn behind a filled shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Rgb,
    pub blur: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// 0.0 at the focus, 1.0 at the rim
    pub offset: f32,
    pub paint: Paint,
}

/// Radial gradient from a focus point out to the rim of the filled circle
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub focus: Vec2,
    pub stops: Vec<GradientStop>,
}

/// A drawable surface of known size
pub trait Surface {
    /// Current size in pixels (width, height)
    fn size(&self) -> (f32, f32);

    fn clear(&mut self);

    fn fill_gradient_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        gradient: &RadialGradient,
        glow: Option<Glow>,
    );

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint, glow: Option<Glow>);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, paint: Paint, line_width: f32);

    /// Bold text centered on `center`
    fn glyph(&mut self, text: &str, center: Vec2, size_px: f32, paint: Paint);
}
