//! Surface that records draw calls instead of drawing
//!
//! Used by tests and the native headless runner.

use glam::Vec2;

use super::surface::{Glow, Paint, RadialGradient, Surface};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    GradientCircle {
        center: Vec2,
        radius: f32,
        gradient: RadialGradient,
        glow: Option<Glow>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
        glow: Option<Glow>,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
        line_width: f32,
    },
    Glyph {
        text: String,
        center: Vec2,
        size_px: f32,
        paint: Paint,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    /// Calls since the last `clear`
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn count_gradient_circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::GradientCircle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_gradient_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        gradient: &RadialGradient,
        glow: Option<Glow>,
    ) {
        self.commands.push(DrawCommand::GradientCircle {
            center,
            radius,
            gradient: gradient.clone(),
            glow,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint, glow: Option<Glow>) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint,
            glow,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, paint: Paint, line_width: f32) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            paint,
            line_width,
        });
    }

    fn glyph(&mut self, text: &str, center: Vec2, size_px: f32, paint: Paint) {
        self.commands.push(DrawCommand::Glyph {
            text: text.to_string(),
            center,
            size_px,
            paint,
        });
    }
}
