//! Canvas2D surface (browser only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Glow, Paint, RadialGradient, Surface};

const GLYPH_FONT_FAMILY: &str = "Outfit, sans-serif";

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the given CSS pixel size
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn apply_glow(&self, glow: Option<Glow>) {
        if let Some(glow) = glow {
            self.ctx.set_shadow_blur(glow.blur as f64);
            self.ctx.set_shadow_color(&glow.color.css(1.0));
        }
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
    }

    fn try_gradient_circle(
        &self,
        center: Vec2,
        radius: f32,
        gradient: &RadialGradient,
        glow: Option<Glow>,
    ) -> Result<(), JsValue> {
        let fill = self.ctx.create_radial_gradient(
            gradient.focus.x as f64,
            gradient.focus.y as f64,
            0.0,
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
        )?;
        for stop in &gradient.stops {
            fill.add_color_stop(stop.offset, &stop.paint.css())?;
        }

        self.ctx.save();
        self.apply_glow(glow);
        let drawn = self.circle_path(center, radius).map(|_| {
            self.ctx.set_fill_style_canvas_gradient(&fill);
            self.ctx.fill();
        });
        self.ctx.restore();
        drawn
    }

    fn report(result: Result<(), JsValue>, what: &str) {
        if let Err(e) = result {
            log::warn!("Canvas {} failed: {:?}", what, e);
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_gradient_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        gradient: &RadialGradient,
        glow: Option<Glow>,
    ) {
        Self::report(
            self.try_gradient_circle(center, radius, gradient, glow),
            "gradient fill",
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint, glow: Option<Glow>) {
        self.ctx.save();
        self.apply_glow(glow);
        let drawn = self.circle_path(center, radius).map(|_| {
            self.ctx.set_fill_style_str(&paint.css());
            self.ctx.fill();
        });
        self.ctx.restore();
        Self::report(drawn, "fill");
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, paint: Paint, line_width: f32) {
        self.ctx.save();
        let drawn = self.circle_path(center, radius).map(|_| {
            self.ctx.set_stroke_style_str(&paint.css());
            self.ctx.set_line_width(line_width as f64);
            self.ctx.stroke();
        });
        self.ctx.restore();
        Self::report(drawn, "stroke");
    }

    fn glyph(&mut self, text: &str, center: Vec2, size_px: f32, paint: Paint) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&paint.css());
        self.ctx
            .set_font(&format!("bold {}px {}", size_px, GLYPH_FONT_FAMILY));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let drawn = self
            .ctx
            .fill_text(text, center.x as f64, center.y as f64);
        self.ctx.restore();
        Self::report(drawn, "text");
    }
}
