//! Scene draw pass
//!
//! Particles first, orbs on top. Dead orbs and faded particles are skipped;
//! they are compacted away right after this pass.

use glam::Vec2;

use super::surface::{Glow, GradientStop, Paint, RadialGradient, Surface};
use crate::sim::{GameState, Orb, OrbKind, Particle, ParticleKind, WHITE};

const SPARK_GLOW: f32 = 10.0;
const ORB_GLOW: f32 = 20.0;
const PULSE_LINE_WIDTH: f32 = 2.0;
/// Highlight offset of the gradient focus, as a fraction of the radius
const HIGHLIGHT_OFFSET: f32 = 0.3;
const HAZARD_GLYPH: &str = "!";
const HAZARD_GLYPH_PX: f32 = 20.0;
const HAZARD_GLYPH_DROP: f32 = 2.0;

/// Draw the whole field
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    surface.clear();

    for particle in state.particles.iter().filter(|p| p.is_alive()) {
        draw_particle(particle, surface);
    }

    for orb in state.live_orbs() {
        draw_orb(orb, surface);
    }
}

fn draw_particle(particle: &Particle, surface: &mut dyn Surface) {
    let paint = Paint::new(particle.color, particle.alpha);
    match particle.kind {
        ParticleKind::Spark { size, .. } => {
            let glow = Glow {
                color: particle.color,
                blur: SPARK_GLOW,
            };
            surface.fill_circle(particle.pos, size, paint, Some(glow));
        }
        ParticleKind::Pulse { radius, .. } => {
            surface.stroke_circle(particle.pos, radius, paint, PULSE_LINE_WIDTH);
        }
    }
}

/// Shaded disc: white highlight up and to the left, fading to a
/// translucent rim
pub fn orb_gradient(orb: &Orb) -> RadialGradient {
    let r = orb.radius();
    let color = orb.color();
    RadialGradient {
        focus: orb.pos - Vec2::splat(r * HIGHLIGHT_OFFSET),
        stops: vec![
            GradientStop {
                offset: 0.0,
                paint: Paint::opaque(WHITE),
            },
            GradientStop {
                offset: 0.3,
                paint: Paint::opaque(color),
            },
            GradientStop {
                offset: 1.0,
                paint: Paint::new(color, 0.4),
            },
        ],
    }
}

fn draw_orb(orb: &Orb, surface: &mut dyn Surface) {
    let glow = Glow {
        color: orb.color(),
        blur: ORB_GLOW,
    };
    surface.fill_gradient_circle(orb.pos, orb.radius(), &orb_gradient(orb), Some(glow));

    if orb.kind == OrbKind::Hazard {
        let at = orb.pos + Vec2::new(0.0, HAZARD_GLYPH_DROP);
        surface.glyph(HAZARD_GLYPH, at, HAZARD_GLYPH_PX, Paint::opaque(WHITE));
    }
}
