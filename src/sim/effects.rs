//! Particle bursts
//!
//! Explosions, empty-space pulses and the game-over blast. Everything here
//! only appends to the particle list.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::particle::Particle;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// CSS `rgba(...)` string with the given alpha
    pub fn css(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha.clamp(0.0, 1.0))
    }
}

pub const GOLD: Rgb = Rgb(212, 175, 55);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 68, 68);
pub const GREEN: Rgb = Rgb(76, 175, 80);
pub const PURPLE: Rgb = Rgb(200, 160, 255);

/// Spark colors used when an explosion is requested in gold
pub const PALETTE: [Rgb; 5] = [GOLD, WHITE, RED, GREEN, PURPLE];

/// Burst `count` sparks at a point.
///
/// Gold bursts are multicolored: each spark takes a random palette color.
pub fn explode<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    at: Vec2,
    color: Rgb,
    count: u32,
) {
    particles.reserve(count as usize);
    for _ in 0..count {
        let spark_color = if color == GOLD {
            PALETTE[rng.random_range(0..PALETTE.len())]
        } else {
            color
        };
        particles.push(Particle::spark(at, spark_color, rng));
    }
}

/// Feedback for a tap that hit nothing: a white ring and a few white sparks
pub fn empty_space<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    at: Vec2,
    sparks: u32,
) {
    particles.push(Particle::pulse(at, WHITE));
    explode(particles, rng, at, WHITE, sparks);
}
