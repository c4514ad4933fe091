//! Short-lived visual particles
//!
//! Particles never affect gameplay. They fade out and are dropped once their
//! alpha reaches zero.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::effects::Rgb;
use crate::consts::*;
use crate::unit_from_angle;

/// Kind-specific particle state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Falling spark that shrinks as it fades
    Spark { vel: Vec2, size: f32 },
    /// Expanding stroked ring. `max_radius` is cosmetic only.
    Pulse { radius: f32, max_radius: f32 },
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub color: Rgb,
    /// 1.0 (or 0.5 for pulses) down to 0.0
    pub alpha: f32,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn spark<R: Rng + ?Sized>(pos: Vec2, color: Rgb, rng: &mut R) -> Self {
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        let speed = rng.random::<f32>() * (SPARK_SPEED_MAX - SPARK_SPEED_MIN) + SPARK_SPEED_MIN;
        let size = rng.random::<f32>() * (SPARK_SIZE_MAX - SPARK_SIZE_MIN) + SPARK_SIZE_MIN;
        Self {
            pos,
            color,
            alpha: 1.0,
            kind: ParticleKind::Spark {
                vel: unit_from_angle(angle) * speed,
                size,
            },
        }
    }

    pub fn pulse(pos: Vec2, color: Rgb) -> Self {
        Self {
            pos,
            color,
            alpha: PULSE_START_ALPHA,
            kind: ParticleKind::Pulse {
                radius: 0.0,
                max_radius: PULSE_MAX_RADIUS,
            },
        }
    }

    pub fn update(&mut self) {
        match &mut self.kind {
            ParticleKind::Spark { vel, size } => {
                self.pos += *vel;
                vel.y += SPARK_GRAVITY;
                *size *= SPARK_SHRINK;
                self.alpha -= SPARK_FADE;
            }
            ParticleKind::Pulse { radius, .. } => {
                *radius += PULSE_GROWTH;
                self.alpha -= PULSE_FADE;
            }
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::effects::WHITE;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spark_falls_and_fades() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            color: WHITE,
            alpha: 1.0,
            kind: ParticleKind::Spark {
                vel: Vec2::new(1.0, 0.0),
                size: 4.0,
            },
        };
        p.update();
        assert_eq!(p.pos, Vec2::new(1.0, 0.0));
        assert!((p.alpha - 0.98).abs() < 1e-6);
        match p.kind {
            ParticleKind::Spark { vel, size } => {
                assert!((vel.y - 0.15).abs() < 1e-6);
                assert!((size - 3.84).abs() < 1e-5);
            }
            _ => panic!("expected spark"),
        }
    }

    #[test]
    fn test_spark_lives_fifty_ticks() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut p = Particle::spark(Vec2::ZERO, WHITE, &mut rng);
        let mut ticks = 0;
        while p.is_alive() {
            p.update();
            ticks += 1;
        }
        assert!((49..=51).contains(&ticks), "lived {} ticks", ticks);
    }

    #[test]
    fn test_pulse_expands_linearly() {
        let mut p = Particle::pulse(Vec2::new(5.0, 5.0), WHITE);
        assert_eq!(p.alpha, 0.5);
        p.update();
        p.update();
        assert_eq!(p.pos, Vec2::new(5.0, 5.0));
        match p.kind {
            ParticleKind::Pulse { radius, .. } => assert_eq!(radius, 20.0),
            _ => panic!("expected pulse"),
        }
        assert!((p.alpha - 0.44).abs() < 1e-6);
    }

    #[test]
    fn test_pulse_radius_is_not_capped() {
        let mut p = Particle::pulse(Vec2::ZERO, WHITE);
        for _ in 0..17 {
            p.update();
        }
        match p.kind {
            ParticleKind::Pulse { radius, max_radius } => assert!(radius > max_radius),
            _ => panic!("expected pulse"),
        }
        assert!(!p.is_alive());
    }

    proptest! {
        #[test]
        fn prop_alpha_strictly_decreases(seed in any::<u64>(), pulse in any::<bool>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut p = if pulse {
                Particle::pulse(Vec2::ZERO, WHITE)
            } else {
                Particle::spark(Vec2::ZERO, WHITE, &mut rng)
            };
            while p.is_alive() {
                let before = p.alpha;
                p.update();
                prop_assert!(p.alpha < before);
            }
        }
    }
}
