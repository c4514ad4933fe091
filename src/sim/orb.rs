//! Orbs - the tappable entities
//!
//! Orbs drift at constant velocity (no gravity), bounce off the side walls
//! and leave through the top or bottom of the field.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::effects::{GOLD, RED, Rgb};
use super::state::Bounds;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::unit_from_angle;

/// Orb variants. All kind-specific policy lives on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbKind {
    Small,
    Big,
    /// Ends the run when tapped
    Hazard,
    /// Thrown out of a popped big orb; plays like a small orb
    Fragment,
}

/// What a tap on an orb is worth while playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapReward {
    Points(u32),
    /// Points plus this many fragments released at the orb
    Split { points: u32, fragments: u32 },
    GameOver,
}

impl OrbKind {
    /// One uniform draw against the cumulative spawn thresholds
    pub fn roll<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Self {
        let r: f32 = rng.random();
        if r < tuning.hazard_threshold {
            OrbKind::Hazard
        } else if r < tuning.big_threshold {
            OrbKind::Big
        } else {
            OrbKind::Small
        }
    }

    pub fn radius(&self) -> f32 {
        match self {
            OrbKind::Small | OrbKind::Hazard => SMALL_ORB_RADIUS,
            OrbKind::Big => BIG_ORB_RADIUS,
            OrbKind::Fragment => FRAGMENT_ORB_RADIUS,
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            OrbKind::Hazard => RED,
            _ => GOLD,
        }
    }

    pub fn tap_reward(&self, tuning: &Tuning) -> TapReward {
        match self {
            OrbKind::Small | OrbKind::Fragment => TapReward::Points(tuning.small_points),
            OrbKind::Big => TapReward::Split {
                points: tuning.big_points,
                fragments: tuning.fragments,
            },
            OrbKind::Hazard => TapReward::GameOver,
        }
    }

    /// Letting this orb escape off the top ends the run
    pub fn must_be_caught(&self) -> bool {
        !matches!(self, OrbKind::Hazard)
    }
}

/// Where an orb left the field, if it did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Top,
    Bottom,
}

/// An orb entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orb {
    pub kind: OrbKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Terminal; dead orbs are compacted away at the end of the tick
    pub dead: bool,
}

impl Orb {
    /// Orb just below the bottom edge, heading up and sideways
    pub fn spawn_at_bottom<R: Rng + ?Sized>(kind: OrbKind, bounds: Bounds, rng: &mut R) -> Self {
        let x = rng.random::<f32>() * (bounds.width - 2.0 * SPAWN_MARGIN_X) + SPAWN_MARGIN_X;
        let y = bounds.height + SPAWN_BELOW;

        let angle = rng.random::<f32>() * SPAWN_CONE_WIDTH + SPAWN_CONE_START;
        let speed = rng.random::<f32>() * (SPAWN_SPEED_MAX - SPAWN_SPEED_MIN) + SPAWN_SPEED_MIN;
        let vel = unit_from_angle(angle) * speed - Vec2::new(0.0, SPAWN_LIFT);

        Self {
            kind,
            pos: Vec2::new(x, y),
            vel,
            dead: false,
        }
    }

    /// Fragment thrown in a random direction from a popped big orb
    pub fn spawn_from_burst<R: Rng + ?Sized>(at: Vec2, rng: &mut R) -> Self {
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        let speed = rng.random::<f32>() * (BURST_SPEED_MAX - BURST_SPEED_MIN) + BURST_SPEED_MIN;
        let vel = unit_from_angle(angle) * speed - Vec2::new(0.0, BURST_LIFT);

        Self {
            kind: OrbKind::Fragment,
            pos: at,
            vel,
            dead: false,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.kind.radius()
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Drift, bounce off the side walls, and report leaving the field.
    ///
    /// Marks the orb dead on exit; deciding what an exit means for the run
    /// is left to the caller.
    pub fn update(&mut self, bounds: Bounds) -> Option<Exit> {
        if self.dead {
            return None;
        }

        self.pos += self.vel;

        let r = self.radius();
        let max_x = (bounds.width - r).max(r);
        if self.pos.x < r || self.pos.x > max_x {
            self.vel.x *= -WALL_DAMPING;
            self.pos.x = self.pos.x.clamp(r, max_x);
        }

        if self.pos.y < TOP_EXIT_Y {
            self.dead = true;
            return Some(Exit::Top);
        }
        if self.pos.y > bounds.height + BOTTOM_EXIT_MARGIN {
            self.dead = true;
            return Some(Exit::Bottom);
        }
        None
    }
}
