//! Antigravity - floating light orbs that turn into an arcade game
//!
//! Core modules:
//! - `sim`: Seeded simulation (orbs, particles, collisions, game modes)
//! - `game`: Per-frame driver that runs the simulation phases in order
//! - `renderer`: Drawing surface abstraction and the scene draw pass
//! - `platform`: Storage and frame scheduling seams
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{StoreError, TuningError};
pub use game::Game;
pub use tuning::Tuning;

use glam::Vec2;

/// Simulation constants (per-tick units, screen coordinates with y down)
pub mod consts {
    /// Orb radii by kind
    pub const SMALL_ORB_RADIUS: f32 = 18.0;
    pub const BIG_ORB_RADIUS: f32 = 35.0;
    pub const FRAGMENT_ORB_RADIUS: f32 = 14.0;

    /// Horizontal margin kept clear when spawning at the bottom
    pub const SPAWN_MARGIN_X: f32 = 50.0;
    /// Fresh orbs start this far below the bottom edge
    pub const SPAWN_BELOW: f32 = 60.0;
    /// Launch cone for bottom spawns: angle in [-135°, -45°)
    pub const SPAWN_CONE_START: f32 = -std::f32::consts::PI * 0.75;
    pub const SPAWN_CONE_WIDTH: f32 = std::f32::consts::FRAC_PI_2;
    pub const SPAWN_SPEED_MIN: f32 = 1.5;
    pub const SPAWN_SPEED_MAX: f32 = 4.0;
    pub const SPAWN_LIFT: f32 = 1.0;

    /// Fragments thrown out of a popped big orb
    pub const BURST_SPEED_MIN: f32 = 3.0;
    pub const BURST_SPEED_MAX: f32 = 8.0;
    pub const BURST_LIFT: f32 = 2.0;

    /// Velocity kept (and reversed) on a wall bounce
    pub const WALL_DAMPING: f32 = 0.8;
    /// Orbs above this y have escaped off the top
    pub const TOP_EXIT_Y: f32 = -60.0;
    /// Orbs this far below the bottom edge are culled
    pub const BOTTOM_EXIT_MARGIN: f32 = 100.0;

    /// Spark particles
    pub const SPARK_SPEED_MIN: f32 = 2.0;
    pub const SPARK_SPEED_MAX: f32 = 10.0;
    pub const SPARK_SIZE_MIN: f32 = 1.0;
    pub const SPARK_SIZE_MAX: f32 = 5.0;
    pub const SPARK_GRAVITY: f32 = 0.15;
    pub const SPARK_FADE: f32 = 0.02;
    pub const SPARK_SHRINK: f32 = 0.96;

    /// Pulse rings
    pub const PULSE_START_ALPHA: f32 = 0.5;
    pub const PULSE_GROWTH: f32 = 10.0;
    pub const PULSE_FADE: f32 = 0.03;
    pub const PULSE_MAX_RADIUS: f32 = 150.0;
}

/// Unit vector for an angle in radians
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}

/// Midpoint between two points
#[inline]
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}
