//! Seeded simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per display refresh, fixed per-tick constants
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod machine;
pub mod orb;
pub mod particle;
pub mod state;
pub mod tap;
pub mod tick;

pub use collision::{circles_overlap, resolve_collisions, tap_hits};
pub use effects::{GOLD, PALETTE, RED, Rgb, WHITE};
pub use orb::{Exit, Orb, OrbKind, TapReward};
pub use particle::{Particle, ParticleKind};
pub use state::{Bounds, GameEvent, GameState, Mode};
pub use tap::{TapOutcome, handle_tap};
pub use tick::{collide, compact, spawn, tick, update};
