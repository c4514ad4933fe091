//! Mode transitions
//!
//! ```text
//! Idle -> Playing <-> Paused
//!           |  \        |
//!           v   `-> Idle <'
//!          Over -> Playing (activate)
//! ```
//!
//! `Over` only leaves through `activate`; leaving game mode keeps it.

use super::orb::{Orb, OrbKind};
use super::state::{GameEvent, GameState, Mode};
use crate::sim::effects::RED;

impl GameState {
    /// Start a run. Valid from idle or after a game over.
    ///
    /// Resets the score and reseeds the field with a column of small orbs
    /// waiting below the bottom edge. Running particles are left alone.
    pub fn activate(&mut self) -> bool {
        if !matches!(self.mode, Mode::Idle | Mode::Over) {
            return false;
        }

        self.mode = Mode::Playing;
        self.score = 0;
        self.spawn_timer = 0;

        self.orbs.clear();
        let bounds = self.bounds;
        let offset = self.tuning.seed_offset;
        let spacing = self.tuning.seed_spacing;
        for i in 0..self.tuning.seed_orbs {
            let mut orb = Orb::spawn_at_bottom(OrbKind::Small, bounds, &mut self.rng);
            // Replace the default drop-in height with the staggered column
            orb.pos.y = bounds.height + offset + i as f32 * spacing;
            self.orbs.push(orb);
        }

        log::info!("Game activated (best {})", self.best_score);
        self.emit(GameEvent::Activated);
        self.emit(GameEvent::ScoreChanged(0));
        true
    }

    /// Leave game mode without finishing the run. The field is left as-is.
    /// A finished run stays over.
    pub fn deactivate(&mut self) -> bool {
        if !matches!(self.mode, Mode::Playing | Mode::Paused) {
            return false;
        }
        self.mode = Mode::Idle;
        log::info!("Game deactivated");
        self.emit(GameEvent::Deactivated);
        true
    }

    /// Flip between playing and paused. No-op in any other mode.
    pub fn toggle_pause(&mut self) -> bool {
        match self.mode {
            Mode::Playing => {
                self.mode = Mode::Paused;
                log::info!("Paused");
                self.emit(GameEvent::Paused);
                true
            }
            Mode::Paused => {
                self.mode = Mode::Playing;
                log::info!("Resumed");
                self.emit(GameEvent::Resumed);
                true
            }
            Mode::Idle | Mode::Over => false,
        }
    }

    /// End the run. Idempotent.
    ///
    /// Blasts a red burst at the center of the field and records a new best
    /// when the score strictly beats it.
    pub fn trigger_game_over(&mut self) -> bool {
        if !matches!(self.mode, Mode::Playing | Mode::Paused) {
            return false;
        }

        self.mode = Mode::Over;
        let center = self.bounds.center();
        let burst = self.tuning.game_over_burst;
        self.explode(center, RED, burst);

        log::info!("Game over with score {}", self.score);
        self.emit(GameEvent::GameOver { score: self.score });

        if self.score > self.best_score {
            self.best_score = self.score;
            log::info!("New best score {}", self.best_score);
            self.emit(GameEvent::NewBest(self.best_score));
        }
        true
    }
}
