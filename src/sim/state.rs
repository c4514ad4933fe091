//! Simulation context and core state types
//!
//! Everything a tick reads or writes lives in `GameState`. There are no
//! globals; the loop driver owns exactly one of these.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects;
use super::effects::Rgb;
use super::orb::Orb;
use super::particle::Particle;
use crate::tuning::Tuning;

/// Top-level mode of the experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Ambient background: orbs float by, nothing is scored
    Idle,
    /// Active run
    Playing,
    /// Run frozen; frames still render
    Paused,
    /// Run ended
    Over,
}

/// Notable transitions, drained by the driver each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Activated,
    Deactivated,
    Paused,
    Resumed,
    ScoreChanged(u32),
    GameOver { score: u32 },
    /// The finished run beat the stored best
    NewBest(u32),
}

/// Size of the play field in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub mode: Mode,
    /// Meaningful while playing, paused or over
    pub score: u32,
    /// Best finished run, as read from and written to the store
    pub best_score: u32,
    /// Ticks since the last timed spawn
    pub spawn_timer: u32,
    pub bounds: Bounds,
    pub orbs: Vec<Orb>,
    pub particles: Vec<Particle>,
    pub tuning: Tuning,
    /// Seeded RNG; the only source of randomness in the simulation
    pub rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh idle state with an empty field
    pub fn new(seed: u64, bounds: Bounds, best_score: u32, tuning: Tuning) -> Self {
        Self {
            mode: Mode::Idle,
            score: 0,
            best_score,
            spawn_timer: 0,
            bounds,
            orbs: Vec::new(),
            particles: Vec::new(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
    }

    pub fn is_playing(&self) -> bool {
        self.mode == Mode::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.mode == Mode::Paused
    }

    pub fn is_over(&self) -> bool {
        self.mode == Mode::Over
    }

    /// Add points. Only a running game scores.
    pub fn award(&mut self, points: u32) {
        if !self.is_playing() || points == 0 {
            return;
        }
        self.score = self.score.saturating_add(points);
        self.emit(GameEvent::ScoreChanged(self.score));
    }

    /// Spark burst at a point
    pub fn explode(&mut self, at: Vec2, color: Rgb, count: u32) {
        effects::explode(&mut self.particles, &mut self.rng, at, color, count);
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Live (not yet dead) orbs
    pub fn live_orbs(&self) -> impl Iterator<Item = &Orb> {
        self.orbs.iter().filter(|o| !o.dead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(1, Bounds::new(800.0, 600.0), 0, Tuning::default())
    }

    #[test]
    fn test_new_is_idle_and_empty() {
        let s = state();
        assert_eq!(s.mode, Mode::Idle);
        assert_eq!(s.score, 0);
        assert!(s.orbs.is_empty());
        assert!(s.particles.is_empty());
    }

    #[test]
    fn test_award_only_while_playing() {
        let mut s = state();
        s.award(10);
        assert_eq!(s.score, 0);
        assert!(s.drain_events().is_empty());

        s.mode = Mode::Playing;
        s.award(10);
        assert_eq!(s.score, 10);
        assert_eq!(s.drain_events(), vec![GameEvent::ScoreChanged(10)]);

        for mode in [Mode::Paused, Mode::Over] {
            s.mode = mode;
            s.award(10);
            assert_eq!(s.score, 10);
        }
    }

    #[test]
    fn test_mode_queries() {
        let mut s = state();
        assert!(!s.is_playing() && !s.is_paused() && !s.is_over());
        s.mode = Mode::Paused;
        assert!(s.is_paused());
        s.mode = Mode::Over;
        assert!(s.is_over() && !s.is_playing());
    }

    #[test]
    fn test_bounds_center() {
        assert_eq!(Bounds::new(800.0, 600.0).center(), Vec2::new(400.0, 300.0));
        assert_eq!(Bounds::new(-5.0, 10.0).width, 0.0);
    }
}
