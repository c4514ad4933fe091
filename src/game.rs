//! Frame driver
//!
//! Owns the simulation context and the store, runs one frame at a time in a
//! fixed phase order and persists the best score when a run beats it.

use glam::Vec2;

use crate::highscores;
use crate::platform::{KeyValueStore, Scheduler};
use crate::renderer::{Surface, draw_frame};
use crate::sim::{self, Bounds, GameEvent, GameState, Mode, TapOutcome};
use crate::tuning::Tuning;

pub struct Game<S: KeyValueStore> {
    state: GameState,
    store: S,
    running: bool,
    /// Events waiting for the host (HUD, overlays)
    outbox: Vec<GameEvent>,
}

impl<S: KeyValueStore> Game<S> {
    /// Read the best score and tuning from the store and start idle
    pub fn new(store: S, seed: u64, width: f32, height: f32) -> Self {
        let best = highscores::load_best(&store);
        let tuning = Tuning::load(&store);
        let state = GameState::new(seed, Bounds::new(width, height), best, tuning);
        log::info!("Game created with seed {} ({}x{})", seed, width, height);
        Self {
            state,
            store,
            running: true,
            outbox: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn best_score(&self) -> u32 {
        self.state.best_score
    }

    /// Stop asking for frames. The current frame, if any, still completes.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if self.state.bounds != Bounds::new(width, height) {
            log::debug!("Field resized to {}x{}", width, height);
            self.state.resize(width, height);
        }
    }

    /// Host asks for game mode (e.g. scrolled past the threshold).
    ///
    /// Only starts a run from idle; a finished run waits for `restart`.
    pub fn enter_game_mode(&mut self) -> bool {
        let started = self.state.mode == Mode::Idle && self.state.activate();
        self.settle();
        started
    }

    /// Host leaves game mode. The run is dropped without scoring; a
    /// finished run stays over so scrolling back cannot restart it.
    pub fn exit_game_mode(&mut self) -> bool {
        let left = self.state.deactivate();
        self.settle();
        left
    }

    /// Start a fresh run after a game over (or from idle)
    pub fn restart(&mut self) -> bool {
        let started = self.state.activate();
        self.settle();
        started
    }

    pub fn toggle_pause(&mut self) -> bool {
        let flipped = self.state.toggle_pause();
        self.settle();
        flipped
    }

    /// Feed a pointer activation. `on_game_surface` is false when the host
    /// saw the pointer land on its own chrome; such taps are dropped.
    pub fn tap(&mut self, x: f32, y: f32, on_game_surface: bool) -> Option<TapOutcome> {
        if !on_game_surface {
            return None;
        }
        let outcome = sim::handle_tap(&mut self.state, Vec2::new(x, y));
        self.settle();
        Some(outcome)
    }

    /// Run one frame: spawn, collide, update, render, compact, then ask for
    /// the next frame.
    pub fn frame(&mut self, surface: &mut dyn Surface, scheduler: &mut dyn Scheduler) {
        if !self.running {
            return;
        }

        let (width, height) = surface.size();
        self.resize(width, height);

        sim::spawn(&mut self.state);
        sim::collide(&mut self.state);
        sim::update(&mut self.state);
        draw_frame(&self.state, surface);
        sim::compact(&mut self.state);

        self.settle();
        scheduler.request_frame();
    }

    /// Events raised since the last call, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    /// Move simulation events to the outbox, persisting new bests on the way
    fn settle(&mut self) {
        for event in self.state.drain_events() {
            if let GameEvent::NewBest(best) = event {
                if let Err(e) = highscores::save_best(&mut self.store, best) {
                    log::warn!("Could not persist best score {}: {}", best, e);
                }
            }
            self.outbox.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::platform::{MemoryStore, NextFrame};
    use crate::renderer::RecordingSurface;
    use crate::sim::{Orb, OrbKind};

    fn game() -> Game<MemoryStore> {
        Game::new(MemoryStore::new(), 77, 800.0, 600.0)
    }

    fn place(game: &mut Game<MemoryStore>, kind: OrbKind, x: f32, y: f32) {
        game.state.orbs.push(Orb {
            kind,
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            dead: false,
        });
    }

    #[test]
    fn test_fresh_activation() {
        let mut g = game();
        assert!(g.enter_game_mode());
        assert_eq!(g.mode(), Mode::Playing);
        assert_eq!(g.score(), 0);
        assert_eq!(g.state().orbs.len(), 5);
        assert_eq!(
            g.drain_events(),
            vec![GameEvent::Activated, GameEvent::ScoreChanged(0)]
        );
    }

    #[test]
    fn test_hazard_tap_on_fresh_session() {
        let mut g = game();
        g.enter_game_mode();
        g.state.orbs.clear();
        place(&mut g, OrbKind::Hazard, 400.0, 300.0);

        assert_eq!(g.tap(400.0, 300.0, true), Some(TapOutcome::Hit(1)));
        assert_eq!(g.mode(), Mode::Over);
        assert_eq!(g.score(), 0);
        assert_eq!(g.best_score(), 0);
        let center_burst = g
            .state()
            .particles
            .iter()
            .filter(|p| p.pos == Vec2::new(400.0, 300.0))
            .count();
        // Hazard sits at the field center, so both bursts start there
        assert_eq!(center_burst, 140);
        assert_eq!(g.store().get(highscores::STORAGE_KEY), None);
    }

    #[test]
    fn test_new_best_is_persisted_once() {
        let mut g = game();
        g.enter_game_mode();
        g.state.orbs.clear();
        place(&mut g, OrbKind::Big, 100.0, 100.0);
        g.tap(100.0, 100.0, true);
        assert_eq!(g.score(), 20);

        place(&mut g, OrbKind::Hazard, 600.0, 100.0);
        g.tap(600.0, 100.0, true);
        assert_eq!(g.mode(), Mode::Over);
        assert_eq!(g.best_score(), 20);
        assert_eq!(g.store().get(highscores::STORAGE_KEY).as_deref(), Some("20"));

        let bests = g
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::NewBest(_)))
            .count();
        assert_eq!(bests, 1);
    }

    #[test]
    fn test_best_score_loaded_from_store() {
        let mut store = MemoryStore::new();
        store.insert(highscores::STORAGE_KEY, "480");
        let g = Game::new(store, 1, 800.0, 600.0);
        assert_eq!(g.best_score(), 480);
    }

    #[test]
    fn test_chrome_taps_are_dropped() {
        let mut g = game();
        assert_eq!(g.tap(10.0, 10.0, false), None);
        assert!(g.state().particles.is_empty());
    }

    #[test]
    fn test_frame_renders_and_reschedules() {
        let mut g = game();
        g.enter_game_mode();
        g.state.orbs.clear();
        place(&mut g, OrbKind::Small, 200.0, 200.0);

        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut next = NextFrame::default();
        g.frame(&mut surface, &mut next);

        assert!(next.requested);
        assert_eq!(surface.count_gradient_circles(), 1);
    }

    #[test]
    fn test_paused_frame_still_renders() {
        let mut g = game();
        g.enter_game_mode();
        g.state.orbs.clear();
        place(&mut g, OrbKind::Small, 200.0, 200.0);
        g.state.orbs[0].vel = Vec2::new(1.0, -1.0);
        g.toggle_pause();

        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut next = NextFrame::default();
        g.frame(&mut surface, &mut next);

        assert!(next.requested);
        assert_eq!(surface.count_gradient_circles(), 1);
        assert_eq!(g.state().orbs[0].pos, Vec2::new(200.0, 200.0));
        assert_eq!(g.tap(200.0, 200.0, true), Some(TapOutcome::Rejected));
    }

    #[test]
    fn test_stop_ends_scheduling() {
        let mut g = game();
        g.stop();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut next = NextFrame::default();
        g.frame(&mut surface, &mut next);
        assert!(!next.requested);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_surface_resize_updates_bounds() {
        let mut g = game();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        surface.resize(400.0, 900.0);
        g.frame(&mut surface, &mut NextFrame::default());
        assert_eq!(g.state().bounds, Bounds::new(400.0, 900.0));
    }

    #[test]
    fn test_scroll_does_not_restart_finished_run() {
        let mut g = game();
        g.enter_game_mode();
        g.state.trigger_game_over();
        assert!(!g.enter_game_mode());
        assert_eq!(g.mode(), Mode::Over);
        assert!(g.restart());
        assert_eq!(g.mode(), Mode::Playing);
    }

    #[test]
    fn test_scroll_out_and_back_keeps_run_over() {
        let mut g = game();
        g.enter_game_mode();
        g.state.trigger_game_over();
        g.drain_events();

        assert!(!g.exit_game_mode());
        assert!(!g.enter_game_mode());
        assert_eq!(g.mode(), Mode::Over);
        assert!(g.drain_events().is_empty());

        assert!(g.restart());
        assert_eq!(g.mode(), Mode::Playing);
    }

    #[test]
    fn test_exit_game_mode_is_silent() {
        let mut g = game();
        g.enter_game_mode();
        g.state.score = 999;
        assert!(g.exit_game_mode());
        assert_eq!(g.mode(), Mode::Idle);
        assert_eq!(g.best_score(), 0);
        assert_eq!(g.store().get(highscores::STORAGE_KEY), None);
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn test_store_failure_is_not_fatal() {
        let mut g = Game::new(BrokenStore, 3, 800.0, 600.0);
        g.enter_game_mode();
        g.state.score = 15;
        g.state.trigger_game_over();
        g.settle();
        assert_eq!(g.best_score(), 15);
        assert_eq!(g.mode(), Mode::Over);
    }
}
