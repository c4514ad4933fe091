//! Per-tick simulation phases
//!
//! A frame runs `spawn -> collide -> update -> (render) -> compact`. Render
//! belongs to the driver, so the phases are exposed separately; `tick`
//! chains them for headless use.

use rand::Rng;

use super::collision::resolve_collisions;
use super::orb::{Exit, Orb, OrbKind};
use super::state::{GameState, Mode};

/// Spawn policy.
///
/// Playing: a timed spawn of a rolled kind whenever the timer passes the
/// score-dependent interval. Idle: a flat per-tick chance of an ambient
/// small orb. Paused and over: nothing.
pub fn spawn(state: &mut GameState) {
    match state.mode {
        Mode::Playing => {
            state.spawn_timer += 1;
            let interval = state.tuning.spawn_interval(state.score);
            if state.spawn_timer > interval {
                let kind = OrbKind::roll(&mut state.rng, &state.tuning);
                let orb = Orb::spawn_at_bottom(kind, state.bounds, &mut state.rng);
                log::debug!("Spawned {:?} orb (interval {})", kind, interval);
                state.orbs.push(orb);
                state.spawn_timer = 0;
            }
        }
        Mode::Idle => {
            let roll: f32 = state.rng.random();
            if roll < state.tuning.ambient_spawn_chance {
                let orb = Orb::spawn_at_bottom(OrbKind::Small, state.bounds, &mut state.rng);
                state.orbs.push(orb);
            }
        }
        Mode::Paused | Mode::Over => {}
    }
}

/// Pairwise collisions. Frozen while paused.
pub fn collide(state: &mut GameState) {
    if state.is_paused() {
        return;
    }
    resolve_collisions(state);
}

/// Move every live entity one tick. Frozen while paused.
///
/// A scoring orb escaping off the top during a run ends it; the trigger is
/// idempotent so several escapes in one tick end it once.
pub fn update(state: &mut GameState) {
    if state.is_paused() {
        return;
    }

    for particle in state.particles.iter_mut() {
        particle.update();
    }

    let bounds = state.bounds;
    let mut missed = false;
    for orb in state.orbs.iter_mut() {
        if orb.update(bounds) == Some(Exit::Top) && orb.kind.must_be_caught() {
            missed = true;
        }
    }

    if missed && state.is_playing() {
        log::info!("An orb got away");
        state.trigger_game_over();
    }
}

/// Drop dead orbs and faded particles
pub fn compact(state: &mut GameState) {
    state.orbs.retain(|o| !o.dead);
    state.particles.retain(|p| p.is_alive());
}

/// One full headless tick
pub fn tick(state: &mut GameState) {
    spawn(state);
    collide(state);
    update(state);
    compact(state);
}
