//! Tap handling
//!
//! A single tap pops every orb inside its (padded) reach, not just the
//! nearest one. Idle taps pop orbs too but never score.

use glam::Vec2;

use super::collision::tap_hits;
use super::effects;
use super::orb::{Orb, TapReward};
use super::state::GameState;

/// Result of feeding one tap into the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Ignored because the game is paused
    Rejected,
    /// Nothing in reach; empty-space feedback was shown
    Missed,
    /// This many orbs popped
    Hit(usize),
}

/// Apply a tap at `point` to the field
pub fn handle_tap(state: &mut GameState, point: Vec2) -> TapOutcome {
    if state.is_paused() {
        return TapOutcome::Rejected;
    }

    let padding = state.tuning.hit_padding;
    let burst = state.tuning.tap_burst;
    let mut hits = 0;

    // Fragments are appended after the scan so they can't be hit by the
    // same tap that released them
    let scanned = state.orbs.len();
    for i in 0..scanned {
        let orb = &state.orbs[i];
        if orb.dead || !tap_hits(point, orb.pos, orb.radius(), padding) {
            continue;
        }

        let (kind, pos, color) = (orb.kind, orb.pos, orb.color());
        state.orbs[i].dead = true;
        hits += 1;
        state.explode(pos, color, burst);

        if !state.is_playing() {
            continue;
        }
        match kind.tap_reward(&state.tuning) {
            TapReward::Points(points) => state.award(points),
            TapReward::Split { points, fragments } => {
                state.award(points);
                for _ in 0..fragments {
                    let fragment = Orb::spawn_from_burst(pos, &mut state.rng);
                    state.orbs.push(fragment);
                }
            }
            TapReward::GameOver => {
                state.trigger_game_over();
            }
        }
    }

    if hits == 0 {
        let sparks = state.tuning.empty_tap_burst;
        effects::empty_space(&mut state.particles, &mut state.rng, point, sparks);
        return TapOutcome::Missed;
    }

    log::debug!("Tap popped {} orb(s)", hits);
    TapOutcome::Hit(hits)
}
