//! Orb-orb collisions and tap hit tests
//!
//! Every unordered pair of live orbs is checked each tick. That is O(n²),
//! which is fine while spawn cadence keeps the field to a few dozen orbs; a
//! spatial grid would be needed well before the thousands.

use glam::Vec2;

use super::state::GameState;
use crate::midpoint;

/// True when two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// True when a tap at `point` lands on a circle padded by `padding`
#[inline]
pub fn tap_hits(point: Vec2, center: Vec2, radius: f32, padding: f32) -> bool {
    point.distance(center) < radius + padding
}

/// Pop every pair of overlapping live orbs.
///
/// Both orbs of a pair die, each bursts in its own color at the midpoint,
/// and the pair is worth `collision_points` while playing. An orb already
/// killed earlier in the pass does not collide again. Returns the number of
/// pairs resolved.
pub fn resolve_collisions(state: &mut GameState) -> usize {
    let burst = state.tuning.collision_burst;
    let points = state.tuning.collision_points;
    let mut pairs = 0;

    for i in 0..state.orbs.len() {
        for j in (i + 1)..state.orbs.len() {
            let (a, b) = (&state.orbs[i], &state.orbs[j]);
            if a.dead || b.dead {
                continue;
            }
            if !circles_overlap(a.pos, a.radius(), b.pos, b.radius()) {
                continue;
            }

            let mid = midpoint(a.pos, b.pos);
            let (color_a, color_b) = (a.color(), b.color());
            state.orbs[i].dead = true;
            state.orbs[j].dead = true;

            state.explode(mid, color_a, burst);
            state.explode(mid, color_b, burst);
            state.award(points);
            pairs += 1;
            log::debug!("Orbs collided at ({:.0}, {:.0})", mid.x, mid.y);
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::effects::RED;
    use crate::sim::orb::{Orb, OrbKind};
    use crate::sim::state::{Bounds, Mode};
    use crate::tuning::Tuning;

    fn state_with(orbs: &[(OrbKind, Vec2)]) -> GameState {
        let mut s = GameState::new(5, Bounds::new(800.0, 600.0), 0, Tuning::default());
        s.orbs = orbs
            .iter()
            .map(|&(kind, pos)| Orb {
                kind,
                pos,
                vel: Vec2::ZERO,
                dead: false,
            })
            .collect();
        s
    }

    #[test]
    fn test_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, 18.0, Vec2::new(40.0, 0.0), 35.0));
        assert!(!circles_overlap(Vec2::ZERO, 20.0, Vec2::new(40.0, 0.0), 20.0));
    }

    #[test]
    fn test_tap_padding() {
        let center = Vec2::new(100.0, 100.0);
        assert!(tap_hits(Vec2::new(152.0, 100.0), center, 18.0, 35.0));
        assert!(!tap_hits(Vec2::new(153.0, 100.0), center, 18.0, 35.0));
    }

    #[test]
    fn test_pair_collision_while_playing() {
        let mut s = state_with(&[
            (OrbKind::Small, Vec2::new(100.0, 100.0)),
            (OrbKind::Big, Vec2::new(140.0, 100.0)),
        ]);
        s.mode = Mode::Playing;

        assert_eq!(resolve_collisions(&mut s), 1);
        assert!(s.orbs.iter().all(|o| o.dead));
        assert_eq!(s.score, 5);
        assert_eq!(s.particles.len(), 40);
        assert!(s.particles.iter().all(|p| p.pos == Vec2::new(120.0, 100.0)));
    }

    #[test]
    fn test_collision_in_idle_is_unscored() {
        let mut s = state_with(&[
            (OrbKind::Small, Vec2::new(100.0, 100.0)),
            (OrbKind::Hazard, Vec2::new(110.0, 100.0)),
        ]);

        assert_eq!(resolve_collisions(&mut s), 1);
        assert_eq!(s.score, 0);
        // The hazard's half of the burst is red
        assert_eq!(s.particles[20..].iter().filter(|p| p.color == RED).count(), 20);
    }

    #[test]
    fn test_triple_overlap_resolves_one_pair() {
        // All three overlap each other
        let mut s = state_with(&[
            (OrbKind::Small, Vec2::new(100.0, 100.0)),
            (OrbKind::Small, Vec2::new(110.0, 100.0)),
            (OrbKind::Small, Vec2::new(120.0, 100.0)),
        ]);
        s.mode = Mode::Playing;

        // First pair pops; the third has nobody live left to hit
        assert_eq!(resolve_collisions(&mut s), 1);
        assert!(s.orbs[0].dead && s.orbs[1].dead);
        assert!(!s.orbs[2].dead);
        assert_eq!(s.score, 5);
        assert_eq!(s.particles.len(), 40);
        assert!(s.particles.iter().all(|p| p.pos == Vec2::new(105.0, 100.0)));

        // The survivor is free for the next pass
        assert_eq!(resolve_collisions(&mut s), 0);
        assert!(!s.orbs[2].dead);
    }

    #[test]
    fn test_apart_orbs_survive() {
        let mut s = state_with(&[
            (OrbKind::Small, Vec2::new(100.0, 100.0)),
            (OrbKind::Small, Vec2::new(300.0, 100.0)),
        ]);
        assert_eq!(resolve_collisions(&mut s), 0);
        assert!(s.orbs.iter().all(|o| !o.dead));
        assert!(s.particles.is_empty());
    }
}
