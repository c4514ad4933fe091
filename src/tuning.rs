//! Data-driven game balance
//!
//! Defaults reproduce the shipped feel. Hosts may override any subset of the
//! fields with a JSON document; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::platform::KeyValueStore;

/// Balance knobs for spawning, scoring and effect sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawn odds (cumulative thresholds on one uniform draw) ===
    /// Draws below this become hazards
    pub hazard_threshold: f32,
    /// Draws below this (and above the hazard threshold) become big orbs
    pub big_threshold: f32,

    // === Spawn cadence while playing ===
    /// Ticks between spawns at score 0
    pub base_spawn_interval: u32,
    /// Fastest allowed cadence
    pub min_spawn_interval: u32,
    /// Score needed to shave one tick off the interval
    pub score_per_interval_step: u32,
    /// Per-tick chance of an ambient orb while idle
    pub ambient_spawn_chance: f32,

    // === Activation seeding ===
    pub seed_orbs: u32,
    /// Offset of the first seeded orb below the bottom edge
    pub seed_offset: f32,
    /// Vertical gap between seeded orbs
    pub seed_spacing: f32,

    // === Taps ===
    /// Extra hit radius beyond the visual radius
    pub hit_padding: f32,
    pub small_points: u32,
    pub big_points: u32,
    pub collision_points: u32,
    /// Fragments released by a popped big orb
    pub fragments: u32,

    // === Burst sizes ===
    pub tap_burst: u32,
    /// Sparks per side of a collision
    pub collision_burst: u32,
    pub empty_tap_burst: u32,
    pub game_over_burst: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            hazard_threshold: 0.12,
            big_threshold: 0.35,

            base_spawn_interval: 60,
            min_spawn_interval: 20,
            score_per_interval_step: 90,
            ambient_spawn_chance: 0.012,

            seed_orbs: 5,
            seed_offset: 50.0,
            seed_spacing: 120.0,

            hit_padding: 35.0,
            small_points: 10,
            big_points: 20,
            collision_points: 5,
            fragments: 4,

            tap_burst: 40,
            collision_burst: 20,
            empty_tap_burst: 6,
            game_over_burst: 100,
        }
    }
}

impl Tuning {
    /// Storage key for host-provided overrides
    pub const STORAGE_KEY: &'static str = "lodge_tuning";

    /// Parse and validate a JSON override document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the values describe a playable configuration
    pub fn validate(&self) -> Result<(), TuningError> {
        let unit = 0.0..=1.0;
        if !unit.contains(&self.hazard_threshold) {
            return Err(TuningError::Invalid {
                field: "hazard_threshold",
                reason: "must be within [0, 1]",
            });
        }
        if !unit.contains(&self.big_threshold) {
            return Err(TuningError::Invalid {
                field: "big_threshold",
                reason: "must be within [0, 1]",
            });
        }
        if self.big_threshold < self.hazard_threshold {
            return Err(TuningError::Invalid {
                field: "big_threshold",
                reason: "must not be below hazard_threshold",
            });
        }
        if !unit.contains(&self.ambient_spawn_chance) {
            return Err(TuningError::Invalid {
                field: "ambient_spawn_chance",
                reason: "must be within [0, 1]",
            });
        }
        if self.min_spawn_interval == 0 {
            return Err(TuningError::Invalid {
                field: "min_spawn_interval",
                reason: "must be at least 1",
            });
        }
        if self.min_spawn_interval > self.base_spawn_interval {
            return Err(TuningError::Invalid {
                field: "min_spawn_interval",
                reason: "must not exceed base_spawn_interval",
            });
        }
        if self.score_per_interval_step == 0 {
            return Err(TuningError::Invalid {
                field: "score_per_interval_step",
                reason: "must be at least 1",
            });
        }
        if self.hit_padding < 0.0 {
            return Err(TuningError::Invalid {
                field: "hit_padding",
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    /// Spawn interval for the current score, floored at `min_spawn_interval`
    pub fn spawn_interval(&self, score: u32) -> u32 {
        self.base_spawn_interval
            .saturating_sub(score / self.score_per_interval_step)
            .max(self.min_spawn_interval)
    }

    /// Load overrides from the store, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Some(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning overrides: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
