//! Data-driven game balance
//!
//! Every number that shapes how the run feels lives here so it can be tweaked
//! from JSON without touching the simulation.

use serde::{Deserialize, Serialize};

/// Balance knobs for physics, difficulty and spawning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Starting scroll speed (units per tick)
    pub base_speed: f32,
    /// Downward acceleration applied to the dino each tick
    pub gravity: f32,
    /// Upward velocity applied on jump
    pub jump_power: f32,
    /// Score gained per tick while playing
    pub score_per_tick: f64,
    /// Points per difficulty step
    pub difficulty_step: f64,
    /// Speed gain per difficulty step (fraction of base speed)
    pub difficulty_gain: f32,
    /// Speed cap as a multiple of base speed
    pub max_speed_multiplier: f32,
    /// Obstacle spawn interval at zero speed (ticks)
    pub obstacle_interval: f32,
    /// Interval reduction per unit of speed (ticks)
    pub obstacle_interval_per_speed: f32,
    /// Shortest allowed spawn interval (ticks)
    pub min_obstacle_interval: f32,
    /// Score from which newly spawned birds sway up and down
    pub bird_sway_score: f64,
    /// Ticks between extra clouds
    pub cloud_interval: u32,
    /// Maximum clouds on screen
    pub max_clouds: usize,
    /// Clouds created at startup
    pub initial_clouds: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: 8.0,
            gravity: 0.8,
            jump_power: 16.0,
            score_per_tick: 0.2,
            difficulty_step: 100.0,
            difficulty_gain: 0.15,
            max_speed_multiplier: 3.0,
            obstacle_interval: 150.0,
            obstacle_interval_per_speed: 3.0,
            min_obstacle_interval: 60.0,
            bird_sway_score: 200.0,
            cloud_interval: 800,
            max_clouds: 5,
            initial_clouds: 3,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse tuning from JSON, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring malformed tuning ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Scroll speed for a given score: +gain per completed step, capped
    pub fn speed_for_score(&self, score: f64) -> f32 {
        let steps = (score / self.difficulty_step).floor() as f32;
        let multiplier = 1.0 + steps * self.difficulty_gain;
        (self.base_speed * multiplier).min(self.max_speed())
    }

    /// Highest speed the run can reach
    pub fn max_speed(&self) -> f32 {
        self.base_speed * self.max_speed_multiplier
    }

    /// Ticks between obstacle spawns at the given speed (shrinks as speed grows)
    pub fn obstacle_frequency(&self, speed: f32) -> f32 {
        (self.obstacle_interval - speed * self.obstacle_interval_per_speed)
            .max(self.min_obstacle_interval)
    }

    /// Speed relative to the base (drives cloud drift and wing beat)
    pub fn speed_ratio(&self, speed: f32) -> f32 {
        speed / self.base_speed
    }
}
