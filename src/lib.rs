//! Dino Run - A single-screen runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `renderer`: Procedural scene painting and the WebGPU pipeline that shows it
//! - `platform`: Browser/native platform abstraction (input, storage, frame clock)
//! - `game`: The game context tying simulation, input, HUD and persistence together
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use highscores::BestScore;
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical canvas size (all simulation and drawing happens in these units)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Top of the ground strip
    pub const GROUND_Y: f32 = 350.0;
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Dino geometry - fixed x, feet on the ground at y + height
    pub const DINO_X: f32 = 80.0;
    pub const DINO_GROUND_Y: f32 = 300.0;
    pub const DINO_DUCK_Y: f32 = 320.0;
    pub const DINO_WIDTH: f32 = 50.0;
    pub const DINO_HEIGHT: f32 = 45.0;
    pub const DINO_DUCK_HEIGHT: f32 = 30.0;

    /// Cactus geometry (sits on the ground)
    pub const CACTUS_Y: f32 = 310.0;
    pub const CACTUS_WIDTH: f32 = 20.0;
    pub const CACTUS_HEIGHT: f32 = 40.0;

    /// Bird geometry and the two flight lanes
    pub const BIRD_WIDTH: f32 = 35.0;
    pub const BIRD_HEIGHT: f32 = 25.0;
    pub const BIRD_LANES: [f32; 2] = [250.0, 200.0];
    /// Vertical oscillation amplitude and per-tick phase step
    pub const BIRD_SWAY: f32 = 30.0;
    pub const BIRD_SWAY_STEP: f32 = 0.05;

    /// Minimum time between simulation steps (120 Hz gate)
    pub const MIN_FRAME_MS: f64 = 1000.0 / 120.0;

    /// Storage key for the best score
    pub const BEST_SCORE_KEY: &str = "dinoHighScore";
}

/// Format a score for the HUD (zero padded to 5 digits)
#[inline]
pub fn format_score(score: u32) -> String {
    format!("{:05}", score)
}
