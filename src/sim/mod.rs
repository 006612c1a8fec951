//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick update only
//! - Seeded RNG only
//! - Stable iteration order (oldest entity first)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, dino_hitbox, first_hit, obstacle_hitbox};
pub use state::{
    Cloud, Dino, GameEvent, GamePhase, GameState, MAX_PARTICLES, Obstacle, ObstacleKind,
    Particle, ParticleKind,
};
pub use tick::{TickInput, tick};
