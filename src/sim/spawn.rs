//! Entity spawning: obstacles, clouds and particle bursts
//!
//! All randomness goes through the state's seeded RNG so a run replays
//! identically from its seed.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Cloud, GameState, Obstacle, Particle, ParticleKind};
use crate::consts::*;

/// Dust puff on takeoff
const DUST_COUNT: usize = 5;
const DUST_LIFE: u32 = 30;
/// Crash burst
const EXPLOSION_COUNT: usize = 15;
const EXPLOSION_LIFE: u32 = 60;

/// Push a new obstacle at the right edge: cactus or bird, 50/50.
///
/// Birds pick one of two lanes and a random sway phase; whether they sway is
/// decided now from the current score and never revisited.
pub fn spawn_obstacle(state: &mut GameState) {
    let obstacle = if state.rng.random_bool(0.5) {
        Obstacle::cactus(CANVAS_WIDTH)
    } else {
        let lane = BIRD_LANES[state.rng.random_range(0..BIRD_LANES.len())];
        let phase = state.rng.random_range(0.0..TAU);
        let sways = state.score() >= state.tuning.bird_sway_score;
        Obstacle::bird(CANVAS_WIDTH, lane, phase, sways)
    };
    log::trace!(
        "Spawned {} at tick {}",
        if obstacle.is_bird() { "bird" } else { "cactus" },
        state.frame_count
    );
    state.obstacles.push(obstacle);
}

fn random_cloud_height(rng: &mut impl Rng) -> f32 {
    rng.random_range(20.0..120.0)
}

fn random_cloud(rng: &mut impl Rng, x: f32) -> Cloud {
    Cloud {
        pos: Vec2::new(x, random_cloud_height(rng)),
        width: rng.random_range(60.0..100.0),
        height: rng.random_range(30.0..50.0),
        speed: rng.random_range(0.5..1.0),
    }
}

/// A cloud anywhere across the sky (startup scenery)
pub fn scattered_cloud(rng: &mut impl Rng) -> Cloud {
    let x = rng.random_range(0.0..CANVAS_WIDTH);
    random_cloud(rng, x)
}

/// A cloud just past the right edge
pub fn incoming_cloud(rng: &mut impl Rng) -> Cloud {
    let x = CANVAS_WIDTH + rng.random_range(0.0..200.0);
    random_cloud(rng, x)
}

/// Move a cloud that drifted off the left edge back past the right edge
pub fn wrap_cloud(rng: &mut impl Rng, cloud: &mut Cloud) {
    cloud.pos.x = CANVAS_WIDTH + rng.random_range(0.0..200.0);
    cloud.pos.y = random_cloud_height(rng);
}

/// Small puff kicked up when the dino leaves the ground
pub fn dust_puff(state: &mut GameState, at: Vec2) {
    for _ in 0..DUST_COUNT {
        let particle = Particle {
            pos: Vec2::new(at.x + state.rng.random_range(-10.0..10.0), at.y),
            vel: Vec2::new(
                state.rng.random_range(-2.0..2.0),
                -state.rng.random_range(0.0..3.0),
            ),
            kind: ParticleKind::Dust,
            life: DUST_LIFE,
            max_life: DUST_LIFE,
            size: state.rng.random_range(1.0..4.0),
        };
        state.push_particle(particle);
    }
}

/// Red burst when the dino crashes
pub fn explosion(state: &mut GameState, at: Vec2) {
    for _ in 0..EXPLOSION_COUNT {
        let particle = Particle {
            pos: at,
            vel: Vec2::new(
                state.rng.random_range(-4.0..4.0),
                state.rng.random_range(-4.0..4.0),
            ),
            kind: ParticleKind::Explosion,
            life: EXPLOSION_LIFE,
            max_life: EXPLOSION_LIFE,
            size: state.rng.random_range(2.0..6.0),
        };
        state.push_particle(particle);
    }
}
