//! Fixed per-tick simulation step
//!
//! Core game loop that advances the run by exactly one tick. Elapsed wall time
//! never enters here; the frame clock only decides whether a tick happens.

use super::autopilot;
use super::collision::first_hit;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};

/// Per-tick input that is not applied at event time
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Let the autopilot jump for the player
    pub autopilot: bool,
}

/// Particle gravity (units per tick squared)
const PARTICLE_GRAVITY: f32 = 0.1;

/// Advance the game state by one tick.
///
/// Does nothing outside `Playing`. Returns `Crashed` on the tick the dino hits
/// an obstacle; the rest of that tick (scoring) is skipped.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<GameEvent> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    state.frame_count += 1;

    if input.autopilot && autopilot::wants_jump(state) {
        state.jump();
    }

    state.dino.step(state.tuning.gravity);
    update_obstacles(state);
    update_particles(state);
    update_clouds(state);

    if let Some(index) = first_hit(&state.dino, &state.obstacles) {
        let score = state.display_score();
        log::debug!(
            "Hit obstacle {} ({:?}) at tick {}",
            index,
            state.obstacles[index].kind,
            state.frame_count
        );
        state.crash();
        return Some(GameEvent::Crashed { score });
    }

    state.score_ticks += 1;
    state.speed = state.tuning.speed_for_score(state.score());

    None
}

/// Spawn on schedule, scroll, sway, prune
fn update_obstacles(state: &mut GameState) {
    state.obstacle_timer += 1;
    let frequency = state.tuning.obstacle_frequency(state.speed);
    if state.obstacle_timer as f32 > frequency {
        spawn::spawn_obstacle(state);
        state.obstacle_timer = 0;
    }

    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.advance(speed);
    }
    state.obstacles.retain(|o| !o.is_off_screen());
}

/// Integrate particles and drop the expired ones
fn update_particles(state: &mut GameState) {
    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.vel.y += PARTICLE_GRAVITY;
        particle.life = particle.life.saturating_sub(1);
    }
    state.particles.retain(|p| p.life > 0);
}

/// Drift, wrap and occasionally add clouds
fn update_clouds(state: &mut GameState) {
    state.cloud_timer += 1;

    let ratio = state.tuning.speed_ratio(state.speed);
    let GameState { clouds, rng, .. } = state;
    for cloud in clouds.iter_mut() {
        cloud.pos.x -= cloud.speed * ratio;
        if cloud.pos.x + cloud.width < 0.0 {
            spawn::wrap_cloud(rng, cloud);
        }
    }

    if state.cloud_timer > state.tuning.cloud_interval {
        let cloud = spawn::incoming_cloud(&mut state.rng);
        state.clouds.push(cloud);
        state.cloud_timer = 0;

        let excess = state.clouds.len().saturating_sub(state.tuning.max_clouds);
        state.clouds.drain(..excess);
    }
}
