//! Procedural scene painting
//!
//! Every sprite is built from filled rectangles in canvas units. Painting
//! order is back to front: sky, clouds, ground texture, dino, obstacles,
//! particles, ground line.

use super::surface::Surface;
use super::vertex::colors;
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{Dino, GameState, Obstacle, ObstacleKind, Particle, ParticleKind, Rect};

/// Spacing of the ground dashes and their scroll period
const DASH_SPACING: usize = 20;
const DASH_PERIOD: f32 = 40.0;
/// Ground texture scrolls slower than the obstacles
const DASH_PARALLAX: f32 = 0.8;

/// Wing phase step per painted frame, plus a speed-dependent bonus
const WING_BEAT: f32 = 0.3;
const WING_BEAT_SPEED_BONUS: f32 = 0.2;

/// Advance cosmetic animation, then paint the frame.
///
/// Wing beats belong to the renderer: they move once per paint, not per tick.
pub fn paint(state: &mut GameState, settings: &Settings, surface: &mut impl Surface) {
    flap_wings(state);
    draw(state, settings, surface);
}

/// Advance every bird's wing phase by one painted frame
pub fn flap_wings(state: &mut GameState) {
    let step = WING_BEAT + state.tuning.speed_ratio(state.speed) * WING_BEAT_SPEED_BONUS;
    for obstacle in &mut state.obstacles {
        if let ObstacleKind::Bird {
            ref mut wing_phase,
            ..
        } = obstacle.kind
        {
            *wing_phase += step;
        }
    }
}

/// Paint the frame without touching the state
pub fn draw(state: &GameState, settings: &Settings, surface: &mut impl Surface) {
    draw_sky(surface);

    if settings.clouds {
        for cloud in &state.clouds {
            draw_cloud(surface, cloud.pos.x, cloud.pos.y, cloud.width, cloud.height);
        }
    }

    draw_ground_texture(state, settings, surface);

    draw_dino(surface, &state.dino, leg_offset(state.frame_count, state.speed));

    for obstacle in &state.obstacles {
        match obstacle.kind {
            ObstacleKind::Cactus => draw_cactus(surface, obstacle),
            ObstacleKind::Bird { wing_phase, .. } => draw_bird(surface, obstacle, wing_phase),
        }
    }

    for particle in &state.particles {
        draw_particle(surface, particle);
    }

    draw_ground_line(surface);
}

/// Fill a rectangle, skipping empty ones
fn part(surface: &mut impl Surface, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    if w > 0.0 && h > 0.0 {
        surface.fill_rect(Rect::new(x, y, w, h), color);
    }
}

fn draw_sky(surface: &mut impl Surface) {
    surface.fill_vertical_gradient(
        Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT),
        colors::SKY_TOP,
        colors::SKY_BOTTOM,
    );
}

fn draw_cloud(surface: &mut impl Surface, x: f32, y: f32, w: f32, h: f32) {
    part(surface, x, y, w, h, colors::CLOUD);
    part(surface, x + 10.0, y - 8.0, w * 0.6, h * 0.6, colors::CLOUD);
    part(surface, x + w * 0.3, y - 5.0, w * 0.4, h * 0.4, colors::CLOUD);
}

/// Horizontal offset of the ground dashes for this frame, within one period
pub fn dash_scroll(frame_count: u64, speed: f32) -> f32 {
    let travelled = frame_count as f64 * f64::from(speed) * f64::from(DASH_PARALLAX);
    travelled.rem_euclid(f64::from(DASH_PERIOD)) as f32
}

fn draw_ground_texture(state: &GameState, settings: &Settings, surface: &mut impl Surface) {
    if !settings.ground_texture {
        return;
    }
    let scroll = dash_scroll(state.frame_count, state.speed);
    for x in (0..CANVAS_WIDTH as usize).step_by(DASH_SPACING) {
        let x = x as f32;
        let offset = (x + scroll).rem_euclid(DASH_PERIOD);
        part(surface, x - offset, GROUND_Y + 30.0, 10.0, 5.0, colors::GROUND_DASH);
    }
}

fn draw_ground_line(surface: &mut impl Surface) {
    part(surface, 0.0, GROUND_Y - 1.0, CANVAS_WIDTH, 2.0, colors::GROUND_LINE);
}

/// Leg shuffle: alternates between 0 and 3 with a period that shortens as speed rises
pub fn leg_offset(frame_count: u64, speed: f32) -> f32 {
    let period = f64::from((20.0 - speed).max(10.0));
    if (frame_count as f64) % period < period / 2.0 {
        0.0
    } else {
        3.0
    }
}

fn draw_dino(surface: &mut impl Surface, dino: &Dino, leg_offset: f32) {
    let (x, y, w, h) = (dino.x, dino.y, dino.width, dino.height);

    // Torso and head
    part(surface, x + 8.0, y + 8.0, w - 16.0, h - 16.0, colors::DINO_BODY);
    part(surface, x + 25.0, y, 20.0, 25.0, colors::DINO_DARK);
    part(surface, x + 40.0, y + 8.0, 8.0, 10.0, colors::DINO_BODY);
    part(surface, x + 5.0, y + 12.0, 30.0, h - 20.0, colors::DINO_DARK);

    // Tail
    part(surface, x - 15.0, y + 15.0, 20.0, 12.0, colors::DINO_DARK);
    part(surface, x - 25.0, y + 20.0, 15.0, 8.0, colors::DINO_DARK);

    // Belly
    part(surface, x + 10.0, y + 20.0, 20.0, h - 30.0, colors::DINO_BODY);

    // Eye, pupil, nostril
    part(surface, x + 30.0, y + 6.0, 8.0, 8.0, colors::EYE_WHITE);
    part(surface, x + 32.0, y + 8.0, 4.0, 4.0, colors::BLACK);
    part(surface, x + 44.0, y + 12.0, 2.0, 2.0, colors::BLACK);

    // Spots
    part(surface, x + 12.0, y + 16.0, 3.0, 3.0, colors::DINO_SPOT);
    part(surface, x + 20.0, y + 25.0, 2.0, 2.0, colors::DINO_SPOT);
    part(surface, x + 8.0, y + 30.0, 2.0, 2.0, colors::DINO_SPOT);

    // Arm
    part(surface, x + 8.0, y + 18.0, 6.0, 3.0, colors::DINO_DARK);
    part(surface, x + 6.0, y + 20.0, 4.0, 6.0, colors::DINO_DARK);

    // Legs only while grounded, shuffling in opposite directions
    if !dino.jumping {
        draw_leg(surface, x + 12.0 + leg_offset, y + h);
        draw_leg(surface, x + 25.0 - leg_offset, y + h);
    }

    // Back spikes
    for i in 0..3 {
        let sx = x + 15.0 + i as f32 * 6.0;
        let sy = y + 8.0;
        part(surface, sx, sy, 3.0, 8.0, colors::DINO_SPOT);
        part(surface, sx + 1.0, sy - 2.0, 1.0, 4.0, colors::DINO_SPOT);
    }
}

/// One leg with its foot and three claws; `hip` is the bottom of the body
fn draw_leg(surface: &mut impl Surface, lx: f32, hip: f32) {
    part(surface, lx, hip, 8.0, 12.0, colors::DINO_DARK);
    part(surface, lx - 2.0, hip + 10.0, 12.0, 4.0, colors::DINO_CLAW);
    for claw in [lx - 4.0, lx, lx + 4.0] {
        part(surface, claw, hip + 12.0, 2.0, 3.0, colors::BLACK);
    }
}

fn draw_cactus(surface: &mut impl Surface, cactus: &Obstacle) {
    let (x, y, h) = (cactus.x, cactus.y, cactus.height);
    part(surface, x + 5.0, y, 10.0, h, colors::CACTUS);
    part(surface, x, y + 10.0, 8.0, 6.0, colors::CACTUS);
    part(surface, x + 12.0, y + 15.0, 8.0, 6.0, colors::CACTUS);

    for i in 0..3 {
        let row = i as f32 * 12.0;
        part(surface, x + 3.0, y + row + 5.0, 2.0, 2.0, colors::CACTUS_SPIKE);
        part(surface, x + 15.0, y + row + 8.0, 2.0, 2.0, colors::CACTUS_SPIKE);
    }
}

fn draw_bird(surface: &mut impl Surface, bird: &Obstacle, wing_phase: f32) {
    let (x, y) = (bird.x, bird.y);
    part(surface, x + 8.0, y + 8.0, 20.0, 10.0, colors::BIRD);
    part(surface, x + 20.0, y + 5.0, 12.0, 8.0, colors::BIRD);

    let wing = wing_phase.sin() * 3.0;
    part(surface, x + 5.0, y + 6.0 + wing, 15.0, 4.0, colors::BIRD);
    part(surface, x + 5.0, y + 12.0 - wing, 15.0, 4.0, colors::BIRD);

    part(surface, x + 32.0, y + 8.0, 4.0, 3.0, colors::BIRD_BEAK);
}

fn draw_particle(surface: &mut impl Surface, particle: &Particle) {
    let color = match particle.kind {
        ParticleKind::Explosion => colors::EXPLOSION,
        ParticleKind::Dust => {
            let [r, g, b, _] = colors::DUST;
            [r, g, b, particle.life_fraction()]
        }
    };
    let half = particle.size / 2.0;
    part(
        surface,
        particle.pos.x - half,
        particle.pos.y - half,
        particle.size,
        particle.size,
        color,
    );
}
