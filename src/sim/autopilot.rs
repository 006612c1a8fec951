//! Autopilot - a simple bot that plays the run (demo / headless mode)
//!
//! Only cacti can reach a grounded dino; birds fly above the standing hitbox.
//! So the bot only ever jumps for cacti, and never while a bird is next up.

use super::collision::{dino_hitbox, obstacle_hitbox};
use super::state::GameState;

/// How many ticks ahead of contact the bot takes off
const LEAD_TICKS: f32 = 8.0;

/// Whether the autopilot wants to jump this tick
pub fn wants_jump(state: &GameState) -> bool {
    if state.dino.jumping {
        return false;
    }

    let hitbox = dino_hitbox(&state.dino);
    let look_ahead = state.speed * LEAD_TICKS;

    // Nearest obstacle whose hitbox is still ahead of or level with the dino
    let nearest = state
        .obstacles
        .iter()
        .map(|o| (o, obstacle_hitbox(o)))
        .filter(|(_, hb)| hb.right() > hitbox.x)
        .min_by(|a, b| a.1.x.total_cmp(&b.1.x));

    match nearest {
        Some((obstacle, hb)) if !obstacle.is_bird() => {
            let gap = hb.x - hitbox.right();
            gap > 0.0 && gap <= look_ahead
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use crate::tuning::Tuning;

    fn playing() -> GameState {
        let mut state = GameState::new(1, Tuning::default());
        state.press_jump();
        state
    }

    #[test]
    fn test_jumps_for_close_cactus() {
        let mut state = playing();
        // Dino hitbox right edge at 122; cactus hitbox starts at x + 2
        state.obstacles.push(Obstacle::cactus(122.0 + 40.0 - 2.0));
        assert!(wants_jump(&state));
    }

    #[test]
    fn test_waits_for_far_cactus() {
        let mut state = playing();
        state.obstacles.push(Obstacle::cactus(600.0));
        assert!(!wants_jump(&state));
    }

    #[test]
    fn test_ignores_birds() {
        let mut state = playing();
        state.obstacles.push(Obstacle::bird(150.0, 250.0, 0.0, false));
        assert!(!wants_jump(&state));
    }
}
