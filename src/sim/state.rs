//! Game state and core simulation types
//!
//! Everything the simulation step reads or writes lives here, including the
//! phase machine that input intents drive.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawn;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Start hint showing, waiting for the first jump
    #[default]
    Waiting,
    /// Active gameplay
    Playing,
    /// Crashed; frozen until the next jump resets the run
    GameOver,
}

/// Noteworthy things that happened during an intent or tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Waiting -> Playing
    Started,
    /// Dino left the ground
    Jumped,
    /// Playing -> GameOver, with the final whole score
    Crashed { score: u32 },
    /// GameOver -> Waiting
    Reset,
}

/// The player's dinosaur
#[derive(Debug, Clone, PartialEq)]
pub struct Dino {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vel_y: f32,
    pub jumping: bool,
    pub ducking: bool,
}

impl Default for Dino {
    fn default() -> Self {
        Self::new()
    }
}

impl Dino {
    pub fn new() -> Self {
        Self {
            x: DINO_X,
            y: DINO_GROUND_Y,
            width: DINO_WIDTH,
            height: DINO_HEIGHT,
            vel_y: 0.0,
            jumping: false,
            ducking: false,
        }
    }

    /// Sprite bounds in the current pose
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Bottom-center of the sprite (where dust kicks up)
    pub fn feet(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height)
    }

    /// Integrate one tick of gravity, land on the ground and apply the duck pose
    pub fn step(&mut self, gravity: f32) {
        self.vel_y += gravity;
        self.y += self.vel_y;

        if self.y >= DINO_GROUND_Y {
            self.y = DINO_GROUND_Y;
            self.vel_y = 0.0;
            self.jumping = false;
        }

        if self.ducking && !self.jumping {
            self.height = DINO_DUCK_HEIGHT;
            self.y = DINO_DUCK_Y;
        } else {
            self.height = DINO_HEIGHT;
            if !self.jumping {
                self.y = DINO_GROUND_Y;
            }
        }
    }

    /// Start a jump if grounded. Returns false while already airborne.
    pub fn jump(&mut self, power: f32) -> bool {
        if self.jumping {
            return false;
        }
        self.vel_y = -power;
        self.jumping = true;
        true
    }
}

/// Obstacle kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObstacleKind {
    /// Ground cactus - must be jumped
    Cactus,
    /// Bird in one of the flight lanes
    Bird {
        /// Lane the bird sways around
        initial_y: f32,
        /// Sway phase (radians), advanced every tick when `sways`
        movement_phase: f32,
        /// Wing beat phase (radians), advanced by the renderer
        wing_phase: f32,
        /// Fixed at spawn time from the score
        sways: bool,
    },
}

/// An obstacle scrolling toward the dino
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn cactus(x: f32) -> Self {
        Self {
            kind: ObstacleKind::Cactus,
            x,
            y: CACTUS_Y,
            width: CACTUS_WIDTH,
            height: CACTUS_HEIGHT,
        }
    }

    pub fn bird(x: f32, lane_y: f32, movement_phase: f32, sways: bool) -> Self {
        Self {
            kind: ObstacleKind::Bird {
                initial_y: lane_y,
                movement_phase,
                wing_phase: 0.0,
                sways,
            },
            x,
            y: lane_y,
            width: BIRD_WIDTH,
            height: BIRD_HEIGHT,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_bird(&self) -> bool {
        matches!(self.kind, ObstacleKind::Bird { .. })
    }

    /// Scroll left and sway (birds only)
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
        if let ObstacleKind::Bird {
            initial_y,
            ref mut movement_phase,
            sways: true,
            ..
        } = self.kind
        {
            *movement_phase += BIRD_SWAY_STEP;
            self.y = initial_y + movement_phase.sin() * BIRD_SWAY;
        }
    }

    /// Fully past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Background cloud (scenery only, never collides)
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

/// Particle flavors (color lookup lives in the renderer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Jump puff, fades with remaining life
    Dust,
    /// Crash burst, solid red
    Explosion,
}

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: ParticleKind,
    /// Remaining ticks
    pub life: u32,
    pub max_life: u32,
    pub size: f32,
}

impl Particle {
    /// Remaining life as a 0-1 fraction
    pub fn life_fraction(&self) -> f32 {
        if self.max_life == 0 {
            0.0
        } else {
            self.life as f32 / self.max_life as f32
        }
    }
}

/// Default cap on live particles
pub const MAX_PARTICLES: usize = 200;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance knobs
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Scoring ticks survived; the score is derived from this count
    pub score_ticks: u64,
    /// Current scroll speed (derived from score)
    pub speed: f32,
    /// The player
    pub dino: Dino,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Scenery, oldest first
    pub clouds: Vec<Cloud>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Ticks since the last obstacle spawn
    pub obstacle_timer: u32,
    /// Ticks since the last extra cloud
    pub cloud_timer: u32,
    /// Simulation ticks in the current run
    pub frame_count: u64,
    /// Particle budget (from settings)
    pub max_particles: usize,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            speed: tuning.base_speed,
            tuning,
            phase: GamePhase::Waiting,
            score_ticks: 0,
            dino: Dino::new(),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            particles: Vec::new(),
            obstacle_timer: 0,
            cloud_timer: 0,
            frame_count: 0,
            max_particles: MAX_PARTICLES,
            rng: Pcg32::seed_from_u64(seed),
        };

        for _ in 0..state.tuning.initial_clouds {
            let cloud = spawn::scattered_cloud(&mut state.rng);
            state.clouds.push(cloud);
        }

        state
    }

    /// Fractional score
    pub fn score(&self) -> f64 {
        self.score_ticks as f64 * self.tuning.score_per_tick
    }

    /// Whole score as shown on the HUD
    pub fn display_score(&self) -> u32 {
        self.score().max(0.0).floor() as u32
    }

    /// Handle a jump intent. Drives the phase machine:
    /// Waiting starts the run, Playing jumps, GameOver resets.
    pub fn press_jump(&mut self) -> Option<GameEvent> {
        match self.phase {
            GamePhase::Waiting => {
                self.phase = GamePhase::Playing;
                Some(GameEvent::Started)
            }
            GamePhase::Playing => self.jump().then_some(GameEvent::Jumped),
            GamePhase::GameOver => {
                self.reset();
                Some(GameEvent::Reset)
            }
        }
    }

    /// Set the duck flag (level-triggered, takes effect on the next tick)
    pub fn set_ducking(&mut self, ducking: bool) {
        self.dino.ducking = ducking;
    }

    /// Jump if grounded, kicking up a dust puff at the dino's feet
    pub fn jump(&mut self) -> bool {
        if !self.dino.jump(self.tuning.jump_power) {
            return false;
        }
        let feet = self.dino.feet();
        spawn::dust_puff(self, feet);
        true
    }

    /// Playing -> GameOver with a burst at the dino's center
    pub fn crash(&mut self) {
        self.phase = GamePhase::GameOver;
        let center = self.dino.center();
        spawn::explosion(self, center);
    }

    /// Back to Waiting with a fresh run (clouds are scenery and stay)
    pub fn reset(&mut self) {
        self.phase = GamePhase::Waiting;
        self.score_ticks = 0;
        self.speed = self.tuning.base_speed;
        self.obstacles.clear();
        self.particles.clear();
        self.dino = Dino::new();
        self.obstacle_timer = 0;
        self.frame_count = 0;
    }

    /// Add a particle unless the budget is exhausted
    pub fn push_particle(&mut self, particle: Particle) {
        if self.particles.len() < self.max_particles {
            self.particles.push(particle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_waiting_with_clouds() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.phase, GamePhase::Waiting);
        assert_eq!(state.clouds.len(), 3);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.speed, 8.0);
    }

    #[test]
    fn test_phase_cycle() {
        let mut state = GameState::new(7, Tuning::default());
        assert_eq!(state.press_jump(), Some(GameEvent::Started));
        assert_eq!(state.phase, GamePhase::Playing);
        // First jump in Playing actually jumps
        assert_eq!(state.press_jump(), Some(GameEvent::Jumped));
        assert!(state.dino.jumping);
        assert_eq!(state.dino.vel_y, -16.0);
        // Airborne: no double jump
        assert_eq!(state.press_jump(), None);

        state.crash();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.press_jump(), Some(GameEvent::Reset));
        assert_eq!(state.phase, GamePhase::Waiting);
    }

    #[test]
    fn test_jump_emits_dust() {
        let mut state = GameState::new(7, Tuning::default());
        state.press_jump();
        state.press_jump();
        assert_eq!(state.particles.len(), 5);
        assert!(state.particles.iter().all(|p| p.kind == ParticleKind::Dust));
    }

    #[test]
    fn test_crash_emits_explosion() {
        let mut state = GameState::new(7, Tuning::default());
        state.press_jump();
        state.crash();
        assert_eq!(state.particles.len(), 15);
        assert!(state.particles.iter().all(|p| p.kind == ParticleKind::Explosion));
    }

    #[test]
    fn test_reset_restores_initial_run() {
        let mut state = GameState::new(7, Tuning::default());
        state.press_jump();
        state.score_ticks = 2100;
        state.speed = 17.0;
        state.obstacles.push(Obstacle::cactus(300.0));
        state.dino.ducking = true;
        state.dino.y = 120.0;
        state.dino.vel_y = -4.0;
        state.dino.jumping = true;
        state.obstacle_timer = 33;
        state.frame_count = 900;
        state.crash();

        state.press_jump();
        assert_eq!(state.score_ticks, 0);
        assert_eq!(state.score(), 0.0);
        assert_eq!(state.speed, 8.0);
        assert!(state.obstacles.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.dino, Dino::new());
        assert_eq!(state.dino.x, 80.0);
        assert_eq!(state.dino.y, 300.0);
        assert_eq!(state.obstacle_timer, 0);
        assert_eq!(state.frame_count, 0);
        assert_eq!(state.clouds.len(), 3);
    }

    #[test]
    fn test_particle_budget_is_respected() {
        let mut state = GameState::new(7, Tuning::default());
        state.max_particles = 4;
        state.press_jump();
        state.press_jump();
        assert_eq!(state.particles.len(), 4);
    }

    #[test]
    fn test_dino_lands_and_ducks() {
        let mut dino = Dino::new();
        assert!(dino.jump(16.0));
        dino.step(0.8);
        assert!(dino.y < DINO_GROUND_Y);
        for _ in 0..100 {
            dino.step(0.8);
        }
        assert_eq!(dino.y, DINO_GROUND_Y);
        assert!(!dino.jumping);

        dino.ducking = true;
        dino.step(0.8);
        assert_eq!(dino.height, DINO_DUCK_HEIGHT);
        assert_eq!(dino.y, DINO_DUCK_Y);

        dino.ducking = false;
        dino.step(0.8);
        assert_eq!(dino.height, DINO_HEIGHT);
        assert_eq!(dino.y, DINO_GROUND_Y);
    }

    #[test]
    fn test_swaying_bird_moves_vertically() {
        let mut bird = Obstacle::bird(800.0, 250.0, 0.0, true);
        bird.advance(8.0);
        assert_eq!(bird.x, 792.0);
        assert!((bird.y - (250.0 + (0.05f32).sin() * 30.0)).abs() < 1e-4);

        let mut still = Obstacle::bird(800.0, 200.0, 1.0, false);
        still.advance(8.0);
        assert_eq!(still.y, 200.0);
    }
}
