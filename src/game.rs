//! Game context
//!
//! Owns everything one running game needs: the world state, the best score and
//! its store, the HUD, input tracking and the frame clock. The host feeds it raw
//! input events and animation-frame timestamps; nothing here is global.

use crate::format_score;
use crate::highscores::BestScore;
use crate::hud::Hud;
use crate::platform::input::key_role;
use crate::platform::{FpsCounter, FrameClock, FrameGate, InputAdapter, Intent, KeyValueStore};
use crate::renderer::{Surface, scene};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

pub struct Game<S, H> {
    state: GameState,
    best: BestScore<S>,
    hud: H,
    settings: Settings,
    input: InputAdapter,
    clock: FrameClock,
    fps: FpsCounter,
    autopilot: bool,
}

impl<S: KeyValueStore, H: Hud> Game<S, H> {
    pub fn new(seed: u64, tuning: Tuning, settings: Settings, store: S, hud: H) -> Self {
        let mut state = GameState::new(seed, tuning);
        state.max_particles = settings.max_particles();

        let mut game = Self {
            state,
            best: BestScore::load(store),
            hud,
            settings,
            input: InputAdapter::new(),
            clock: FrameClock::default(),
            fps: FpsCounter::default(),
            autopilot: false,
        };

        game.hud.set_best(&format_score(game.best.get()));
        game.hud.set_score(&format_score(0));
        game.hud.set_hint_visible(true);
        game.hud.set_game_over_visible(false);
        game.hud.set_fps(None);

        log::info!("Game initialized with seed {}", seed);
        game
    }

    /// Apply an intent immediately
    pub fn handle_intent(&mut self, intent: Intent) -> Option<GameEvent> {
        match intent {
            Intent::Jump => {
                let event = self.state.press_jump()?;
                self.on_event(event);
                Some(event)
            }
            Intent::DuckStart => {
                self.state.set_ducking(true);
                None
            }
            Intent::DuckEnd => {
                self.state.set_ducking(false);
                None
            }
        }
    }

    /// Key pressed. Returns true if the key is bound (the host should then
    /// suppress its default action), even when a repeat was swallowed.
    pub fn key_down(&mut self, code: &str, key: &str) -> bool {
        let bound = key_role(code, key).is_some();
        if let Some(intent) = self.input.key_down(code, key) {
            self.handle_intent(intent);
        }
        bound
    }

    /// Key released. Returns true if the key is bound.
    pub fn key_up(&mut self, code: &str, key: &str) -> bool {
        let bound = key_role(code, key).is_some();
        if let Some(intent) = self.input.key_up(code, key) {
            self.handle_intent(intent);
        }
        bound
    }

    pub fn pointer_down(&mut self) -> Option<GameEvent> {
        let intent = self.input.pointer_down();
        self.handle_intent(intent)
    }

    pub fn touch_start(&mut self) -> Option<GameEvent> {
        let intent = self.input.touch_start();
        self.handle_intent(intent)
    }

    /// Animation frame callback: at most one tick, at most one paint
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl Surface) -> FrameGate {
        let gate = self.clock.advance(now_ms);

        if self.settings.show_fps {
            self.fps.record(now_ms);
            self.hud.set_fps(Some(self.fps.fps()));
        }

        if gate.step {
            self.step();
        }
        if gate.draw {
            scene::paint(&mut self.state, &self.settings, surface);
        }
        gate
    }

    /// Run one simulation tick and push the score to the HUD
    pub fn step(&mut self) -> Option<GameEvent> {
        if self.state.phase != GamePhase::Playing {
            return None;
        }

        let input = TickInput {
            autopilot: self.autopilot,
        };
        let event = tick(&mut self.state, &input);
        self.hud.set_score(&format_score(self.state.display_score()));
        if let Some(event) = event {
            self.on_event(event);
        }
        event
    }

    /// HUD and persistence side of a phase change
    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Started => {
                log::info!("Game started");
                self.hud.set_hint_visible(false);
                self.hud.set_game_over_visible(false);
            }
            GameEvent::Jumped => {}
            GameEvent::Crashed { score } => {
                log::info!("Game over at score {}", score);
                self.hud.set_game_over_visible(true);
                if self.best.submit(score) {
                    log::info!("New best score {}", score);
                    self.hud.set_best(&format_score(score));
                }
            }
            GameEvent::Reset => {
                log::info!("Game reset");
                self.hud.set_hint_visible(true);
                self.hud.set_game_over_visible(false);
                self.hud.set_score(&format_score(0));
            }
        }
    }

    /// Let the bot play (jumps are decided inside the tick)
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn best_score(&self) -> u32 {
        self.best.get()
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }
}
