//! HUD collaborators
//!
//! The score readouts and the two overlays (start hint, game over banner) live
//! outside the canvas. The game pushes updates through `Hud`; the browser build
//! backs it with DOM elements, native runs and tests with `HeadlessHud`.

/// Text and visibility sinks the game drives
pub trait Hud {
    /// Current score, already formatted
    fn set_score(&mut self, text: &str);
    /// Best score, already formatted
    fn set_best(&mut self, text: &str);
    /// "Press space to start" hint
    fn set_hint_visible(&mut self, visible: bool);
    /// Game over banner
    fn set_game_over_visible(&mut self, visible: bool);
    /// Frames per second readout (`None` hides it)
    fn set_fps(&mut self, _fps: Option<u32>) {}
}

/// A HUD that just remembers what it was told
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessHud {
    pub score: String,
    pub best: String,
    pub hint_visible: bool,
    pub game_over_visible: bool,
    pub fps: Option<u32>,
    /// Number of score writes (one per simulation tick)
    pub score_updates: u64,
}

impl Hud for HeadlessHud {
    fn set_score(&mut self, text: &str) {
        self.score.clear();
        self.score.push_str(text);
        self.score_updates += 1;
    }

    fn set_best(&mut self, text: &str) {
        self.best.clear();
        self.best.push_str(text);
    }

    fn set_hint_visible(&mut self, visible: bool) {
        self.hint_visible = visible;
    }

    fn set_game_over_visible(&mut self, visible: bool) {
        self.game_over_visible = visible;
    }

    fn set_fps(&mut self, fps: Option<u32>) {
        self.fps = fps;
    }
}
