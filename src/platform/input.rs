//! Input adapter
//!
//! Maps raw keyboard / pointer / touch events onto the two things the game
//! understands: jump (edge-triggered) and duck (held). Key-repeat from the OS
//! is swallowed so holding jump does not bounce the dino.

/// A device-independent input signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Jump,
    DuckStart,
    DuckEnd,
}

/// What a key is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Jump,
    Duck,
}

/// Classify a key by its physical `code` and logical `key` value
pub fn key_role(code: &str, key: &str) -> Option<KeyRole> {
    match (code, key) {
        ("Space" | "ArrowUp", _) => Some(KeyRole::Jump),
        ("ArrowDown", _) | (_, "s" | "S") => Some(KeyRole::Duck),
        _ => None,
    }
}

/// Tracks which bound keys are held
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    jump_held: bool,
    duck_held: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key pressed (or auto-repeated). Returns an intent only on the first press.
    pub fn key_down(&mut self, code: &str, key: &str) -> Option<Intent> {
        match key_role(code, key)? {
            KeyRole::Jump if !self.jump_held => {
                self.jump_held = true;
                Some(Intent::Jump)
            }
            KeyRole::Duck if !self.duck_held => {
                self.duck_held = true;
                Some(Intent::DuckStart)
            }
            _ => None,
        }
    }

    /// Key released. Releasing a duck key always ends the duck.
    pub fn key_up(&mut self, code: &str, key: &str) -> Option<Intent> {
        match key_role(code, key)? {
            KeyRole::Jump => {
                self.jump_held = false;
                None
            }
            KeyRole::Duck => {
                self.duck_held = false;
                Some(Intent::DuckEnd)
            }
        }
    }

    /// Mouse button / pointer down. These never repeat.
    pub fn pointer_down(&mut self) -> Intent {
        Intent::Jump
    }

    /// Touch start, same as a pointer press
    pub fn touch_start(&mut self) -> Intent {
        Intent::Jump
    }
}
