//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks
//! - Input events
//! - Storage (LocalStorage on web)

pub mod input;
pub mod storage;
pub mod time;

pub use input::{InputAdapter, Intent, KeyRole};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use time::{FpsCounter, FrameClock, FrameGate};
