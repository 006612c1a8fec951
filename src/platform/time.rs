//! Frame timing
//!
//! The host calls us once per display refresh. `FrameClock` turns the
//! callback timestamps into a go / no-go for one simulation step; there is no
//! catch-up, a slow frame just means a slower run.

use crate::consts::MIN_FRAME_MS;

/// What to do this callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGate {
    /// Milliseconds since the previous callback
    pub elapsed_ms: f64,
    /// Advance the simulation by one tick
    pub step: bool,
    /// Repaint the scene
    pub draw: bool,
}

/// Gates ticks on elapsed wall time between callbacks
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time_ms: Option<f64>,
    min_step_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MIN_FRAME_MS)
    }
}

impl FrameClock {
    pub fn new(min_step_ms: f64) -> Self {
        Self {
            last_time_ms: None,
            min_step_ms,
        }
    }

    /// Register a callback at `now_ms`.
    ///
    /// The first callback only paints. Later ones step and paint when at least
    /// `min_step_ms` passed; the timestamp is recorded either way.
    pub fn advance(&mut self, now_ms: f64) -> FrameGate {
        let Some(last) = self.last_time_ms.replace(now_ms) else {
            return FrameGate {
                elapsed_ms: 0.0,
                step: false,
                draw: true,
            };
        };

        let elapsed_ms = (now_ms - last).max(0.0);
        let step = elapsed_ms >= self.min_step_ms;
        FrameGate {
            elapsed_ms,
            step,
            draw: step,
        }
    }
}

/// Rolling frames-per-second over the last 60 callbacks
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub fn record(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Slot after the newest holds the oldest sample, 59 intervals back
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                let intervals = (self.frame_times.len() - 1) as f64;
                self.fps = (intervals * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_draws_without_stepping() {
        let mut clock = FrameClock::default();
        let gate = clock.advance(1000.0);
        assert!(!gate.step);
        assert!(gate.draw);
    }

    #[test]
    fn test_steps_at_sixty_hz() {
        let mut clock = FrameClock::default();
        clock.advance(0.0);
        let gate = clock.advance(16.7);
        assert!(gate.step && gate.draw);
        assert!((gate.elapsed_ms - 16.7).abs() < 1e-9);
    }

    #[test]
    fn test_too_soon_is_skipped_but_recorded() {
        let mut clock = FrameClock::default();
        clock.advance(0.0);
        let gate = clock.advance(5.0);
        assert!(!gate.step && !gate.draw);
        // Measured from the skipped callback, not the last step
        let gate = clock.advance(10.0);
        assert!(!gate.step);
        assert!((gate.elapsed_ms - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_going_backwards_is_clamped() {
        let mut clock = FrameClock::default();
        clock.advance(100.0);
        let gate = clock.advance(50.0);
        assert_eq!(gate.elapsed_ms, 0.0);
        assert!(!gate.step);
    }

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::default();
        for i in 1..=120 {
            fps.record(i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(fps.fps(), 60);
    }
}
