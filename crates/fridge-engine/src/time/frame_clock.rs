use std::thread;
use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Elapsed wall time since the previous tick.
    pub delta: Duration,

    /// `delta` in seconds, for scaling time-dependent updates.
    pub dt: f32,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Measures per-frame elapsed time and enforces a frame-rate cap by sleeping.
///
/// `tick()` must be called exactly once per loop iteration, before any
/// time-dependent update; `sleep_remainder()` runs after the frame's work to
/// burn off the unused part of the frame budget. The cap is a simple per-frame
/// bound: an overrunning frame is not compensated on later frames, and no
/// frames are skipped.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    target: Duration,
    frame_index: u64,
}

impl FrameClock {
    /// Creates a clock with the given frame budget.
    ///
    /// Panics if `target` is zero.
    pub fn new(target: Duration) -> Self {
        assert!(!target.is_zero(), "frame budget must be positive");
        Self {
            last: Instant::now(),
            target,
            frame_index: 0,
        }
    }

    /// Creates a clock capped at `fps` frames per second.
    ///
    /// Panics if `fps` is zero.
    pub fn with_fps_cap(fps: u32) -> Self {
        assert!(fps > 0, "fps cap must be positive");
        Self::new(Duration::from_secs(1) / fps)
    }

    /// The configured frame budget.
    pub fn target(&self) -> Duration {
        self.target
    }

    /// Resets the clock baseline.
    ///
    /// Useful when resuming from suspension, so the next delta does not span
    /// the pause.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    ///
    /// Convention for the very first tick: the delta measures from clock
    /// construction (or the last [`reset`](Self::reset)). There is no
    /// synthetic zero delta.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last);
        self.last = now;

        let ft = FrameTime {
            delta,
            dt: delta.as_secs_f32(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Sleeps out whatever is left of the frame budget after `delta`.
    ///
    /// A frame that already overran its budget returns immediately; the
    /// overrun is not carried into later frames. An early wakeup from the OS
    /// is accepted as-is.
    pub fn sleep_remainder(&self, delta: Duration) {
        let remaining = self.target.saturating_sub(delta);
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: Duration = Duration::from_millis(30);

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn tick_increments_frame_index() {
        let mut clock = FrameClock::new(TARGET);
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn tick_measures_elapsed_time() {
        let mut clock = FrameClock::new(TARGET);
        clock.tick();
        thread::sleep(Duration::from_millis(10));
        let ft = clock.tick();
        assert!(ft.delta >= Duration::from_millis(10));
        assert!(ft.dt >= 0.010);
    }

    #[test]
    fn reset_rebaselines_the_delta() {
        let mut clock = FrameClock::new(TARGET);
        thread::sleep(Duration::from_millis(50));
        clock.reset();
        let ft = clock.tick();
        // The sleep before reset() must not show up in the delta.
        assert!(ft.delta < Duration::from_millis(50));
    }

    // ── sleep_remainder ───────────────────────────────────────────────────

    #[test]
    fn sleep_remainder_sleeps_out_the_budget() {
        let clock = FrameClock::new(TARGET);
        let before = Instant::now();
        clock.sleep_remainder(Duration::from_millis(5));
        // thread::sleep guarantees at least the requested duration.
        assert!(before.elapsed() >= Duration::from_millis(25));
    }

    #[test]
    fn sleep_remainder_returns_immediately_on_overrun() {
        let clock = FrameClock::new(TARGET);
        let before = Instant::now();
        clock.sleep_remainder(Duration::from_millis(45));
        assert!(before.elapsed() < TARGET);
    }

    #[test]
    fn sleep_remainder_exact_budget_does_not_sleep() {
        let clock = FrameClock::new(TARGET);
        let before = Instant::now();
        clock.sleep_remainder(TARGET);
        assert!(before.elapsed() < TARGET);
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn with_fps_cap_derives_the_budget() {
        let clock = FrameClock::with_fps_cap(60);
        assert_eq!(clock.target(), Duration::from_secs(1) / 60);
    }

    #[test]
    #[should_panic(expected = "frame budget must be positive")]
    fn zero_target_panics() {
        let _ = FrameClock::new(Duration::ZERO);
    }
}
