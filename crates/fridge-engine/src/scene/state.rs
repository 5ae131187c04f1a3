use std::time::Duration;

use crate::coords::Vec2;
use crate::input::DirectionSnapshot;

/// Position and speed of the demo's single sprite.
///
/// Movement is per-axis: each held direction adjusts its own axis
/// independently, so opposite directions cancel and two perpendicular
/// directions move the sprite along the diagonal faster than along either
/// axis (by a factor of √2). Position is not clamped to the viewport; the
/// sprite may leave the screen indefinitely.
#[derive(Debug, Clone)]
pub struct SceneState {
    position: Vec2,
    velocity_scale: f32,
}

impl SceneState {
    /// Creates a scene with the sprite at `origin`, moving at
    /// `velocity_scale` logical pixels per second per held direction.
    pub fn new(origin: Vec2, velocity_scale: f32) -> Self {
        debug_assert!(origin.is_finite());
        debug_assert!(velocity_scale.is_finite());
        Self {
            position: origin,
            velocity_scale,
        }
    }

    /// Current sprite position in logical pixels.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Advances the sprite by one frame.
    ///
    /// Screen space, +Y down: "up" decreases y, "down" increases y. A zero
    /// `delta` (or no held direction) leaves the position unchanged.
    pub fn advance(&mut self, delta: Duration, held: DirectionSnapshot) {
        let increment = self.velocity_scale * delta.as_secs_f32();

        if held.up {
            self.position.y -= increment;
        }
        if held.left {
            self.position.x -= increment;
        }
        if held.down {
            self.position.y += increment;
        }
        if held.right {
            self.position.x += increment;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene(speed: f32) -> SceneState {
        SceneState::new(Vec2::zero(), speed)
    }

    fn held(up: bool, down: bool, left: bool, right: bool) -> DirectionSnapshot {
        DirectionSnapshot { up, down, left, right }
    }

    const HALF_SECOND: Duration = Duration::from_millis(500);

    // ── single axis ───────────────────────────────────────────────────────

    #[test]
    fn single_direction_moves_one_axis_only() {
        let mut s = scene(2.0);
        s.advance(HALF_SECOND, held(false, false, false, true));

        assert_eq!(s.position(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn up_decreases_y() {
        let mut s = scene(2.0);
        s.advance(HALF_SECOND, held(true, false, false, false));

        assert_eq!(s.position(), Vec2::new(0.0, -1.0));
    }

    // ── cancellation and diagonals ────────────────────────────────────────

    #[test]
    fn opposite_directions_cancel() {
        let mut s = scene(3.0);
        s.advance(HALF_SECOND, held(true, true, false, false));

        assert_eq!(s.position(), Vec2::zero());
    }

    #[test]
    fn perpendicular_directions_move_both_axes_by_the_full_increment() {
        // Per-axis updates are independent, so the diagonal step is
        // √2 × the single-axis step. Deliberately not normalized.
        let mut s = scene(2.0);
        s.advance(HALF_SECOND, held(false, true, false, true));

        assert_eq!(s.position(), Vec2::new(1.0, 1.0));
    }

    // ── degenerate inputs ─────────────────────────────────────────────────

    #[test]
    fn zero_delta_never_moves() {
        let mut s = scene(100.0);
        s.advance(Duration::ZERO, held(true, true, true, true));

        assert_eq!(s.position(), Vec2::zero());
    }

    #[test]
    fn no_held_direction_never_moves() {
        let mut s = scene(100.0);
        s.advance(HALF_SECOND, DirectionSnapshot::default());

        assert_eq!(s.position(), Vec2::zero());
    }

    // ── end-to-end scenario ───────────────────────────────────────────────

    #[test]
    fn three_half_second_frames_holding_right() {
        let mut s = scene(1.0);
        for _ in 0..3 {
            s.advance(HALF_SECOND, held(false, false, false, true));
        }

        assert_eq!(s.position(), Vec2::new(1.5, 0.0));
    }
}
