use std::collections::HashSet;

use super::frame::InputFrame;
use super::snapshot::DirectionSnapshot;
use super::types::{InputEvent, Key, KeyState};

/// Current keyboard state for the window.
///
/// Holds "is down" information; per-frame transitions are recorded into an
/// `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Whether the window is focused.
    pub focused: bool,
}

impl InputState {
    /// Applies a platform-agnostic input event and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // On focus loss, clear the "down" set. Avoids stuck
                    // movement keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(key) {
                        frame.keys_pressed.insert(key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(&key) {
                        frame.keys_released.insert(key);
                    }
                }
            },
        }
    }

    /// Whether `key` is currently held.
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Captures the held directional keys.
    ///
    /// WASD and the arrow keys both map to directions.
    pub fn directions(&self) -> DirectionSnapshot {
        DirectionSnapshot {
            up: self.key_down(Key::W) || self.key_down(Key::ArrowUp),
            down: self.key_down(Key::S) || self.key_down(Key::ArrowDown),
            left: self.key_down(Key::A) || self.key_down(Key::ArrowLeft),
            right: self.key_down(Key::D) || self.key_down(Key::ArrowRight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    fn release(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Released, repeat: false }
    }

    // ── press/release transitions ─────────────────────────────────────────

    #[test]
    fn press_sets_key_down_and_records_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::W));

        assert!(state.key_down(Key::W));
        assert!(frame.keys_pressed.contains(&Key::W));
        assert!(frame.keys_released.is_empty());
    }

    #[test]
    fn repeat_press_does_not_record_a_second_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::W));
        frame.clear();
        state.apply_event(&mut frame, press(Key::W));

        assert!(state.key_down(Key::W));
        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn release_clears_key_down_and_records_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::D));
        state.apply_event(&mut frame, release(Key::D));

        assert!(!state.key_down(Key::D));
        assert!(frame.keys_released.contains(&Key::D));
    }

    #[test]
    fn release_without_press_records_nothing() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, release(Key::D));

        assert!(frame.keys_released.is_empty());
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::W));
        state.apply_event(&mut frame, press(Key::D));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.key_down(Key::W));
        assert!(!state.key_down(Key::D));
        assert!(!state.focused);
    }

    // ── direction snapshot ────────────────────────────────────────────────

    #[test]
    fn directions_from_wasd() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::W));
        state.apply_event(&mut frame, press(Key::A));

        let held = state.directions();
        assert!(held.up && held.left);
        assert!(!held.down && !held.right);
    }

    #[test]
    fn directions_from_arrow_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press(Key::ArrowDown));
        state.apply_event(&mut frame, press(Key::ArrowRight));

        let held = state.directions();
        assert!(held.down && held.right);
        assert!(!held.up && !held.left);
    }

    #[test]
    fn directions_empty_when_nothing_held() {
        let state = InputState::default();
        assert!(!state.directions().any());
    }
}
