use std::collections::HashSet;

use super::types::Key;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys); `InputFrame` provides
/// the transitions that happened during the current frame. The runtime clears
/// it after each frame callback.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys that went down this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys that went up this frame.
    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }
}
