//! Keyboard state tracking.
//!
//! The client translates window-system key codes into [`Key`]s; everything the engine does not
//! bind is collapsed into [`Key::Other`].

use fxhash::FxHashSet;

/// Keys the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftCtrl,
    RightCtrl,
    Q,
    Escape,
    Other,
}

/// The current state of the keyboard.
#[derive(Debug, Default)]
pub struct KeyboardState {
    pub down: FxHashSet<Key>,
    pub pressed: FxHashSet<Key>,
}

impl KeyboardState {
    /// Forgets the keys pressed during the previous frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn key_down(&mut self, key: Key) {
        if self.down.insert(key) {
            self.pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.down.remove(&key);
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    /// Left Ctrl + Q closes the window.
    pub fn quit_requested(&self) -> bool {
        self.is_down(Key::LeftCtrl) && self.is_down(Key::Q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_chord() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Key::Q);
        assert!(!keyboard.quit_requested());
        keyboard.key_down(Key::LeftCtrl);
        assert!(keyboard.quit_requested());
        keyboard.key_up(Key::Q);
        assert!(!keyboard.quit_requested());
    }

    #[test]
    fn test_right_ctrl_does_not_quit() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Key::RightCtrl);
        keyboard.key_down(Key::Q);
        assert!(!keyboard.quit_requested());
    }

    #[test]
    fn test_pressed_is_per_frame() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Key::Escape);
        assert!(keyboard.pressed.contains(&Key::Escape));

        keyboard.begin_frame();
        // a held key repeating does not count as a new press
        keyboard.key_down(Key::Escape);
        assert!(keyboard.pressed.is_empty());
        assert!(keyboard.is_down(Key::Escape));
    }
}
