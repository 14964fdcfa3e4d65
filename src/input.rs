//! Input adapter
//!
//! Raw host events write latched signals here; the tick reads them once at
//! its start through `signals`. Events that arrive during tick N are seen at
//! tick N+1.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Parse a DOM-style key name, including the legacy `Left`/`Right` aliases
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowRight" | "Right" => Some(Key::Right),
            "ArrowLeft" | "Left" => Some(Key::Left),
            _ => None,
        }
    }
}

/// Latched input state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    left_held: bool,
    right_held: bool,
    /// Last pointer x since the previous tick
    pointer_x: Option<f32>,
    autopilot: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set_held(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set_held(key, false);
    }

    /// Key-down by name; returns false for keys the game ignores
    pub fn on_key_down(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.key_down(key);
                true
            }
            None => false,
        }
    }

    /// Key-up by name; returns false for keys the game ignores
    pub fn on_key_up(&mut self, name: &str) -> bool {
        match Key::from_name(name) {
            Some(key) => {
                self.key_up(key);
                true
            }
            None => false,
        }
    }

    /// Pointer moved to a canvas-relative x
    pub fn on_pointer_move(&mut self, canvas_x: f32) {
        if canvas_x.is_finite() {
            self.pointer_x = Some(canvas_x);
        }
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left_held,
            Key::Right => self.right_held,
        }
    }

    /// Signals for the next tick. Held keys persist; the pointer latch is consumed.
    pub fn signals(&mut self) -> TickInput {
        TickInput {
            left: self.left_held,
            right: self.right_held,
            pointer_x: self.pointer_x.take(),
            autopilot: self.autopilot,
        }
    }

    /// Release every latch (keys, pointer); autopilot is kept
    pub fn clear(&mut self) {
        self.left_held = false;
        self.right_held = false;
        self.pointer_x = None;
    }

    fn set_held(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.left_held = held,
            Key::Right => self.right_held = held,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("Left"), Some(Key::Left));
        assert_eq!(Key::from_name("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_name("Right"), Some(Key::Right));
        assert_eq!(Key::from_name("ArrowUp"), None);
        assert_eq!(Key::from_name("arrowleft"), None);
    }

    #[test]
    fn test_held_keys_persist_across_ticks() {
        let mut input = InputAdapter::new();
        assert!(input.on_key_down("ArrowRight"));
        assert!(!input.on_key_down("Space"));

        assert!(input.signals().right);
        assert!(input.signals().right);

        assert!(input.on_key_up("Right"));
        let signals = input.signals();
        assert!(!signals.right);
        assert!(!signals.left);
    }

    #[test]
    fn test_both_directions_latch_independently() {
        let mut input = InputAdapter::new();
        input.key_down(Key::Left);
        input.key_down(Key::Right);
        let signals = input.signals();
        assert!(signals.left && signals.right);

        input.key_up(Key::Right);
        assert!(input.is_held(Key::Left));
        assert!(!input.is_held(Key::Right));
    }

    #[test]
    fn test_pointer_is_consumed_once() {
        let mut input = InputAdapter::new();
        input.on_pointer_move(120.0);
        input.on_pointer_move(150.0);
        assert_eq!(input.signals().pointer_x, Some(150.0));
        assert_eq!(input.signals().pointer_x, None);

        input.on_pointer_move(f32::NAN);
        assert_eq!(input.signals().pointer_x, None);
    }

    #[test]
    fn test_clear_keeps_autopilot() {
        let mut input = InputAdapter::new();
        input.set_autopilot(true);
        input.key_down(Key::Left);
        input.on_pointer_move(10.0);
        input.clear();

        let signals = input.signals();
        assert_eq!(
            signals,
            TickInput {
                autopilot: true,
                ..Default::default()
            }
        );
    }
}
