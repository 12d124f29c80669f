use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent};

/// Current input state for the window.
///
/// Holds "is down" information and current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck keys/buttons when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                    frame.key_presses.push(*key);
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((*x, *y));

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x,
            y,
        })
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn press_records_transition_and_stream() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, key(Key::ArrowRight, KeyState::Pressed, false));
        assert!(s.key_down(Key::ArrowRight));
        assert!(f.keys_pressed.contains(&Key::ArrowRight));
        assert_eq!(f.key_presses, vec![Key::ArrowRight]);
        assert_eq!(f.events.len(), 1);
    }

    #[test]
    fn repeats_reach_stream_but_not_transition_set() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, key(Key::ArrowLeft, KeyState::Pressed, false));
        f.clear();
        s.apply_event(&mut f, key(Key::ArrowLeft, KeyState::Pressed, true));
        s.apply_event(&mut f, key(Key::ArrowLeft, KeyState::Pressed, true));
        assert!(f.keys_pressed.is_empty());
        assert_eq!(f.key_presses, vec![Key::ArrowLeft, Key::ArrowLeft]);
    }

    #[test]
    fn release_clears_down_state() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, key(Key::Enter, KeyState::Pressed, false));
        s.apply_event(&mut f, key(Key::Enter, KeyState::Released, false));
        assert!(!s.key_down(Key::Enter));
        assert!(f.keys_released.contains(&Key::Enter));
    }

    #[test]
    fn release_without_press_is_not_a_transition() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, key(Key::Escape, KeyState::Released, false));
        assert!(f.keys_released.is_empty());
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn button_updates_pointer_position() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, button(MouseButtonState::Pressed, 10.0, 20.0));
        assert_eq!(s.pointer_pos, Some((10.0, 20.0)));
        assert!(s.button_down(MouseButton::Left));
        s.apply_event(&mut f, button(MouseButtonState::Released, 11.0, 21.0));
        assert!(f.buttons_released.contains(&MouseButton::Left));
    }

    #[test]
    fn pointer_left_forgets_position() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, InputEvent::PointerMoved { x: 1.0, y: 2.0 });
        s.apply_event(&mut f, InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
    }

    #[test]
    fn focus_loss_clears_held_state() {
        let mut s = InputState::default();
        let mut f = InputFrame::default();
        s.apply_event(&mut f, key(Key::Space, KeyState::Pressed, false));
        s.apply_event(&mut f, button(MouseButtonState::Pressed, 0.0, 0.0));
        s.apply_event(&mut f, InputEvent::Focused(false));
        assert!(s.keys_down.is_empty());
        assert!(s.buttons_down.is_empty());
    }
}
