//! Turns engine input into menu events.

use aurora_engine::input::{
    InputEvent, InputFrame, InputState, Key, MouseButton, MouseButtonState, PointerButtonEvent,
};
use glam::Vec2;

use crate::menu::{ItemId, MenuEvent, MenuLayout};

/// Tracks which item the pointer is over, and which item a pending press
/// started on, between frames.
#[derive(Debug, Default)]
pub struct MenuInput {
    hovered: Option<ItemId>,
    pressed_on: Option<ItemId>,
}

impl MenuInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item currently under the pointer.
    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    /// Collects this frame's menu events in order: keys first, then pointer.
    ///
    /// `PointerEnter` fires once when the pointer crosses into an item;
    /// `Click` fires when the primary button is pressed and released over the
    /// same item.
    pub fn collect(
        &mut self,
        layout: &MenuLayout,
        input: &InputState,
        frame: &InputFrame,
    ) -> Vec<MenuEvent> {
        let mut events: Vec<MenuEvent> = frame
            .key_presses
            .iter()
            .copied()
            .filter(|k| is_menu_key(*k))
            .map(MenuEvent::Key)
            .collect();

        let hovered = input
            .pointer_pos
            .and_then(|(x, y)| layout.hit(Vec2::new(x, y)));

        if let Some(id) = hovered {
            if self.hovered != Some(id) {
                events.push(MenuEvent::PointerEnter(id));
            }
        }
        self.hovered = hovered;

        for ev in &frame.events {
            let InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                x,
                y,
            }) = ev
            else {
                continue;
            };

            let under = layout.hit(Vec2::new(*x, *y));
            match state {
                MouseButtonState::Pressed => self.pressed_on = under,
                MouseButtonState::Released => {
                    if let Some(id) = under {
                        if self.pressed_on == Some(id) {
                            events.push(MenuEvent::Click(id));
                        }
                    }
                    self.pressed_on = None;
                }
            }
        }

        events
    }
}

fn is_menu_key(key: Key) -> bool {
    matches!(key, Key::ArrowLeft | Key::ArrowRight | Key::Enter | Key::Escape)
}
