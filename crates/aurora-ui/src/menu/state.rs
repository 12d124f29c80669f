use aurora_engine::input::Key;
use glam::Vec2;

use super::item::{ItemId, MENU_ITEMS};

/// Camera position before any interaction.
pub const INITIAL_CAMERA: Vec2 = Vec2::new(0.0, -100.0);

/// Camera position after Escape.
pub const ESCAPE_CAMERA: Vec2 = Vec2::new(0.0, -150.0);

/// Which entry keyboard navigation is anchored to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Focus {
    /// No item focused yet; sits "before" the first item.
    Center,
    Item(ItemId),
}

impl Focus {
    fn item(self) -> Option<ItemId> {
        match self {
            Focus::Center => None,
            Focus::Item(id) => Some(id),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MenuState {
    pub focus: Focus,
    pub selected: Option<ItemId>,
    /// Overlay camera target, logical px.
    pub camera: Vec2,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            focus: Focus::Center,
            selected: None,
            camera: INITIAL_CAMERA,
        }
    }
}

impl MenuState {
    pub fn is_focused(&self, id: ItemId) -> bool {
        self.focus == Focus::Item(id)
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected == Some(id)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MenuEvent {
    Key(Key),
    PointerEnter(ItemId),
    Click(ItemId),
}

/// Applies one event to `state`.
pub fn reduce(state: MenuState, event: MenuEvent) -> MenuState {
    match event {
        MenuEvent::Key(Key::ArrowLeft) => step_focus(state, -1),
        MenuEvent::Key(Key::ArrowRight) => step_focus(state, 1),

        MenuEvent::Key(Key::Enter) => MenuState {
            selected: state.focus.item(),
            ..state
        },

        MenuEvent::Key(Key::Escape) => MenuState {
            focus: Focus::Item(ItemId::Game),
            selected: None,
            camera: ESCAPE_CAMERA,
        },

        MenuEvent::Key(_) => state,

        MenuEvent::PointerEnter(id) => MenuState {
            focus: Focus::Item(id),
            camera: id.item().position,
            ..state
        },

        MenuEvent::Click(id) => MenuState {
            selected: Some(id),
            ..state
        },
    }
}

/// Moves focus by `delta`, clamped to the item range. Center counts as index -1.
fn step_focus(state: MenuState, delta: isize) -> MenuState {
    let current = state.focus.item().map_or(-1, |id| id.index() as isize);
    let last = MENU_ITEMS.len() as isize - 1;
    let next = (current + delta).clamp(0, last) as usize;

    let Some(id) = ItemId::from_index(next) else { return state };
    if state.focus == Focus::Item(id) {
        return state;
    }

    MenuState {
        focus: Focus::Item(id),
        camera: id.item().position,
        ..state
    }
}
