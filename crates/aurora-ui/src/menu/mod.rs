//! Menu model: items, state, reducer and animated layout.

mod item;
mod layout;
mod state;

pub use item::{ItemId, MenuItem, MENU_ITEMS};
pub use layout::{
    overlay_translation, CameraTween, ItemRect, MenuLayout, ITEM_SIZE, OVERLAY_OFFSET_X, TWEEN_SECS,
};
pub use state::{reduce, Focus, MenuEvent, MenuState, ESCAPE_CAMERA, INITIAL_CAMERA};
