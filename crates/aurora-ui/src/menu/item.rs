use std::fmt;

use aurora_engine::paint::Color;
use glam::Vec2;

/// Identifies one of the menu entries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ItemId {
    Settings,
    Game,
    Network,
}

/// Static description of a menu entry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MenuItem {
    pub id: ItemId,
    pub label: &'static str,
    /// Accent color as straight sRGB bytes.
    pub rgb: [u8; 3],
    /// Offset of the item box from the overlay center, logical px (y down).
    pub position: Vec2,
}

/// Menu entries in navigation order.
pub const MENU_ITEMS: [MenuItem; 3] = [
    MenuItem {
        id: ItemId::Settings,
        label: "Settings",
        rgb: [0x10, 0xB9, 0x81],
        position: Vec2::new(-400.0, -100.0),
    },
    MenuItem {
        id: ItemId::Game,
        label: "Game",
        rgb: [0xEF, 0x44, 0x44],
        position: Vec2::new(-200.0, -100.0),
    },
    MenuItem {
        id: ItemId::Network,
        label: "Network",
        rgb: [0x3B, 0x82, 0xF6],
        position: Vec2::new(0.0, -100.0),
    },
];

impl ItemId {
    /// Position of this item in [`MENU_ITEMS`].
    pub fn index(self) -> usize {
        match self {
            ItemId::Settings => 0,
            ItemId::Game => 1,
            ItemId::Network => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<ItemId> {
        MENU_ITEMS.get(index).map(|item| item.id)
    }

    pub fn item(self) -> &'static MenuItem {
        &MENU_ITEMS[self.index()]
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.item().label)
    }
}

impl MenuItem {
    /// Opaque accent color.
    pub fn color(&self) -> Color {
        let [r, g, b] = self.rgb;
        Color::from_srgb_u8(r, g, b, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_match_table_order() {
        for (i, item) in MENU_ITEMS.iter().enumerate() {
            assert_eq!(item.id.index(), i);
            assert_eq!(ItemId::from_index(i), Some(item.id));
        }
        assert_eq!(ItemId::from_index(3), None);
    }

    #[test]
    fn accent_colors_match_hex() {
        let hex = ["#10B981", "#EF4444", "#3B82F6"];
        for (item, hex) in MENU_ITEMS.iter().zip(hex) {
            assert_eq!(Some(item.color()), Color::from_hex(hex).ok());
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(ItemId::Network.to_string(), "Network");
    }
}
