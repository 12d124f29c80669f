use glam::Vec2;

use super::item::{ItemId, MENU_ITEMS};

/// Item box size in logical px (icon plus label plus padding).
pub const ITEM_SIZE: Vec2 = Vec2::new(148.0, 188.0);

/// Horizontal bias applied on top of the camera translation.
pub const OVERLAY_OFFSET_X: f32 = 100.0;

/// Camera transition duration in seconds.
pub const TWEEN_SECS: f32 = 0.7;

/// Overlay translation for a camera position.
#[inline]
pub fn overlay_translation(camera: Vec2) -> Vec2 {
    Vec2::new(-camera.x - OVERLAY_OFFSET_X, camera.y)
}

/// Ease-out cubic on `t` in `[0, 1]`.
#[inline]
fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Animates the overlay translation toward the current camera target.
///
/// Times are seconds on any monotonic timeline (the frame clock's `elapsed`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraTween {
    from: Vec2,
    to: Vec2,
    start: f32,
    duration: f32,
}

impl CameraTween {
    /// A tween already resting at `camera`.
    pub fn settled(camera: Vec2) -> Self {
        let t = overlay_translation(camera);
        Self {
            from: t,
            to: t,
            start: 0.0,
            duration: TWEEN_SECS,
        }
    }

    /// Starts a new transition to `camera` from wherever the overlay is at `now`.
    pub fn retarget(&mut self, camera: Vec2, now: f32) {
        let target = overlay_translation(camera);
        if target == self.to {
            return;
        }
        self.from = self.value(now);
        self.to = target;
        self.start = now;
    }

    /// Translation at `now`.
    pub fn value(&self, now: f32) -> Vec2 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (now - self.start) / self.duration;
        self.from.lerp(self.to, ease_out(t))
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }

    pub fn is_settled(&self, now: f32) -> bool {
        now - self.start >= self.duration
    }
}

/// Screen rectangle of one item, logical px with y down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ItemRect {
    pub id: ItemId,
    pub origin: Vec2,
    pub size: Vec2,
}

impl ItemRect {
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.origin + self.size;
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// Item boxes for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLayout {
    pub items: [ItemRect; 3],
}

impl MenuLayout {
    /// Lays out every item for a viewport of `viewport` logical px under
    /// overlay translation `translation`.
    pub fn compute(viewport: Vec2, translation: Vec2) -> Self {
        let anchor = viewport * 0.5 + translation;
        let items = MENU_ITEMS.map(|item| ItemRect {
            id: item.id,
            origin: anchor + item.position,
            size: ITEM_SIZE,
        });
        Self { items }
    }

    /// Topmost item under `p`. Later items are drawn on top.
    pub fn hit(&self, p: Vec2) -> Option<ItemId> {
        self.items.iter().rev().find(|r| r.contains(p)).map(|r| r.id)
    }

    pub fn rect(&self, id: ItemId) -> &ItemRect {
        &self.items[id.index()]
    }
}
