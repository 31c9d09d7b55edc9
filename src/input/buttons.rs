//! Clickable screen-space images (warp arrow, restart)

use macroquad::math::{Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenButton {
    pub rect: Rect,
}

impl ScreenButton {
    /// Button whose top-right corner sits at `corner`
    pub fn top_right(corner: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::new(corner.x - size.x, corner.y, size.x, size.y),
        }
    }

    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::new(center.x - size.x * 0.5, center.y - size.y * 0.5, size.x, size.y),
        }
    }

    /// Was this button tapped by a press at `tap`?
    pub fn hit(&self, tap: Option<Vec2>) -> bool {
        tap.is_some_and(|point| self.rect.contains(point))
    }
}
