//! On-screen virtual joystick
//!
//! A base circle near the bottom of the screen. Pressing inside it grabs
//! the thumb; dragging reports 8-way cursor directions until release.

use macroquad::math::Vec2;

/// Thumb travel (px) below which no direction is reported
const DEAD_ZONE: f32 = 16.0;

/// Cursor keys the stick currently emulates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StickKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualJoystick {
    pub base: Vec2,
    pub radius: f32,
    /// Thumb offset from the base, clamped to `radius`
    thumb: Vec2,
    captured: bool,
}

impl VirtualJoystick {
    pub fn new(base: Vec2, radius: f32) -> Self {
        Self {
            base,
            radius,
            thumb: Vec2::ZERO,
            captured: false,
        }
    }

    /// Feed the pointer position (None when nothing is pressed)
    pub fn update(&mut self, pointer: Option<Vec2>) {
        let Some(point) = pointer else {
            self.release();
            return;
        };
        if !self.captured {
            if point.distance(self.base) > self.radius {
                return;
            }
            self.captured = true;
        }
        self.thumb = (point - self.base).clamp_length_max(self.radius);
    }

    pub fn release(&mut self) {
        self.captured = false;
        self.thumb = Vec2::ZERO;
    }

    #[cfg(test)]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Where to draw the thumb
    pub fn thumb_position(&self) -> Vec2 {
        self.base + self.thumb
    }

    pub fn keys(&self) -> StickKeys {
        if self.thumb.length() < DEAD_ZONE {
            return StickKeys::default();
        }
        // Screen y grows downward; flip so 90 degrees is up
        let angle = (-self.thumb.y).atan2(self.thumb.x).to_degrees();
        let sector = ((angle / 45.0).round() as i32).rem_euclid(8);
        StickKeys {
            right: matches!(sector, 7 | 0 | 1),
            up: matches!(sector, 1..=3),
            left: matches!(sector, 3..=5),
            down: matches!(sector, 5..=7),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stick() -> VirtualJoystick {
        VirtualJoystick::new(Vec2::new(400.0, 450.0), 33.0)
    }

    #[test]
    fn test_press_outside_base_is_ignored() {
        let mut js = stick();
        js.update(Some(Vec2::new(100.0, 100.0)));
        assert!(!js.is_captured());
        assert_eq!(js.keys(), StickKeys::default());
    }

    #[test]
    fn test_drag_right_and_up_left() {
        let mut js = stick();
        js.update(Some(Vec2::new(400.0, 450.0)));
        js.update(Some(Vec2::new(500.0, 450.0)));
        assert!(js.is_captured());
        assert_eq!(js.keys(), StickKeys { right: true, ..Default::default() });
        assert_eq!(js.thumb_position(), Vec2::new(433.0, 450.0));

        js.update(Some(Vec2::new(370.0, 420.0)));
        assert_eq!(js.keys(), StickKeys { left: true, up: true, ..Default::default() });
    }

    #[test]
    fn test_straight_up_is_jump_only() {
        let mut js = stick();
        js.update(Some(Vec2::new(400.0, 450.0)));
        js.update(Some(Vec2::new(402.0, 400.0)));
        assert_eq!(js.keys(), StickKeys { up: true, ..Default::default() });
    }

    #[test]
    fn test_small_wiggle_and_release() {
        let mut js = stick();
        js.update(Some(Vec2::new(405.0, 452.0)));
        assert!(js.is_captured());
        assert_eq!(js.keys(), StickKeys::default());

        js.update(Some(Vec2::new(300.0, 450.0)));
        assert!(js.keys().left);
        js.update(None);
        assert!(!js.is_captured());
        assert_eq!(js.thumb_position(), js.base);
    }
}
