//! Follow camera
//!
//! Eases toward the player each frame and stays inside the world. The world
//! is exactly one screen tall, so only the horizontal scroll ever moves.

use macroquad::math::{Rect, Vec2};

/// Frame rate the lerp factor is expressed against
const REFERENCE_FPS: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    /// Top-left of the view in world space
    pub scroll: Vec2,
    pub view: Vec2,
    pub bounds: Rect,
    pub lerp: f32,
}

impl FollowCamera {
    pub fn new(view: Vec2, bounds: Rect, lerp: f32) -> Self {
        Self {
            scroll: Vec2::new(bounds.x, bounds.y),
            view,
            bounds,
            lerp,
        }
    }

    /// Jump straight to the target (scene start, warp)
    pub fn snap_to(&mut self, target: Vec2) {
        self.scroll = self.clamp(target - self.view * 0.5);
    }

    /// Ease toward centring `target`. The lerp factor is per 1/60 s, scaled
    /// so the feel does not depend on frame rate.
    pub fn follow(&mut self, target: Vec2, dt: f32) {
        let desired = target - self.view * 0.5;
        let t = 1.0 - (1.0 - self.lerp).powf(dt * REFERENCE_FPS);
        self.scroll = self.clamp(self.scroll + (desired - self.scroll) * t);
    }

    fn clamp(&self, scroll: Vec2) -> Vec2 {
        let max_x = (self.bounds.right() - self.view.x).max(self.bounds.x);
        let max_y = (self.bounds.bottom() - self.view.y).max(self.bounds.y);
        Vec2::new(
            scroll.x.clamp(self.bounds.x, max_x),
            scroll.y.clamp(self.bounds.y, max_y),
        )
    }

    /// Scroll rounded to whole pixels, for crisp sprites
    pub fn rounded_scroll(&self) -> Vec2 {
        self.scroll.round()
    }

    /// World-space rectangle currently on screen
    pub fn visible_rect(&self) -> Rect {
        Rect::new(self.scroll.x, self.scroll.y, self.view.x, self.view.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> FollowCamera {
        FollowCamera::new(
            Vec2::new(800.0, 600.0),
            Rect::new(0.0, 0.0, 16000.0, 600.0),
            0.05,
        )
    }

    #[test]
    fn test_clamped_at_world_start() {
        let mut cam = camera();
        cam.snap_to(Vec2::new(10.0, 300.0));
        assert_eq!(cam.scroll, Vec2::ZERO);
    }

    #[test]
    fn test_clamped_at_world_end() {
        let mut cam = camera();
        cam.snap_to(Vec2::new(15990.0, 300.0));
        assert_eq!(cam.scroll, Vec2::new(15200.0, 0.0));
    }

    #[test]
    fn test_follow_eases_toward_target() {
        let mut cam = camera();
        cam.follow(Vec2::new(1400.0, 300.0), 1.0 / 60.0);
        // One reference frame covers the lerp fraction of the 1000px gap
        assert!((cam.scroll.x - 50.0).abs() < 0.01);
        assert_eq!(cam.scroll.y, 0.0);

        for _ in 0..600 {
            cam.follow(Vec2::new(1400.0, 300.0), 1.0 / 60.0);
        }
        assert!((cam.scroll.x - 1000.0).abs() < 0.5);
    }

    #[test]
    fn test_visible_rect_matches_view() {
        let mut cam = camera();
        cam.snap_to(Vec2::new(4000.0, 0.0));
        let rect = cam.visible_rect();
        assert_eq!(rect.x, 3600.0);
        assert_eq!(rect.w, 800.0);
    }
}
