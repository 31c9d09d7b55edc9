//! Screen-derived world dimensions
//!
//! Everything in the scene is sized relative to the window: the world is a
//! number of screens wide, the ground is a sixth of the screen tall, and
//! speeds scale with the screen so the game feels the same at any size.

use macroquad::math::Rect;

/// World dimensions computed once at scene setup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Width of one world half (meadow or volcano)
    pub world_width: f32,
    /// Full world width (both halves)
    pub max_world_width: f32,
    pub platform_height: f32,
    pub joystick_size: f32,
    /// Horizontal run speed (px/s)
    pub velocity_x: f32,
    /// Jump speed and gravity (px/s, px/s²)
    pub velocity_y: f32,
}

impl Layout {
    pub fn new(screen_width: f32, screen_height: f32, world_screens: u32) -> Self {
        let world_width = screen_width * world_screens as f32;
        let platform_height = screen_height / 6.0;
        Self {
            screen_width,
            screen_height,
            world_width,
            max_world_width: world_width * 2.0,
            platform_height,
            joystick_size: platform_height / 3.0,
            velocity_x: screen_width / 4.0,
            velocity_y: screen_height / 2.0,
        }
    }

    /// Y coordinate of the top of the ground
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.platform_height
    }

    /// Physics bounds: the whole world, one screen tall
    pub fn world_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.max_world_width, self.screen_height)
    }

    /// Ground under the meadow half
    pub fn meadow_platform(&self) -> Rect {
        Rect::new(0.0, self.ground_y(), self.world_width, self.platform_height)
    }

    /// Ground under the volcano half
    pub fn volcano_platform(&self) -> Rect {
        Rect::new(self.world_width, self.ground_y(), self.world_width, self.platform_height)
    }

    /// Is this x coordinate in the volcano half?
    pub fn in_volcano(&self, x: f32) -> bool {
        x >= self.world_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_scale_with_screen() {
        let layout = Layout::new(800.0, 600.0, 10);
        assert_eq!(layout.world_width, 8000.0);
        assert_eq!(layout.max_world_width, 16000.0);
        assert_eq!(layout.platform_height, 100.0);
        assert!((layout.joystick_size - 100.0 / 3.0).abs() < 1e-4);
        assert_eq!(layout.velocity_x, 200.0);
        assert_eq!(layout.velocity_y, 300.0);
        assert_eq!(layout.ground_y(), 500.0);
    }

    #[test]
    fn test_platforms_cover_both_halves() {
        let layout = Layout::new(800.0, 600.0, 2);
        let meadow = layout.meadow_platform();
        let volcano = layout.volcano_platform();
        assert_eq!(meadow.x + meadow.w, volcano.x);
        assert_eq!(volcano.x + volcano.w, layout.max_world_width);
        assert_eq!(meadow.y + meadow.h, layout.screen_height);
        assert!(!layout.in_volcano(1599.0));
        assert!(layout.in_volcano(1600.0));
    }
}
