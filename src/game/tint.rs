//! Player tint flash
//!
//! Hits tint the player red and stars tint it yellow for a few seconds.
//! The tint is cosmetic only: contact damage still applies while it shows.

use macroquad::color::Color;

pub const HIT_TINT: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const STAR_TINT: Color = Color::new(1.0, 1.0, 0.0, 1.0);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TintTimer {
    color: Option<Color>,
    remaining: f32,
}

impl TintTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a tint, restarting the countdown if one is already running
    pub fn protect(&mut self, color: Color, seconds: f32) {
        self.color = Some(color);
        self.remaining = seconds;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.color.is_none() {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.color = None;
            self.remaining = 0.0;
        }
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.color.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_expires() {
        let mut tint = TintTimer::new();
        tint.protect(HIT_TINT, 3.0);
        tint.tick(2.9);
        assert_eq!(tint.color(), Some(HIT_TINT));
        tint.tick(0.2);
        assert!(!tint.is_active());
    }

    #[test]
    fn test_new_tint_restarts_countdown() {
        let mut tint = TintTimer::new();
        tint.protect(HIT_TINT, 3.0);
        tint.tick(2.5);
        tint.protect(STAR_TINT, 3.0);
        tint.tick(2.5);
        assert_eq!(tint.color(), Some(STAR_TINT));
        tint.tick(1.0);
        assert_eq!(tint.color(), None);
    }
}
