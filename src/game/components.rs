//! Game Components
//!
//! Plain data attached to entities. Behaviour lives in the runtime.

use macroquad::color::Color;
use macroquad::math::Vec2;
use std::collections::HashMap;

// =============================================================================
// Visuals
// =============================================================================

/// Every image and sprite sheet the scene draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Dude,
    Fire,
    Coin,
    Dragon,
    Bomb,
    Star,
    Cloud,
    Tree,
    Tree2,
    Arrow,
    Restart,
    Volcano,
}

impl SpriteKey {
    pub const ALL: [SpriteKey; 12] = [
        SpriteKey::Dude,
        SpriteKey::Fire,
        SpriteKey::Coin,
        SpriteKey::Dragon,
        SpriteKey::Bomb,
        SpriteKey::Star,
        SpriteKey::Cloud,
        SpriteKey::Tree,
        SpriteKey::Tree2,
        SpriteKey::Arrow,
        SpriteKey::Restart,
        SpriteKey::Volcano,
    ];

    /// File stem under `assets/`
    pub fn file_name(self) -> &'static str {
        match self {
            SpriteKey::Dude => "dude.png",
            SpriteKey::Fire => "fire.png",
            SpriteKey::Coin => "coin.png",
            SpriteKey::Dragon => "dragon.png",
            SpriteKey::Bomb => "bomb.png",
            SpriteKey::Star => "star.png",
            SpriteKey::Cloud => "cloud.png",
            SpriteKey::Tree => "tree.png",
            SpriteKey::Tree2 => "tree2.png",
            SpriteKey::Arrow => "arrow.png",
            SpriteKey::Restart => "restart.png",
            SpriteKey::Volcano => "volcano.png",
        }
    }

    /// Frame size for sprite sheets, None for single images
    pub fn frame_size(self) -> Option<Vec2> {
        match self {
            SpriteKey::Dude => Some(Vec2::new(32.0, 48.0)),
            SpriteKey::Fire | SpriteKey::Coin => Some(Vec2::new(32.0, 32.0)),
            SpriteKey::Dragon => Some(Vec2::new(144.0, 128.0)),
            _ => None,
        }
    }

    /// Size used until (or unless) the real texture is loaded
    pub fn fallback_size(self) -> Vec2 {
        if let Some(frame) = self.frame_size() {
            return frame;
        }
        match self {
            SpriteKey::Bomb => Vec2::new(14.0, 14.0),
            SpriteKey::Star => Vec2::new(64.0, 64.0),
            SpriteKey::Cloud => Vec2::new(128.0, 64.0),
            SpriteKey::Tree | SpriteKey::Tree2 => Vec2::new(96.0, 160.0),
            SpriteKey::Arrow => Vec2::new(48.0, 48.0),
            SpriteKey::Restart => Vec2::new(48.0, 24.0),
            _ => Vec2::new(32.0, 32.0),
        }
    }

    /// Colour drawn in place of a missing texture
    pub fn fallback_color(self) -> Color {
        match self {
            SpriteKey::Dude => Color::from_rgba(90, 60, 160, 255),
            SpriteKey::Fire => Color::from_rgba(255, 120, 0, 255),
            SpriteKey::Coin => Color::from_rgba(255, 210, 0, 255),
            SpriteKey::Dragon => Color::from_rgba(40, 120, 40, 255),
            SpriteKey::Bomb => Color::from_rgba(30, 30, 30, 255),
            SpriteKey::Star => Color::from_rgba(255, 255, 120, 255),
            SpriteKey::Cloud => Color::from_rgba(245, 245, 245, 230),
            SpriteKey::Tree => Color::from_rgba(30, 110, 30, 255),
            SpriteKey::Tree2 => Color::from_rgba(70, 40, 20, 255),
            SpriteKey::Arrow => Color::from_rgba(250, 250, 250, 255),
            SpriteKey::Restart => Color::from_rgba(200, 40, 40, 255),
            SpriteKey::Volcano => Color::from_rgba(90, 20, 10, 255),
        }
    }
}

/// Unscaled size of each sprite (a sheet's frame, or a whole image).
/// Starts from fallbacks and is refined once textures load.
#[derive(Debug, Clone)]
pub struct SpriteSizes {
    sizes: HashMap<SpriteKey, Vec2>,
}

impl SpriteSizes {
    pub fn get(&self, key: SpriteKey) -> Vec2 {
        self.sizes.get(&key).copied().unwrap_or_else(|| key.fallback_size())
    }

    pub fn set(&mut self, key: SpriteKey, size: Vec2) {
        self.sizes.insert(key, size);
    }
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            sizes: SpriteKey::ALL.iter().map(|&k| (k, k.fallback_size())).collect(),
        }
    }
}

/// Something drawn in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub key: SpriteKey,
    /// Sheet frame (0 for plain images)
    pub frame: u32,
    /// Top-left corner in world space
    pub position: Vec2,
    /// Display size (after scaling)
    pub size: Vec2,
    /// Where the physics body sits relative to `position`
    pub body_offset: Vec2,
    pub tint: Option<Color>,
    /// Draw order: later spawns draw on top
    pub depth: u32,
}

impl Sprite {
    pub fn new(key: SpriteKey, position: Vec2, size: Vec2) -> Self {
        Self {
            key,
            frame: 0,
            position,
            size,
            body_offset: Vec2::ZERO,
            tint: None,
            depth: 0,
        }
    }

    pub fn with_body_offset(mut self, offset: Vec2) -> Self {
        self.body_offset = offset;
        self
    }
}

// =============================================================================
// Roles
// =============================================================================

/// Marks the player entity
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

/// Things that cost a life on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hazard {
    Fire,
    Bomb,
    Dragon,
}

/// Things that score on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pickup {
    Coin,
    Star,
}

impl Pickup {
    /// Coins are collected on overlap; stars are solid and collide
    pub fn separates(self) -> bool {
        matches!(self, Pickup::Star)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheets_report_frame_size() {
        assert_eq!(SpriteKey::Dude.frame_size(), Some(Vec2::new(32.0, 48.0)));
        assert_eq!(SpriteKey::Dragon.frame_size(), Some(Vec2::new(144.0, 128.0)));
        assert_eq!(SpriteKey::Bomb.frame_size(), None);
    }

    #[test]
    fn test_sizes_default_to_fallbacks_and_accept_overrides() {
        let mut sizes = SpriteSizes::default();
        assert_eq!(sizes.get(SpriteKey::Coin), Vec2::new(32.0, 32.0));
        sizes.set(SpriteKey::Cloud, Vec2::new(200.0, 90.0));
        assert_eq!(sizes.get(SpriteKey::Cloud), Vec2::new(200.0, 90.0));
    }

    #[test]
    fn test_only_stars_separate() {
        assert!(Pickup::Star.separates());
        assert!(!Pickup::Coin.separates());
    }
}
