//! Sprite textures
//!
//! Every sprite image is loaded once at startup from `assets/`. A texture
//! that fails to load is logged and left out; the renderer then draws that
//! sprite as a flat coloured rectangle of the same size, so the game stays
//! playable with a partial asset folder.
//!
//! Sprite sheets are a single row of equally sized frames.

use std::collections::HashMap;

use macroquad::prelude::*;

use crate::game::{SpriteKey, SpriteSizes};

pub const ASSET_DIR: &str = "assets";

pub struct TextureBank {
    textures: HashMap<SpriteKey, Texture2D>,
}

impl TextureBank {
    /// A bank with nothing loaded (everything draws as fallback rectangles)
    pub fn empty() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    pub async fn load() -> Self {
        let mut bank = Self::empty();
        for key in SpriteKey::ALL {
            let path = format!("{}/{}", ASSET_DIR, key.file_name());
            match load_texture(&path).await {
                Ok(texture) => {
                    texture.set_filter(FilterMode::Nearest);
                    bank.textures.insert(key, texture);
                }
                Err(e) => log::warn!("Missing texture {}: {}", path, e),
            }
        }
        log::info!("Loaded {}/{} textures", bank.textures.len(), SpriteKey::ALL.len());
        bank
    }

    pub fn get(&self, key: SpriteKey) -> Option<&Texture2D> {
        self.textures.get(&key)
    }

    /// Unscaled sprite sizes, taken from the loaded images where possible
    pub fn sprite_sizes(&self) -> SpriteSizes {
        let mut sizes = SpriteSizes::default();
        for (&key, texture) in &self.textures {
            sizes.set(key, frame_size(key, texture.size()));
        }
        sizes
    }

    /// Source rectangle of `frame` within the texture for `key`
    pub fn source_rect(&self, key: SpriteKey, frame: u32) -> Option<Rect> {
        let texture = self.get(key)?;
        Some(frame_rect(key, texture.size(), frame))
    }
}

/// Sheets keep their declared frame size; plain images use the whole image
fn frame_size(key: SpriteKey, image: Vec2) -> Vec2 {
    key.frame_size().unwrap_or(image)
}

/// Frames run left to right, wrapping onto further rows if the sheet has them
fn frame_rect(key: SpriteKey, image: Vec2, frame: u32) -> Rect {
    let size = frame_size(key, image);
    let columns = ((image.x / size.x).floor() as u32).max(1);
    let col = frame % columns;
    let row = frame / columns;
    Rect::new(col as f32 * size.x, row as f32 * size.y, size.x, size.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_frames_step_across() {
        let dude_sheet = Vec2::new(288.0, 48.0);
        assert_eq!(frame_rect(SpriteKey::Dude, dude_sheet, 0), Rect::new(0.0, 0.0, 32.0, 48.0));
        assert_eq!(frame_rect(SpriteKey::Dude, dude_sheet, 5), Rect::new(160.0, 0.0, 32.0, 48.0));
    }

    #[test]
    fn test_sheet_wraps_rows() {
        let dragon_sheet = Vec2::new(576.0, 384.0);
        assert_eq!(
            frame_rect(SpriteKey::Dragon, dragon_sheet, 5),
            Rect::new(144.0, 128.0, 144.0, 128.0)
        );
    }

    #[test]
    fn test_plain_image_is_one_frame() {
        let cloud = Vec2::new(200.0, 90.0);
        assert_eq!(frame_size(SpriteKey::Cloud, cloud), cloud);
        assert_eq!(frame_rect(SpriteKey::Cloud, cloud, 0), Rect::new(0.0, 0.0, 200.0, 90.0));
    }

    #[test]
    fn test_empty_bank_uses_fallback_sizes() {
        let bank = TextureBank::empty();
        assert!(bank.get(SpriteKey::Coin).is_none());
        assert_eq!(bank.sprite_sizes().get(SpriteKey::Dude), Vec2::new(32.0, 48.0));
    }
}
