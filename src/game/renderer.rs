//! Scene Renderer
//!
//! Draws the game in layout coordinates, scaled to whatever size the
//! window currently is. World-space things are offset by the camera
//! scroll; the HUD (score, warp arrow, joystick, restart) is drawn in
//! screen space on top.

use macroquad::prelude::*;

use super::components::{Sprite, SpriteKey, SpriteSizes};
use super::runtime::Game;
use crate::input::{ScreenButton, VirtualJoystick};
use crate::layout::Layout;
use crate::texture::TextureBank;

const SKY: Color = Color::new(0.529, 0.808, 0.922, 1.0);
const VOLCANO_SKY: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const MEADOW_GROUND: Color = Color::new(0.718, 0.404, 0.263, 1.0);
const VOLCANO_GROUND: Color = Color::new(0.0, 0.4, 0.0, 1.0);
const JOYSTICK_BASE: Color = Color::new(0.533, 0.533, 0.533, 0.6);
const JOYSTICK_THUMB: Color = Color::new(0.8, 0.8, 0.8, 0.8);
const BODY_OUTLINE: Color = Color::new(1.0, 0.0, 1.0, 1.0);

pub const ARROW_SCALE: f32 = 2.0;
pub const RESTART_SCALE: f32 = 5.0;

/// Clickable HUD images, in layout coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudButtons {
    pub warp: ScreenButton,
    pub restart: ScreenButton,
}

impl HudButtons {
    pub fn new(layout: &Layout, sizes: &SpriteSizes) -> Self {
        Self {
            warp: ScreenButton::top_right(
                Vec2::new(layout.screen_width, 0.0),
                sizes.get(SpriteKey::Arrow) * ARROW_SCALE,
            ),
            restart: ScreenButton::centered(
                Vec2::new(layout.screen_width / 2.0, layout.screen_height / 2.0),
                sizes.get(SpriteKey::Restart) * RESTART_SCALE,
            ),
        }
    }
}

/// Maps layout coordinates to window pixels
#[derive(Debug, Clone, Copy)]
struct View {
    scroll: Vec2,
    scale: Vec2,
}

impl View {
    fn world(&self, rect: Rect) -> Rect {
        self.screen(rect.offset(-self.scroll))
    }

    fn screen(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x * self.scale.x,
            rect.y * self.scale.y,
            rect.w * self.scale.x,
            rect.h * self.scale.y,
        )
    }
}

/// Window pixels per layout unit
pub fn view_scale(layout: &Layout) -> Vec2 {
    Vec2::new(
        screen_width() / layout.screen_width,
        screen_height() / layout.screen_height,
    )
}

/// Draw one frame of the scene and its HUD
pub fn draw_game(
    game: &Game,
    textures: &TextureBank,
    joystick: &VirtualJoystick,
    buttons: &HudButtons,
) {
    let layout = game.env.layout;
    let view = View {
        scroll: game.camera.rounded_scroll(),
        scale: view_scale(&layout),
    };

    clear_background(BLACK);

    // Sky over each half
    fill(view.world(Rect::new(0.0, 0.0, layout.world_width, layout.screen_height)), SKY);
    fill(
        view.world(Rect::new(layout.world_width, 0.0, layout.world_width, layout.screen_height)),
        VOLCANO_SKY,
    );

    // Volcano backdrop is pinned to the screen, above the ground
    if game.volcano_visible {
        let dest = view.screen(Rect::new(0.0, 0.0, layout.screen_width, layout.ground_y()));
        draw_image(textures, SpriteKey::Volcano, 0, dest, None);
    }

    fill(view.world(layout.meadow_platform()), MEADOW_GROUND);
    fill(view.world(layout.volcano_platform()), VOLCANO_GROUND);

    let visible = game.camera.visible_rect();
    for sprite in game.world.sprites_by_depth() {
        if sprite_rect(sprite).overlaps(&visible) {
            draw_sprite(textures, sprite, &view);
        }
    }

    if game.debug_bodies {
        for (_, body) in game.world.bodies.iter() {
            let r = view.world(body.rect());
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, BODY_OUTLINE);
        }
    }

    draw_hud(game, textures, joystick, buttons, &view);
}

fn draw_hud(
    game: &Game,
    textures: &TextureBank,
    joystick: &VirtualJoystick,
    buttons: &HudButtons,
    view: &View,
) {
    let layout = game.env.layout;

    let font_size = layout.screen_width / 50.0 * view.scale.y;
    draw_text(
        &game.scoreboard.label(),
        16.0 * view.scale.x,
        16.0 * view.scale.y + font_size,
        font_size,
        BLACK,
    );

    draw_image(textures, SpriteKey::Arrow, 0, view.screen(buttons.warp.rect), None);

    let base = joystick.base * view.scale;
    let thumb = joystick.thumb_position() * view.scale;
    let radius = joystick.radius * view.scale.min_element();
    draw_circle(base.x, base.y, radius, JOYSTICK_BASE);
    draw_circle(thumb.x, thumb.y, radius * 0.5, JOYSTICK_THUMB);

    if game.is_game_over() {
        draw_image(textures, SpriteKey::Restart, 0, view.screen(buttons.restart.rect), None);
    }
}

fn sprite_rect(sprite: &Sprite) -> Rect {
    Rect::new(sprite.position.x, sprite.position.y, sprite.size.x, sprite.size.y)
}

fn draw_sprite(textures: &TextureBank, sprite: &Sprite, view: &View) {
    draw_image(textures, sprite.key, sprite.frame, view.world(sprite_rect(sprite)), sprite.tint);
}

/// Draw a texture frame into `dest`, or a flat rectangle if it never loaded
fn draw_image(textures: &TextureBank, key: SpriteKey, frame: u32, dest: Rect, tint: Option<Color>) {
    match textures.get(key) {
        Some(texture) => draw_texture_ex(
            texture,
            dest.x,
            dest.y,
            tint.unwrap_or(WHITE),
            DrawTextureParams {
                dest_size: Some(dest.size()),
                source: textures.source_rect(key, frame),
                ..Default::default()
            },
        ),
        None => fill(dest, tint.unwrap_or_else(|| key.fallback_color())),
    }
}

fn fill(rect: Rect, color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_rect_is_scrolled_then_scaled() {
        let view = View {
            scroll: Vec2::new(100.0, 0.0),
            scale: Vec2::new(2.0, 2.0),
        };
        let r = view.world(Rect::new(150.0, 10.0, 20.0, 30.0));
        assert_eq!(r, Rect::new(100.0, 20.0, 40.0, 60.0));
        let s = view.screen(Rect::new(150.0, 10.0, 20.0, 30.0));
        assert_eq!(s.x, 300.0);
    }

    #[test]
    fn test_hud_buttons_follow_layout() {
        let layout = Layout::new(800.0, 600.0, 10);
        let buttons = HudButtons::new(&layout, &SpriteSizes::default());
        assert_eq!(buttons.warp.rect.right(), 800.0);
        assert_eq!(buttons.warp.rect.y, 0.0);
        assert_eq!(buttons.warp.rect.w, 96.0);
        assert_eq!(buttons.restart.rect.center(), Vec2::new(400.0, 300.0));
        assert_eq!(buttons.restart.rect.w, 240.0);
    }
}
