//! Volcano Run: a side-scrolling arcade platformer
//!
//! Run across a meadow and a volcano, collect coins and stars, and dodge
//! fire, bouncing bombs and dragons. Every tenth pickup is worth a life.
//! Runs natively and in the browser (WASM).

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod audio;
mod config;
mod game;
mod input;
mod layout;
mod texture;

use audio::SoundBank;
use game::{draw_game, view_scale, Game, HudButtons, SceneEnv};
use input::{Action, InputState};
use layout::Layout;
use macroquad::prelude::*;
use texture::TextureBank;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Volcano Run v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let config = config::load_config().await;
    // The world is sized once from the starting window; later resizes just scale it
    let layout = Layout::new(screen_width(), screen_height(), config.world_screens);
    log::info!(
        "Volcano Run v{} at {}x{}",
        VERSION,
        layout.screen_width,
        layout.screen_height
    );

    let textures = TextureBank::load().await;
    let mut sounds = SoundBank::load(&config).await;

    let env = SceneEnv {
        layout,
        config,
        sizes: textures.sprite_sizes(),
    };
    let buttons = HudButtons::new(&layout, &env.sizes);
    let mut input = InputState::new(&layout);
    let mut game = Game::new(env);

    sounds.start_music();

    loop {
        input.poll(Vec2::ONE / view_scale(&layout));
        let tap = input.pointer().tapped;

        if input.action_pressed(Action::ToggleDebug) {
            game.debug_bodies = !game.debug_bodies;
        }
        if game.is_game_over()
            && (buttons.restart.hit(tap) || input.action_pressed(Action::Restart))
        {
            game.restart();
        }
        if buttons.warp.hit(tap) || input.action_pressed(Action::Warp) {
            game.warp();
        }

        game.tick(input.move_intent(), get_frame_time());

        for cue in game.events.sounds.drain() {
            sounds.play(cue);
        }

        draw_game(&game, &textures, &input.joystick, &buttons);

        next_frame().await
    }
}
