//! Entity spawners
//!
//! One routine per kind of object. Placement is uniform-random within
//! ranges derived from the layout; sizes come from the sprite table and
//! the per-kind display scale.
//!
//! Anchors: most sprites are placed by their bottom-right corner (so they
//! stand on the ground line), bombs, stars and clouds by their centre.

use macroquad::math::Vec2;
use macroquad::rand;

use super::animation::{AnimKey, Animator};
use super::components::{Hazard, Pickup, Player, Sprite, SpriteKey, SpriteSizes};
use super::entity::Entity;
use super::physics::{Body, PlatformMask};
use super::world::World;
use crate::config::GameConfig;
use crate::layout::Layout;

/// Display scales
pub const PLAYER_SCALE: f32 = 3.0;
pub const FIRE_SCALE: f32 = 3.0;
pub const COIN_SCALE: f32 = 3.0;
pub const BOMB_SCALE: f32 = 2.0;
pub const STAR_SCALE: f32 = 0.5;
pub const DRAGON_SCALE: f32 = 2.0;

/// Dragon hitbox within its 144x128 frame (unscaled)
const DRAGON_BODY: Vec2 = Vec2::new(72.0, 64.0);
/// Coin body sits this far above the frame (unscaled)
const COIN_BODY_LIFT: f32 = 10.0;

/// Everything the spawners read but never change
#[derive(Debug, Clone)]
pub struct SceneEnv {
    pub layout: Layout,
    pub config: GameConfig,
    pub sizes: SpriteSizes,
}

impl SceneEnv {
    fn scaled(&self, key: SpriteKey, scale: f32) -> Vec2 {
        self.sizes.get(key) * scale
    }
}

/// Uniform random whole number in `[min, max]`
pub fn between(min: f32, max: f32) -> f32 {
    let lo = min.floor() as i64;
    let hi = max.floor() as i64;
    if hi <= lo {
        return lo as f32;
    }
    rand::gen_range(lo, hi.saturating_add(1)) as f32
}

/// Uniform random float in `[min, max)`
pub fn float_between(min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    rand::gen_range(min, max)
}

fn bottom_right_anchor(anchor: Vec2, size: Vec2) -> Vec2 {
    anchor - size
}

fn centre_anchor(anchor: Vec2, size: Vec2) -> Vec2 {
    anchor - size * 0.5
}

// =============================================================================
// Decorations
// =============================================================================

/// A meadow tree plus its twice-as-large volcano twin one world-width along
pub fn tree(world: &mut World, env: &SceneEnv) -> (Entity, Entity) {
    let layout = &env.layout;
    let x = between(0.0, layout.world_width);
    let y = layout.ground_y();
    let scale = float_between(0.5, 2.0);

    let size = env.scaled(SpriteKey::Tree, scale);
    let meadow = world.spawn_sprite(Sprite::new(
        SpriteKey::Tree,
        bottom_right_anchor(Vec2::new(x, y), size),
        size,
    ));

    let size = env.scaled(SpriteKey::Tree2, scale * 2.0);
    let volcano = world.spawn_sprite(Sprite::new(
        SpriteKey::Tree2,
        bottom_right_anchor(Vec2::new(x + layout.world_width, y), size),
        size,
    ));
    (meadow, volcano)
}

/// The full-height tree marking the border between the two halves
pub fn boundary_tree(world: &mut World, env: &SceneEnv) -> Entity {
    let layout = &env.layout;
    let size = Vec2::new(layout.screen_width / 5.0, layout.screen_height);
    let position = Vec2::new(layout.world_width - size.x * 0.5, 0.0);
    world.spawn_sprite(Sprite::new(SpriteKey::Tree2, position, size))
}

pub fn cloud(world: &mut World, env: &SceneEnv) -> Entity {
    let layout = &env.layout;
    let x = between(0.0, layout.max_world_width);
    let y = between(0.0, layout.screen_height - layout.platform_height * 3.0);
    let scale = float_between(0.5, 1.5);
    let size = env.scaled(SpriteKey::Cloud, scale);
    world.spawn_sprite(Sprite::new(SpriteKey::Cloud, centre_anchor(Vec2::new(x, y), size), size))
}

// =============================================================================
// Player
// =============================================================================

pub fn player(world: &mut World, env: &SceneEnv) -> Entity {
    let layout = &env.layout;
    let size = env.scaled(SpriteKey::Dude, PLAYER_SCALE);
    let position = bottom_right_anchor(Vec2::new(0.0, layout.ground_y()), size);
    let body = Body::new(position, size)
        .with_bounce(env.config.player_bounce)
        .collide_world_bounds()
        .on_platforms(PlatformMask::BOTH);

    let entity = world.spawn_body(Sprite::new(SpriteKey::Dude, position, size), body);
    world.players.insert(entity, Player);
    world.animators.insert(entity, Animator::new(AnimKey::Turn));
    entity
}

// =============================================================================
// Hazards
// =============================================================================

/// Burning patch anywhere past the first half-screen, sunk into the ground
pub fn fire(world: &mut World, env: &SceneEnv) -> Entity {
    let layout = &env.layout;
    let x = between(layout.screen_width / 2.0, layout.max_world_width);
    let y = between(layout.ground_y(), layout.screen_height);
    let size = env.scaled(SpriteKey::Fire, FIRE_SCALE);
    let position = bottom_right_anchor(Vec2::new(x, y), size);
    let body = Body::new(position, size).immovable().without_gravity();

    let entity = world.spawn_body(Sprite::new(SpriteKey::Fire, position, size), body);
    world.hazards.insert(entity, Hazard::Fire);
    world.animators.insert(entity, Animator::new(AnimKey::Burning));
    entity
}

/// Bomb dropped from the top of the meadow, bouncing forever
pub fn bomb(world: &mut World, env: &SceneEnv) -> Entity {
    let layout = &env.layout;
    let x = between(0.0, layout.world_width);
    let vx = between(-layout.velocity_x, layout.velocity_x);
    let size = env.scaled(SpriteKey::Bomb, BOMB_SCALE);
    let position = centre_anchor(Vec2::new(x, 0.0), size);
    let body = Body::new(position, size)
        .with_bounce(1.0)
        .with_velocity(Vec2::new(vx, layout.velocity_y))
        .without_gravity()
        .collide_world_bounds()
        .on_platforms(PlatformMask::MEADOW);

    let entity = world.spawn_body(Sprite::new(SpriteKey::Bomb, position, size), body);
    world.hazards.insert(entity, Hazard::Bomb);
    entity
}

/// Dragon patrolling vertically somewhere over the volcano
pub fn dragon(world: &mut World, env: &SceneEnv) -> Entity {
    let layout = &env.layout;
    let x = between(layout.world_width, layout.world_width * 2.0);
    let y = between(0.0, layout.ground_y());
    let vy = between(layout.velocity_y / 2.0, layout.velocity_y);

    let size = env.scaled(SpriteKey::Dragon, DRAGON_SCALE);
    let position = bottom_right_anchor(Vec2::new(x, y), size);
    let body_size = DRAGON_BODY * DRAGON_SCALE;
    let offset = (size - body_size) * 0.5;
    let body = Body::new(position + offset, body_size)
        .with_bounce(1.0)
        .with_velocity(Vec2::new(0.0, vy))
        .without_gravity()
        .collide_world_bounds()
        .on_platforms(PlatformMask::VOLCANO);

    let sprite = Sprite::new(SpriteKey::Dragon, position, size).with_body_offset(offset);
    let entity = world.spawn_body(sprite, body);
    world.hazards.insert(entity, Hazard::Dragon);
    world.animators.insert(entity, Animator::new(AnimKey::Flying));
    entity
}

// =============================================================================
// Pickups
// =============================================================================

/// Coin dropped from the sky over the meadow, landing with a random bounce
pub fn coin(world: &mut World, env: &SceneEnv) -> Entity {
    let layout = &env.layout;
    let x = between(layout.screen_width / 3.0, layout.world_width);
    let bounce = float_between(0.1, 0.5);
    let size = env.scaled(SpriteKey::Coin, COIN_SCALE);
    let position = bottom_right_anchor(Vec2::new(x, 0.0), size);
    let offset = Vec2::new(0.0, -COIN_BODY_LIFT * COIN_SCALE);
    let body = Body::new(position + offset, size)
        .with_bounce(bounce)
        .on_platforms(PlatformMask::MEADOW);

    let sprite = Sprite::new(SpriteKey::Coin, position, size).with_body_offset(offset);
    let entity = world.spawn_body(sprite, body);
    world.pickups.insert(entity, Pickup::Coin);
    world.animators.insert(entity, Animator::new(AnimKey::Rotate));
    entity
}

/// Star bouncing around the volcano half
pub fn star(world: &mut World, env: &SceneEnv) -> Entity {
    let layout = &env.layout;
    let x = between(layout.world_width, layout.world_width * 2.0);
    let vx = between(-layout.velocity_x, layout.velocity_x);
    let vy = between(layout.velocity_y / 2.0, layout.velocity_y);
    let size = env.scaled(SpriteKey::Star, STAR_SCALE);
    let position = centre_anchor(Vec2::new(x, 0.0), size);
    let body = Body::new(position, size)
        .with_bounce(1.0)
        .with_velocity(Vec2::new(vx, vy))
        .without_gravity()
        .collide_world_bounds()
        .on_platforms(PlatformMask::BOTH);

    let entity = world.spawn_body(Sprite::new(SpriteKey::Star, position, size), body);
    world.pickups.insert(entity, Pickup::Star);
    entity
}

/// Build the whole scene. Returns the player.
pub fn populate(world: &mut World, env: &SceneEnv) -> Entity {
    let counts = &env.config.counts;
    boundary_tree(world, env);
    for _ in 0..counts.trees {
        tree(world, env);
    }
    let player = player(world, env);
    for _ in 0..counts.clouds {
        cloud(world, env);
    }
    for _ in 0..counts.fires {
        fire(world, env);
    }
    for _ in 0..counts.coins {
        coin(world, env);
    }
    for _ in 0..counts.dragons {
        dragon(world, env);
    }
    for _ in 0..counts.stars {
        star(world, env);
    }
    log::debug!("Scene populated with {} entities", world.entity_count());
    player
}
