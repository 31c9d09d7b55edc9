//! Scene Runtime
//!
//! `Game` is the whole scene: it builds the world, turns player intent into
//! velocity, steps physics, resolves player contacts into score/lives
//! changes, and keeps the camera on the player. It never touches the
//! window, audio device, or input devices; the main loop feeds it an
//! intent and drains its sound cues.

use macroquad::math::Vec2;

use super::animation::AnimKey;
use super::camera::FollowCamera;
use super::components::{Hazard, Pickup};
use super::entity::Entity;
use super::event::{Contact, Events, SoundCue};
use super::physics;
use super::scoreboard::{LifeOutcome, Scoreboard};
use super::spawn::{self, SceneEnv};
use super::tint::{TintTimer, HIT_TINT, STAR_TINT};
use super::world::World;

/// Longest step simulated in one frame. Tab switches and hitches would
/// otherwise let bodies tunnel through the ground.
pub const MAX_FRAME_DT: f32 = 1.0 / 20.0;

/// What the player wants to do this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

pub struct Game {
    pub env: SceneEnv,
    pub world: World,
    pub events: Events,
    pub scoreboard: Scoreboard,
    pub tint: TintTimer,
    pub camera: FollowCamera,
    pub player: Entity,
    /// Frozen after game over
    pub physics_paused: bool,
    /// The volcano backdrop shows while the player is in the volcano half
    pub volcano_visible: bool,
    pub debug_bodies: bool,
}

impl Game {
    pub fn new(env: SceneEnv) -> Self {
        let layout = env.layout;
        let mut world = World::new();
        let player = spawn::populate(&mut world, &env);

        let mut camera = FollowCamera::new(
            Vec2::new(layout.screen_width, layout.screen_height),
            layout.world_bounds(),
            env.config.camera_lerp,
        );
        if let Some(body) = world.bodies.get(player) {
            camera.snap_to(body.center());
        }

        log::info!(
            "New run: world {}x{}, {} lives",
            layout.max_world_width,
            layout.screen_height,
            env.config.start_lives
        );

        Self {
            scoreboard: Scoreboard::new(env.config.start_lives, env.config.life_bonus_every),
            debug_bodies: env.config.debug_bodies,
            env,
            world,
            events: Events::new(),
            tint: TintTimer::new(),
            camera,
            player,
            physics_paused: false,
            volcano_visible: false,
        }
    }

    /// Throw the run away and build a fresh scene
    pub fn restart(&mut self) {
        log::info!("Restarting after scoring {}", self.scoreboard.score);
        *self = Game::new(self.env.clone());
    }

    pub fn is_game_over(&self) -> bool {
        self.scoreboard.game_over
    }

    #[cfg(test)]
    pub fn player_body(&self) -> Option<&physics::Body> {
        self.world.bodies.get(self.player)
    }

    /// Jump to the same spot in the other half of the world
    pub fn warp(&mut self) {
        if self.is_game_over() {
            return;
        }
        let layout = self.env.layout;
        let Some(body) = self.world.bodies.get_mut(self.player) else {
            return;
        };
        let right = (body.right() + layout.world_width) % layout.max_world_width;
        body.position.x = right - body.size.x;
        let centre = body.center();
        self.volcano_visible = layout.in_volcano(right);
        self.camera.snap_to(centre);
        self.world.sync_sprites();
        log::debug!("Warped to x={}", right);
    }

    /// Run one frame of the scene
    pub fn tick(&mut self, intent: MoveIntent, dt: f32) {
        if self.is_game_over() {
            return;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        self.apply_intent(intent);
        self.step_physics(dt);
        self.detect_contacts();
        self.resolve_contacts();

        for (_, animator) in self.world.animators.iter_mut() {
            animator.advance(dt);
        }
        self.tint.tick(dt);
        if let Some(sprite) = self.world.sprites.get_mut(self.player) {
            sprite.tint = self.tint.color();
        }

        self.world.flush_despawns();
        self.world.sync_sprites();

        if let Some(body) = self.world.bodies.get(self.player) {
            self.camera.follow(body.center(), dt);
        }
    }

    /// Input to velocity and animation
    fn apply_intent(&mut self, intent: MoveIntent) {
        let layout = self.env.layout;
        let Some(body) = self.world.bodies.get_mut(self.player) else {
            return;
        };

        let (vx, anim, keep) = if intent.left {
            (-layout.velocity_x, AnimKey::Left, true)
        } else if intent.right {
            (layout.velocity_x, AnimKey::Right, true)
        } else {
            (0.0, AnimKey::Turn, false)
        };
        body.velocity.x = vx;

        // `touching` still holds last frame's contacts here
        if intent.jump && body.touching.down {
            body.velocity.y = -layout.velocity_y;
        }

        self.volcano_visible = layout.in_volcano(body.right());

        if let Some(animator) = self.world.animators.get_mut(self.player) {
            animator.play(anim, keep);
        }
    }

    /// Integrate every body and resolve it against bounds and platforms
    fn step_physics(&mut self, dt: f32) {
        if self.physics_paused {
            return;
        }
        let layout = self.env.layout;
        let gravity = layout.velocity_y;
        let bounds = layout.world_bounds();
        let meadow = layout.meadow_platform();
        let volcano = layout.volcano_platform();

        for (_, body) in self.world.bodies.iter_mut() {
            physics::step(body, gravity, dt);
            if body.collide_world_bounds {
                physics::collide_bounds(body, bounds);
            }
            if body.platforms.meadow {
                physics::collide_static(body, meadow);
            }
            if body.platforms.volcano {
                physics::collide_static(body, volcano);
            }
        }
    }

    /// Test the player against every hazard and pickup, queueing contacts
    fn detect_contacts(&mut self) {
        let Some(mut player_body) = self.world.bodies.get(self.player).copied() else {
            return;
        };

        for entity in self.world.body_entities() {
            if entity == self.player {
                continue;
            }
            let hazard = self.world.hazards.get(entity).copied();
            let pickup = self.world.pickups.get(entity).copied();
            let Some(other) = self.world.bodies.get_mut(entity) else {
                continue;
            };

            let contact = match (hazard, pickup) {
                (Some(kind), _) => physics::separate(&mut player_body, other)
                    .then_some(Contact::Hit { hazard: entity, kind }),
                (None, Some(pickup)) if pickup.separates() => {
                    physics::separate(&mut player_body, other)
                        .then_some(Contact::Collected { item: entity, pickup })
                }
                (None, Some(pickup)) => physics::overlaps(&player_body, other)
                    .then_some(Contact::Collected { item: entity, pickup }),
                (None, None) => None,
            };
            if let Some(contact) = contact {
                self.events.contacts.send(contact);
            }
        }

        if let Some(body) = self.world.bodies.get_mut(self.player) {
            *body = player_body;
        }
    }

    fn resolve_contacts(&mut self) {
        let contacts: Vec<Contact> = self.events.contacts.drain().collect();
        for contact in contacts {
            if self.is_game_over() {
                break;
            }
            match contact {
                Contact::Collected { item, pickup: Pickup::Coin } => self.collect_coin(item),
                Contact::Collected { item, pickup: Pickup::Star } => self.collect_star(item),
                Contact::Hit { hazard, kind: Hazard::Fire | Hazard::Bomb } => {
                    self.hit_bomb_or_fire(hazard)
                }
                Contact::Hit { hazard, kind: Hazard::Dragon } => self.hit_dragon(hazard),
            }
        }
    }

    // =========================================================================
    // Contact handlers
    // =========================================================================

    fn collect_coin(&mut self, coin: Entity) {
        if !self.world.is_active(coin) {
            return;
        }
        self.events.sounds.send(SoundCue::Bell);
        self.world.despawn(coin);
        spawn::coin(&mut self.world, &self.env);
        spawn::bomb(&mut self.world, &self.env);
        self.award();
    }

    fn collect_star(&mut self, star: Entity) {
        if !self.world.is_active(star) {
            return;
        }
        self.events.sounds.send(SoundCue::Bell2);
        self.world.despawn(star);
        spawn::star(&mut self.world, &self.env);
        self.tint.protect(STAR_TINT, self.env.config.tint_seconds);
        self.award();
    }

    fn award(&mut self) {
        if self.scoreboard.award(self.env.config.pickup_score) {
            log::info!("Extra life at score {}", self.scoreboard.score);
        }
    }

    fn hit_bomb_or_fire(&mut self, hazard: Entity) {
        if !self.world.is_active(hazard) {
            return;
        }
        if let Some(animator) = self.world.animators.get_mut(self.player) {
            animator.play(AnimKey::Turn, false);
        }
        self.take_hit(hazard);
    }

    fn hit_dragon(&mut self, dragon: Entity) {
        if !self.world.is_active(dragon) {
            return;
        }
        self.take_hit(dragon);
    }

    /// Shared damage path: the hazard survives only when it ends the run
    fn take_hit(&mut self, hazard: Entity) {
        self.events.sounds.send(SoundCue::Dead);
        self.tint.protect(HIT_TINT, self.env.config.tint_seconds);
        match self.scoreboard.lose_life() {
            LifeOutcome::GameOver => {
                self.physics_paused = true;
                log::info!("Game over with score {}", self.scoreboard.score);
            }
            LifeOutcome::Alive => self.world.despawn(hazard),
        }
    }
}
