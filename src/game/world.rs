//! Game World
//!
//! Container for every entity in the scene and its components, plus the
//! deferred despawn queue (contact handlers destroy things mid-iteration).

use super::animation::Animator;
use super::component::ComponentStorage;
use super::components::{Hazard, Pickup, Player, Sprite};
use super::entity::{Entity, EntityAllocator};
use super::physics::Body;

pub struct World {
    entities: EntityAllocator,
    despawn_queue: Vec<Entity>,
    /// Depth handed to the next sprite, so draw order follows spawn order
    next_depth: u32,

    pub sprites: ComponentStorage<Sprite>,
    pub bodies: ComponentStorage<Body>,
    pub animators: ComponentStorage<Animator>,

    pub players: ComponentStorage<Player>,
    pub hazards: ComponentStorage<Hazard>,
    pub pickups: ComponentStorage<Pickup>,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            despawn_queue: Vec::new(),
            next_depth: 0,
            sprites: ComponentStorage::new(),
            bodies: ComponentStorage::new(),
            animators: ComponentStorage::new(),
            players: ComponentStorage::new(),
            hazards: ComponentStorage::new(),
            pickups: ComponentStorage::new(),
        }
    }

    // =========================================================================
    // Entity Management
    // =========================================================================

    /// Spawn a drawable entity with no physics (decorations)
    pub fn spawn_sprite(&mut self, mut sprite: Sprite) -> Entity {
        let entity = self.entities.allocate();
        sprite.depth = self.next_depth;
        self.next_depth += 1;
        self.sprites.insert(entity, sprite);
        entity
    }

    /// Spawn a drawable entity driven by a physics body
    pub fn spawn_body(&mut self, sprite: Sprite, body: Body) -> Entity {
        let entity = self.spawn_sprite(sprite);
        self.bodies.insert(entity, body);
        entity
    }

    /// Queue an entity for removal at the end of the frame
    pub fn despawn(&mut self, entity: Entity) {
        if self.is_alive(entity) && !self.despawn_queue.contains(&entity) {
            self.despawn_queue.push(entity);
        }
    }

    pub fn despawn_immediate(&mut self, entity: Entity) {
        if !self.entities.free(entity) {
            return;
        }
        let idx = entity.index();
        self.sprites.clear_slot(idx);
        self.bodies.clear_slot(idx);
        self.animators.clear_slot(idx);
        self.players.clear_slot(idx);
        self.hazards.clear_slot(idx);
        self.pickups.clear_slot(idx);
    }

    pub fn flush_despawns(&mut self) {
        for entity in std::mem::take(&mut self.despawn_queue) {
            self.despawn_immediate(entity);
        }
    }

    /// Is this entity alive and not already queued for removal?
    pub fn is_active(&self, entity: Entity) -> bool {
        self.is_alive(entity) && !self.despawn_queue.contains(&entity)
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    pub fn entity_count(&self) -> u32 {
        self.entities.alive_count()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Live entities that own a physics body
    pub fn body_entities(&self) -> Vec<Entity> {
        self.bodies
            .iter()
            .filter_map(|(idx, _)| self.entities.entity_at(idx))
            .collect()
    }

    #[cfg(test)]
    pub fn hazard_count(&self, kind: Hazard) -> usize {
        self.hazards.iter().filter(|(_, h)| **h == kind).count()
    }

    #[cfg(test)]
    pub fn pickup_count(&self, kind: Pickup) -> usize {
        self.pickups.iter().filter(|(_, p)| **p == kind).count()
    }

    /// Move sprites to follow their bodies and pick up animation frames
    pub fn sync_sprites(&mut self) {
        for (idx, sprite) in self.sprites.iter_mut() {
            let Some(entity) = self.entities.entity_at(idx) else {
                continue;
            };
            if let Some(body) = self.bodies.get(entity) {
                sprite.position = body.position - sprite.body_offset;
            }
            if let Some(animator) = self.animators.get(entity) {
                sprite.frame = animator.frame();
            }
        }
    }

    /// Sprites in draw order
    pub fn sprites_by_depth(&self) -> Vec<&Sprite> {
        let mut sprites: Vec<&Sprite> = self.sprites.iter().map(|(_, s)| s).collect();
        sprites.sort_by_key(|s| s.depth);
        sprites
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::SpriteKey;
    use macroquad::math::Vec2;

    fn coin_sprite() -> Sprite {
        Sprite::new(SpriteKey::Coin, Vec2::ZERO, Vec2::splat(96.0))
    }

    #[test]
    fn test_deferred_despawn() {
        let mut world = World::new();
        let coin = world.spawn_body(coin_sprite(), Body::new(Vec2::ZERO, Vec2::splat(96.0)));
        world.pickups.insert(coin, Pickup::Coin);

        world.despawn(coin);
        world.despawn(coin);
        assert!(world.is_alive(coin));
        assert!(!world.is_active(coin));

        world.flush_despawns();
        assert!(!world.is_alive(coin));
        assert_eq!(world.entity_count(), 0);
        assert_eq!(world.pickup_count(Pickup::Coin), 0);
        assert!(world.body_entities().is_empty());
    }

    #[test]
    fn test_depth_follows_spawn_order() {
        let mut world = World::new();
        let cloud = Sprite::new(SpriteKey::Cloud, Vec2::ZERO, Vec2::ONE);
        let tree = Sprite::new(SpriteKey::Tree, Vec2::ZERO, Vec2::ONE);
        world.spawn_sprite(tree);
        world.spawn_sprite(cloud);

        let keys: Vec<_> = world.sprites_by_depth().iter().map(|s| s.key).collect();
        assert_eq!(keys, vec![SpriteKey::Tree, SpriteKey::Cloud]);
    }

    #[test]
    fn test_sync_moves_sprite_to_body() {
        let mut world = World::new();
        let sprite = coin_sprite().with_body_offset(Vec2::new(0.0, -30.0));
        let coin = world.spawn_body(sprite, Body::new(Vec2::new(100.0, 50.0), Vec2::splat(96.0)));
        world.sync_sprites();
        assert_eq!(world.sprites.get(coin).unwrap().position, Vec2::new(100.0, 80.0));
    }
}
