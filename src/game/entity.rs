//! Entity handles
//!
//! Coins, bombs and dragons are destroyed and respawned constantly, so
//! handles are generational: a slot freed by a collected coin can be reused
//! by the next spawn, and the bumped generation keeps the stale handle from
//! matching the newcomer.

/// Handle to a live game object (slot index + generation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    index: u32,
    generation: u32,
}

impl Entity {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index, used to address component storage
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Hands out entity slots and tracks which handles are still alive
#[derive(Debug, Default)]
pub struct EntityAllocator {
    generations: Vec<u32>,
    /// Per-slot liveness, so index lookups stay O(1)
    alive: Vec<bool>,
    free_indices: Vec<u32>,
    alive_count: u32,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> Entity {
        self.alive_count += 1;
        match self.free_indices.pop() {
            // Generation was bumped when the slot was freed
            Some(index) => {
                self.alive[index as usize] = true;
                Entity::new(index, self.generations[index as usize])
            }
            None => {
                let index = self.generations.len() as u32;
                self.generations.push(0);
                self.alive.push(true);
                Entity::new(index, 0)
            }
        }
    }

    /// Free a slot. Returns false if the handle was already stale.
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }
        self.generations[entity.index as usize] += 1;
        self.alive[entity.index as usize] = false;
        self.free_indices.push(entity.index);
        self.alive_count -= 1;
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.generations
            .get(entity.index as usize)
            .is_some_and(|&gen| gen == entity.generation)
    }

    /// Rebuild a live handle from a bare slot index
    pub fn entity_at(&self, index: u32) -> Option<Entity> {
        if !*self.alive.get(index as usize)? {
            return None;
        }
        Some(Entity::new(index, self.generations[index as usize]))
    }

    pub fn alive_count(&self) -> u32 {
        self.alive_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_free() {
        let mut alloc = EntityAllocator::new();
        let coin = alloc.allocate();
        let bomb = alloc.allocate();
        assert_eq!(alloc.alive_count(), 2);

        assert!(alloc.free(coin));
        assert!(!alloc.free(coin));
        assert_eq!(alloc.alive_count(), 1);
        assert!(!alloc.is_alive(coin));
        assert!(alloc.is_alive(bomb));
    }

    #[test]
    fn test_stale_handle_does_not_match_respawn() {
        let mut alloc = EntityAllocator::new();
        let coin = alloc.allocate();
        alloc.free(coin);

        let respawned = alloc.allocate();
        assert_eq!(respawned.index(), coin.index());
        assert_ne!(respawned.generation(), coin.generation());
        assert!(!alloc.is_alive(coin));
        assert!(alloc.is_alive(respawned));
    }

    #[test]
    fn test_entity_at_skips_free_slots() {
        let mut alloc = EntityAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        alloc.free(a);
        assert_eq!(alloc.entity_at(a.index()), None);
        assert_eq!(alloc.entity_at(b.index()), Some(b));
        assert_eq!(alloc.entity_at(99), None);

        let c = alloc.allocate();
        assert_eq!(c.index(), a.index());
        assert_eq!(alloc.entity_at(a.index()), Some(c));
    }
}
