//! Sparse component storage
//!
//! One `Option<T>` slot per entity index. The scene holds at most a few
//! hundred objects, so a flat vector beats anything cleverer.

use super::entity::Entity;

pub struct ComponentStorage<T> {
    /// Component plus the generation of the entity that owns it
    data: Vec<Option<(u32, T)>>,
}

impl<T> ComponentStorage<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Insert or replace the component for an entity
    pub fn insert(&mut self, entity: Entity, component: T) {
        let idx = entity.index() as usize;
        if idx >= self.data.len() {
            self.data.resize_with(idx + 1, || None);
        }
        self.data[idx] = Some((entity.generation(), component));
    }

    /// Component for this exact handle; a stale handle whose slot was reused gets None
    pub fn get(&self, entity: Entity) -> Option<&T> {
        match self.data.get(entity.index() as usize)? {
            Some((gen, c)) if *gen == entity.generation() => Some(c),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        match self.data.get_mut(entity.index() as usize)? {
            Some((gen, c)) if *gen == entity.generation() => Some(c),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn contains(&self, entity: Entity) -> bool {
        self.get(entity).is_some()
    }

    /// Iterate over (slot index, component). Callers validate liveness.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|(_, c)| (idx as u32, c)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (u32, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_mut().map(|(_, c)| (idx as u32, c)))
    }

    pub fn clear_slot(&mut self, index: u32) {
        if let Some(slot) = self.data.get_mut(index as usize) {
            *slot = None;
        }
    }
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_clear() {
        let mut storage: ComponentStorage<&str> = ComponentStorage::new();
        let star = Entity::new(7, 0);

        storage.insert(star, "star");
        assert_eq!(storage.get(star), Some(&"star"));
        assert!(storage.contains(star));

        storage.clear_slot(7);
        assert!(!storage.contains(star));
        assert_eq!(storage.get(Entity::new(500, 0)), None);
    }

    #[test]
    fn test_stale_handle_misses_reused_slot() {
        let mut storage: ComponentStorage<&str> = ComponentStorage::new();
        let old_coin = Entity::new(3, 0);
        let new_coin = Entity::new(3, 1);
        storage.insert(old_coin, "old");
        storage.insert(new_coin, "new");

        assert_eq!(storage.get(new_coin), Some(&"new"));
        assert_eq!(storage.get(old_coin), None);
        assert!(storage.get_mut(old_coin).is_none());
    }

    #[test]
    fn test_iteration_skips_holes() {
        let mut storage: ComponentStorage<i32> = ComponentStorage::new();
        storage.insert(Entity::new(0, 0), 1);
        storage.insert(Entity::new(4, 0), 5);
        storage.clear_slot(0);

        let items: Vec<_> = storage.iter().collect();
        assert_eq!(items, vec![(4, &5)]);
    }
}
