//! Owner of the enemy collection.

use log::debug;
use rand::Rng;

use crate::game::entities::{Enemy, SpawnArea, spawn_random_enemies};
use crate::game::sprite::SpriteCache;

#[derive(Debug, Clone, Default)]
pub struct EntityManager {
    enemies: Vec<Enemy>,
}

impl EntityManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enemy_list(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemy_list_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }

    /// Adds `count` randomly placed enemies to the list.
    pub fn spawn_random_entities<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        area: SpawnArea,
        rng: &mut R,
        sprites: &mut SpriteCache,
    ) {
        let spawned = spawn_random_enemies(rng, count, area, sprites);
        debug!("[EntityManager] Spawned {} enemies", spawned.len());
        self.enemies.extend(spawned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn spawn_accumulates_and_clear_empties() {
        let mut manager = EntityManager::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut sprites = SpriteCache::new();
        let area = SpawnArea { center_x: 0, spread: 1_000, safe_zone: 10, ground_y: 500 };

        manager.spawn_random_entities(4, area, &mut rng, &mut sprites);
        manager.spawn_random_entities(6, area, &mut rng, &mut sprites);
        assert_eq!(manager.enemy_list().len(), 10);

        manager.clear();
        assert!(manager.enemy_list().is_empty());
    }
}
