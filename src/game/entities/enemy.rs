//! Enemy entity logic.
//!
//! This module defines the enemy role and handles spawning enemies along the level.

use std::ops::{Deref, DerefMut};

use log::warn;
use rand::Rng;

use crate::config::sprites::{AGENT_LEFT, AGENT_RIGHT};
use crate::game::entities::actor::Actor;
use crate::game::sprite::SpriteCache;
use crate::game::types::Location;

#[derive(Debug, Clone, Default)]
pub struct Enemy(Actor);

impl Enemy {
    pub fn new(location: Location, sprites: &mut SpriteCache) -> Self {
        let mut actor = Actor::new(location);
        actor.load_left_sprite(AGENT_LEFT, sprites);
        actor.load_right_sprite(AGENT_RIGHT, sprites);
        Enemy(actor)
    }
}

impl Deref for Enemy {
    type Target = Actor;

    fn deref(&self) -> &Actor {
        &self.0
    }
}

impl DerefMut for Enemy {
    fn deref_mut(&mut self) -> &mut Actor {
        &mut self.0
    }
}

/// Where enemies may be placed: a horizontal band around `center_x`, minus a safe
/// zone around the character's spawn point, with every enemy standing on `ground_y`.
#[derive(Debug, Clone, Copy)]
pub struct SpawnArea {
    pub center_x: i32,
    pub spread: i32,
    pub safe_zone: i32,
    pub ground_y: i32,
}

/// Spawn `count` enemies at random x positions inside `area`, standing on the ground
/// and facing a random direction.
pub fn spawn_random_enemies<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    area: SpawnArea,
    sprites: &mut SpriteCache,
) -> Vec<Enemy> {
    let safe_zone = area.safe_zone.max(0);
    if area.spread <= safe_zone {
        warn!(
            "[EntityManager] No room to place enemies (spread {} <= safe zone {})",
            area.spread, safe_zone
        );
        return vec![];
    }

    (0..count)
        .map(|_| {
            let distance = rng.random_range(safe_zone..=area.spread);
            let x = if rng.random_bool(0.5) {
                area.center_x + distance
            } else {
                area.center_x - distance
            };

            let mut enemy = Enemy::new(Location::new(x, 0), sprites);
            let height = enemy.hitbox().height;
            enemy.set_location(Location::new(x, area.ground_y - height));
            enemy.set_facing_right(rng.random_bool(0.5));
            enemy
        })
        .collect()
}
