use std::ops::{Deref, DerefMut};

use crate::config::sprites::{ET_LEFT, ET_RIGHT};
use crate::game::entities::actor::Actor;
use crate::game::sprite::SpriteCache;
use crate::game::types::Location;

/// The player-controlled actor.
#[derive(Debug, Clone, Default)]
pub struct Character(Actor);

impl Character {
    pub fn new(location: Location, sprites: &mut SpriteCache) -> Self {
        let mut actor = Actor::new(location);
        actor.load_left_sprite(ET_LEFT, sprites);
        actor.load_right_sprite(ET_RIGHT, sprites);
        Character(actor)
    }
}

impl Deref for Character {
    type Target = Actor;

    fn deref(&self) -> &Actor {
        &self.0
    }
}

impl DerefMut for Character {
    fn deref_mut(&mut self) -> &mut Actor {
        &mut self.0
    }
}
