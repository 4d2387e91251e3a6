//! Actor state model shared by the character and the enemies.
//!
//! An actor owns its location, velocity, health, facing and two directional sprites.
//! The hitbox is derived: it follows the location and takes its size from the most
//! recently assigned sprite.

use log::warn;

use crate::game::sprite::{Sprite, SpriteCache};
use crate::game::types::{Hitbox, Location, Velocity};

#[derive(Debug, Clone)]
pub struct Actor {
    location: Location,
    velocity: Velocity,
    hitbox: Hitbox,
    health: i32,
    is_dead: bool,
    left_sprite: Sprite,
    right_sprite: Sprite,
    facing_right: bool,
}

impl Default for Actor {
    fn default() -> Self {
        let placeholder = Sprite::placeholder();
        let location = Location::new(0, 0);
        Self {
            location,
            velocity: Velocity::default(),
            hitbox: Hitbox::new(location, placeholder.height_px(), placeholder.width_px()),
            health: 1,
            is_dead: false,
            left_sprite: placeholder.clone(),
            right_sprite: placeholder,
            facing_right: true,
        }
    }
}

impl Actor {
    pub fn new(location: Location) -> Self {
        let mut actor = Self::default();
        actor.set_location(location);
        actor
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
        self.hitbox = Hitbox::new(location, self.hitbox.height, self.hitbox.width);
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    pub fn set_is_dead(&mut self, is_dead: bool) {
        self.is_dead = is_dead;
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Negative values are rejected and leave health unchanged. The death flag is
    /// recomputed either way.
    pub fn set_health(&mut self, new_health: i32) {
        if new_health >= 0 {
            self.health = new_health;
        } else {
            warn!(
                "[Actor] Health cannot be negative ({}), health is unchanged at {}",
                new_health, self.health
            );
        }
        self.is_dead = self.health <= 0;
    }

    /// Unlike `set_health`, repeated damage may drive health below zero.
    pub fn take_single_point_of_damage(&mut self) {
        self.health = self.health.saturating_sub(1);
        self.is_dead = self.health <= 0;
    }

    pub fn left_sprite(&self) -> &Sprite {
        &self.left_sprite
    }

    pub fn right_sprite(&self) -> &Sprite {
        &self.right_sprite
    }

    pub fn current_sprite(&self) -> &Sprite {
        if self.facing_right {
            &self.right_sprite
        } else {
            &self.left_sprite
        }
    }

    pub fn set_left_sprite(&mut self, sprite: Sprite) {
        self.hitbox = Hitbox::new(self.location, sprite.height_px(), sprite.width_px());
        self.left_sprite = sprite;
    }

    pub fn set_right_sprite(&mut self, sprite: Sprite) {
        self.hitbox = Hitbox::new(self.location, sprite.height_px(), sprite.width_px());
        self.right_sprite = sprite;
    }

    pub fn load_left_sprite(&mut self, path: &str, sprites: &mut SpriteCache) {
        self.set_left_sprite(sprites.get_or_load(path));
    }

    pub fn load_right_sprite(&mut self, path: &str, sprites: &mut SpriteCache) {
        self.set_right_sprite(sprites.get_or_load(path));
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    pub fn set_horizontal_velocity(&mut self, value: f64) {
        self.velocity.set_horizontal(value);
    }

    pub fn set_vertical_velocity(&mut self, value: f64) {
        self.velocity.set_vertical(value);
    }

    pub fn apply_velocity_delta(&mut self, horizontal: f64, vertical: f64) {
        self.velocity.change_horizontal(horizontal);
        self.velocity.change_vertical(vertical);
    }

    pub fn is_facing_right(&self) -> bool {
        self.facing_right
    }

    pub fn set_facing_right(&mut self, facing_right: bool) {
        self.facing_right = facing_right;
    }

    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    /// Moves the actor by its velocity, truncated toward zero.
    pub fn advance(&mut self) {
        let dx = self.velocity.horizontal() as i32;
        let dy = self.velocity.vertical() as i32;
        self.set_location(self.location.offset(dx, dy));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::sprite::test_support::write_png;

    #[test]
    fn defaults() {
        let actor = Actor::default();
        assert_eq!(actor.location(), Location::new(0, 0));
        assert_eq!(actor.health(), 1);
        assert!(!actor.is_dead());
        assert!(actor.is_facing_right());
        assert_eq!(actor.velocity(), Velocity::default());
        assert_eq!(actor.right_sprite(), &Sprite::placeholder());
    }

    #[test]
    fn is_dead_flag_is_plain() {
        let mut actor = Actor::default();
        actor.set_is_dead(true);
        assert!(actor.is_dead());
        assert_eq!(actor.health(), 1);
    }

    #[test]
    fn set_location_moves_hitbox() {
        let mut actor = Actor::default();
        actor.set_location(Location::new(153, 238));
        assert_eq!(actor.location(), Location::new(153, 238));
        assert_eq!(actor.hitbox().location, Location::new(153, 238));
        assert_eq!(actor.hitbox().width, Sprite::placeholder().width_px());
    }

    #[test]
    fn non_negative_health_is_accepted() {
        for h in [0, 1, 2, 8, 1000] {
            let mut actor = Actor::default();
            actor.set_health(h);
            assert_eq!(actor.health(), h);
            assert_eq!(actor.is_dead(), h == 0);
        }
    }

    #[test]
    fn negative_health_is_rejected() {
        let mut actor = Actor::default();
        actor.set_health(5);
        for h in [-1, -2, i32::MIN] {
            actor.set_health(h);
            assert_eq!(actor.health(), 5);
            assert!(!actor.is_dead());
        }
    }

    #[test]
    fn rejected_health_recomputes_death_flag() {
        let mut actor = Actor::default();
        actor.set_health(0);
        actor.set_is_dead(false);
        actor.set_health(-3);
        assert_eq!(actor.health(), 0);
        assert!(actor.is_dead());
    }

    #[test]
    fn damage_sequence() {
        let mut actor = Actor::default();
        actor.set_health(8);
        actor.take_single_point_of_damage();
        actor.take_single_point_of_damage();
        actor.take_single_point_of_damage();
        assert_eq!(actor.health(), 5);
        assert!(!actor.is_dead());
    }

    #[test]
    fn damage_can_go_negative() {
        let mut actor = Actor::default();
        actor.take_single_point_of_damage();
        assert_eq!(actor.health(), 0);
        assert!(actor.is_dead());
        actor.take_single_point_of_damage();
        assert_eq!(actor.health(), -1);
        assert!(actor.is_dead());
    }

    #[test]
    fn dies_and_revives() {
        let mut actor = Actor::default();
        actor.take_single_point_of_damage();
        assert!(actor.is_dead());
        actor.set_health(1);
        assert!(!actor.is_dead());
        assert_eq!(actor.health(), 1);
    }

    #[test]
    fn new_sprite_resizes_hitbox() {
        let mut sprites = SpriteCache::new();
        let mut actor = Actor::new(Location::new(40, 60));

        actor.load_right_sprite(&write_png("right", 48, 96), &mut sprites);
        assert_eq!(actor.hitbox().width, 48);
        assert_eq!(actor.hitbox().height, 96);
        assert_eq!(actor.hitbox().location, Location::new(40, 60));

        actor.load_left_sprite(&write_png("left", 20, 10), &mut sprites);
        assert_eq!(actor.hitbox().width, 20);
        assert_eq!(actor.hitbox().height, 10);
    }

    #[test]
    fn current_sprite_follows_facing() {
        let mut actor = Actor::default();
        let left = Sprite { path: "l.png".into(), width: 1, height: 2 };
        let right = Sprite { path: "r.png".into(), width: 3, height: 4 };
        actor.set_left_sprite(left.clone());
        actor.set_right_sprite(right.clone());
        assert_eq!(actor.current_sprite(), &right);
        actor.set_facing_right(false);
        assert_eq!(actor.current_sprite(), &left);
    }

    #[test]
    fn advance_truncates_velocity() {
        let mut actor = Actor::new(Location::new(10, 10));
        actor.set_velocity(Velocity::new(2.9, -1.7));
        actor.advance();
        assert_eq!(actor.location(), Location::new(12, 9));

        actor.apply_velocity_delta(-5.0, 0.0);
        assert_eq!(actor.velocity().horizontal(), 2.9 - 5.0);
    }
}
