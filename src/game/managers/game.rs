//! Ground, damage and game-over rules.

use crate::game::entities::{Actor, Enemy};
use crate::game::types::Location;

#[derive(Debug, Clone)]
pub struct GameManager {
    screen_width: i32,
    ground_y: i32,
    gravity: f64,
    hurt_cooldown_ticks: u32,
    cooldown_remaining: u32,
    game_over: bool,
}

impl GameManager {
    pub fn new(screen_width: i32, ground_y: i32, gravity: f64, hurt_cooldown_ticks: u32) -> Self {
        Self {
            screen_width,
            ground_y,
            gravity,
            hurt_cooldown_ticks,
            cooldown_remaining: 0,
            game_over: false,
        }
    }

    pub fn center_x_cord(&self) -> i32 {
        self.screen_width / 2
    }

    pub fn ground_y(&self) -> i32 {
        self.ground_y
    }

    /// The y at which `actor` stands on the floor.
    pub fn ground_level(&self, actor: &Actor) -> i32 {
        self.ground_y - actor.hitbox().height
    }

    pub fn is_grounded(&self, actor: &Actor) -> bool {
        actor.location().y() >= self.ground_level(actor)
    }

    /// Applies gravity while airborne. At or below the floor the actor is put back on
    /// it and any downward speed is cancelled.
    pub fn run_ground_check(&self, actor: &mut Actor) {
        let ground_level = self.ground_level(actor);
        let location = actor.location();

        if location.y() >= ground_level {
            if location.y() > ground_level {
                actor.set_location(Location::new(location.x(), ground_level));
            }
            if actor.velocity().vertical() > 0.0 {
                actor.set_vertical_velocity(0.0);
            }
        } else {
            actor.apply_velocity_delta(0.0, self.gravity);
        }
    }

    /// True when the character overlaps an enemy and is not recovering from a
    /// previous hit. Each call counts as one tick of the recovery window.
    pub fn was_character_hurt(&mut self, character: &Actor, enemies: &[Enemy]) -> bool {
        if self.cooldown_remaining > 0 {
            self.cooldown_remaining -= 1;
            return false;
        }

        let hitbox = character.hitbox();
        let hurt = enemies.iter().any(|enemy| hitbox.intersects(&enemy.hitbox()));
        if hurt {
            self.cooldown_remaining = self.hurt_cooldown_ticks;
        }
        hurt
    }

    pub fn reset_cooldown(&mut self) {
        self.cooldown_remaining = 0;
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn set_game_over(&mut self, game_over: bool) {
        self.game_over = game_over;
    }
}
