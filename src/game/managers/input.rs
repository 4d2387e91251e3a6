//! Held-key tracking and the key-to-velocity translation run once per tick.

use std::collections::HashSet;

use crate::game::entities::Character;
use crate::game::types::Key;

#[derive(Debug, Clone)]
pub struct InputListener {
    held: HashSet<Key>,
    walk_speed: f64,
    jump_speed: f64,
}

impl InputListener {
    pub fn new(walk_speed: f64, jump_speed: f64) -> Self {
        Self {
            held: HashSet::new(),
            walk_speed,
            jump_speed,
        }
    }

    pub fn key_pressed(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_released(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Horizontal velocity follows the held direction keys (both or neither cancel out).
    /// Facing only changes while moving. A held jump key launches the character when
    /// it stands on the ground.
    pub fn update_velocities(&self, character: &mut Character, grounded: bool) {
        let mut direction = 0.0;
        if self.is_held(Key::Left) {
            direction -= 1.0;
        }
        if self.is_held(Key::Right) {
            direction += 1.0;
        }

        character.set_horizontal_velocity(direction * self.walk_speed);
        if direction > 0.0 {
            character.set_facing_right(true);
        } else if direction < 0.0 {
            character.set_facing_right(false);
        }

        if grounded && self.is_held(Key::Jump) {
            character.set_vertical_velocity(-self.jump_speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_keys_set_speed_and_facing() {
        let mut input = InputListener::new(8.0, 20.0);
        let mut character = Character::default();

        input.key_pressed(Key::Left);
        input.update_velocities(&mut character, true);
        assert_eq!(character.velocity().horizontal(), -8.0);
        assert!(!character.is_facing_right());

        input.key_released(Key::Left);
        input.update_velocities(&mut character, true);
        assert_eq!(character.velocity().horizontal(), 0.0);
        assert!(!character.is_facing_right());

        input.key_pressed(Key::Right);
        input.update_velocities(&mut character, true);
        assert_eq!(character.velocity().horizontal(), 8.0);
        assert!(character.is_facing_right());
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = InputListener::new(8.0, 20.0);
        let mut character = Character::default();
        input.key_pressed(Key::Left);
        input.key_pressed(Key::Right);
        input.update_velocities(&mut character, true);
        assert_eq!(character.velocity().horizontal(), 0.0);
    }

    #[test]
    fn jump_only_from_ground() {
        let mut input = InputListener::new(8.0, 20.0);
        let mut character = Character::default();
        input.key_pressed(Key::Jump);

        input.update_velocities(&mut character, false);
        assert_eq!(character.velocity().vertical(), 0.0);

        input.update_velocities(&mut character, true);
        assert_eq!(character.velocity().vertical(), -20.0);
    }

    #[test]
    fn release_all_clears_keys() {
        let mut input = InputListener::new(8.0, 20.0);
        input.key_pressed(Key::Left);
        input.key_pressed(Key::Jump);
        input.release_all();
        assert!(!input.is_held(Key::Left));
        assert!(!input.is_held(Key::Jump));
    }
}
