use crate::game::types::{Location, Velocity};

/// Scroll offset of the background image.
#[derive(Debug, Clone)]
pub struct BackgroundManager {
    location: Location,
    width: i32,
}

impl BackgroundManager {
    pub fn new(width: i32) -> Self {
        Self {
            location: Location::new(0, 0),
            width: width.max(1),
        }
    }

    pub fn background_location(&self) -> Location {
        self.location
    }

    /// Scrolls against the character's horizontal motion, wrapped into `(-width, 0]`.
    pub fn update_background_location(&mut self, velocity: &Velocity) {
        let width = i64::from(self.width);
        let shifted = i64::from(self.location.x()).saturating_sub(velocity.horizontal() as i64);
        let remainder = shifted.rem_euclid(width);
        let wrapped = if remainder == 0 { 0 } else { remainder - width };
        // |wrapped| < width, so it fits back into i32
        self.location = Location::new(wrapped as i32, self.location.y());
    }
}
