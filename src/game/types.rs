use std::fmt;

use serde::{Deserialize, Serialize};

/// 2D integer coordinate in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Location {
    x: i32,
    y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Location) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// Returns a new location shifted by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Location {
        Location::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location: {{x = {}, y = {}}}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    horizontal: f64,
    vertical: f64,
}

impl Velocity {
    pub fn new(horizontal: f64, vertical: f64) -> Self {
        Self { horizontal, vertical }
    }

    pub fn horizontal(&self) -> f64 {
        self.horizontal
    }

    pub fn vertical(&self) -> f64 {
        self.vertical
    }

    pub fn set_horizontal(&mut self, value: f64) {
        self.horizontal = value;
    }

    pub fn set_vertical(&mut self, value: f64) {
        self.vertical = value;
    }

    pub fn change_horizontal(&mut self, delta: f64) {
        self.horizontal += delta;
    }

    pub fn change_vertical(&mut self, delta: f64) {
        self.vertical += delta;
    }
}

/// Axis-aligned collision box. `location` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hitbox {
    pub location: Location,
    pub height: i32,
    pub width: i32,
}

impl Hitbox {
    pub fn new(location: Location, height: i32, width: i32) -> Self {
        Self { location, height, width }
    }

    pub fn left(&self) -> i32 {
        self.location.x()
    }

    pub fn right(&self) -> i32 {
        self.location.x().saturating_add(self.width)
    }

    pub fn top(&self) -> i32 {
        self.location.y()
    }

    pub fn bottom(&self) -> i32 {
        self.location.y().saturating_add(self.height)
    }

    /// Strict overlap: boxes sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Hitbox) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = Location::new(-7, 12);
        assert_eq!(p.distance(&Location::new(-7, 12)), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let p = Location::new(3, -9);
        let q = Location::new(-14, 40);
        assert_eq!(p.distance(&q), q.distance(&p));
        assert!(p.distance(&q) > 0.0);
    }

    #[test]
    fn three_four_five() {
        assert_eq!(Location::new(0, 0).distance(&Location::new(3, 4)), 5.0);
    }

    #[test]
    fn location_display() {
        assert_eq!(Location::new(1, 2).to_string(), "Location: {x = 1, y = 2}");
    }

    #[test]
    fn offset_returns_new_location() {
        let p = Location::new(10, 10);
        let q = p.offset(-3, 5);
        assert_eq!(p, Location::new(10, 10));
        assert_eq!(q, Location::new(7, 15));
    }

    #[test]
    fn velocity_change_is_additive() {
        let mut v = Velocity::default();
        v.set_horizontal(200.0);
        v.set_vertical(-125.0);
        v.change_horizontal(-250.0);
        v.change_vertical(126.0);
        assert_eq!(v.horizontal(), -50.0);
        assert_eq!(v.vertical(), 1.0);
    }

    #[test]
    fn hitboxes_overlap_and_touch() {
        let a = Hitbox::new(Location::new(0, 0), 10, 10);
        let b = Hitbox::new(Location::new(5, 5), 10, 10);
        let c = Hitbox::new(Location::new(10, 0), 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn edges_saturate_at_integer_limit() {
        let far = Hitbox::new(Location::new(i32::MAX - 10, i32::MAX - 10), 64, 64);
        let origin = Hitbox::new(Location::new(0, 0), 64, 64);
        assert_eq!(far.right(), i32::MAX);
        assert_eq!(far.bottom(), i32::MAX);
        assert!(!origin.intersects(&far));
        assert!(far.intersects(&far));
    }

    #[test]
    fn empty_hitbox_never_overlaps() {
        let a = Hitbox::new(Location::new(0, 0), 0, 0);
        let b = Hitbox::new(Location::new(-5, -5), 10, 10);
        assert!(!a.intersects(&b));
    }
}
