//! Sprite resource paths.

pub const PLACEHOLDER_SPRITE: &str = "assets/sprites/placeholder.png";

/// Dimensions used when not even the placeholder file can be read.
pub const PLACEHOLDER_WIDTH: u32 = 64;
pub const PLACEHOLDER_HEIGHT: u32 = 64;

pub const ET_LEFT: &str = "assets/sprites/et_left.png";
pub const ET_RIGHT: &str = "assets/sprites/et_right.png";

pub const AGENT_LEFT: &str = "assets/sprites/agent_left.png";
pub const AGENT_RIGHT: &str = "assets/sprites/agent_right.png";

pub const BACKGROUND: &str = "assets/backgrounds/background.jpg";
pub const HEART: &str = "assets/sprites/heart.png";
pub const GAME_OVER: &str = "assets/sprites/gameover.png";
