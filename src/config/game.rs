/// Game configuration constants.
/// 
/// This module defines the main gameplay parameters such as tick length,
/// screen size, ground height and movement speeds.
pub const TICK_MILLIS: u64 = 20; // Duration of a tick in milliseconds.

/// Width of the virtual screen in pixels.
pub const SCREEN_WIDTH: i32 = 1920;

/// Height of the virtual screen in pixels.
pub const SCREEN_HEIGHT: i32 = 1080;

/// Screen y of the floor. Actors stand with their bottom edge on this line.
pub const GROUND_Y: i32 = 900;

/// Width of the background image, used to wrap the scroll offset.
pub const BACKGROUND_WIDTH: i32 = 3840;

/// Horizontal speed (pixels per tick) while a direction key is held.
pub const WALK_SPEED: f64 = 8.0;

/// Upward speed (pixels per tick) given by a jump.
pub const JUMP_SPEED: f64 = 22.0;

/// Vertical speed added each tick while airborne.
pub const GRAVITY: f64 = 1.0;

/// Health given to the character on start and on restart.
pub const CHARACTER_HEALTH: i32 = 1;

/// Number of enemies spawned on start and on restart.
pub const RESTART_ENEMY_COUNT: usize = 50;

/// Half-width of the band, centered on the spawn point, in which enemies are placed.
pub const LEVEL_SPREAD: i32 = 20_000;

/// No enemy spawns closer than this to the character's starting x.
pub const SPAWN_SAFE_ZONE: i32 = 400;

/// Ticks during which the character cannot be hurt again after a hit.
pub const HURT_COOLDOWN_TICKS: u32 = 50;

/// Frames between two status lines of the terminal renderer.
pub const TERMINAL_PRINT_EVERY: u64 = 50;

/// Hearts drawn at most on the HUD; the frame still reports the exact health.
pub const MAX_HUD_HEARTS: i32 = 10;
