//! Runtime settings.
//!
//! Every field defaults to the matching constant in [`crate::config::game`], so a
//! settings file only needs to name the values it overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::game::*;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Which [`crate::game::systems::render::RenderTarget`] the binary drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    Terminal,
    Json,
    None,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tick_millis: u64,
    pub screen_width: i32,
    pub screen_height: i32,
    pub ground_y: i32,
    pub background_width: i32,
    pub walk_speed: f64,
    pub jump_speed: f64,
    pub gravity: f64,
    pub character_health: i32,
    pub restart_enemy_count: usize,
    pub level_spread: i32,
    pub spawn_safe_zone: i32,
    pub hurt_cooldown_ticks: u32,
    pub renderer: RendererKind,
    pub terminal_print_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_millis: TICK_MILLIS,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_y: GROUND_Y,
            background_width: BACKGROUND_WIDTH,
            walk_speed: WALK_SPEED,
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,
            character_health: CHARACTER_HEALTH,
            restart_enemy_count: RESTART_ENEMY_COUNT,
            level_spread: LEVEL_SPREAD,
            spawn_safe_zone: SPAWN_SAFE_ZONE,
            hurt_cooldown_ticks: HURT_COOLDOWN_TICKS,
            renderer: RendererKind::Terminal,
            terminal_print_every: TERMINAL_PRINT_EVERY,
        }
    }
}

impl Settings {
    pub fn from_json(path: &Path, text: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let settings = Settings::from_json(
            Path::new("inline.json"),
            r#"{ "restart_enemy_count": 3, "renderer": "json" }"#,
        )
        .unwrap();

        assert_eq!(settings.restart_enemy_count, 3);
        assert_eq!(settings.renderer, RendererKind::Json);
        assert_eq!(settings.tick_millis, TICK_MILLIS);
        assert_eq!(settings.character_health, CHARACTER_HEALTH);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = Settings::from_json(Path::new("bad.json"), "{ nope").unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Settings::load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
