//! Sprite resources.
//!
//! The core never draws pixels itself, so a loaded sprite is reduced to its path and
//! pixel dimensions (the dimensions size the owning actor's hitbox). Loading goes through
//! [`SpriteCache`], which substitutes the placeholder sprite when a file cannot be read.

use std::collections::HashMap;
use std::path::PathBuf;

use log::warn;
use serde::Serialize;
use thiserror::Error;

use crate::config::sprites::{PLACEHOLDER_HEIGHT, PLACEHOLDER_SPRITE, PLACEHOLDER_WIDTH};

#[derive(Debug, Error)]
pub enum ResourceLoadError {
    #[error("cannot open sprite {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode sprite {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("sprite {path} has no pixels")]
    EmptyImage { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sprite {
    pub path: String,
    pub width: u32,
    pub height: u32,
}

impl Sprite {
    /// Reads the image header at `path` to learn its dimensions.
    pub fn load(path: &str) -> Result<Sprite, ResourceLoadError> {
        let (width, height) = image::image_dimensions(path).map_err(|err| match err {
            image::ImageError::IoError(source) => ResourceLoadError::Io {
                path: PathBuf::from(path),
                source,
            },
            source => ResourceLoadError::Decode {
                path: PathBuf::from(path),
                source,
            },
        })?;

        if width == 0 || height == 0 {
            return Err(ResourceLoadError::EmptyImage { path: PathBuf::from(path) });
        }

        Ok(Sprite {
            path: path.to_string(),
            width,
            height,
        })
    }

    /// Built-in placeholder, available even when no asset is on disk.
    pub fn placeholder() -> Sprite {
        Sprite {
            path: PLACEHOLDER_SPRITE.to_string(),
            width: PLACEHOLDER_WIDTH,
            height: PLACEHOLDER_HEIGHT,
        }
    }

    pub fn width_px(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    pub fn height_px(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Sprite::placeholder()
    }
}

/// Loads each path at most once. Failed paths are remembered as the placeholder so the
/// warning is logged a single time.
#[derive(Debug, Default)]
pub struct SpriteCache {
    entries: HashMap<String, Sprite>,
}

impl SpriteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, path: &str) -> Sprite {
        if let Some(sprite) = self.entries.get(path) {
            return sprite.clone();
        }

        let sprite = match Sprite::load(path) {
            Ok(sprite) => sprite,
            Err(err) => {
                warn!("[Sprites] {err}; using placeholder");
                Sprite::placeholder()
            }
        };
        self.entries.insert(path.to_string(), sprite.clone());
        sprite
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
