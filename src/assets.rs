//! Runtime sprite store
//!
//! Prefers baked PNG files from `assets/generated/` (produced by
//! `cargo xtask gen-assets`); any sprite that is missing or fails to
//! decode silently falls back to its procedural painter.

use std::collections::HashMap;
use std::path::Path;

use macroquad::texture::Texture2D;

use crate::sprites::{self, SpriteId};

pub const SPRITE_DIR: &str = "assets/generated";

pub struct SpriteStore {
    textures: HashMap<SpriteId, Texture2D>,
}

impl SpriteStore {
    /// Load every sprite from `dir`, painting fallbacks as needed.
    pub fn load(dir: &Path) -> Self {
        let textures = SpriteId::ALL
            .into_iter()
            .map(|id| (id, load_one(dir, id)))
            .collect();
        Self { textures }
    }

    pub fn get(&self, id: SpriteId) -> &Texture2D {
        &self.textures[&id]
    }
}

fn load_one(dir: &Path, id: SpriteId) -> Texture2D {
    let path = dir.join(format!("{}.png", id.name()));
    let baked = std::fs::read(&path)
        .ok()
        .and_then(|bytes| image::load_from_memory(&bytes).ok())
        .map(|img| img.to_rgba8());
    let rgba = baked.unwrap_or_else(|| sprites::paint(id));
    Texture2D::from_rgba8(rgba.width() as u16, rgba.height() as u16, rgba.as_raw())
}
