//! Image and sound loading
//!
//! Every asset is required. A missing or undecodable file is fatal.

use std::fmt;

use macroquad::audio::{Sound, load_sound};
use macroquad::texture::{FilterMode, Texture2D, load_texture};

/// Asset directory, relative to the working directory
pub const ASSET_DIR: &str = "assets";

pub const TANK_IMAGE: &str = "tank.png";
pub const BACKGROUND_IMAGE: &str = "background.jpg";
pub const SHOOT_SOUND: &str = "shoot.wav";
pub const EXPLOSION_SOUND: &str = "explosion.wav";
pub const ENGINE_SOUND: &str = "move.wav";

#[derive(Debug)]
pub enum AssetError {
    Texture {
        path: String,
        source: macroquad::Error,
    },
    Sound {
        path: String,
        source: macroquad::Error,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Texture { path, source } => {
                write!(f, "failed to load image '{}': {}", path, source)
            }
            Self::Sound { path, source } => {
                write!(f, "failed to load sound '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Texture { source, .. } | Self::Sound { source, .. } => Some(source),
        }
    }
}

/// Join an asset file name onto the asset directory
pub fn asset_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches(['/', '\\']);
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}

/// Everything the game draws or plays
pub struct Assets {
    pub tank: Texture2D,
    pub background: Texture2D,
    pub shoot: Sound,
    pub explosion: Sound,
    pub engine: Sound,
}

impl Assets {
    pub async fn load(dir: &str) -> Result<Self, AssetError> {
        let tank = texture(dir, TANK_IMAGE).await?;
        let background = texture(dir, BACKGROUND_IMAGE).await?;
        let shoot = sound(dir, SHOOT_SOUND).await?;
        let explosion = sound(dir, EXPLOSION_SOUND).await?;
        let engine = sound(dir, ENGINE_SOUND).await?;
        log::info!("Loaded assets from '{}'", dir);
        Ok(Self {
            tank,
            background,
            shoot,
            explosion,
            engine,
        })
    }
}

async fn texture(dir: &str, file: &str) -> Result<Texture2D, AssetError> {
    let path = asset_path(dir, file);
    let texture = load_texture(&path)
        .await
        .map_err(|source| AssetError::Texture { path, source })?;
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}

async fn sound(dir: &str, file: &str) -> Result<Sound, AssetError> {
    let path = asset_path(dir, file);
    load_sound(&path)
        .await
        .map_err(|source| AssetError::Sound { path, source })
}
