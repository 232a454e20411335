//! GPU texture records
//!
//! A [`Texture`] is the CPU-side record of a texture object living in the
//! renderer. The pixels themselves belong to the backend once uploaded.

use serde::{Deserialize, Serialize};

/// Backend-assigned texture object id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Texture filtering modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterMode {
    /// Nearest neighbor filtering
    Nearest,
    /// Linear filtering
    #[default]
    Linear,
}

/// Texture wrapping modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WrapMode {
    /// Repeat the texture
    #[default]
    Repeat,
    /// Mirror the texture
    MirroredRepeat,
    /// Clamp to edge
    ClampToEdge,
}

/// Texture creation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureParams {
    /// Texture filtering mode
    pub filter_mode: FilterMode,
    /// Texture wrapping mode
    pub wrap_mode: WrapMode,
    /// Generate mipmaps
    pub generate_mipmaps: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            filter_mode: FilterMode::Linear,
            wrap_mode: WrapMode::Repeat,
            generate_mipmaps: true,
        }
    }
}

impl TextureParams {
    /// Crisp, unfiltered sampling for pixel art
    pub fn pixel_art() -> Self {
        Self {
            filter_mode: FilterMode::Nearest,
            wrap_mode: WrapMode::ClampToEdge,
            generate_mipmaps: false,
        }
    }
}

/// Uploaded texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Backend texture object
    pub id: TextureId,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Sampling parameters used at creation
    pub params: TextureParams,
}
