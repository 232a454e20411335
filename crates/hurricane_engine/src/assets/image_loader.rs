//! Image decoding for the image and texture caches
//!
//! Decodes PNG files into tightly packed RGBA8 pixels using the `image` crate.

use std::path::Path;

use super::{Asset, AssetError};

/// Decoded image data ready for GPU upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Raw RGBA pixel data, row-major
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of color channels (always 4, RGBA)
    pub channels: u8,
}

impl Image {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref).map_err(|e| AssetError::LoadFailed {
            path: path_ref.display().to_string(),
            reason: e.to_string(),
        })?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::info!("Loaded image {}x{} from {:?}", width, height, path_ref);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
            channels: 4,
        })
    }

    /// Decode an image from memory
    pub fn decode(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::InvalidData(format!("failed to decode image: {e}")))?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        log::debug!("Decoded image {}x{} from memory", width, height);

        Ok(Self {
            data: rgba_img.into_raw(),
            width,
            height,
            channels: 4,
        })
    }

    /// Create a solid color image (useful for testing and defaults)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Result<Self, AssetError> {
        let len = rgba_len(width, height)?;
        let data = color.repeat(len / 4);

        Ok(Self {
            data,
            width,
            height,
            channels: 4,
        })
    }

    /// Two-color checkerboard with square cells of `cell` pixels
    ///
    /// Handy as a fallback when a texture fails to load.
    pub fn checkerboard(width: u32, height: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> Result<Self, AssetError> {
        let cell = cell.max(1);
        let mut data = Vec::with_capacity(rgba_len(width, height)?);
        for y in 0..height {
            for x in 0..width {
                let color = if (x / cell + y / cell) % 2 == 0 { a } else { b };
                data.extend_from_slice(&color);
            }
        }

        Ok(Self {
            data,
            width,
            height,
            channels: 4,
        })
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Check if image dimensions are power of two (useful for mipmaps)
    pub fn is_power_of_two(&self) -> bool {
        self.width.is_power_of_two() && self.height.is_power_of_two()
    }

    /// RGBA value of the pixel at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let pixel = self.data.get(offset..offset + 4)?;
        Some([pixel[0], pixel[1], pixel[2], pixel[3]])
    }
}

/// Byte length of a `width` x `height` RGBA8 buffer
fn rgba_len(width: u32, height: u32) -> Result<usize, AssetError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(4))
        .ok_or_else(|| AssetError::InvalidData(format!("image dimensions {width}x{height} are too large")))
}

impl Asset for Image {
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        Self::decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Write a small PNG to `path` and return its pixels
    fn write_png(path: &Path) -> Image {
        let image = Image::checkerboard(4, 2, 1, [255, 0, 0, 255], [0, 0, 255, 255]).unwrap();
        image::save_buffer(path, &image.data, image.width, image.height, image::ColorType::Rgba8)
            .unwrap();
        image
    }

    #[test]
    fn test_solid_color_image() {
        let img = Image::solid_color(4, 4, [255, 0, 0, 255]).unwrap();
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);

        // Check first pixel is red
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_power_of_two() {
        let img1 = Image::solid_color(256, 256, [0, 0, 0, 255]).unwrap();
        assert!(img1.is_power_of_two());

        let img2 = Image::solid_color(100, 100, [0, 0, 0, 255]).unwrap();
        assert!(!img2.is_power_of_two());
    }

    #[test]
    fn test_checkerboard_alternates() {
        let img = Image::checkerboard(4, 4, 2, [255; 4], [0, 0, 0, 255]).unwrap();
        assert_eq!(img.pixel(0, 0), Some([255; 4]));
        assert_eq!(img.pixel(2, 0), Some([0, 0, 0, 255]));
        assert_eq!(img.pixel(2, 2), Some([255; 4]));
        assert_eq!(img.pixel(4, 0), None);
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        let solid = Image::solid_color(u32::MAX, u32::MAX, [0; 4]);
        assert!(matches!(solid, Err(AssetError::InvalidData(_))));

        let checker = Image::checkerboard(u32::MAX, u32::MAX, 8, [0; 4], [255; 4]);
        assert!(matches!(checker, Err(AssetError::InvalidData(_))));
    }

    #[test]
    fn test_png_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.png");
        let expected = write_png(&path);

        let loaded = Image::from_file(&path).unwrap();
        assert_eq!(loaded, expected);

        let decoded = Image::from_bytes(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_nonexistent_file() {
        let result = Image::from_file("nonexistent_file.png");
        assert!(result.unwrap_err().is_load_error());
    }

    #[test]
    fn test_garbage_bytes_do_not_decode() {
        let result = Image::decode(b"definitely not a png");
        assert!(matches!(result, Err(AssetError::InvalidData(_))));
    }
}
