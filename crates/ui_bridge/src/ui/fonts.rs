//! Font atlas record of the UI library
//!
//! The library rasterizes its glyphs into one RGBA bitmap. The backend
//! uploads that bitmap once and stores the resulting texture id back into
//! the atlas, from where every glyph draw command picks it up.

use thiserror::Error;

use super::draw::TextureId;

/// Errors raised while building an atlas record
#[derive(Debug, Error)]
pub enum FontError {
    /// The pixel buffer does not hold `width * height` RGBA pixels
    #[error("atlas pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    PixelBufferSize {
        /// Atlas width
        width: u32,
        /// Atlas height
        height: u32,
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },
}

/// Rasterized glyph atlas and the texture id it was uploaded as
#[derive(Debug, Clone, Default)]
pub struct FontAtlas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    /// Texture id stamped into glyph draw commands
    pub tex_id: TextureId,
}

impl FontAtlas {
    /// Wrap an already rasterized RGBA32 bitmap
    pub fn from_rgba32(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, FontError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(FontError::PixelBufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            tex_id: TextureId::default(),
        })
    }

    /// Bitmap as `(pixels, width, height)`, four bytes per pixel
    pub fn tex_data_as_rgba32(&self) -> (&[u8], u32, u32) {
        (&self.pixels, self.width, self.height)
    }
}
