//! Font atlas texture
//!
//! The UI library's glyph bitmap is uploaded once at init. The resulting
//! host texture is owned exclusively by the bridge and released exactly once
//! at shutdown; its id is written back into the atlas record so glyph draw
//! commands carry it.

use crate::host::renderer::{HostRenderer, RenderResult, TextureHandle};
use crate::ui::draw::TextureId;
use crate::ui::fonts::FontAtlas;

/// UI texture id naming a host texture
pub const fn texture_id_from_host(handle: TextureHandle) -> TextureId {
    TextureId(handle.0)
}

/// Host texture named by a UI texture id
pub const fn host_texture_from_id(id: TextureId) -> TextureHandle {
    TextureHandle(id.0)
}

/// The uploaded font atlas
#[derive(Debug)]
pub struct FontTexture {
    handle: Option<TextureHandle>,
    width: u32,
    height: u32,
}

impl FontTexture {
    /// Upload the atlas bitmap and stamp the new texture id into the atlas
    pub fn create<R: HostRenderer + ?Sized>(renderer: &mut R, fonts: &mut FontAtlas) -> RenderResult<Self> {
        let (pixels, width, height) = fonts.tex_data_as_rgba32();
        let handle = renderer.create_texture(width, height, pixels)?;
        fonts.tex_id = texture_id_from_host(handle);

        log::info!("Font atlas uploaded: {}x{} as {:?}", width, height, handle);
        Ok(Self {
            handle: Some(handle),
            width,
            height,
        })
    }

    /// Host texture holding the atlas
    pub fn handle(&self) -> Option<TextureHandle> {
        self.handle
    }

    /// Atlas size in pixels
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Release the host texture
    pub fn destroy<R: HostRenderer + ?Sized>(mut self, renderer: &mut R) -> RenderResult<()> {
        match self.handle.take() {
            Some(handle) => {
                log::info!("Releasing font atlas texture {:?}", handle);
                renderer.destroy_texture(handle)
            }
            None => Ok(()),
        }
    }
}

impl Drop for FontTexture {
    fn drop(&mut self) {
        if let Some(handle) = self.handle {
            log::warn!("Font atlas texture {:?} dropped without being destroyed", handle);
        }
    }
}
