//! In-memory host
//!
//! A window, renderer and clipboard that keep everything in memory and
//! record every call made on them. Useful for driving the bridge without an
//! OS window, and as the test double for the bridge's own tests.

use std::cell::RefCell;
use std::rc::Rc;

use image::RgbaImage;
use slotmap::{DefaultKey, Key, KeyData, SlotMap};

use super::clipboard::HostClipboard;
use super::renderer::{
    DrawCall, HostRenderer, HostVertex, PrimitiveType, RenderError, RenderResult, TextureHandle,
    VertexLayout, VertexSource,
};
use super::window::{CursorShape, HostWindow};
use crate::foundation::math::{RectI, Vec2, Vec2i};

/// Cursor call made on a [`HeadlessWindow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCall {
    /// `set_mouse_cursor_visible`
    Visible(bool),
    /// `set_mouse_cursor`
    Shape(CursorShape),
}

/// Window with a fixed logical and framebuffer size
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    size: Vec2,
    framebuffer_size: Vec2,
    cursor_visible: bool,
    cursor: CursorShape,
    cursor_calls: Vec<CursorCall>,
}

impl HeadlessWindow {
    /// Window whose framebuffer matches its logical size
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_framebuffer(Vec2::new(width, height), Vec2::new(width, height))
    }

    /// Window with distinct logical and framebuffer sizes
    pub const fn with_framebuffer(size: Vec2, framebuffer_size: Vec2) -> Self {
        Self {
            size,
            framebuffer_size,
            cursor_visible: true,
            cursor: CursorShape::Arrow,
            cursor_calls: Vec::new(),
        }
    }

    /// Simulate a resize
    pub fn resize(&mut self, size: Vec2, framebuffer_size: Vec2) {
        self.size = size;
        self.framebuffer_size = framebuffer_size;
    }

    /// Whether the cursor is currently shown
    pub const fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Cursor shape last applied
    pub const fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Every cursor call in order
    pub fn cursor_calls(&self) -> &[CursorCall] {
        &self.cursor_calls
    }

    /// Number of `set_mouse_cursor` calls
    pub fn cursor_shape_calls(&self) -> usize {
        self.cursor_calls
            .iter()
            .filter(|call| matches!(call, CursorCall::Shape(_)))
            .count()
    }
}

impl HostWindow for HeadlessWindow {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn framebuffer_size(&self) -> Vec2 {
        self.framebuffer_size
    }

    fn set_mouse_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
        self.cursor_calls.push(CursorCall::Visible(visible));
    }

    fn set_mouse_cursor(&mut self, shape: CursorShape) {
        self.cursor = shape;
        self.cursor_calls.push(CursorCall::Shape(shape));
    }
}

/// A draw call as seen by a [`HeadlessRenderer`]
#[derive(Debug, Clone)]
pub struct RecordedDraw {
    /// Scissor box active when the draw was issued
    pub scissor: RectI,
    /// Bound texture
    pub texture: TextureHandle,
    /// Indices drawn
    pub indices: Vec<u16>,
    /// Vertices available to the draw
    pub vertex_count: usize,
    /// Converted vertices, empty when a custom layout was used
    pub vertices: Vec<HostVertex>,
    /// Layout description when the custom-layout path was used
    pub layout: Option<VertexLayout>,
    /// Topology
    pub primitive: PrimitiveType,
}

/// Renderer that stores textures as images and records draws
#[derive(Debug)]
pub struct HeadlessRenderer {
    textures: SlotMap<DefaultKey, RgbaImage>,
    scissor: RectI,
    custom_layout: bool,
    draws: Vec<RecordedDraw>,
    destroyed: Vec<TextureHandle>,
}

impl HeadlessRenderer {
    /// Renderer for a target of the given pixel size, without custom layouts
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            textures: SlotMap::new(),
            scissor: RectI::from_position_size(Vec2i::zeros(), Vec2i::new(width, height)),
            custom_layout: false,
            draws: Vec::new(),
            destroyed: Vec::new(),
        }
    }

    /// Advertise support for foreign vertex layouts
    #[must_use]
    pub const fn with_custom_layout(mut self, supported: bool) -> Self {
        self.custom_layout = supported;
        self
    }

    /// Draws issued so far
    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    /// Forget recorded draws
    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }

    /// Pixels of a live texture
    pub fn texture(&self, texture: TextureHandle) -> Option<&RgbaImage> {
        self.textures.get(Self::key(texture))
    }

    /// Number of live textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Textures destroyed so far, in order
    pub fn destroyed(&self) -> &[TextureHandle] {
        &self.destroyed
    }

    fn key(texture: TextureHandle) -> DefaultKey {
        DefaultKey::from(KeyData::from_ffi(texture.0))
    }
}

impl HostRenderer for HeadlessRenderer {
    fn scissor_box(&self) -> RectI {
        self.scissor
    }

    fn set_scissor_box(&mut self, scissor: RectI) {
        self.scissor = scissor;
    }

    fn create_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> RenderResult<TextureHandle> {
        let image = RgbaImage::from_raw(width, height, rgba.to_vec()).ok_or_else(|| {
            RenderError::TextureCreation {
                width,
                height,
                reason: format!("{} bytes is too small", rgba.len()),
            }
        })?;
        let key = self.textures.insert(image);
        Ok(TextureHandle(key.data().as_ffi()))
    }

    fn destroy_texture(&mut self, texture: TextureHandle) -> RenderResult<()> {
        self.textures
            .remove(Self::key(texture))
            .ok_or(RenderError::UnknownTexture(texture))?;
        self.destroyed.push(texture);
        Ok(())
    }

    fn supports_custom_vertex_layout(&self) -> bool {
        self.custom_layout
    }

    fn draw(&mut self, call: &DrawCall<'_>) {
        let (vertices, layout) = match call.vertices {
            VertexSource::Host(vertices) => (vertices.to_vec(), None),
            VertexSource::Custom { layout, .. } => (Vec::new(), Some(layout)),
        };
        self.draws.push(RecordedDraw {
            scissor: self.scissor,
            texture: call.texture,
            indices: call.indices.to_vec(),
            vertex_count: call.vertices.len(),
            vertices,
            layout,
            primitive: call.primitive,
        });
    }
}

/// Clipboard backed by a shared string
///
/// Clones share the same contents, so a test can keep one clone while the
/// bridge owns another.
#[derive(Debug, Clone, Default)]
pub struct HeadlessClipboard {
    contents: Rc<RefCell<String>>,
}

impl HeadlessClipboard {
    /// Empty clipboard
    pub fn new() -> Self {
        Self::default()
    }
}

impl HostClipboard for HeadlessClipboard {
    fn get_string(&self) -> String {
        self.contents.borrow().clone()
    }

    fn set_string(&mut self, text: &str) {
        *self.contents.borrow_mut() = text.to_owned();
    }
}
