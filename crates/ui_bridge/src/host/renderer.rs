//! Host 2D renderer interface
//!
//! The draw-list translator talks to the host exclusively through
//! [`HostRenderer`]: scissor box get/set, texture creation/destruction and
//! an indexed triangle draw that accepts either host vertices or a
//! description of a foreign vertex layout.

use thiserror::Error;

use crate::foundation::math::{RectI, Vec2};

/// Handle to a texture owned by the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u64);

/// Errors reported by a host renderer
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer refused to create a texture
    #[error("Failed to create {width}x{height} texture: {reason}")]
    TextureCreation {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Renderer-specific reason
        reason: String,
    },

    /// The handle does not name a live texture
    #[error("Unknown texture handle {0:?}")]
    UnknownTexture(TextureHandle),
}

/// Result type for host renderer operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Vertex record native to the host renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostVertex {
    /// Position in target coordinates
    pub position: Vec2,
    /// Linear RGBA colour, each channel in `[0, 1]`
    pub color: [f32; 4],
    /// Texture coordinates
    pub tex_coords: Vec2,
}

/// Storage format of the colour attribute in a foreign vertex layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// Four `f32` channels
    Float4,
    /// Four normalised `u8` channels in R, G, B, A memory order
    UnsignedByte4,
}

/// Memory layout of a foreign vertex record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    /// Size of one record in bytes
    pub stride: usize,
    /// Byte offset of the two `f32` position components
    pub position_offset: usize,
    /// Byte offset of the two `f32` texture coordinates
    pub tex_coords_offset: usize,
    /// Byte offset of the colour
    pub color_offset: usize,
    /// Colour storage format
    pub color_format: ColorFormat,
}

/// Vertex data handed to a draw call
#[derive(Debug, Clone, Copy)]
pub enum VertexSource<'a> {
    /// Vertices already converted to the host record
    Host(&'a [HostVertex]),
    /// Raw foreign records described by a layout
    Custom {
        /// Vertex bytes, `stride` bytes per vertex
        bytes: &'a [u8],
        /// Layout of each record
        layout: VertexLayout,
    },
}

impl VertexSource<'_> {
    /// Number of vertices in the source
    pub fn len(&self) -> usize {
        match self {
            Self::Host(vertices) => vertices.len(),
            Self::Custom { bytes, layout } => bytes.len() / layout.stride.max(1),
        }
    }

    /// True if the source holds no vertices
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Primitive topology of a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveType {
    /// Independent triangles, three indices each
    #[default]
    Triangles,
}

/// One indexed draw
#[derive(Debug, Clone, Copy)]
pub struct DrawCall<'a> {
    /// Vertex data the indices refer to
    pub vertices: VertexSource<'a>,
    /// Indices to draw, the element count is `indices.len()`
    pub indices: &'a [u16],
    /// Primitive topology
    pub primitive: PrimitiveType,
    /// The single texture bound for this draw
    pub texture: TextureHandle,
}

/// Renderer operations the bridge needs from the host
pub trait HostRenderer {
    /// Current scissor box
    fn scissor_box(&self) -> RectI;

    /// Replace the scissor box
    fn set_scissor_box(&mut self, scissor: RectI);

    /// Upload an RGBA32 bitmap as a new texture
    fn create_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> RenderResult<TextureHandle>;

    /// Release a texture created by [`HostRenderer::create_texture`]
    fn destroy_texture(&mut self, texture: TextureHandle) -> RenderResult<()>;

    /// Whether [`VertexSource::Custom`] is understood by [`HostRenderer::draw`]
    fn supports_custom_vertex_layout(&self) -> bool {
        false
    }

    /// Issue one indexed draw
    fn draw(&mut self, call: &DrawCall<'_>);
}

impl<T: HostRenderer + ?Sized> HostRenderer for &mut T {
    fn scissor_box(&self) -> RectI {
        (**self).scissor_box()
    }

    fn set_scissor_box(&mut self, scissor: RectI) {
        (**self).set_scissor_box(scissor);
    }

    fn create_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> RenderResult<TextureHandle> {
        (**self).create_texture(width, height, rgba)
    }

    fn destroy_texture(&mut self, texture: TextureHandle) -> RenderResult<()> {
        (**self).destroy_texture(texture)
    }

    fn supports_custom_vertex_layout(&self) -> bool {
        (**self).supports_custom_vertex_layout()
    }

    fn draw(&mut self, call: &DrawCall<'_>) {
        (**self).draw(call);
    }
}
