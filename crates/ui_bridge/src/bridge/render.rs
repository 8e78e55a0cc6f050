//! Draw-list translation
//!
//! Replays the UI library's [`DrawData`] against a [`HostRenderer`]: one
//! host draw per element command, scissored to the command's clip rectangle
//! and bound to its texture, with callbacks run in place. The scissor box
//! active before translation is restored afterwards.
//!
//! Element commands with no indices left to draw (a zero count, or a range
//! starting at the end of the index buffer) issue no host draw.

use std::mem::{offset_of, size_of};

use super::font::host_texture_from_id;
use crate::config::VertexUpload;
use crate::foundation::math::{truncate, RectI, Vec2};
use crate::host::renderer::{
    ColorFormat, DrawCall, HostRenderer, HostVertex, PrimitiveType, VertexLayout, VertexSource,
};
use crate::ui::draw::{
    DrawCmd, DrawData, DrawList, DrawVert, COL32_A_SHIFT, COL32_B_SHIFT, COL32_G_SHIFT, COL32_R_SHIFT,
};

/// Split a packed colour into normalised RGBA channels
pub fn unpack_color(col: u32) -> [f32; 4] {
    let channel = |shift: u32| f32::from(((col >> shift) & 0xFF) as u8) / 255.0;
    [
        channel(COL32_R_SHIFT),
        channel(COL32_G_SHIFT),
        channel(COL32_B_SHIFT),
        channel(COL32_A_SHIFT),
    ]
}

/// Copy a UI vertex into the host's vertex record
pub fn convert_vertex(vertex: &DrawVert) -> HostVertex {
    HostVertex {
        position: Vec2::new(vertex.pos[0], vertex.pos[1]),
        color: unpack_color(vertex.col),
        tex_coords: Vec2::new(vertex.uv[0], vertex.uv[1]),
    }
}

/// Memory layout of [`DrawVert`] for renderers that read it directly
pub const fn draw_vert_layout() -> VertexLayout {
    VertexLayout {
        stride: size_of::<DrawVert>(),
        position_offset: offset_of!(DrawVert, pos),
        tex_coords_offset: offset_of!(DrawVert, uv),
        color_offset: offset_of!(DrawVert, col),
        color_format: ColorFormat::UnsignedByte4,
    }
}

/// Scissor box in renderer-local pixels for a display-space clip rectangle
pub fn scissor_for(clip_rect: [f32; 4], display_pos: Vec2) -> RectI {
    let min = truncate(Vec2::new(clip_rect[0], clip_rect[1]) - display_pos);
    let max = truncate(Vec2::new(clip_rect[2], clip_rect[3]) - display_pos);
    RectI::from_min_max(min, max)
}

/// Counters for one translated frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Host draw calls issued
    pub draw_calls: usize,
    /// Callback commands invoked
    pub callbacks: usize,
    /// Indices consumed across all lists
    pub indices: usize,
    /// Element commands cut short because they ran past their index buffer
    pub truncated_commands: usize,
}

/// Translates draw data into host draw calls
#[derive(Debug, Default)]
pub struct DrawListRenderer {
    vertex_upload: VertexUpload,
    vertices: Vec<HostVertex>,
}

impl DrawListRenderer {
    /// Create a translator using the given vertex upload strategy
    pub const fn new(vertex_upload: VertexUpload) -> Self {
        Self {
            vertex_upload,
            vertices: Vec::new(),
        }
    }

    /// Whether lists are passed to `renderer` with a layout description instead of copied
    pub fn uses_custom_layout<R: HostRenderer + ?Sized>(&self, renderer: &R) -> bool {
        // The layout promises R,G,B,A byte order, which only holds for little-endian packing
        self.vertex_upload == VertexUpload::Auto
            && cfg!(target_endian = "little")
            && renderer.supports_custom_vertex_layout()
    }

    /// Issue every command of `draw_data` against `renderer`
    pub fn render<R: HostRenderer + ?Sized>(&mut self, renderer: &mut R, draw_data: &DrawData) -> RenderStats {
        let custom_layout = self.uses_custom_layout(renderer);
        let saved_scissor = renderer.scissor_box();
        let mut stats = RenderStats::default();

        for list in &draw_data.draw_lists {
            let vertices = if custom_layout {
                VertexSource::Custom {
                    bytes: bytemuck::cast_slice(list.vtx_buffer()),
                    layout: draw_vert_layout(),
                }
            } else {
                self.vertices.clear();
                self.vertices.extend(list.vtx_buffer().iter().map(convert_vertex));
                VertexSource::Host(&self.vertices)
            };
            render_list(renderer, list, vertices, draw_data.display_pos, &mut stats);
        }

        renderer.set_scissor_box(saved_scissor);
        // Nothing from this frame's buffers outlives the call
        self.vertices.clear();

        log::debug!(
            "Rendered {} draw lists ({} vertices, {} indices): {} draw calls, {} callbacks, {} indices drawn",
            draw_data.draw_lists.len(),
            draw_data.total_vtx_count(),
            draw_data.total_idx_count(),
            stats.draw_calls,
            stats.callbacks,
            stats.indices
        );
        stats
    }
}

fn render_list<R: HostRenderer + ?Sized>(
    renderer: &mut R,
    list: &DrawList,
    vertices: VertexSource<'_>,
    display_pos: Vec2,
    stats: &mut RenderStats,
) {
    let indices = list.idx_buffer();
    let mut offset: usize = 0;

    for command in list.commands() {
        match command {
            DrawCmd::Callback(callback) => {
                callback(list, command);
                stats.callbacks += 1;
            }
            DrawCmd::Elements { count, params } => {
                let end = offset.saturating_add(*count).min(indices.len());
                if end - offset < *count {
                    log::warn!(
                        "Draw command wants {} indices at offset {} but the list only has {}",
                        count,
                        offset,
                        indices.len()
                    );
                    stats.truncated_commands += 1;
                }
                if end > offset {
                    renderer.set_scissor_box(scissor_for(params.clip_rect, display_pos));
                    renderer.draw(&DrawCall {
                        vertices,
                        indices: &indices[offset..end],
                        primitive: PrimitiveType::Triangles,
                        texture: host_texture_from_id(params.texture_id),
                    });
                    stats.draw_calls += 1;
                    stats.indices += end - offset;
                    log::trace!("Drew {} indices at offset {}", end - offset, offset);
                }
                offset = end;
            }
        }
    }
}
