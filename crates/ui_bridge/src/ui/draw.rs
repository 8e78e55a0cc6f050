//! Per-frame draw output of the UI library
//!
//! A frame's [`DrawData`] is an ordered sequence of [`DrawList`]s. Each list
//! owns one vertex buffer and one index buffer shared by its ordered
//! [`DrawCmd`]s; an element command draws the next `count` indices of the
//! shared buffer, a callback command asks the renderer to run user code
//! instead.

use bytemuck::{Pod, Zeroable};

use crate::foundation::math::Vec2;

/// Index type of the shared index buffer
pub type DrawIdx = u16;

/// Bit offset of the red channel in a packed colour
pub const COL32_R_SHIFT: u32 = 0;
/// Bit offset of the green channel in a packed colour
pub const COL32_G_SHIFT: u32 = 8;
/// Bit offset of the blue channel in a packed colour
pub const COL32_B_SHIFT: u32 = 16;
/// Bit offset of the alpha channel in a packed colour
pub const COL32_A_SHIFT: u32 = 24;

/// Pack an 8-bit-per-channel colour the way the UI library stores it
pub const fn col32(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) << COL32_R_SHIFT
        | (g as u32) << COL32_G_SHIFT
        | (b as u32) << COL32_B_SHIFT
        | (a as u32) << COL32_A_SHIFT
}

/// Opaque texture reference carried through draw commands unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u64);

impl TextureId {
    /// Raw value
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Vertex record emitted by the UI library
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct DrawVert {
    /// Position in display coordinates
    pub pos: [f32; 2],
    /// Texture coordinates
    pub uv: [f32; 2],
    /// Packed colour, see `COL32_*_SHIFT`
    pub col: u32,
}

impl DrawVert {
    /// Build a vertex from its parts
    pub const fn new(pos: [f32; 2], uv: [f32; 2], col: u32) -> Self {
        Self { pos, uv, col }
    }
}

/// Clip rectangle and texture of an element command
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCmdParams {
    /// Clip rectangle as `[min_x, min_y, max_x, max_y]` in display coordinates
    pub clip_rect: [f32; 4],
    /// Texture to sample
    pub texture_id: TextureId,
}

/// User code run by the renderer in place of a draw
pub type DrawCallback = Box<dyn Fn(&DrawList, &DrawCmd)>;

/// One entry of a draw list's command buffer
pub enum DrawCmd {
    /// Draw the next `count` indices of the list's index buffer
    Elements {
        /// Number of indices
        count: usize,
        /// Clip rectangle and texture
        params: DrawCmdParams,
    },
    /// Invoke the callback instead of drawing
    Callback(DrawCallback),
}

impl std::fmt::Debug for DrawCmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Elements { count, params } => f
                .debug_struct("Elements")
                .field("count", count)
                .field("params", params)
                .finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// A vertex buffer, an index buffer and the commands drawing from them
#[derive(Debug, Default)]
pub struct DrawList {
    vtx_buffer: Vec<DrawVert>,
    idx_buffer: Vec<DrawIdx>,
    cmd_buffer: Vec<DrawCmd>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a draw list from already-built buffers
    pub fn from_parts(
        vtx_buffer: Vec<DrawVert>,
        idx_buffer: Vec<DrawIdx>,
        cmd_buffer: Vec<DrawCmd>,
    ) -> Self {
        Self {
            vtx_buffer,
            idx_buffer,
            cmd_buffer,
        }
    }

    /// Shared vertex buffer
    pub fn vtx_buffer(&self) -> &[DrawVert] {
        &self.vtx_buffer
    }

    /// Shared index buffer
    pub fn idx_buffer(&self) -> &[DrawIdx] {
        &self.idx_buffer
    }

    /// Commands in submission order
    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmd_buffer
    }

    /// Append geometry, extending the last element command when its clip
    /// rectangle and texture match, otherwise starting a new one
    ///
    /// `indices` are relative to `vertices` and are rebased onto the shared
    /// vertex buffer.
    ///
    /// # Panics
    /// Panics if the shared vertex buffer, or any rebased index, would
    /// exceed the index type's range.
    pub fn push_primitive(&mut self, vertices: &[DrawVert], indices: &[DrawIdx], params: DrawCmdParams) {
        let base = DrawIdx::try_from(self.vtx_buffer.len())
            .expect("draw list vertex count exceeds index range");
        self.vtx_buffer.extend_from_slice(vertices);
        self.idx_buffer.extend(indices.iter().map(|i| {
            base.checked_add(*i)
                .expect("rebased draw list index exceeds index range")
        }));

        if let Some(DrawCmd::Elements { count, params: last }) = self.cmd_buffer.last_mut() {
            if *last == params {
                *count += indices.len();
                return;
            }
        }
        self.cmd_buffer.push(DrawCmd::Elements {
            count: indices.len(),
            params,
        });
    }

    /// Append a callback command
    pub fn push_callback(&mut self, callback: impl Fn(&Self, &DrawCmd) + 'static) {
        self.cmd_buffer.push(DrawCmd::Callback(Box::new(callback)));
    }
}

/// Everything the UI library produced for one frame
#[derive(Debug, Default)]
pub struct DrawData {
    /// Top-left of the display area covered by the lists
    pub display_pos: Vec2,
    /// Size of the display area covered by the lists
    pub display_size: Vec2,
    /// Framebuffer pixels per display unit
    pub framebuffer_scale: Vec2,
    /// Draw lists in back-to-front order
    pub draw_lists: Vec<DrawList>,
}

impl DrawData {
    /// Total vertices across all lists
    pub fn total_vtx_count(&self) -> usize {
        self.draw_lists.iter().map(|l| l.vtx_buffer().len()).sum()
    }

    /// Total indices across all lists
    pub fn total_idx_count(&self) -> usize {
        self.draw_lists.iter().map(|l| l.idx_buffer().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(texture: u64) -> DrawCmdParams {
        DrawCmdParams {
            clip_rect: [0.0, 0.0, 100.0, 100.0],
            texture_id: TextureId(texture),
        }
    }

    fn quad() -> ([DrawVert; 4], [DrawIdx; 6]) {
        let white = col32(255, 255, 255, 255);
        (
            [
                DrawVert::new([0.0, 0.0], [0.0, 0.0], white),
                DrawVert::new([10.0, 0.0], [1.0, 0.0], white),
                DrawVert::new([10.0, 10.0], [1.0, 1.0], white),
                DrawVert::new([0.0, 10.0], [0.0, 1.0], white),
            ],
            [0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn test_col32_layout() {
        assert_eq!(col32(0x11, 0x22, 0x33, 0x44), 0x4433_2211);
    }

    #[test]
    fn test_draw_vert_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<DrawVert>(), 20);
    }

    #[test]
    fn test_push_primitive_merges_matching_commands() {
        let (vertices, indices) = quad();
        let mut list = DrawList::new();
        list.push_primitive(&vertices, &indices, params(1));
        list.push_primitive(&vertices, &indices, params(1));

        assert_eq!(list.commands().len(), 1);
        assert!(matches!(list.commands()[0], DrawCmd::Elements { count: 12, .. }));
        assert_eq!(&list.idx_buffer()[6..], &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_push_primitive_splits_on_texture_change() {
        let (vertices, indices) = quad();
        let mut list = DrawList::new();
        list.push_primitive(&vertices, &indices, params(1));
        list.push_callback(|_, _| {});
        list.push_primitive(&vertices, &indices, params(1));
        list.push_primitive(&vertices, &indices, params(2));

        assert_eq!(list.commands().len(), 4);
        assert!(matches!(list.commands()[1], DrawCmd::Callback(_)));
    }

    #[test]
    #[should_panic(expected = "rebased draw list index exceeds index range")]
    fn test_push_primitive_rejects_index_past_range() {
        let mut list = DrawList::from_parts(vec![DrawVert::default(); 65534], Vec::new(), Vec::new());
        let vertices = [DrawVert::default(); 3];
        list.push_primitive(&vertices, &[0, 1, 2], params(1));
    }

    #[test]
    fn test_draw_data_totals() {
        let (vertices, indices) = quad();
        let mut first = DrawList::new();
        first.push_primitive(&vertices, &indices, params(1));
        first.push_primitive(&vertices, &indices, params(2));
        let mut second = DrawList::new();
        second.push_primitive(&vertices, &indices, params(1));

        let data = DrawData {
            draw_lists: vec![first, second],
            ..DrawData::default()
        };
        assert_eq!(data.total_vtx_count(), 12);
        assert_eq!(data.total_idx_count(), 18);
    }
}
