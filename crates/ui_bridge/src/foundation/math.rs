//! Math utilities and types
//!
//! Provides the small set of 2D types the bridge passes between the UI
//! library and the host renderer.

pub use nalgebra::Vector2;

/// 2D vector type (display space, floating point)
pub type Vec2 = Vector2<f32>;

/// 2D integer vector type (pixel space)
pub type Vec2i = Vector2<i32>;

/// Axis-aligned integer rectangle in renderer-local pixel space
///
/// Stored as a min corner plus a size, matching how host renderers
/// describe their scissor box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectI {
    /// Top-left corner
    pub min: Vec2i,
    /// Width and height
    pub size: Vec2i,
}

impl RectI {
    /// Create a rectangle from its top-left corner and size
    pub const fn from_position_size(position: Vec2i, size: Vec2i) -> Self {
        Self { min: position, size }
    }

    /// Create a rectangle from its top-left and bottom-right corners
    ///
    /// An inverted axis yields an empty rectangle anchored at `min`. Sizes
    /// beyond `i32::MAX` saturate.
    pub fn from_min_max(min: Vec2i, max: Vec2i) -> Self {
        let size = Vec2i::new(
            max.x.saturating_sub(min.x).max(0),
            max.y.saturating_sub(min.y).max(0),
        );
        Self { min, size }
    }

    /// Bottom-right corner (exclusive)
    pub fn max(&self) -> Vec2i {
        self.min + self.size
    }

    /// Width in pixels
    pub fn width(&self) -> i32 {
        self.size.x
    }

    /// Height in pixels
    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// True if the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }
}

/// Truncate a display-space point to integer pixels (toward zero)
#[allow(clippy::cast_possible_truncation)]
pub fn truncate(v: Vec2) -> Vec2i {
    Vec2i::new(v.x as i32, v.y as i32)
}
