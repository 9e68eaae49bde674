//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
    /// Byte offset of `color` within a vertex
    pub const COLOR_OFFSET: usize = std::mem::size_of::<[f32; 2]>();

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// View the mesh as raw bytes for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for tiling elements
pub mod colors {
    /// Big tiles (orange)
    pub const BIG_TILE: [f32; 4] = [1.0, 200.0 / 255.0, 0.0, 1.0];
    /// Small tiles (yellow)
    pub const SMALL_TILE: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    /// Tile edges (dark gray)
    pub const OUTLINE: [f32; 4] = [64.0 / 255.0, 64.0 / 255.0, 64.0 / 255.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// `#rrggbb` form of an RGBA color (alpha dropped)
    pub fn css_hex(color: [f32; 4]) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(color[0]),
            channel(color[1]),
            channel(color[2])
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::COLOR_OFFSET, 8);
        let mesh = [Vertex::new(1.0, 2.0, colors::OUTLINE); 3];
        assert_eq!(as_bytes(&mesh).len(), 3 * Vertex::STRIDE);
    }

    #[test]
    fn test_css_hex() {
        assert_eq!(colors::css_hex(colors::BIG_TILE), "#ffc800");
        assert_eq!(colors::css_hex(colors::SMALL_TILE), "#ffff00");
        assert_eq!(colors::css_hex(colors::OUTLINE), "#404040");
        assert_eq!(colors::css_hex(colors::BACKGROUND), "#ffffff");
    }
}
