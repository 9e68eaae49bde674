//! Tiling rendering
//!
//! Turns a finished tile list into something drawable: colored triangle
//! meshes for a vertex buffer, or a standalone SVG document.

pub mod shapes;
pub mod svg;
pub mod vertex;

pub use shapes::{outline_stroke, tile_fill, tiling_mesh};
pub use svg::render_svg;
pub use vertex::Vertex;
