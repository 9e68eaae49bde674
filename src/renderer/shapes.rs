//! Shape generation for tile meshes

use glam::DVec2;

use super::vertex::Vertex;
use crate::settings::{Settings, ViewTransform};
use crate::tiling::{Tile, outline};

/// Outline index of the reflex corner; every other outline point is visible from it
const FAN_ROOT: usize = 2;

#[inline]
fn vertex(p: DVec2, color: [f32; 4]) -> Vertex {
    Vertex::new(p.x as f32, p.y as f32, color)
}

/// Generate vertices for a filled tile (4 triangles)
pub fn tile_fill(tile: &Tile, color: [f32; 4], view: &ViewTransform) -> Vec<Vertex> {
    let points = outline(tile).map(|p| view.apply(p));
    let n = points.len();
    let root = points[FAN_ROOT];

    let mut vertices = Vec::with_capacity((n - 2) * 3);
    for step in 1..n - 1 {
        let a = points[(FAN_ROOT + step) % n];
        let b = points[(FAN_ROOT + step + 1) % n];
        vertices.push(vertex(root, color));
        vertices.push(vertex(a, color));
        vertices.push(vertex(b, color));
    }

    vertices
}

/// Generate vertices for the stroke of a closed outline (one quad per edge)
pub fn outline_stroke(points: &[DVec2], width: f64, color: [f32; 4]) -> Vec<Vertex> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(n * 6);

    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];

        // Perpendicular for width
        let dir = (p2 - p1).normalize_or_zero();
        let perp = DVec2::new(-dir.y, dir.x) * half;

        let v1a = p1 + perp;
        let v1b = p1 - perp;
        let v2a = p2 + perp;
        let v2b = p2 - perp;

        // Two triangles
        vertices.push(vertex(v1a, color));
        vertices.push(vertex(v1b, color));
        vertices.push(vertex(v2a, color));

        vertices.push(vertex(v2a, color));
        vertices.push(vertex(v1b, color));
        vertices.push(vertex(v2b, color));
    }

    vertices
}

/// Fill then stroke every tile, in tile order
pub fn tiling_mesh(tiles: &[Tile], settings: &Settings) -> Vec<Vertex> {
    let view = settings.view_for(tiles);
    let stroke = settings.stroke_width * view.scale;
    let mut vertices = Vec::with_capacity(tiles.len() * (12 + 36));

    for tile in tiles {
        vertices.extend(tile_fill(tile, settings.palette.fill(tile.kind()), &view));
        if stroke > 0.0 {
            let points = outline(tile).map(|p| view.apply(p));
            vertices.extend(outline_stroke(&points, stroke, settings.palette.outline));
        }
    }

    log::debug!("Built mesh: {} tiles, {} vertices", tiles.len(), vertices.len());
    vertices
}
