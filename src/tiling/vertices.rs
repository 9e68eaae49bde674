//! Tile vertex generation
//!
//! Each tile outline is described in polar form around its reference vertex:
//! five (distance, angle) pairs, scaled by tile size and a per-kind factor,
//! mirrored by chirality and rotated by the tile angle.

use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

use super::tile::Tile;
use crate::consts::{G, G_POW_2_5, SQRT_G};
use crate::project;

/// Per-kind scale, indexed by `TileKind::render_index`
pub const KIND_SCALE: [f64; 2] = [1.0, 1.0 / SQRT_G];

/// Radial distance of each vertex, in units of tile size
fn radial_table() -> [f64; 5] {
    let g2 = G * G;
    let g3 = g2 * G;
    [
        G,
        (g2 + G).sqrt(),
        ((G + 1.0) * (G + 1.0) + G).sqrt(),
        ((G + 1.0) * (G + 1.0) + (G + 2.0 * g2 + g3)).sqrt(),
        G_POW_2_5,
    ]
}

/// Angular offset of each vertex before mirroring and rotation
fn angle_table() -> [f64; 5] {
    [
        -FRAC_PI_2,
        -FRAC_PI_2 + (1.0 / SQRT_G).atan(),
        -FRAC_PI_2 + (SQRT_G / (G + 1.0)).atan(),
        -FRAC_PI_2 + SQRT_G.atan(),
        0.0,
    ]
}

/// The five table vertices of a tile, in drawing order
pub fn vertices(tile: &Tile) -> [DVec2; 5] {
    let dist = radial_table();
    let ang = angle_table();
    let scale = KIND_SCALE[tile.kind().render_index()] * tile.size();
    let sign = tile.chirality().as_f64();

    std::array::from_fn(|i| {
        project(
            tile.position(),
            dist[i] * scale,
            sign * ang[i] + tile.angle(),
        )
    })
}

/// The drawn outline: reference vertex followed by the five table vertices
pub fn outline(tile: &Tile) -> [DVec2; 6] {
    let v = vertices(tile);
    [tile.position(), v[0], v[1], v[2], v[3], v[4]]
}

/// Axis-aligned bounds (min, max) of every tile outline
pub fn bounds(tiles: &[Tile]) -> Option<(DVec2, DVec2)> {
    tiles
        .iter()
        .flat_map(outline)
        .fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
}
