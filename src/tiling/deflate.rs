//! Deflation engine
//!
//! One generation replaces every tile by its children:
//! - Small promotes to a Big tile in place, one generation smaller
//! - Big splits into a mirrored Small tile and a quarter-turned Big tile,
//!   both pushed out along the parent's axis
//!
//! Children from neighbouring parents can land on the same tile, so each
//! generation is deduplicated before the next one starts.

use indexmap::IndexMap;
use std::f64::consts::{FRAC_PI_2, PI};

use super::tile::{Tile, TileKey, TileKind};
use crate::consts::{G, G_POW_2_5, SQRT_G};
use crate::project;

/// Children of a single tile, in emission order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Children {
    /// A Small tile becomes one Big tile
    Promoted(Tile),
    /// A Big tile becomes a reflected Small tile followed by a rotated Big tile
    Split { small: Tile, big: Tile },
}

impl Children {
    /// Number of tiles emitted (1 or 2)
    pub fn count(&self) -> usize {
        match self {
            Children::Promoted(_) => 1,
            Children::Split { .. } => 2,
        }
    }

    /// Append children to `out` in emission order
    pub fn push_into(self, out: &mut Vec<Tile>) {
        match self {
            Children::Promoted(tile) => out.push(tile),
            Children::Split { small, big } => {
                out.push(small);
                out.push(big);
            }
        }
    }
}

/// Apply the substitution rule to one tile
pub fn deflate_tile(tile: &Tile) -> Children {
    let pos = tile.position();
    let angle = tile.angle();
    let chirality = tile.chirality();
    let size = tile.size() / SQRT_G;

    match tile.kind() {
        TileKind::Small => {
            Children::Promoted(Tile::from_parts(TileKind::Big, pos, angle, size, chirality))
        }
        TileKind::Big => {
            // Offsets are measured with the parent's size
            let reach = G_POW_2_5 * tile.size();
            let small = Tile::from_parts(
                TileKind::Small,
                project(pos, reach - G * size, angle),
                angle - PI,
                size,
                chirality.flipped(),
            );
            let big = Tile::from_parts(
                TileKind::Big,
                project(pos, reach, angle),
                angle - chirality.as_f64() * FRAC_PI_2,
                size,
                chirality,
            );
            Children::Split { small, big }
        }
    }
}

/// Collapse tiles with identical kind, position and angle.
///
/// The first occurrence survives and order is otherwise preserved.
pub fn dedup(tiles: Vec<Tile>) -> Vec<Tile> {
    let mut unique: IndexMap<TileKey, Tile> = IndexMap::with_capacity(tiles.len());
    for tile in tiles {
        unique.entry(tile.key()).or_insert(tile);
    }
    unique.into_values().collect()
}

/// Counters for one deflation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationStats {
    /// 1-based generation number (the seed is generation 0)
    pub generation: u32,
    /// Children emitted before dedup
    pub produced: usize,
    /// Tiles left after dedup
    pub retained: usize,
    pub big: usize,
    pub small: usize,
}

impl GenerationStats {
    /// Tiles removed as duplicates
    pub fn duplicates(&self) -> usize {
        self.produced - self.retained
    }
}

/// Deflate `tiles` for `generations` steps
pub fn deflate(tiles: &[Tile], generations: u32) -> Vec<Tile> {
    deflate_with_stats(tiles, generations).0
}

/// Deflate and report per-generation counters.
///
/// Stops early once no tiles remain, so an empty input yields no stats.
pub fn deflate_with_stats(tiles: &[Tile], generations: u32) -> (Vec<Tile>, Vec<GenerationStats>) {
    let mut current = tiles.to_vec();
    let mut stats = Vec::new();

    for generation in 1..=generations {
        if current.is_empty() {
            break;
        }
        let mut next = Vec::with_capacity(current.len() * 2);
        for tile in &current {
            deflate_tile(tile).push_into(&mut next);
        }
        let produced = next.len();
        current = dedup(next);

        let big = current
            .iter()
            .filter(|t| t.kind() == TileKind::Big)
            .count();
        let step = GenerationStats {
            generation,
            produced,
            retained: current.len(),
            big,
            small: current.len() - big,
        };
        log::debug!(
            "Generation {}: {} children, {} kept ({} big, {} small, {} duplicates)",
            step.generation,
            step.produced,
            step.retained,
            step.big,
            step.small,
            step.duplicates()
        );
        stats.push(step);
    }

    (current, stats)
}
