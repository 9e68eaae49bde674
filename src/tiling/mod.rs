//! Deterministic tiling module
//!
//! Everything needed to grow a tiling lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Stable output order (children in parent order, first duplicate wins)
//! - Exact floating-point tile identity, no tolerance

pub mod deflate;
pub mod tile;
pub mod vertices;

pub use deflate::{Children, GenerationStats, dedup, deflate, deflate_tile, deflate_with_stats};
pub use tile::{Chirality, Tile, TileKey, TileKind};
pub use vertices::{bounds, outline, vertices};
