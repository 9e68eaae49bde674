//! Tile model
//!
//! A tile is one prototile instance at some generation: which prototile,
//! where its reference vertex sits, how it is rotated and scaled, and
//! whether it is mirrored. Tiles are immutable once built.

use glam::DVec2;
use serde::Serialize;

use crate::consts::{MAX_COORDINATE, MAX_TILE_SIZE, MIN_TILE_SIZE};
use crate::error::{Result, TilingError};

/// Which of the two prototiles a tile is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TileKind {
    Big,
    Small,
}

impl TileKind {
    /// Row in the vertex scale table and the fill palette.
    ///
    /// Big tiles use the full-scale row 0 and Small tiles the 1/√G row 1.
    #[inline]
    pub fn render_index(&self) -> usize {
        match self {
            TileKind::Big => 0,
            TileKind::Small => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Big => "Big",
            TileKind::Small => "Small",
        }
    }
}

/// Mirror orientation of a tile (the ±1 `sign` of the substitution rule)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Chirality {
    Positive,
    Negative,
}

impl Chirality {
    /// +1.0 or -1.0
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match self {
            Chirality::Positive => 1.0,
            Chirality::Negative => -1.0,
        }
    }

    /// The mirror image
    #[inline]
    pub fn flipped(&self) -> Self {
        match self {
            Chirality::Positive => Chirality::Negative,
            Chirality::Negative => Chirality::Positive,
        }
    }
}

/// One tile of a generation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tile {
    kind: TileKind,
    /// Reference vertex in canvas coordinates (y down)
    position: DVec2,
    /// Rotation in radians
    angle: f64,
    /// Scale, shrinks by 1/√G per generation
    size: f64,
    chirality: Chirality,
}

impl Tile {
    /// Build a tile, rejecting geometry that would poison later generations.
    ///
    /// Position is bounded by `MAX_COORDINATE` and size by
    /// `MIN_TILE_SIZE..=MAX_TILE_SIZE`, so every child offset stays finite.
    pub fn new(
        kind: TileKind,
        position: DVec2,
        angle: f64,
        size: f64,
        chirality: Chirality,
    ) -> Result<Self> {
        if !position.is_finite() || position.abs().max_element() > MAX_COORDINATE {
            return Err(TilingError::InvalidArgument(format!(
                "tile position must be finite and within ±{MAX_COORDINATE:e}, got {position}"
            )));
        }
        if !angle.is_finite() {
            return Err(TilingError::InvalidArgument(format!(
                "tile angle must be finite, got {angle}"
            )));
        }
        if !(MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&size) {
            return Err(TilingError::InvalidArgument(format!(
                "tile size must be in {MIN_TILE_SIZE:e}..={MAX_TILE_SIZE:e}, got {size}"
            )));
        }
        Ok(Self::from_parts(kind, position, angle, size, chirality))
    }

    /// Unchecked constructor for children of an already valid tile.
    #[inline]
    pub(crate) fn from_parts(
        kind: TileKind,
        position: DVec2,
        angle: f64,
        size: f64,
        chirality: Chirality,
    ) -> Self {
        Self {
            kind,
            position,
            angle,
            size,
            chirality,
        }
    }

    #[inline]
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn size(&self) -> f64 {
        self.size
    }

    #[inline]
    pub fn chirality(&self) -> Chirality {
        self.chirality
    }

    /// Dedup key for this tile
    #[inline]
    pub fn key(&self) -> TileKey {
        TileKey::from(self)
    }
}

/// Tiles are the same tile when kind, position and angle match exactly.
/// Size and chirality are deliberately ignored.
impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.position.x == other.position.x
            && self.position.y == other.position.y
            && self.angle == other.angle
    }
}

/// Hashable form of tile identity.
///
/// Stores raw bits with -0.0 folded into +0.0, so two keys are equal exactly
/// when the tiles compare equal with `==`. Tile fields are never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileKey {
    kind: TileKind,
    x: u64,
    y: u64,
    angle: u64,
}

#[inline]
fn canonical_bits(v: f64) -> u64 {
    // -0.0 + 0.0 == +0.0
    (v + 0.0).to_bits()
}

impl From<&Tile> for TileKey {
    fn from(tile: &Tile) -> Self {
        Self {
            kind: tile.kind,
            x: canonical_bits(tile.position.x),
            y: canonical_bits(tile.position.y),
            angle: canonical_bits(tile.angle),
        }
    }
}
