//! Ammann Tiling - aperiodic tiling by golden-ratio deflation
//!
//! Core modules:
//! - `tiling`: Deterministic tile model, deflation engine and vertex generation
//! - `renderer`: Triangle meshes and SVG export for a finished tiling
//! - `settings`: Viewport, generation count and presentation settings
//! - `web`: Canvas front end (wasm32 only)

pub mod error;
pub mod renderer;
pub mod settings;
pub mod tiling;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{Result, TilingError};
pub use settings::{DetailPreset, Settings};
pub use tiling::{Chirality, Tile, TileKind, deflate, outline, vertices};

use glam::DVec2;

/// Tiling constants
pub mod consts {
    /// Golden ratio, (1 + √5) / 2
    pub const G: f64 = 1.618_033_988_749_895;
    /// √G, the linear shrink factor between generations
    pub const SQRT_G: f64 = 1.272_019_649_514_069;
    /// G^2.5, radial distance from a Big tile's reference point to its far corner
    pub const G_POW_2_5: f64 = G * G * SQRT_G;

    /// Default viewport (matches the reference render)
    pub const DEFAULT_WIDTH: f64 = 700.0;
    pub const DEFAULT_HEIGHT: f64 = 450.0;
    pub const DEFAULT_GENERATIONS: u32 = 4;
    /// Seed size is width / SEED_SIZE_DIVISOR
    pub const SEED_SIZE_DIVISOR: f64 = 2.5;

    /// Deepest deflation accepted from callers; tile counts grow as Fibonacci numbers
    pub const MAX_GENERATIONS: u32 = 12;
    /// Largest |x|, |y| of a tile's reference vertex
    pub const MAX_COORDINATE: f64 = 1e150;
    /// Size range of a tile; children's offsets and sizes stay finite and non-zero
    pub const MAX_TILE_SIZE: f64 = 1e150;
    pub const MIN_TILE_SIZE: f64 = 1e-150;
}

/// Project a point `r` units from `origin` along `theta`.
///
/// Canvas space: y grows downward, so the sine term is subtracted.
#[inline]
pub fn project(origin: DVec2, r: f64, theta: f64) -> DVec2 {
    DVec2::new(origin.x + r * theta.cos(), origin.y - r * theta.sin())
}

/// Build the single Small seed tile centered in a `width` x `height` viewport.
pub fn seed_tile(width: f64, height: f64) -> Result<Tile> {
    if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
        return Err(TilingError::InvalidArgument(format!(
            "viewport must be positive and finite, got {width}x{height}"
        )));
    }
    Tile::new(
        TileKind::Small,
        DVec2::new(width / 2.0, height / 2.0),
        0.0,
        width / consts::SEED_SIZE_DIVISOR,
        Chirality::Positive,
    )
}

/// Seed a viewport and deflate it `generations` times.
///
/// Negative generation counts are rejected rather than treated as zero,
/// as are counts above `MAX_GENERATIONS`.
pub fn generate_tiling(width: f64, height: f64, generations: i32) -> Result<Vec<Tile>> {
    let generations = u32::try_from(generations)
        .ok()
        .filter(|g| *g <= consts::MAX_GENERATIONS)
        .ok_or_else(|| {
            TilingError::InvalidArgument(format!(
                "generations must be in 0..={}, got {generations}",
                consts::MAX_GENERATIONS
            ))
        })?;
    let seed = seed_tile(width, height)?;
    log::debug!("Seeding {width}x{height} viewport, {generations} generations");
    Ok(deflate(&[seed], generations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_constants_match_closed_forms() {
        assert!((consts::G - (1.0 + 5.0_f64.sqrt()) / 2.0).abs() < 1e-15);
        assert!((consts::SQRT_G - consts::G.sqrt()).abs() < 1e-15);
        assert!((consts::G_POW_2_5 - consts::G.powf(2.5)).abs() < 1e-12);
    }

    #[test]
    fn test_project_y_down() {
        let p = project(DVec2::new(10.0, 10.0), 2.0, PI / 2.0);
        assert!((p.x - 10.0).abs() < 1e-12);
        assert!((p.y - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_seed_tile_centered() {
        let seed = seed_tile(700.0, 450.0).unwrap();
        assert_eq!(seed.kind(), TileKind::Small);
        assert_eq!(seed.position(), DVec2::new(350.0, 225.0));
        assert_eq!(seed.angle(), 0.0);
        assert_eq!(seed.size(), 280.0);
        assert_eq!(seed.chirality(), Chirality::Positive);
    }

    #[test]
    fn test_generate_tiling_rejects_bad_input() {
        assert!(matches!(
            generate_tiling(700.0, 450.0, -1),
            Err(TilingError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_tiling(700.0, 450.0, i32::MAX),
            Err(TilingError::InvalidArgument(_))
        ));
        assert!(generate_tiling(700.0, 450.0, consts::MAX_GENERATIONS as i32 + 1).is_err());
        assert!(generate_tiling(700.0, 450.0, consts::MAX_GENERATIONS as i32).is_ok());
        assert!(generate_tiling(0.0, 450.0, 2).is_err());
        assert!(generate_tiling(f64::NAN, 450.0, 2).is_err());
        assert!(generate_tiling(700.0, f64::INFINITY, 2).is_err());
    }

    #[test]
    fn test_generate_tiling_zero_generations_is_seed() {
        let tiles = generate_tiling(700.0, 450.0, 0).unwrap();
        assert_eq!(tiles, vec![seed_tile(700.0, 450.0).unwrap()]);
    }
}
