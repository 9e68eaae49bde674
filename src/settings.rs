//! Tiling settings
//!
//! Viewport, generation depth and presentation. Stored as JSON so a render
//! can be reproduced from a config file.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use crate::consts::MAX_GENERATIONS;
use crate::consts::{DEFAULT_GENERATIONS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{Result, TilingError};
use crate::renderer::vertex::colors;
use crate::seed_tile;
use crate::tiling::{GenerationStats, Tile, TileKind, bounds, deflate_with_stats};

/// Canvas margin kept clear when fitting the tiling
pub const FIT_MARGIN: f64 = 10.0;

/// Detail preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DetailPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl DetailPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailPreset::Low => "Low",
            DetailPreset::Medium => "Medium",
            DetailPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(DetailPreset::Low),
            "medium" | "med" => Some(DetailPreset::Medium),
            "high" => Some(DetailPreset::High),
            _ => None,
        }
    }

    /// Deflation depth for this preset
    pub fn generations(&self) -> u32 {
        match self {
            DetailPreset::Low => 2,
            DetailPreset::Medium => DEFAULT_GENERATIONS,
            DetailPreset::High => 6,
        }
    }
}

/// Translation plus uniform scale applied to tile coordinates when drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub translate: DVec2,
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            translate: DVec2::new(150.0, -50.0),
            scale: 0.4,
        }
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        translate: DVec2::ZERO,
        scale: 1.0,
    };

    /// Map a tile-space point to the canvas
    #[inline]
    pub fn apply(&self, p: DVec2) -> DVec2 {
        p * self.scale + self.translate
    }

    /// Scale and center the box `(min, max)` inside a `width` x `height` canvas
    pub fn fit(min: DVec2, max: DVec2, width: f64, height: f64, margin: f64) -> Self {
        let extent = (max - min).max(DVec2::splat(f64::EPSILON));
        let avail = DVec2::new(width - 2.0 * margin, height - 2.0 * margin).max(DVec2::ONE);
        let scale = (avail.x / extent.x).min(avail.y / extent.y);
        let center = (min + max) / 2.0;
        Self {
            translate: DVec2::new(width, height) / 2.0 - center * scale,
            scale,
        }
    }
}

/// Fill and stroke colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub big: [f32; 4],
    pub small: [f32; 4],
    pub outline: [f32; 4],
    pub background: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            big: colors::BIG_TILE,
            small: colors::SMALL_TILE,
            outline: colors::OUTLINE,
            background: colors::BACKGROUND,
        }
    }
}

impl Palette {
    /// Fill color for a tile kind
    pub fn fill(&self, kind: TileKind) -> [f32; 4] {
        match kind {
            TileKind::Big => self.big,
            TileKind::Small => self.small,
        }
    }
}

/// Tiling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Canvas width; also sets the seed position and size
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// Preset used when `generations` is not given
    pub preset: DetailPreset,
    /// Explicit deflation depth (overrides the preset)
    pub generations: Option<u32>,

    // === Presentation ===
    pub view: ViewTransform,
    /// Fit the finished tiling to the canvas instead of using `view`
    pub fit_to_canvas: bool,
    /// Outline width in tile units
    pub stroke_width: f64,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            preset: DetailPreset::Medium,
            generations: None,

            view: ViewTransform::default(),
            fit_to_canvas: false,
            stroke_width: 1.0,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Create settings from a detail preset
    pub fn from_preset(preset: DetailPreset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// Effective deflation depth
    pub fn generations(&self) -> u32 {
        self.generations.unwrap_or_else(|| self.preset.generations())
    }

    /// Check ranges before anything is generated
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return Err(TilingError::InvalidArgument(format!(
                "canvas must be positive and finite, got {}x{}",
                self.width, self.height
            )));
        }
        if self.generations() > MAX_GENERATIONS {
            return Err(TilingError::InvalidArgument(format!(
                "generations must be at most {MAX_GENERATIONS}, got {}",
                self.generations()
            )));
        }
        if !(self.view.scale.is_finite() && self.view.scale > 0.0) || !self.view.translate.is_finite()
        {
            return Err(TilingError::InvalidArgument(format!(
                "view transform must be finite with positive scale, got {:?}",
                self.view
            )));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(TilingError::InvalidArgument(format!(
                "stroke width must be non-negative, got {}",
                self.stroke_width
            )));
        }
        Ok(())
    }

    /// Seed the canvas and deflate to the configured depth
    pub fn build_tiling(&self) -> Result<(Vec<Tile>, Vec<GenerationStats>)> {
        self.validate()?;
        let seed = seed_tile(self.width, self.height)?;
        Ok(deflate_with_stats(&[seed], self.generations()))
    }

    /// View used to draw `tiles`: the configured transform, or a fit to the canvas
    pub fn view_for(&self, tiles: &[Tile]) -> ViewTransform {
        if !self.fit_to_canvas {
            return self.view;
        }
        match bounds(tiles) {
            Some((min, max)) => ViewTransform::fit(min, max, self.width, self.height, FIT_MARGIN),
            None => self.view,
        }
    }

    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
