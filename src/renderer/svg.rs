//! SVG export
//!
//! One `<polygon>` per tile, filled by kind and stroked with the outline
//! color, inside a group carrying the view transform.

use super::vertex::colors::css_hex;
use crate::settings::Settings;
use crate::tiling::{Tile, outline};

/// Render `tiles` as a standalone SVG document
pub fn render_svg(tiles: &[Tile], settings: &Settings) -> String {
    let view = settings.view_for(tiles);
    let palette = &settings.palette;
    let (width, height) = (settings.width, settings.height);

    let mut svg = String::with_capacity(256 + tiles.len() * 160);
    svg.push_str(&format!(
        r#"<svg viewBox="0 0 {width} {height}" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        css_hex(palette.background)
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <g transform="translate({} {}) scale({})" stroke="{}" stroke-width="{}" stroke-linejoin="round">"#,
        view.translate.x,
        view.translate.y,
        view.scale,
        css_hex(palette.outline),
        settings.stroke_width
    ));
    svg.push('\n');

    for tile in tiles {
        let points = outline(tile)
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        svg.push_str(&format!(
            r#"    <polygon class="{}" points="{}" fill="{}"/>"#,
            tile.kind().as_str().to_lowercase(),
            points,
            css_hex(palette.fill(tile.kind()))
        ));
        svg.push('\n');
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DetailPreset;

    #[test]
    fn test_one_polygon_per_tile() {
        let settings = Settings::from_preset(DetailPreset::Medium);
        let (tiles, _) = settings.build_tiling().unwrap();
        let svg = render_svg(&tiles, &settings);

        assert!(svg.starts_with("<svg viewBox=\"0 0 700 450\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<polygon").count(), tiles.len());
        assert!(svg.contains(r#"transform="translate(150 -50) scale(0.4)""#));
    }

    #[test]
    fn test_fill_by_kind() {
        let settings = Settings::from_preset(DetailPreset::Low);
        let (tiles, _) = settings.build_tiling().unwrap();
        let svg = render_svg(&tiles, &settings);
        assert!(svg.contains(r#"class="small" points="#));
        assert!(svg.contains("fill=\"#ffff00\""));
        assert!(svg.contains("fill=\"#ffc800\""));
        assert!(svg.contains("stroke=\"#404040\""));
    }

    #[test]
    fn test_empty_tiling() {
        let svg = render_svg(&[], &Settings::default());
        assert_eq!(svg.matches("<polygon").count(), 0);
        assert!(svg.contains("<rect"));
    }
}
