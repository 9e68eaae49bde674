//! Browser front end
//!
//! Draws the default tiling onto `<canvas id="canvas">` with the 2D context,
//! filling each outline by kind and stroking it with the outline color.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::renderer::vertex::colors::css_hex;
use crate::settings::Settings;
use crate::tiling::{Tile, outline};

fn context(canvas_id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;
    Ok((canvas, ctx))
}

/// Paint `tiles` onto the context using the settings' view and palette
pub fn draw_tiles(ctx: &CanvasRenderingContext2d, tiles: &[Tile], settings: &Settings) -> Result<(), JsValue> {
    let view = settings.view_for(tiles);
    let palette = &settings.palette;

    ctx.set_fill_style_str(&css_hex(palette.background));
    ctx.fill_rect(0.0, 0.0, settings.width, settings.height);

    ctx.save();
    ctx.translate(view.translate.x, view.translate.y)?;
    ctx.scale(view.scale, view.scale)?;
    ctx.set_line_width(settings.stroke_width);
    ctx.set_stroke_style_str(&css_hex(palette.outline));

    for tile in tiles {
        let points = outline(tile);
        ctx.begin_path();
        ctx.move_to(points[0].x, points[0].y);
        for p in &points[1..] {
            ctx.line_to(p.x, p.y);
        }
        ctx.close_path();
        ctx.set_fill_style_str(&css_hex(palette.fill(tile.kind())));
        ctx.fill();
        ctx.stroke();
    }

    ctx.restore();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {e}")))?;

    let settings = Settings::default();
    let (tiles, _) = settings
        .build_tiling()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let (canvas, ctx) = context("canvas")?;
    canvas.set_width(settings.width as u32);
    canvas.set_height(settings.height as u32);
    draw_tiles(&ctx, &tiles, &settings)?;

    log::info!("Drew {} tiles", tiles.len());
    Ok(())
}
