#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use tile_grid_wasm::{is_visible, GridConfig, GridLayout};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn layout_matches_on_wasm32() {
    let layout = GridLayout::compute(&GridConfig::default(), 980.0).unwrap();
    assert_eq!(layout.rows, 13);
    assert_eq!(layout.content_height, 4180.0);

    let tile = layout.tile_rect(3);
    assert!(is_visible(&tile, 0.0, 800.0));
    assert!(!is_visible(&tile, tile.y + tile.height, 800.0));
}

#[wasm_bindgen_test]
fn window_reports_a_viewport() {
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    let height = window.inner_height().unwrap().as_f64().unwrap();
    assert!(width > 0.0 && height > 0.0);

    let layout = GridLayout::compute(&GridConfig::default(), width).unwrap();
    assert_eq!(layout.rects().count(), 37);
}

#[wasm_bindgen_test]
fn canvas_can_be_created() {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_width(980);
    canvas.set_height(800);
    assert!(canvas.get_context("2d").unwrap().is_some());
}
