//! Browser wiring for the tile grid: one animation-frame task that advances and
//! draws, plus resize and scroll handlers that only update the shared grid.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::rive::{RiveEngine, RiveModule};
use crate::engine::DebugOverlay;
use crate::layout::Rect;
use crate::scene::TileGrid;

type SharedGrid = Rc<RefCell<TileGrid<RiveEngine>>>;

const OVERLAY_FILL: &str = "rgba(255, 0, 0, 0.1)";

struct CanvasOverlay(CanvasRenderingContext2d);

impl DebugOverlay for CanvasOverlay {
    fn fill_rect(&mut self, rect: Rect) {
        self.0.set_fill_style_str(OVERLAY_FILL);
        self.0.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }
}

/// Size the canvas to the window, rebuild the grid and stretch the page to its content.
fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement, grid: &SharedGrid) -> Result<(), JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let layout = grid
        .borrow_mut()
        .resize(f64::from(canvas.width()), f64::from(canvas.height()))?;

    let body = window
        .document()
        .and_then(|doc| doc.body())
        .ok_or("document has no body")?;
    body.style()
        .set_property("height", &format!("{}px", layout.content_height))?;
    Ok(())
}

/// Start the grid: initial layout, event listeners and the render loop.
pub fn start(canvas: HtmlCanvasElement, runtime: RiveModule, grid: TileGrid<RiveEngine>) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let grid: SharedGrid = Rc::new(RefCell::new(grid));

    let mut overlay = if grid.borrow().config().debug_overlay {
        let context = canvas
            .get_context("2d")?
            .ok_or("2D context not available")?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Some(CanvasOverlay(context))
    } else {
        None
    };

    fit_to_window(&window, &canvas, &grid)?;
    grid.borrow_mut().scroll_to(window.scroll_y()?);

    let resize_closure = {
        let window = window.clone();
        let canvas = canvas.clone();
        let grid = grid.clone();
        Closure::wrap(Box::new(move || {
            if let Err(err) = fit_to_window(&window, &canvas, &grid) {
                log::error!("resize failed: {err:?}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    let scroll_closure = {
        let window = window.clone();
        let grid = grid.clone();
        Closure::wrap(Box::new(move || match window.scroll_y() {
            Ok(offset) => grid.borrow_mut().scroll_to(offset),
            Err(err) => log::warn!("could not read scroll offset: {err:?}"),
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref())?;
    scroll_closure.forget();

    // Animation loop
    // `f` holds the frame closure so it can re-register itself through the
    // runtime's `requestAnimationFrame` after each frame.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let scheduler = runtime.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let overlay = overlay.as_mut().map(|o| o as &mut dyn DebugOverlay);
        if let Err(err) = grid.borrow_mut().tick(now, overlay) {
            log::error!("frame failed: {err}");
        }

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            scheduler.request_animation_frame(next.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    let first = g.borrow();
    let first = first.as_ref().ok_or("frame callback missing")?;
    runtime.request_animation_frame(first.as_ref().unchecked_ref());

    Ok(())
}
