#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! A scrollable grid of Rive animation tiles drawn into one canvas. Only tiles
//! near the viewport are advanced and drawn each frame.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod scene;
pub mod visibility;

pub use config::GridConfig;
pub use error::{ConfigError, EngineError, GridError, LayoutError};
pub use layout::{GridLayout, Rect};
pub use scene::{FrameStats, Tile, TileGrid, Viewport};
pub use visibility::is_visible;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use js_sys::Uint8Array;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{spawn_local, JsFuture};
    use web_sys::{HtmlCanvasElement, Response, UrlSearchParams, Window};

    use crate::config::GridConfig;
    use crate::error::{EngineError, GridError};
    use crate::scene::TileGrid;

    mod logger;
    mod render;
    mod rive;

    impl From<GridError> for JsValue {
        fn from(err: GridError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }

    impl From<EngineError> for JsValue {
        fn from(err: EngineError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        logger::init(log::LevelFilter::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id("c")
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        let config = config_from_query(&window)?;
        if config.debug_overlay {
            logger::init(log::LevelFilter::Trace);
        }

        spawn_local(async move {
            if let Err(err) = launch(window, canvas, config).await {
                log::error!("startup failed: {err:?}");
            }
        });
        Ok(())
    }

    /// Defaults overridden by the page's query string, e.g. `?columns=4&debug`.
    fn config_from_query(window: &Window) -> Result<GridConfig, JsValue> {
        let mut config = GridConfig::default();
        let params = UrlSearchParams::new_with_str(&window.location().search()?)?;
        if let Some(entries) = js_sys::try_iter(&params)? {
            for entry in entries {
                let pair: js_sys::Array = entry?.dyn_into()?;
                let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string())
                else {
                    continue;
                };
                config.apply(&key, &value).map_err(GridError::from)?;
            }
        }
        config.validate().map_err(GridError::from)?;
        Ok(config)
    }

    async fn fetch_bytes(window: &Window, url: &str) -> Result<Uint8Array, JsValue> {
        let response: Response = JsFuture::from(window.fetch_with_str(url))
            .await?
            .dyn_into()?;
        if !response.ok() {
            return Err(format!("fetching {url} failed: HTTP {}", response.status()).into());
        }
        let buffer = JsFuture::from(response.array_buffer()?).await?;
        Ok(Uint8Array::new(&buffer))
    }

    async fn launch(window: Window, canvas: HtmlCanvasElement, config: GridConfig) -> Result<(), JsValue> {
        let runtime = rive::load_runtime().await?;
        let bytes = fetch_bytes(&window, &config.asset_url).await?;
        let file = runtime.load_file(&bytes).await?;
        log::info!("loaded {} ({} bytes)", config.asset_url, bytes.length());

        let engine = rive::RiveEngine::new(runtime.clone(), file, canvas.clone());
        let grid = TileGrid::new(engine, config)?;
        render::start(canvas, runtime, grid)
    }
}
