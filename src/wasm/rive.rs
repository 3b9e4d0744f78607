//! Bindings to the Rive canvas-advanced runtime, adapted onto the engine traits.

use js_sys::{Array, Function, Promise, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlCanvasElement;

use crate::engine::{state_machine_index, AnimationEngine, Artboard, Renderer, StateMachine};
use crate::error::EngineError;
use crate::layout::Rect;

#[wasm_bindgen(module = "/js/rive_loader.js")]
extern "C" {
    #[wasm_bindgen(js_name = loadRuntime)]
    fn load_runtime_promise() -> Promise;
}

#[wasm_bindgen]
extern "C" {
    /// The initialised runtime module returned by `RiveCanvas()`.
    #[derive(Clone)]
    pub type RiveModule;

    #[wasm_bindgen(method, catch)]
    fn load(this: &RiveModule, bytes: &Uint8Array) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = makeRenderer)]
    fn make_renderer(this: &RiveModule, canvas: &HtmlCanvasElement) -> Result<RiveRenderer, JsValue>;

    #[wasm_bindgen(method, getter, js_name = StateMachineInstance)]
    fn state_machine_instance_class(this: &RiveModule) -> Function;

    #[wasm_bindgen(method, js_name = requestAnimationFrame)]
    pub fn request_animation_frame(this: &RiveModule, callback: &Function) -> f64;

    pub type RiveFile;

    #[wasm_bindgen(method, catch, js_name = artboardByName)]
    fn artboard_by_name(this: &RiveFile, name: &str) -> Result<JsValue, JsValue>;

    type RiveArtboard;

    #[wasm_bindgen(method, setter)]
    fn set_x(this: &RiveArtboard, value: f64);
    #[wasm_bindgen(method, setter)]
    fn set_y(this: &RiveArtboard, value: f64);
    #[wasm_bindgen(method, setter)]
    fn set_width(this: &RiveArtboard, value: f64);
    #[wasm_bindgen(method, setter)]
    fn set_height(this: &RiveArtboard, value: f64);

    #[wasm_bindgen(method, catch, js_name = stateMachineByIndex)]
    fn state_machine_by_index(this: &RiveArtboard, index: u32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = advance)]
    fn advance_artboard(this: &RiveArtboard, seconds: f64);

    #[wasm_bindgen(method)]
    fn draw(this: &RiveArtboard, renderer: &RiveRenderer);

    #[wasm_bindgen(method, js_name = delete)]
    fn delete_artboard(this: &RiveArtboard);

    type RiveStateMachineInstance;

    #[wasm_bindgen(method, js_name = advance)]
    fn advance_state_machine(this: &RiveStateMachineInstance, seconds: f64);

    #[wasm_bindgen(method, js_name = delete)]
    fn delete_state_machine(this: &RiveStateMachineInstance);

    type RiveRenderer;

    #[wasm_bindgen(method)]
    fn clear(this: &RiveRenderer);
    #[wasm_bindgen(method)]
    fn save(this: &RiveRenderer);
    #[wasm_bindgen(method)]
    fn translate(this: &RiveRenderer, x: f64, y: f64);
    #[wasm_bindgen(method)]
    fn restore(this: &RiveRenderer);
    #[wasm_bindgen(method, js_name = delete)]
    fn delete_renderer(this: &RiveRenderer);
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn js_error(value: JsValue) -> EngineError {
    EngineError::Js(js_message(&value))
}

/// Initialise the runtime (fetches and compiles its own wasm).
pub async fn load_runtime() -> Result<RiveModule, EngineError> {
    let module = JsFuture::from(load_runtime_promise())
        .await
        .map_err(js_error)?;
    Ok(module.unchecked_into())
}

impl RiveModule {
    pub async fn load_file(&self, bytes: &Uint8Array) -> Result<RiveFile, EngineError> {
        let promise = self.load(bytes).map_err(js_error)?;
        let file = JsFuture::from(promise)
            .await
            .map_err(|err| EngineError::Decode(js_message(&err)))?;
        if file.is_null() || file.is_undefined() {
            return Err(EngineError::Decode("runtime returned no file".into()));
        }
        Ok(file.unchecked_into())
    }
}

pub struct RendererHandle(RiveRenderer);

impl Renderer for RendererHandle {
    fn clear(&mut self) {
        self.0.clear();
    }

    fn save(&mut self) {
        self.0.save();
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.0.translate(x, y);
    }

    fn restore(&mut self) {
        self.0.restore();
    }
}

impl Drop for RendererHandle {
    fn drop(&mut self) {
        self.0.delete_renderer();
    }
}

pub struct ArtboardHandle(RiveArtboard);

impl Artboard for ArtboardHandle {
    type Renderer = RendererHandle;

    fn set_bounds(&mut self, bounds: Rect) {
        self.0.set_x(bounds.x);
        self.0.set_y(bounds.y);
        self.0.set_width(bounds.width);
        self.0.set_height(bounds.height);
    }

    fn advance(&mut self, seconds: f64) {
        self.0.advance_artboard(seconds);
    }

    fn draw(&mut self, renderer: &mut RendererHandle) {
        self.0.draw(&renderer.0);
    }
}

impl Drop for ArtboardHandle {
    fn drop(&mut self) {
        self.0.delete_artboard();
    }
}

pub struct StateMachineHandle(RiveStateMachineInstance);

impl StateMachine for StateMachineHandle {
    fn advance(&mut self, seconds: f64) {
        self.0.advance_state_machine(seconds);
    }
}

impl Drop for StateMachineHandle {
    fn drop(&mut self) {
        self.0.delete_state_machine();
    }
}

pub struct RiveEngine {
    runtime: RiveModule,
    file: RiveFile,
    canvas: HtmlCanvasElement,
}

impl RiveEngine {
    pub fn new(runtime: RiveModule, file: RiveFile, canvas: HtmlCanvasElement) -> Self {
        Self {
            runtime,
            file,
            canvas,
        }
    }
}

impl AnimationEngine for RiveEngine {
    type Renderer = RendererHandle;
    type Artboard = ArtboardHandle;
    type StateMachine = StateMachineHandle;

    fn make_renderer(&mut self) -> Result<RendererHandle, EngineError> {
        let renderer = self.runtime.make_renderer(&self.canvas).map_err(js_error)?;
        Ok(RendererHandle(renderer))
    }

    fn instantiate(&mut self, artboard: &str) -> Result<ArtboardHandle, EngineError> {
        let value = self.file.artboard_by_name(artboard).map_err(js_error)?;
        if value.is_null() || value.is_undefined() {
            return Err(EngineError::NotFound {
                kind: "artboard",
                name: artboard.to_owned(),
            });
        }
        Ok(ArtboardHandle(value.unchecked_into()))
    }

    fn bind_state_machine(
        &mut self,
        artboard: &ArtboardHandle,
        index: usize,
    ) -> Result<StateMachineHandle, EngineError> {
        let definition = artboard
            .0
            .state_machine_by_index(state_machine_index(index)?)
            .map_err(js_error)?;
        if definition.is_null() || definition.is_undefined() {
            return Err(EngineError::NotFound {
                kind: "state machine",
                name: index.to_string(),
            });
        }
        let class = self.runtime.state_machine_instance_class();
        let instance = Reflect::construct(&class, &Array::of2(&definition, &artboard.0))
            .map_err(js_error)?;
        Ok(StateMachineHandle(instance.unchecked_into()))
    }
}
