//! The tile grid context: everything the resize, scroll and frame handlers share.

use crate::clock::FrameClock;
use crate::config::GridConfig;
use crate::engine::{AnimationEngine, Artboard, DebugOverlay, Renderer, RendererSlot, StateMachine};
use crate::error::GridError;
use crate::layout::{GridLayout, Rect};
use crate::visibility::is_visible;

/// A positioned artboard instance with its own state machine.
pub struct Tile<E: AnimationEngine> {
    pub bounds: Rect,
    // Dropped before the artboard it is bound to.
    state_machine: E::StateMachine,
    artboard: E::Artboard,
}

impl<E: AnimationEngine> Tile<E> {
    pub fn artboard(&self) -> &E::Artboard {
        &self.artboard
    }

    pub fn state_machine(&self) -> &E::StateMachine {
        &self.state_machine
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub elapsed: f64,
    pub visible: usize,
}

pub struct TileGrid<E: AnimationEngine> {
    engine: E,
    config: GridConfig,
    layout: Option<GridLayout>,
    tiles: Vec<Tile<E>>,
    renderer: RendererSlot<E::Renderer>,
    viewport: Viewport,
    scroll_offset: f64,
    clock: FrameClock,
}

impl<E: AnimationEngine> TileGrid<E> {
    pub fn new(engine: E, config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self {
            engine,
            config,
            layout: None,
            tiles: Vec::new(),
            renderer: RendererSlot::default(),
            viewport: Viewport::default(),
            scroll_offset: 0.0,
            clock: FrameClock::new(),
        })
    }

    /// Rebuild everything that depends on the canvas size: the renderer, the
    /// layout and every tile. Tiles restart from their initial state.
    ///
    /// The returned layout carries the content height the page must scroll over.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<GridLayout, GridError> {
        self.viewport = Viewport { width, height };

        let engine = &mut self.engine;
        self.renderer.replace(|| engine.make_renderer())?;

        let layout = GridLayout::compute(&self.config, width)?;
        self.tiles.clear();
        self.layout = None;

        let mut tiles = Vec::with_capacity(layout.total_tiles);
        for bounds in layout.rects() {
            let mut artboard = self.engine.instantiate(&self.config.artboard)?;
            artboard.set_bounds(bounds);
            let state_machine = self
                .engine
                .bind_state_machine(&artboard, self.config.state_machine_index)?;
            tiles.push(Tile {
                bounds,
                artboard,
                state_machine,
            });
        }
        self.tiles = tiles;
        self.layout = Some(layout);

        log::info!(
            "laid out {} tiles in {} rows, content height {}px",
            self.tiles.len(),
            layout.rows,
            layout.content_height
        );
        Ok(layout)
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    /// Advance and draw the tiles near the viewport for the display frame at `now_ms`.
    pub fn tick(
        &mut self,
        now_ms: f64,
        mut overlay: Option<&mut dyn DebugOverlay>,
    ) -> Result<FrameStats, GridError> {
        let renderer = self
            .renderer
            .get_mut()
            .ok_or(GridError::RendererUnavailable)?;
        let elapsed = self.clock.tick(now_ms);
        let scroll = self.scroll_offset;
        let viewport_height = self.viewport.height;
        let debug_overlay = self.config.debug_overlay;

        renderer.clear();

        let mut visible = 0;
        for tile in &mut self.tiles {
            if !is_visible(&tile.bounds, scroll, viewport_height) {
                continue;
            }
            visible += 1;

            tile.artboard.advance(elapsed);

            renderer.save();
            renderer.translate(tile.bounds.x, tile.bounds.y - scroll);
            tile.artboard.draw(&mut *renderer);
            renderer.restore();

            tile.state_machine.advance(elapsed);

            if debug_overlay {
                if let Some(overlay) = overlay.as_deref_mut() {
                    overlay.fill_rect(tile.bounds.to_screen(scroll));
                }
            }
        }

        log::trace!("visible tiles: {visible}, scroll offset: {scroll}px");
        Ok(FrameStats { elapsed, visible })
    }

    pub fn tiles(&self) -> &[Tile<E>] {
        &self.tiles
    }

    /// `None` until the first resize.
    pub fn layout(&self) -> Option<&GridLayout> {
        self.layout.as_ref()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }
}
