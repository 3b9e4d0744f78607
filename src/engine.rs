//! Contracts consumed from the external animation engine.
//!
//! The grid never decodes, evaluates or rasterizes anything itself; it only
//! drives these handles. Engine resources are released when the handle drops.

use crate::error::EngineError;
use crate::layout::Rect;

pub trait Renderer {
    fn clear(&mut self);
    fn save(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn restore(&mut self);
}

/// One instance of an animation template.
pub trait Artboard {
    type Renderer: Renderer;

    fn set_bounds(&mut self, bounds: Rect);
    fn advance(&mut self, seconds: f64);
    fn draw(&mut self, renderer: &mut Self::Renderer);
}

pub trait StateMachine {
    fn advance(&mut self, seconds: f64);
}

pub trait AnimationEngine {
    type Renderer: Renderer;
    type Artboard: Artboard<Renderer = Self::Renderer>;
    type StateMachine: StateMachine;

    /// Acquire a renderer bound to the engine's canvas at its current size.
    fn make_renderer(&mut self) -> Result<Self::Renderer, EngineError>;

    fn instantiate(&mut self, artboard: &str) -> Result<Self::Artboard, EngineError>;

    fn bind_state_machine(
        &mut self,
        artboard: &Self::Artboard,
        index: usize,
    ) -> Result<Self::StateMachine, EngineError>;
}

/// Narrow a state-machine index to the engine's 32-bit index space.
pub fn state_machine_index(index: usize) -> Result<u32, EngineError> {
    u32::try_from(index).map_err(|_| EngineError::NotFound {
        kind: "state machine",
        name: index.to_string(),
    })
}

/// Diagnostic drawing on top of the engine's output.
pub trait DebugOverlay {
    fn fill_rect(&mut self, rect: Rect);
}

/// Holds at most one renderer and swaps it with release-before-acquire ordering.
pub struct RendererSlot<R> {
    current: Option<R>,
}

impl<R> Default for RendererSlot<R> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<R> RendererSlot<R> {
    /// Drop the current renderer, then store whatever `acquire` yields.
    /// On failure the slot stays empty.
    pub fn replace<E>(&mut self, acquire: impl FnOnce() -> Result<R, E>) -> Result<&mut R, E> {
        drop(self.current.take());
        let renderer = acquire()?;
        Ok(self.current.insert(renderer))
    }

    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.current.as_mut()
    }

    pub fn is_acquired(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Tracked {
        id: u32,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.log.borrow_mut().push(format!("release {}", self.id));
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_state_machine_index_is_not_found() {
        assert_eq!(state_machine_index(7), Ok(7));
        assert_eq!(
            state_machine_index(u32::MAX as usize + 1),
            Err(EngineError::NotFound {
                kind: "state machine",
                name: "4294967296".into()
            })
        );
    }

    #[test]
    fn replace_releases_before_acquiring() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = RendererSlot::default();

        for id in 1..=2 {
            let log2 = log.clone();
            slot.replace(|| {
                log2.borrow_mut().push(format!("acquire {id}"));
                Ok::<_, ()>(Tracked { id, log: log2.clone() })
            })
            .unwrap();
        }

        assert_eq!(*log.borrow(), ["acquire 1", "release 1", "acquire 2"]);
        assert_eq!(slot.get_mut().map(|r| r.id), Some(2));
    }

    #[test]
    fn failed_acquire_leaves_slot_empty() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = RendererSlot::default();
        slot.replace(|| Ok::<_, &str>(Tracked { id: 1, log: log.clone() }))
            .unwrap();

        assert!(slot.replace(|| Err::<Tracked, _>("lost context")).is_err());
        assert!(!slot.is_acquired());
        assert_eq!(*log.borrow(), ["release 1"]);
    }
}
