use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use tracing::{debug, warn};

use super::{ChartSlot, ChartSpec};
use crate::error::Result;

/// Charting backend that owns the real drawing resources.
///
/// `destroy` must release everything `create` acquired for the instance
/// (canvas bindings, listeners, resize observers).
pub trait ChartRenderer {
    type Instance;

    fn create(&self, slot: ChartSlot, spec: &ChartSpec) -> Result<Self::Instance>;

    fn destroy(&self, slot: ChartSlot, instance: Self::Instance);
}

/// Identity of one rendered chart. Every render yields a new generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle {
    pub slot: ChartSlot,
    pub generation: u64,
}

struct LiveChart<I> {
    handle: ChartHandle,
    instance: I,
}

/// Keeps at most one live chart per slot; each render destroys the previous
/// instance of the slot before creating the replacement.
pub struct ChartLifecycleManager<R: ChartRenderer> {
    renderer: R,
    live: RefCell<HashMap<ChartSlot, LiveChart<R::Instance>>>,
    generation: Cell<u64>,
}

impl<R: ChartRenderer> ChartLifecycleManager<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            live: RefCell::new(HashMap::new()),
            generation: Cell::new(0),
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&self, slot: ChartSlot, spec: &ChartSpec) -> Result<ChartHandle> {
        let previous = self.live.borrow_mut().remove(&slot);
        if let Some(previous) = previous {
            debug!(%slot, generation = previous.handle.generation, "Destroying previous chart");
            self.renderer.destroy(slot, previous.instance);
        }

        let instance = self.renderer.create(slot, spec).inspect_err(|err| {
            warn!(%slot, "Chart creation failed, slot left empty: {}", err);
        })?;

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let handle = ChartHandle { slot, generation };
        self.live
            .borrow_mut()
            .insert(slot, LiveChart { handle, instance });
        debug!(%slot, generation, "Chart rendered");
        Ok(handle)
    }

    pub fn live_handle(&self, slot: ChartSlot) -> Option<ChartHandle> {
        self.live.borrow().get(&slot).map(|live| live.handle)
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    /// Destroys every live chart.
    pub fn teardown(&self) {
        let drained: Vec<(ChartSlot, LiveChart<R::Instance>)> =
            self.live.borrow_mut().drain().collect();
        for (slot, live) in drained {
            debug!(%slot, generation = live.handle.generation, "Tearing down chart");
            self.renderer.destroy(slot, live.instance);
        }
    }
}
