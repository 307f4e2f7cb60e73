use super::config::ChartConfig;
use super::ChartSpec;
use crate::shared::fetcher::FetchError;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error(transparent)]
    Data(#[from] FetchError),
    #[error("canvas '{0}' not found")]
    CanvasNotFound(String),
    #[error("chart library error: {0}")]
    Library(String),
}

/// The charting library, seen from the slots.
pub trait ChartBackend {
    type Instance;

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<Self::Instance, ChartError>;

    /// Release the instance and its rendering context.
    fn destroy(&self, instance: Self::Instance);
}

/// Live chart instances keyed by canvas id.
///
/// Only [`ChartSlots::render`] binds instances, and it always releases the
/// previous instance of a canvas first, so a canvas never holds two.
pub struct ChartSlots<B: ChartBackend> {
    backend: B,
    live: RefCell<HashMap<String, B::Instance>>,
}

impl<B: ChartBackend> ChartSlots<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: RefCell::new(HashMap::new()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Map `data` through the chart's mapping and (re)draw its canvas.
    ///
    /// A payload the mapping rejects leaves the current chart in place.
    pub fn render(&self, spec: &ChartSpec, data: Value) -> Result<(), ChartError> {
        let config = (spec.map)(spec.kind, data)?;
        self.render_config(spec.canvas_id, &config)
    }

    /// Release whatever is bound to `canvas_id`, then bind a new instance.
    pub fn render_config(&self, canvas_id: &str, config: &ChartConfig) -> Result<(), ChartError> {
        self.release(canvas_id);
        let instance = self.backend.create(canvas_id, config)?;
        self.live.borrow_mut().insert(canvas_id.to_string(), instance);
        Ok(())
    }

    /// Destroy the instance bound to `canvas_id`. No-op for an empty slot.
    pub fn release(&self, canvas_id: &str) -> bool {
        let previous = self.live.borrow_mut().remove(canvas_id);
        match previous {
            Some(instance) => {
                self.backend.destroy(instance);
                true
            }
            None => false,
        }
    }

    pub fn release_all(&self) {
        let instances: Vec<_> = self.live.borrow_mut().drain().map(|(_, i)| i).collect();
        for instance in instances {
            self.backend.destroy(instance);
        }
    }

    pub fn is_bound(&self, canvas_id: &str) -> bool {
        self.live.borrow().contains_key(canvas_id)
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

impl<B: ChartBackend> Drop for ChartSlots<B> {
    fn drop(&mut self) {
        self.release_all();
    }
}
