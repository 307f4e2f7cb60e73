//! Charts bound to canvases.
//!
//! A [`ChartSpec`] describes one chart once: which canvas it draws into,
//! which endpoint feeds it and how the payload becomes a Chart.js config.
//! [`ChartSlots`] owns the live instances, one per canvas.

pub mod chart_js;
pub mod config;
pub mod slots;

pub use chart_js::ChartJs;
pub use config::{ChartConfig, ChartKind, Dataset, TooltipLabel, ValueFormat};
pub use slots::{ChartBackend, ChartError, ChartSlots};

use crate::shared::config::AppConfig;
use crate::shared::fetcher::FetchError;
use serde_json::Value;

/// Turns an endpoint payload into a chart config. A payload of the wrong
/// shape is a parse error.
pub type ChartMapping = fn(ChartKind, Value) -> Result<ChartConfig, FetchError>;

/// Extra query parameters of a chart, beyond the date filters.
pub type ExtraParams = fn(&AppConfig) -> Vec<(&'static str, String)>;

/// Static description of one chart.
#[derive(Clone, Copy)]
pub struct ChartSpec {
    /// DOM id of the canvas the chart draws into
    pub canvas_id: &'static str,
    pub kind: ChartKind,
    pub endpoint: &'static str,
    pub extra_params: ExtraParams,
    pub map: ChartMapping,
}

impl std::fmt::Debug for ChartSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartSpec")
            .field("canvas_id", &self.canvas_id)
            .field("kind", &self.kind)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// [`ExtraParams`] for charts that only take the date filters.
pub fn no_extra_params(_: &AppConfig) -> Vec<(&'static str, String)> {
    Vec::new()
}
