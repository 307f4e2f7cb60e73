//! Chart.js configuration model.
//!
//! Everything serialisable is sent to Chart.js as plain JSON. Value
//! formatters can't travel as JSON, so they are listed separately in
//! [`ChartConfig::formatters`] and installed as JS callbacks by the binding.

use crate::shared::number_format::{format_currency, format_currency_tick, format_percent};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Palette shared by every dashboard chart.
pub mod palette {
    pub const BLUE: &str = "rgba(13, 110, 253, 0.8)";
    pub const GREEN: &str = "rgba(25, 135, 84, 0.8)";
    pub const YELLOW: &str = "rgba(255, 193, 7, 0.8)";
    pub const RED: &str = "rgba(220, 53, 69, 0.8)";
    pub const CYAN: &str = "rgba(13, 202, 240, 0.8)";

    pub const BLUE_LINE: &str = "rgb(13, 110, 253)";

    pub const CATEGORICAL: [&str; 5] = [BLUE, GREEN, YELLOW, RED, CYAN];

    /// `rgba(r, g, b, alpha)` for one of the base colours.
    pub fn with_alpha(rgb: (u8, u8, u8), alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", rgb.0, rgb.1, rgb.2, alpha)
    }

    pub const BLUE_RGB: (u8, u8, u8) = (13, 110, 253);
    pub const GREEN_RGB: (u8, u8, u8) = (25, 135, 84);
    pub const YELLOW_RGB: (u8, u8, u8) = (255, 193, 7);
    pub const RED_RGB: (u8, u8, u8) = (220, 53, 69);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
    #[serde(skip)]
    pub formatters: Vec<Formatter>,
}

impl ChartConfig {
    pub fn new(kind: ChartKind, labels: Vec<String>) -> Self {
        Self {
            kind,
            data: ChartData {
                labels,
                datasets: Vec::new(),
            },
            options: ChartOptions::default(),
            formatters: Vec::new(),
        }
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.data.datasets.push(dataset);
        self
    }

    pub fn legend(mut self, display: bool, position: Option<LegendPosition>) -> Self {
        self.options.plugins.legend = Legend { display, position };
        self
    }

    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.options.plugins.title = Some(Title {
            display: true,
            text: text.into(),
        });
        self
    }

    /// Draw bars along the y axis.
    pub fn horizontal(mut self) -> Self {
        self.options.index_axis = Some("y".to_string());
        self
    }

    pub fn maintain_aspect_ratio(mut self, keep: bool) -> Self {
        self.options.maintain_aspect_ratio = Some(keep);
        self
    }

    /// Add a value axis starting at zero, with its tick labels formatted.
    pub fn value_axis(mut self, id: &str, format: Option<ValueFormat>) -> Self {
        self.options.scales.insert(id.to_string(), Axis::default());
        if let Some(format) = format {
            self.formatters.push(Formatter::AxisTicks {
                axis: id.to_string(),
                format,
            });
        }
        self
    }

    /// Secondary axis on the right whose grid does not cover the chart area.
    pub fn secondary_axis(mut self, id: &str, format: Option<ValueFormat>) -> Self {
        self = self.value_axis(id, format);
        if let Some(axis) = self.options.scales.get_mut(id) {
            axis.position = Some("right".to_string());
            axis.grid = Some(Grid {
                draw_on_chart_area: false,
            });
        }
        if let Some(primary) = self.options.scales.get_mut("y") {
            primary.position.get_or_insert_with(|| "left".to_string());
        }
        self
    }

    pub fn tooltip(mut self, label: TooltipLabel) -> Self {
        self.formatters.push(Formatter::TooltipLabel(label));
        self
    }

    pub fn dataset_count(&self) -> usize {
        self.data.datasets.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Background colour: one for the whole dataset or one per point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Colors {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    /// Overrides the chart type for this dataset (bar + line combos)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Colors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(rename = "yAxisID", default, skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
    /// Styling keys passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dataset {
    pub fn new(label: Option<&str>, data: Vec<f64>) -> Self {
        Self {
            label: label.map(str::to_string),
            data,
            ..Self::default()
        }
    }

    pub fn background(mut self, color: &str) -> Self {
        self.background_color = Some(Colors::Single(color.to_string()));
        self
    }

    pub fn backgrounds(mut self, colors: &[&str]) -> Self {
        self.background_color = Some(Colors::PerPoint(
            colors.iter().map(|c| c.to_string()).collect(),
        ));
        self
    }

    pub fn border(mut self, color: &str) -> Self {
        self.border_color = Some(color.to_string());
        self
    }

    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill = Some(true);
        self
    }

    pub fn as_kind(mut self, kind: ChartKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn on_axis(mut self, axis: &str) -> Self {
        self.y_axis_id = Some(axis.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintain_aspect_ratio: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<String>,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scales: BTreeMap<String, Axis>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: None,
            index_axis: None,
            plugins: Plugins::default(),
            scales: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            display: true,
            position: Some(LegendPosition::Top),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            begin_at_zero: true,
            position: None,
            grid: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub draw_on_chart_area: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `R$ 1.234,50`
    Currency,
    /// `R$ 1.234`
    CurrencyTick,
    /// `12.5%`
    Percent,
}

impl ValueFormat {
    pub fn apply(&self, value: f64) -> String {
        match self {
            ValueFormat::Currency => format_currency(value),
            ValueFormat::CurrencyTick => format_currency_tick(value),
            ValueFormat::Percent => format_percent(value),
        }
    }
}

/// Callback installed into the Chart.js options.
#[derive(Debug, Clone, PartialEq)]
pub enum Formatter {
    /// `options.scales.<axis>.ticks.callback`
    AxisTicks { axis: String, format: ValueFormat },
    /// `options.plugins.tooltip.callbacks.label`
    TooltipLabel(TooltipLabel),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipLabel {
    /// `Sul: R$ 1.000,00 (25%)`, the share looked up by point index
    CurrencyWithShare { shares: Vec<f64> },
    /// `03-2024: R$ 1.000,00`
    DatasetCurrency,
}

impl TooltipLabel {
    pub fn text(&self, point_label: &str, dataset_label: &str, value: f64, index: usize) -> String {
        match self {
            TooltipLabel::CurrencyWithShare { shares } => {
                let share = shares.get(index).copied().unwrap_or(0.0);
                format!("{}: {} ({})", point_label, format_currency(value), format_percent(share))
            }
            TooltipLabel::DatasetCurrency => {
                format!("{}: {}", dataset_label, format_currency(value))
            }
        }
    }
}
