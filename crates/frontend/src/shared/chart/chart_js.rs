//! Chart.js binding.
//!
//! Chart.js is loaded by the host page as the global `Chart`; this module
//! only builds configs, constructs instances and destroys them.

use super::config::{ChartConfig, Formatter, TooltipLabel, ValueFormat};
use super::slots::{ChartBackend, ChartError};
use js_sys::{Array, Function, Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

type Callback = Closure<dyn Fn(JsValue) -> JsValue>;

/// Chart.js as a [`ChartBackend`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJs;

/// A live `Chart` object plus the Rust callbacks its options point to.
pub struct ChartJsInstance {
    chart: JsValue,
    _callbacks: Vec<Callback>,
}

impl ChartBackend for ChartJs {
    type Instance = ChartJsInstance;

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<ChartJsInstance, ChartError> {
        let window = web_sys::window().ok_or_else(|| ChartError::Library("No window object".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ChartError::Library("No document object".into()))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| ChartError::CanvasNotFound(canvas_id.to_string()))?;

        let constructor: Function = Reflect::get(&window, &JsValue::from_str("Chart"))
            .map_err(js_error)?
            .dyn_into()
            .map_err(|_| ChartError::Library("Chart.js is not loaded".into()))?;

        let js_config = config
            .serialize(&Serializer::json_compatible())
            .map_err(|e| ChartError::Library(e.to_string()))?;
        let callbacks = install_formatters(&js_config, &config.formatters)?;

        let chart = Reflect::construct(&constructor, &Array::of2(&canvas, &js_config)).map_err(js_error)?;

        Ok(ChartJsInstance {
            chart,
            _callbacks: callbacks,
        })
    }

    fn destroy(&self, instance: ChartJsInstance) {
        let destroy = Reflect::get(&instance.chart, &JsValue::from_str("destroy"))
            .and_then(|f| f.dyn_into::<Function>().map_err(JsValue::from));
        let result = destroy.and_then(|f| f.call0(&instance.chart));
        if let Err(e) = result {
            log::warn!("Failed to destroy chart: {:?}", e);
        }
    }
}

fn js_error(err: JsValue) -> ChartError {
    ChartError::Library(format!("{:?}", err))
}

fn install_formatters(js_config: &JsValue, formatters: &[Formatter]) -> Result<Vec<Callback>, ChartError> {
    let mut callbacks = Vec::with_capacity(formatters.len());
    for formatter in formatters {
        match formatter {
            Formatter::AxisTicks { axis, format } => {
                let ticks = object_at(js_config, &["options", "scales", axis.as_str(), "ticks"])?;
                let callback = tick_callback(*format);
                Reflect::set(&ticks, &JsValue::from_str("callback"), callback.as_ref()).map_err(js_error)?;
                callbacks.push(callback);
            }
            Formatter::TooltipLabel(label) => {
                let target = object_at(js_config, &["options", "plugins", "tooltip", "callbacks"])?;
                let callback = tooltip_callback(label.clone());
                Reflect::set(&target, &JsValue::from_str("label"), callback.as_ref()).map_err(js_error)?;
                callbacks.push(callback);
            }
        }
    }
    Ok(callbacks)
}

/// Walk `path` from `root`, creating empty objects where keys are missing.
fn object_at(root: &JsValue, path: &[&str]) -> Result<JsValue, ChartError> {
    let mut current = root.clone();
    for key in path {
        let key = JsValue::from_str(key);
        let next = Reflect::get(&current, &key).map_err(js_error)?;
        current = if next.is_object() {
            next
        } else {
            let created: JsValue = Object::new().into();
            Reflect::set(&current, &key, &created).map_err(js_error)?;
            created
        };
    }
    Ok(current)
}

fn tick_callback(format: ValueFormat) -> Callback {
    Closure::wrap(Box::new(move |value: JsValue| -> JsValue {
        match value.as_f64() {
            Some(v) => JsValue::from_str(&format.apply(v)),
            None => value,
        }
    }) as Box<dyn Fn(JsValue) -> JsValue>)
}

fn tooltip_callback(label: TooltipLabel) -> Callback {
    Closure::wrap(Box::new(move |context: JsValue| -> JsValue {
        let point_label = get_string(&context, "label");
        let dataset_label = Reflect::get(&context, &JsValue::from_str("dataset"))
            .map(|dataset| get_string(&dataset, "label"))
            .unwrap_or_default();
        let index = Reflect::get(&context, &JsValue::from_str("dataIndex"))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as usize;
        // pie charts parse to a number, cartesian ones to {x, y}
        let value = Reflect::get(&context, &JsValue::from_str("parsed"))
            .ok()
            .and_then(|parsed| {
                parsed.as_f64().or_else(|| {
                    Reflect::get(&parsed, &JsValue::from_str("y"))
                        .ok()
                        .and_then(|y| y.as_f64())
                })
            })
            .unwrap_or(0.0);
        JsValue::from_str(&label.text(&point_label, &dataset_label, value, index))
    }) as Box<dyn Fn(JsValue) -> JsValue>)
}

fn get_string(target: &JsValue, key: &str) -> String {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}
