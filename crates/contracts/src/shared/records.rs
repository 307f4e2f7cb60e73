use serde_json::{Map, Value};

/// One row of a generic tabular payload (report rows, upload history).
///
/// Key order follows the payload when `serde_json` is built with
/// `preserve_order`, which the frontend enables.
pub type Record = Map<String, Value>;
