//! Tabular view of loosely shaped JSON rows.
//!
//! Columns are the keys of the first row, in payload order. Later rows are
//! read through those columns only: a key the first row lacks is not shown,
//! a column a later row lacks renders blank.

use contracts::shared::Record;
use serde_json::Value;

/// Placeholder shown in place of an empty table.
pub const NO_DATA_MESSAGE: &str = "Nenhum dado encontrado.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    /// `None` when there is nothing to tabulate.
    pub fn from_records(records: &[Record]) -> Option<Self> {
        let first = records.first()?;
        let headers: Vec<String> = first.keys().cloned().collect();
        let rows = records
            .iter()
            .map(|record| {
                headers
                    .iter()
                    .map(|h| record.get(h).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect();
        Some(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Display text of one cell. Null is blank; nested values show as JSON.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_headers_follow_first_row() {
        let rows = records(json!([
            { "produto": "Notebook", "quantidade": 2, "valor_total": 7000.5 },
            { "valor_total": 10, "produto": "Mouse", "extra": "x" }
        ]));
        let table = RecordTable::from_records(&rows).unwrap();

        assert_eq!(table.headers, vec!["produto", "quantidade", "valor_total"]);
        assert_eq!(table.rows[0], vec!["Notebook", "2", "7000.5"]);
        assert_eq!(table.rows[1], vec!["Mouse", "", "10"]);
    }

    #[test]
    fn test_null_cells_are_blank() {
        let rows = records(json!([{ "a": null, "b": true, "c": [1, 2] }]));
        let table = RecordTable::from_records(&rows).unwrap();
        assert_eq!(table.rows[0], vec!["", "true", "[1,2]"]);
    }

    #[test]
    fn test_no_rows() {
        assert_eq!(RecordTable::from_records(&[]), None);
    }
}
