use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /data/vendas-meses?meses=YYYY-MM,YYYY-MM`
///
/// `datas` holds day-of-month labels shared by every month; each dataset
/// carries the daily totals of one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeMonthsResponse {
    #[serde(rename = "datas")]
    pub days: Vec<String>,
    pub datasets: Vec<MonthDataset>,
}

/// One month of daily totals, styled by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthDataset {
    /// `MM-YYYY`
    pub label: String,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    /// Styling keys this client does not model
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
