use crate::shared::Record;
use serde::{Deserialize, Serialize};

/// JSON branch of `POST /relatorios/gerar`.
///
/// The PDF branch is a binary body and never reaches this type. An unknown
/// report type comes back as `{ "erro": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    #[serde(rename = "dados", default)]
    pub rows: Vec<Record>,
    #[serde(rename = "erro", alias = "error", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
