use crate::shared::Record;
use serde::{Deserialize, Serialize};

/// `POST /api/upload` (multipart, field `file`, optional `tipo`)
///
/// A rejected upload answers `{ "error": "..." }`, an accepted one carries
/// the number of imported records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_id: Option<i64>,
    #[serde(rename = "registros", default, skip_serializing_if = "Option::is_none")]
    pub records: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET /api/uploads`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadHistoryResponse {
    #[serde(default)]
    pub uploads: Vec<Record>,
}

/// `POST /api/cotacoes/atualizar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRefreshResponse {
    pub message: String,
    #[serde(default)]
    pub task_id: Option<String>,
}
