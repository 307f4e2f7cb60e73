use crate::shared::fetcher::{decode, FetchError};
use contracts::usecases::u501_upload_sales::UploadResponse;
use serde_json::Value;

/// How an upload attempt ended, as told to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Imported { records: u64 },
    /// The backend refused the file and said why
    Rejected(String),
    /// The request itself failed
    Failed(String),
}

impl UploadOutcome {
    pub fn from_response(result: Result<Value, FetchError>) -> Self {
        let response: UploadResponse = match result.and_then(decode) {
            Ok(response) => response,
            Err(e) => return UploadOutcome::Failed(e.to_string()),
        };
        match (response.error, response.records) {
            (Some(error), _) => UploadOutcome::Rejected(error),
            (None, Some(records)) => UploadOutcome::Imported { records },
            (None, None) => UploadOutcome::Failed("resposta sem número de registros".to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Imported { .. })
    }

    /// Text of the alert shown once the upload settles.
    pub fn message(&self) -> String {
        match self {
            UploadOutcome::Imported { records } => {
                format!("Arquivo processado com sucesso! {} registros importados.", records)
            }
            UploadOutcome::Rejected(error) => format!("Erro: {}", error),
            UploadOutcome::Failed(error) => format!("Erro ao fazer upload: {}", error),
        }
    }
}
