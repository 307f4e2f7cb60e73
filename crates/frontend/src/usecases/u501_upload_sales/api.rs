use crate::shared::fetcher::{decode, DataFetcher, FetchError, HttpFetcher};
use crate::shared::query::QueryBuilder;
use contracts::usecases::u501_upload_sales::{QuoteRefreshResponse, UploadHistoryResponse};
use serde_json::Value;
use web_sys::{File, FormData};

pub const UPLOAD: &str = "/api/upload";
pub const UPLOAD_HISTORY: &str = "/api/uploads";
pub const QUOTE_REFRESH: &str = "/api/cotacoes/atualizar";

/// Multipart field carrying the file.
pub const FILE_FIELD: &str = "file";
/// Multipart field naming the kind of data uploaded.
pub const KIND_FIELD: &str = "tipo";

/// Send one file to the import endpoint. The body is returned as is; see
/// [`super::outcome::UploadOutcome`] for how it reads.
pub async fn upload_file(fetcher: &HttpFetcher, file: &File, kind: &str) -> Result<Value, FetchError> {
    let form = FormData::new().map_err(|e| FetchError::network(format!("{:?}", e)))?;
    form.append_with_blob_and_filename(FILE_FIELD, file, &file.name())
        .map_err(|e| FetchError::network(format!("Failed to attach file: {:?}", e)))?;
    form.append_with_str(KIND_FIELD, kind)
        .map_err(|e| FetchError::network(format!("Failed to set {}: {:?}", KIND_FIELD, e)))?;
    fetcher.post_form(UPLOAD, form).await
}

/// Most recent uploads, newest first.
pub async fn get_upload_history<F: DataFetcher + ?Sized>(fetcher: &F) -> Result<UploadHistoryResponse, FetchError> {
    let value = fetcher.get_json(UPLOAD_HISTORY, &QueryBuilder::new()).await?;
    decode(value)
}

/// Start the background refresh of currency quotes.
pub async fn refresh_quotes(fetcher: &HttpFetcher) -> Result<QuoteRefreshResponse, FetchError> {
    let value = fetcher.post_empty(QUOTE_REFRESH).await?;
    decode(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fetcher::testing::StaticFetcher;
    use crate::shared::fetcher::FetchErrorKind;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_upload_history() {
        let fetcher = StaticFetcher::new().respond(
            UPLOAD_HISTORY,
            Ok(json!({ "uploads": [
                { "id": 2, "nome_arquivo": "vendas.csv", "status": "success", "num_registros": 120 },
                { "id": 1, "nome_arquivo": "custos.xlsx", "status": "error", "num_registros": null }
            ]})),
        );

        let history = block_on(get_upload_history(&fetcher)).unwrap();

        assert_eq!(history.uploads.len(), 2);
        assert_eq!(history.uploads[0]["nome_arquivo"], json!("vendas.csv"));
        assert_eq!(fetcher.calls.borrow().as_slice(), &["/api/uploads".to_string()]);
    }

    #[test]
    fn test_upload_history_failure() {
        let fetcher = StaticFetcher::new();
        let err = block_on(get_upload_history(&fetcher)).unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Network);
    }
}
