use crate::shared::fetcher::{FetchError, HttpFetcher};
use async_trait::async_trait;
use contracts::usecases::u502_sales_report::ReportRequest;

pub const GENERATE: &str = "/relatorios/gerar";

/// Raw answer of the report endpoint: either JSON rows or a PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPayload {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl ReportPayload {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn has_content_type(&self, mime_type: &str) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains(mime_type))
            .unwrap_or(false)
    }
}

#[async_trait(?Send)]
pub trait ReportTransport {
    async fn generate(&self, request: &ReportRequest) -> Result<ReportPayload, FetchError>;
}

#[async_trait(?Send)]
impl ReportTransport for HttpFetcher {
    async fn generate(&self, request: &ReportRequest) -> Result<ReportPayload, FetchError> {
        let response = self.post_json(GENERATE, request).await?;
        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response
            .binary()
            .await
            .map_err(|e| FetchError::network(format!("Failed to read response: {}", e)))?;
        Ok(ReportPayload {
            status,
            content_type,
            body,
        })
    }
}
