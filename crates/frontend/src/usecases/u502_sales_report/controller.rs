//! Report form submission.
//!
//! The endpoint answers either with JSON rows or, when a PDF was asked
//! for, with the document itself. The declared content type decides which.

use super::api::{ReportPayload, ReportTransport};
use crate::shared::export::FileSaver;
use crate::shared::fetcher::{classify, decode, ErrorBodies, FetchError};
use crate::shared::notify::Notifier;
use crate::shared::record_table::RecordTable;
use chrono::{NaiveDateTime, Utc};
use contracts::usecases::u502_sales_report::{ReportRequest, ReportResponse, ReportType};

pub const PDF_MIME: &str = "application/pdf";
pub const PDF_CONFIRMATION: &str = "Deseja realmente baixar o PDF do relatório?";

/// What the result area shows after a JSON answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportView {
    /// The "Nenhum dado encontrado." placeholder
    NoData,
    Table(RecordTable),
}

impl ReportView {
    pub fn table(&self) -> Option<RecordTable> {
        match self {
            ReportView::NoData => None,
            ReportView::Table(table) => Some(table.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome {
    Downloaded { filename: String },
    /// PDF offered and the user said no; nothing saved
    Declined,
    Table(ReportView),
    Failed(FetchError),
    SaveFailed(String),
}

/// `relatorio_<tipo>_<YYYYMMDD_HHMMSS>.pdf`
pub fn pdf_filename(report_type: ReportType, at: NaiveDateTime) -> String {
    format!("relatorio_{}_{}.pdf", report_type.code(), at.format("%Y%m%d_%H%M%S"))
}

pub struct ReportFormController<T: ReportTransport, N: Notifier, S: FileSaver> {
    transport: T,
    notifier: N,
    saver: S,
}

impl<T: ReportTransport, N: Notifier, S: FileSaver> ReportFormController<T, N, S> {
    pub fn new(transport: T, notifier: N, saver: S) -> Self {
        Self {
            transport,
            notifier,
            saver,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn saver(&self) -> &S {
        &self.saver
    }

    pub async fn submit(&self, request: ReportRequest) -> ReportOutcome {
        self.submit_at(request, Utc::now().naive_utc()).await
    }

    /// Submit, stamping a PDF download with `now`.
    pub async fn submit_at(&self, request: ReportRequest, now: NaiveDateTime) -> ReportOutcome {
        let payload = match self.transport.generate(&request).await {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Erro ao gerar relatório: {}", e);
                return ReportOutcome::Failed(e);
            }
        };

        if payload.has_content_type(PDF_MIME) {
            return self.offer_pdf(&payload, request.report_type, now);
        }

        match read_rows(&payload) {
            Ok(view) => ReportOutcome::Table(view),
            Err(e) if e.is_application() => {
                self.notifier.alert(&format!("Erro ao gerar relatório: {}", e.detail));
                ReportOutcome::Failed(e)
            }
            Err(e) => {
                log::error!("Erro ao gerar relatório: {}", e);
                ReportOutcome::Failed(e)
            }
        }
    }

    fn offer_pdf(&self, payload: &ReportPayload, report_type: ReportType, now: NaiveDateTime) -> ReportOutcome {
        if !self.notifier.confirm(PDF_CONFIRMATION) {
            log::debug!("PDF download declined");
            return ReportOutcome::Declined;
        }
        let filename = pdf_filename(report_type, now);
        match self.saver.save(&payload.body, PDF_MIME, &filename) {
            Ok(()) => ReportOutcome::Downloaded { filename },
            Err(e) => {
                log::error!("Failed to save {}: {}", filename, e);
                ReportOutcome::SaveFailed(e)
            }
        }
    }
}

/// Parse the JSON branch. An `erro` field is an application error on any
/// status; without one, a non-2xx status is a network error.
fn read_rows(payload: &ReportPayload) -> Result<ReportView, FetchError> {
    let text = String::from_utf8_lossy(&payload.body);
    let value = classify(payload.status, payload.is_ok(), &text, ErrorBodies::Keep)?;
    let response: ReportResponse = match decode(value) {
        Ok(response) => response,
        Err(_) if !payload.is_ok() => return Err(http_error(payload.status)),
        Err(e) => return Err(e),
    };
    if let Some(error) = response.error {
        return Err(FetchError::application(error));
    }
    if !payload.is_ok() {
        return Err(http_error(payload.status));
    }
    Ok(match RecordTable::from_records(&response.rows) {
        Some(table) => ReportView::Table(table),
        None => ReportView::NoData,
    })
}

fn http_error(status: u16) -> FetchError {
    FetchError::network(format!("HTTP error: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::testing::RecordingSaver;
    use crate::shared::fetcher::FetchErrorKind;
    use crate::shared::notify::testing::ScriptedNotifier;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    struct CannedTransport {
        payload: Result<ReportPayload, FetchError>,
        requests: RefCell<Vec<ReportRequest>>,
    }

    impl CannedTransport {
        fn json(status: u16, body: Value) -> Self {
            Self::raw(status, Some("application/json"), body.to_string().into_bytes())
        }

        fn raw(status: u16, content_type: Option<&str>, body: Vec<u8>) -> Self {
            Self {
                payload: Ok(ReportPayload {
                    status,
                    content_type: content_type.map(str::to_string),
                    body,
                }),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ReportTransport for CannedTransport {
        async fn generate(&self, request: &ReportRequest) -> Result<ReportPayload, FetchError> {
            self.requests.borrow_mut().push(request.clone());
            self.payload.clone()
        }
    }

    fn request(report_type: ReportType, export_pdf: bool) -> ReportRequest {
        ReportRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            report_type,
            export_pdf,
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 5))
            .unwrap()
    }

    fn controller(
        transport: CannedTransport,
        accept: bool,
    ) -> ReportFormController<CannedTransport, ScriptedNotifier, RecordingSaver> {
        ReportFormController::new(transport, ScriptedNotifier::accepting(accept), RecordingSaver::default())
    }

    #[test]
    fn test_pdf_accepted_is_saved() {
        let pdf = b"%PDF-1.4 relatorio".to_vec();
        let c = controller(CannedTransport::raw(200, Some("application/pdf"), pdf.clone()), true);

        let outcome = block_on(c.submit_at(request(ReportType::Custos, true), noon()));

        assert_eq!(
            outcome,
            ReportOutcome::Downloaded {
                filename: "relatorio_custos_20240201_123005.pdf".to_string()
            }
        );
        assert_eq!(c.notifier().confirms.borrow().as_slice(), &[PDF_CONFIRMATION.to_string()]);
        let saved = c.saver().saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].bytes, pdf);
        assert_eq!(saved[0].mime_type, PDF_MIME);
    }

    #[test]
    fn test_pdf_declined_saves_nothing() {
        let c = controller(CannedTransport::raw(200, Some("application/pdf"), b"%PDF".to_vec()), false);

        let outcome = block_on(c.submit_at(request(ReportType::Vendas, true), noon()));

        assert_eq!(outcome, ReportOutcome::Declined);
        assert!(c.saver().saved.borrow().is_empty());
        assert!(c.notifier().alerts.borrow().is_empty());
    }

    #[test]
    fn test_pdf_detected_by_content_type_with_parameters() {
        let c = controller(
            CannedTransport::raw(200, Some("Application/PDF; charset=binary"), b"%PDF".to_vec()),
            true,
        );
        let outcome = block_on(c.submit_at(request(ReportType::Metas, true), noon()));
        assert!(matches!(outcome, ReportOutcome::Downloaded { .. }));
    }

    #[test]
    fn test_rows_become_table() {
        let c = controller(
            CannedTransport::json(200, json!({ "dados": [
                { "data": "2024-01-05", "produto": "Notebook", "valor_total": 3500.0 },
                { "data": "2024-01-06", "produto": "Mouse", "valor_total": null }
            ]})),
            true,
        );

        let outcome = block_on(c.submit_at(request(ReportType::Vendas, false), noon()));

        let table = match outcome {
            ReportOutcome::Table(ReportView::Table(table)) => table,
            other => panic!("expected a table, got {:?}", other),
        };
        assert_eq!(table.headers, vec!["data", "produto", "valor_total"]);
        assert_eq!(table.rows[1], vec!["2024-01-06", "Mouse", ""]);
        assert!(c.notifier().confirms.borrow().is_empty());
    }

    #[test]
    fn test_empty_rows_show_placeholder() {
        let c = controller(CannedTransport::json(200, json!({ "dados": [] })), true);
        let outcome = block_on(c.submit_at(request(ReportType::Uploads, false), noon()));
        assert_eq!(outcome, ReportOutcome::Table(ReportView::NoData));
    }

    #[test]
    fn test_error_field_is_alerted() {
        let c = controller(
            CannedTransport::json(400, json!({ "erro": "Tipo de relatório inválido" })),
            true,
        );

        let outcome = block_on(c.submit_at(request(ReportType::Cotacoes, false), noon()));

        assert!(matches!(&outcome, ReportOutcome::Failed(e) if e.kind == FetchErrorKind::Application));
        assert_eq!(
            c.notifier().alerts.borrow().as_slice(),
            &["Erro ao gerar relatório: Tipo de relatório inválido".to_string()]
        );
    }

    #[test]
    fn test_non_json_error_page_is_network_error() {
        let c = controller(
            CannedTransport::raw(500, Some("text/html"), b"<h1>Internal Server Error</h1>".to_vec()),
            true,
        );

        let outcome = block_on(c.submit_at(request(ReportType::Vendas, false), noon()));

        assert!(matches!(&outcome, ReportOutcome::Failed(e) if e.kind == FetchErrorKind::Network));
        assert!(c.notifier().alerts.borrow().is_empty());
    }

    #[test]
    fn test_json_error_status_without_error_field_is_network_error() {
        let c = controller(CannedTransport::json(500, json!({ "message": "Internal error" })), true);

        let outcome = block_on(c.submit_at(request(ReportType::Vendas, false), noon()));

        assert_eq!(outcome, ReportOutcome::Failed(FetchError::network("HTTP error: 500")));
        assert!(c.notifier().alerts.borrow().is_empty());
    }

    #[test]
    fn test_request_is_forwarded() {
        let transport = CannedTransport::json(200, json!({ "dados": [] }));
        let c = controller(transport, true);
        let req = request(ReportType::Metas, false);

        block_on(c.submit_at(req.clone(), noon()));

        assert_eq!(c.transport.requests.borrow().as_slice(), &[req]);
    }
}
