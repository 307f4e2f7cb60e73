use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /relatorios/gerar`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "dataInicio")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "dataFim")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "tipoRelatorio")]
    pub report_type: ReportType,
    /// Ask the backend for a PDF instead of JSON rows
    #[serde(rename = "exportarPDF", default)]
    pub export_pdf: bool,
}

/// Data set a report is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Vendas,
    Custos,
    Metas,
    Cotacoes,
    Uploads,
}

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        ReportType::Vendas,
        ReportType::Custos,
        ReportType::Metas,
        ReportType::Cotacoes,
        ReportType::Uploads,
    ];

    /// Wire code, also used in the PDF file name.
    pub fn code(&self) -> &'static str {
        match self {
            ReportType::Vendas => "vendas",
            ReportType::Custos => "custos",
            ReportType::Metas => "metas",
            ReportType::Cotacoes => "cotacoes",
            ReportType::Uploads => "uploads",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportType::Vendas => "Vendas",
            ReportType::Custos => "Custos",
            ReportType::Metas => "Metas",
            ReportType::Cotacoes => "Cotações",
            ReportType::Uploads => "Uploads",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_uses_backend_field_names() {
        let request = ReportRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: None,
            report_type: ReportType::Cotacoes,
            export_pdf: true,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "dataInicio": "2024-01-01",
                "dataFim": null,
                "tipoRelatorio": "cotacoes",
                "exportarPDF": true
            })
        );
    }

    #[test]
    fn test_report_type_codes() {
        for report_type in ReportType::ALL {
            assert_eq!(ReportType::from_code(report_type.code()), Some(report_type));
        }
        assert_eq!(ReportType::from_code("estoque"), None);
    }
}
