use super::api::SALES_BY_MONTHS;
use crate::shared::chart::config::{Colors, LegendPosition};
use crate::shared::chart::{
    no_extra_params, ChartConfig, ChartKind, ChartSpec, Dataset, TooltipLabel, ValueFormat,
};
use crate::shared::fetcher::{decode, FetchError};
use contracts::dashboards::d401_comparative_months::{ComparativeMonthsResponse, MonthDataset};
use serde_json::Value;

pub const COMPARATIVE_CANVAS: &str = "chartComparativoMeses";

pub const COMPARATIVE_TITLE: &str = "Comparativo de Vendas por Mês";

pub static COMPARATIVE_CHART: ChartSpec = ChartSpec {
    canvas_id: COMPARATIVE_CANVAS,
    kind: ChartKind::Line,
    endpoint: SALES_BY_MONTHS,
    extra_params: no_extra_params,
    map: comparative_months,
};

/// One line per month over the shared day-of-month axis. The backend picks
/// each month's colours.
fn comparative_months(kind: ChartKind, data: Value) -> Result<ChartConfig, FetchError> {
    let ComparativeMonthsResponse { days, datasets } = decode(data)?;
    let config = datasets
        .into_iter()
        .fold(ChartConfig::new(kind, days), |config, month| {
            config.dataset(month_dataset(month))
        });
    Ok(config
        .title(COMPARATIVE_TITLE)
        .legend(true, Some(LegendPosition::Top))
        .value_axis("y", Some(ValueFormat::Currency))
        .tooltip(TooltipLabel::DatasetCurrency))
}

fn month_dataset(month: MonthDataset) -> Dataset {
    Dataset {
        label: Some(month.label),
        data: month.data,
        border_color: month.border_color,
        background_color: month.background_color.map(Colors::Single),
        tension: month.tension,
        extra: month.extra,
        ..Dataset::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fetcher::FetchErrorKind;
    use serde_json::json;

    #[test]
    fn test_one_dataset_per_month() {
        let config = (COMPARATIVE_CHART.map)(
            COMPARATIVE_CHART.kind,
            json!({
                "datas": ["1", "2", "3"],
                "datasets": [
                    { "label": "01-2024", "data": [1.0, 2.0, 3.0], "borderColor": "#00ff00",
                      "backgroundColor": "transparent", "tension": 0.3 },
                    { "label": "02-2024", "data": [4.0, 5.0], "borderColor": "#ff0000",
                      "pointRadius": 2 }
                ]
            }),
        )
        .unwrap();

        assert_eq!(config.kind, ChartKind::Line);
        assert_eq!(config.data.labels, vec!["1", "2", "3"]);
        assert_eq!(config.dataset_count(), 2);
        let first = &config.data.datasets[0];
        assert_eq!(first.label.as_deref(), Some("01-2024"));
        assert_eq!(first.border_color.as_deref(), Some("#00ff00"));
        assert_eq!(
            first.background_color,
            Some(Colors::Single("transparent".to_string()))
        );
        assert_eq!(first.tension, Some(0.3));
        assert_eq!(config.data.datasets[1].extra["pointRadius"], json!(2));
        assert_eq!(
            config.options.plugins.title.as_ref().map(|t| t.text.as_str()),
            Some(COMPARATIVE_TITLE)
        );
    }

    #[test]
    fn test_no_months_gives_empty_chart() {
        let config = (COMPARATIVE_CHART.map)(ChartKind::Line, json!({ "datas": [], "datasets": [] })).unwrap();
        assert_eq!(config.dataset_count(), 0);
    }

    #[test]
    fn test_missing_datasets_is_parse_error() {
        let err = (COMPARATIVE_CHART.map)(ChartKind::Line, json!({ "datas": ["1"] })).unwrap_err();
        assert_eq!(err.kind, FetchErrorKind::Parse);
    }
}
