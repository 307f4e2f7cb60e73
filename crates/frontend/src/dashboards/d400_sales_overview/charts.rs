//! The dashboard's chart table.
//!
//! One entry per canvas; the refresh loop in the controller walks this
//! table and never needs per-chart code.

use super::api;
use crate::shared::chart::config::{palette, ChartConfig, Dataset, LegendPosition, TooltipLabel, ValueFormat};
use crate::shared::chart::{no_extra_params, ChartKind, ChartSpec};
use crate::shared::config::AppConfig;
use crate::shared::fetcher::{decode, FetchError};
use contracts::dashboards::d400_sales_overview::{
    CategoryFunnel, GoalsComparison, LabeledSeries, MonthlyTrend, ProfitMargin, RegionSales,
};
use palette::{with_alpha, BLUE_RGB, GREEN_RGB, RED_RGB, YELLOW_RGB};
use serde_json::Value;

pub const SALES_OVER_TIME_CANVAS: &str = "chartVendasTempo";
pub const SALES_BY_CATEGORY_CANVAS: &str = "chartVendasCategoria";
pub const SALES_BY_REGION_CANVAS: &str = "chartVendasRegiao";
pub const TOP_PRODUCTS_CANVAS: &str = "chartTopProdutos";
pub const PROFIT_MARGIN_CANVAS: &str = "chartMargemLucro";
pub const GOALS_CANVAS: &str = "chartMetas";
pub const MONTHLY_TREND_CANVAS: &str = "chartTendencias";
pub const SALES_BY_SELLER_CANVAS: &str = "chartVendasVendedor";
pub const CATEGORY_FUNNEL_CANVAS: &str = "chartFunilCategoria";

pub static DASHBOARD_CHARTS: [ChartSpec; 9] = [
    ChartSpec {
        canvas_id: SALES_OVER_TIME_CANVAS,
        kind: ChartKind::Line,
        endpoint: api::SALES_OVER_TIME,
        extra_params: no_extra_params,
        map: sales_over_time,
    },
    ChartSpec {
        canvas_id: SALES_BY_CATEGORY_CANVAS,
        kind: ChartKind::Bar,
        endpoint: api::SALES_BY_CATEGORY,
        extra_params: no_extra_params,
        map: sales_by_category,
    },
    ChartSpec {
        canvas_id: SALES_BY_REGION_CANVAS,
        kind: ChartKind::Pie,
        endpoint: api::SALES_BY_REGION,
        extra_params: no_extra_params,
        map: sales_by_region,
    },
    ChartSpec {
        canvas_id: TOP_PRODUCTS_CANVAS,
        kind: ChartKind::Bar,
        endpoint: api::TOP_PRODUCTS,
        extra_params: top_products_params,
        map: top_products,
    },
    ChartSpec {
        canvas_id: PROFIT_MARGIN_CANVAS,
        kind: ChartKind::Bar,
        endpoint: api::PROFIT_MARGIN,
        extra_params: no_extra_params,
        map: profit_margin,
    },
    ChartSpec {
        canvas_id: GOALS_CANVAS,
        kind: ChartKind::Bar,
        endpoint: api::GOALS,
        extra_params: no_extra_params,
        map: goals,
    },
    ChartSpec {
        canvas_id: MONTHLY_TREND_CANVAS,
        kind: ChartKind::Line,
        endpoint: api::MONTHLY_TREND,
        extra_params: no_extra_params,
        map: monthly_trend,
    },
    ChartSpec {
        canvas_id: SALES_BY_SELLER_CANVAS,
        kind: ChartKind::Bar,
        endpoint: api::SALES_BY_SELLER,
        extra_params: no_extra_params,
        map: sales_by_seller,
    },
    ChartSpec {
        canvas_id: CATEGORY_FUNNEL_CANVAS,
        kind: ChartKind::Bar,
        endpoint: api::CATEGORY_FUNNEL,
        extra_params: no_extra_params,
        map: category_funnel,
    },
];

fn top_products_params(config: &AppConfig) -> Vec<(&'static str, String)> {
    vec![(api::TOP_PRODUCTS_LIMIT_PARAM, config.top_products_limit.to_string())]
}

fn sales_over_time(kind: ChartKind, data: Value) -> Result<ChartConfig, FetchError> {
    let series: LabeledSeries = decode(data)?;
    Ok(ChartConfig::new(kind, series.labels)
        .dataset(
            Dataset::new(Some("Valor (R$)"), series.values)
                .border(palette::BLUE_LINE)
                .background(&with_alpha(BLUE_RGB, 0.1))
                .tension(0.4),
        )
        .maintain_aspect_ratio(true)
        .value_axis("y", Some(ValueFormat::CurrencyTick)))
}

fn sales_by_category(kind: ChartKind, data: Value) -> Result<ChartConfig, FetchError> {
    let series: LabeledSeries = decode(data)?;
    Ok(ChartConfig::new(kind, series.labels)
        .dataset(Dataset::new(Some("Vendas (R$)"), series.values).backgrounds(&palette::CATEGORICAL))
        .legend(false, None)
        .value_axis("y", Some(ValueFormat::CurrencyTick)))
}

fn sales_by_region(kind: ChartKind, data: Value) -> Result<ChartConfig, FetchError> {
    let regions: RegionSales = decode(data)?;
    Ok(ChartConfig::new(kind, regions.labels)
        .dataset(Dataset::new(None, regions.values).backgrounds(&palette::CATEGORICAL))
        .legend(true, Some(LegendPosition::Bottom))
        .tooltip(TooltipLabel::CurrencyWithShare {
            shares: regions.shares,
        }))
}

fn top_products(kind: ChartKind, data: Value) -> Result<ChartConfig, FetchError> {
    let series: LabeledSeries = decode(data)?;
    Ok(ChartConfig::new(kind, series.labels)
        .dataset(Dataset::new(Some("Vendas (R$)"), series.values).background(palette::GREEN))
        .horizontal()
        .legend(false, None)
        .value_axis("x", Some(ValueFormat::CurrencyTick)))
}

fn profit_margin(kind: ChartKind, data: Value) -> Result<ChartConfig, FetchError> {
    let margin: ProfitMargin = decode(data)?;
    Ok(ChartConfig::new(kind, margin.labels)
        .dataset(Dataset::new(Some("Vendas (R$)"), margin.sales).background(&with_alpha(BLUE_RGB, 0.7)))
        .dataset(Dataset::new(Some("Custos (R$)"), margin.costs).background(&with_alpha(RED_RGB, 0.7)))
        .dataset(Dataset::new(Some("Lucro (R$)"), margin.profits).background(&with_alpha(GREEN_RGB, 0.7)))
        .value_axis("y", Some(ValueFormat::CurrencyTick)))
}

fn goals(kind: ChartKind, data: Value) -> Result<ChartConfig, FetchError> {
    let goals: GoalsComparison = decode(data)?;
    let labels = goals.labels();
    Ok(ChartConfig::new(kind, labels)
        .dataset(Dataset::new(Some("Meta (R$)"), goals.targets).background(&with_alpha(RED_RGB, 0.6)))
        .dataset(Dataset::new(Some("Realizado (R$)"), goals.achieved).background(palette::GREEN))
        .dataset(
            Dataset::new(Some("% Atingido"), goals.achieved_percent)
                .background(&with_alpha(BLUE_RGB, 0.7))
                .as_kind(ChartKind::Line)
                .on_axis("y1"),
        )
        .value_axis("y", Some(ValueFormat::CurrencyTick))
        .secondary_axis("y1", Some(ValueFormat::Percent)))
}

fn monthly_trend(kind: ChartKind, data: Value) -> Result<ChartConfig, FetchError> {
    let trend: MonthlyTrend = decode(data)?;
    let growth = trend.growth_percent.unwrap_or(trend.values);
    Ok(ChartConfig::new(kind, trend.labels)
        .dataset(
            Dataset::new(Some("Crescimento (%)"), growth)
                .border(palette::BLUE_LINE)
                .background(&with_alpha(BLUE_RGB, 0.2))
                .tension(0.3)
                .filled(),
        )
        .value_axis("y", Some(ValueFormat::Percent)))
}

fn sales_by_seller(kind: ChartKind, data: Value) -> Result<ChartConfig, FetchError> {
    let series: LabeledSeries = decode(data)?;
    Ok(ChartConfig::new(kind, series.labels)
        .dataset(Dataset::new(Some("Total de Vendas (R$)"), series.values).background(palette::BLUE))
        .legend(false, None)
        .value_axis("y", Some(ValueFormat::CurrencyTick)))
}

fn category_funnel(kind: ChartKind, data: Value) -> Result<ChartConfig, FetchError> {
    let funnel: CategoryFunnel = decode(data)?;
    Ok(ChartConfig::new(kind, funnel.categories)
        .dataset(Dataset::new(Some("Visitas"), funnel.visits).background(&with_alpha(BLUE_RGB, 0.7)))
        .dataset(Dataset::new(Some("Orçamentos"), funnel.quotes).background(&with_alpha(YELLOW_RGB, 0.7)))
        .dataset(Dataset::new(Some("Vendas"), funnel.sales).background(&with_alpha(GREEN_RGB, 0.7)))
        .value_axis("y", None))
}
