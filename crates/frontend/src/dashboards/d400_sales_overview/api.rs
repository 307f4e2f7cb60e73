use crate::shared::fetcher::{decode, DataFetcher, FetchError};
use crate::shared::query::QueryBuilder;
use contracts::dashboards::d400_sales_overview::KpiSummary;
use contracts::shared::FilterState;

pub const KPIS: &str = "/data/kpis";
pub const SALES_OVER_TIME: &str = "/data/vendas-tempo";
pub const SALES_BY_CATEGORY: &str = "/data/vendas-categoria";
pub const SALES_BY_REGION: &str = "/data/vendas-regiao";
pub const TOP_PRODUCTS: &str = "/data/top-produtos";
pub const PROFIT_MARGIN: &str = "/data/margem-lucro";
pub const GOALS: &str = "/data/metas";
pub const MONTHLY_TREND: &str = "/data/tendencias";
pub const SALES_BY_SELLER: &str = "/data/vendas-vendedor";
pub const CATEGORY_FUNNEL: &str = "/data/funil-categoria";

/// Query parameter carrying the number of products to rank.
pub const TOP_PRODUCTS_LIMIT_PARAM: &str = "limite";

/// Fetch the KPI summary for the filtered period
pub async fn get_kpis<F: DataFetcher + ?Sized>(
    fetcher: &F,
    filter: &FilterState,
) -> Result<KpiSummary, FetchError> {
    let value = fetcher
        .get_json(KPIS, &QueryBuilder::from_filters(filter))
        .await?;
    decode(value)
}
