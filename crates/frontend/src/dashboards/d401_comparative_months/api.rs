use crate::shared::fetcher::{DataFetcher, FetchError};
use crate::shared::query::QueryBuilder;
use serde_json::Value;

pub const SALES_BY_MONTHS: &str = "/data/vendas-meses";

/// Comma-joined `YYYY-MM` tokens.
pub const MONTHS_PARAM: &str = "meses";

/// Daily totals of every selected month, in display order.
pub async fn get_sales_by_months<F: DataFetcher + ?Sized>(
    fetcher: &F,
    months: &[String],
) -> Result<Value, FetchError> {
    let query = QueryBuilder::new().list(MONTHS_PARAM, months);
    fetcher.get_json(SALES_BY_MONTHS, &query).await
}
