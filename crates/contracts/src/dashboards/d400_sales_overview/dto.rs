use serde::{Deserialize, Serialize};

/// `GET /data/kpis`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    #[serde(rename = "receita_total")]
    pub total_revenue: f64,
    #[serde(rename = "num_vendas")]
    pub sales_count: u64,
    #[serde(rename = "ticket_medio")]
    pub average_ticket: f64,
}

/// Single labelled series.
///
/// Used by `/data/vendas-tempo`, `/data/vendas-categoria`,
/// `/data/top-produtos` and `/data/vendas-vendedor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    #[serde(rename = "valores")]
    pub values: Vec<f64>,
}

/// `GET /data/vendas-regiao`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSales {
    pub labels: Vec<String>,
    #[serde(rename = "valores")]
    pub values: Vec<f64>,
    /// Share of the total per region, already multiplied by 100
    #[serde(rename = "percentuais", default)]
    pub shares: Vec<f64>,
}

/// `GET /data/margem-lucro`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitMargin {
    pub labels: Vec<String>,
    #[serde(rename = "vendas")]
    pub sales: Vec<f64>,
    #[serde(rename = "custos")]
    pub costs: Vec<f64>,
    #[serde(rename = "lucros")]
    pub profits: Vec<f64>,
}

/// `GET /data/metas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalsComparison {
    #[serde(rename = "categorias")]
    pub categories: Vec<String>,
    #[serde(rename = "regioes")]
    pub regions: Vec<String>,
    #[serde(rename = "metas")]
    pub targets: Vec<f64>,
    /// Some backend versions send the realised amounts as `vendas`
    #[serde(rename = "realizados", alias = "vendas", default)]
    pub achieved: Vec<f64>,
    #[serde(rename = "percentual")]
    pub achieved_percent: Vec<f64>,
}

impl GoalsComparison {
    /// Axis labels in the form `categoria - regiao`.
    pub fn labels(&self) -> Vec<String> {
        self.categories
            .iter()
            .enumerate()
            .map(|(i, category)| match self.regions.get(i) {
                Some(region) => format!("{} - {}", category, region),
                None => category.clone(),
            })
            .collect()
    }
}

/// `GET /data/tendencias`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// `MM/YYYY`
    pub labels: Vec<String>,
    #[serde(rename = "valores")]
    pub values: Vec<f64>,
    /// Month over month growth, in percent
    #[serde(rename = "crescimento_percentual", default)]
    pub growth_percent: Option<Vec<f64>>,
}

/// `GET /data/funil-categoria`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFunnel {
    #[serde(rename = "categorias")]
    pub categories: Vec<String>,
    #[serde(rename = "visitas")]
    pub visits: Vec<f64>,
    #[serde(rename = "orcamentos")]
    pub quotes: Vec<f64>,
    #[serde(rename = "vendas")]
    pub sales: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_goals_accept_vendas_alias() {
        let goals: GoalsComparison = serde_json::from_value(json!({
            "categorias": ["Eletrônicos", "Móveis"],
            "regioes": ["Sul"],
            "vendas": [100.0, 50.0],
            "metas": [200.0, 50.0],
            "percentual": [50.0, 100.0]
        }))
        .unwrap();

        assert_eq!(goals.achieved, vec![100.0, 50.0]);
        assert_eq!(goals.labels(), vec!["Eletrônicos - Sul", "Móveis"]);
    }

    #[test]
    fn test_kpis_from_backend_names() {
        let kpis: KpiSummary = serde_json::from_value(json!({
            "receita_total": 15000.5,
            "num_vendas": 42,
            "ticket_medio": 357.15
        }))
        .unwrap();

        assert_eq!(kpis.sales_count, 42);
        assert_eq!(kpis.total_revenue, 15000.5);
    }
}
