//! Refresh cycle of the sales overview dashboard.
//!
//! A refresh fans out one request per chart plus the KPI summary. Each
//! request renders its own widget as soon as it resolves; nothing waits on
//! a sibling. Overlapping refreshes are not coalesced and nothing is
//! cancelled, so a slow response from an older sweep still overwrites its
//! canvas when it lands (last arrival wins).

use super::api;
use super::charts::DASHBOARD_CHARTS;
use crate::shared::chart::{ChartBackend, ChartError, ChartSlots, ChartSpec};
use crate::shared::config::AppConfig;
use crate::shared::fetcher::{DataFetcher, FetchError};
use crate::shared::number_format::{format_currency, format_integer};
use crate::shared::query::QueryBuilder;
use contracts::dashboards::d400_sales_overview::KpiSummary;
use contracts::shared::FilterState;
use futures::future::{join, join_all};
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    /// At least one request of some sweep is still in flight
    Refreshing,
}

/// KPI values ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KpiDisplay {
    pub total_revenue: String,
    pub sales_count: String,
    pub average_ticket: String,
}

impl From<&KpiSummary> for KpiDisplay {
    fn from(kpis: &KpiSummary) -> Self {
        Self {
            total_revenue: format_currency(kpis.total_revenue),
            sales_count: format_integer(kpis.sales_count as f64),
            average_ticket: format_currency(kpis.average_ticket),
        }
    }
}

/// What one sweep did, widget by widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RefreshReport {
    pub kpis: Option<FetchError>,
    pub rendered: Vec<&'static str>,
    pub failed: Vec<(&'static str, ChartError)>,
}

impl RefreshReport {
    pub fn kpis_updated(&self) -> bool {
        self.kpis.is_none()
    }
}

pub struct DashboardController<F: DataFetcher, B: ChartBackend> {
    fetcher: Rc<F>,
    slots: Rc<ChartSlots<B>>,
    charts: &'static [ChartSpec],
    config: AppConfig,
    on_kpis: Box<dyn Fn(KpiDisplay)>,
    in_flight: Cell<usize>,
    sweeps: Cell<u64>,
}

impl<F: DataFetcher, B: ChartBackend> DashboardController<F, B> {
    pub fn new(
        fetcher: Rc<F>,
        slots: Rc<ChartSlots<B>>,
        config: AppConfig,
        on_kpis: impl Fn(KpiDisplay) + 'static,
    ) -> Self {
        Self {
            fetcher,
            slots,
            charts: &DASHBOARD_CHARTS,
            config,
            on_kpis: Box::new(on_kpis),
            in_flight: Cell::new(0),
            sweeps: Cell::new(0),
        }
    }

    /// Replace the chart table.
    pub fn with_charts(mut self, charts: &'static [ChartSpec]) -> Self {
        self.charts = charts;
        self
    }

    pub fn charts(&self) -> &'static [ChartSpec] {
        self.charts
    }

    pub fn slots(&self) -> &Rc<ChartSlots<B>> {
        &self.slots
    }

    pub fn state(&self) -> RefreshState {
        if self.in_flight.get() == 0 {
            RefreshState::Idle
        } else {
            RefreshState::Refreshing
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    pub fn sweeps_started(&self) -> u64 {
        self.sweeps.get()
    }

    /// Run one full sweep for `filter`. Resolves once every request of this
    /// sweep has settled; failures are logged and reported, never raised.
    pub async fn refresh(&self, filter: FilterState) -> RefreshReport {
        let sweep = self.sweeps.get() + 1;
        self.sweeps.set(sweep);
        let calls = self.charts.len() + 1;
        self.in_flight.set(self.in_flight.get() + calls);
        log::debug!(
            "Dashboard refresh #{} started ({} requests, filter {:?})",
            sweep,
            calls,
            filter
        );

        let kpis = self.settle(self.load_kpis(&filter));
        let charts = join_all(
            self.charts
                .iter()
                .map(|spec| self.settle(self.load_chart(spec, &filter))),
        );
        let (kpis, charts) = join(kpis, charts).await;

        let mut report = RefreshReport {
            kpis: kpis.err(),
            ..RefreshReport::default()
        };
        for (spec, result) in self.charts.iter().zip(charts) {
            match result {
                Ok(()) => report.rendered.push(spec.canvas_id),
                Err(e) => report.failed.push((spec.canvas_id, e)),
            }
        }
        log::debug!(
            "Dashboard refresh #{} settled: {} charts rendered, {} failed",
            sweep,
            report.rendered.len(),
            report.failed.len()
        );
        report
    }

    async fn settle<T>(&self, request: impl Future<Output = T>) -> T {
        let output = request.await;
        self.in_flight.set(self.in_flight.get().saturating_sub(1));
        output
    }

    async fn load_kpis(&self, filter: &FilterState) -> Result<(), FetchError> {
        match api::get_kpis(self.fetcher.as_ref(), filter).await {
            Ok(kpis) => {
                (self.on_kpis)(KpiDisplay::from(&kpis));
                Ok(())
            }
            Err(e) => {
                log::error!("Erro ao carregar KPIs: {}", e);
                Err(e)
            }
        }
    }

    async fn load_chart(&self, spec: &ChartSpec, filter: &FilterState) -> Result<(), ChartError> {
        let query = (spec.extra_params)(&self.config)
            .into_iter()
            .fold(QueryBuilder::from_filters(filter), |query, (key, value)| {
                query.param(key, value)
            });

        let result = match self.fetcher.get_json(spec.endpoint, &query).await {
            Ok(data) => self.slots.render(spec, data),
            Err(e) => Err(ChartError::from(e)),
        };
        if let Err(e) = &result {
            log::error!("Erro ao carregar gráfico {}: {}", spec.canvas_id, e);
        }
        result
    }
}
