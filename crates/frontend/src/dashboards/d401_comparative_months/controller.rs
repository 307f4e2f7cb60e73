use super::api;
use super::chart::COMPARATIVE_CHART;
use crate::shared::chart::{ChartBackend, ChartError, ChartSlots};
use crate::shared::fetcher::DataFetcher;
use contracts::shared::PeriodList;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Result of one refresh of the comparative chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonRefresh {
    /// No month selected; nothing fetched, the chart left as it was
    Skipped,
    Rendered,
    Failed(ChartError),
}

/// The month inputs and the chart they drive.
///
/// Every change to the list refreshes this chart only. The dashboard's
/// date filters do not apply here.
pub struct ComparativeMonthsController<F: DataFetcher, B: ChartBackend> {
    fetcher: Rc<F>,
    slots: Rc<ChartSlots<B>>,
    periods: RefCell<PeriodList>,
    on_change: Box<dyn Fn(&PeriodList)>,
    refreshes: Cell<u64>,
}

impl<F: DataFetcher, B: ChartBackend> ComparativeMonthsController<F, B> {
    /// `on_change` sees the list right after every edit, before the
    /// refresh it triggers.
    pub fn new(fetcher: Rc<F>, slots: Rc<ChartSlots<B>>, on_change: impl Fn(&PeriodList) + 'static) -> Self {
        Self {
            fetcher,
            slots,
            periods: RefCell::new(PeriodList::default()),
            on_change: Box::new(on_change),
            refreshes: Cell::new(0),
        }
    }

    pub fn periods(&self) -> PeriodList {
        self.periods.borrow().clone()
    }

    pub fn refreshes(&self) -> u64 {
        self.refreshes.get()
    }

    pub async fn add_period(&self) -> ComparisonRefresh {
        self.periods.borrow_mut().push_empty();
        self.changed();
        self.refresh().await
    }

    /// Drop the last month. With a single input left nothing happens and
    /// `None` is returned.
    pub async fn remove_period(&self) -> Option<ComparisonRefresh> {
        let removed = self.periods.borrow_mut().remove_last();
        if !removed {
            return None;
        }
        self.changed();
        Some(self.refresh().await)
    }

    /// Store `value` in slot `index`. An index past the end is ignored.
    pub async fn set_period(&self, index: usize, value: &str) -> Option<ComparisonRefresh> {
        let updated = self.periods.borrow_mut().set(index, value);
        if !updated {
            log::warn!("Ignoring month input {} (only {} inputs)", index, self.periods.borrow().len());
            return None;
        }
        self.changed();
        Some(self.refresh().await)
    }

    /// Fetch and redraw with the months currently selected.
    pub async fn refresh(&self) -> ComparisonRefresh {
        self.refreshes.set(self.refreshes.get() + 1);
        let months = self.periods.borrow().selected();
        if months.is_empty() {
            return ComparisonRefresh::Skipped;
        }

        let result = match api::get_sales_by_months(self.fetcher.as_ref(), &months).await {
            Ok(data) => self.slots.render(&COMPARATIVE_CHART, data),
            Err(e) => Err(ChartError::from(e)),
        };
        match result {
            Ok(()) => ComparisonRefresh::Rendered,
            Err(e) => {
                log::error!("Erro ao carregar comparativo de meses: {}", e);
                ComparisonRefresh::Failed(e)
            }
        }
    }

    fn changed(&self) {
        let periods = self.periods.borrow();
        (self.on_change)(&*periods);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d401_comparative_months::chart::COMPARATIVE_CANVAS;
    use crate::shared::chart::slots::testing::FakeBackend;
    use crate::shared::fetcher::testing::StaticFetcher;
    use crate::shared::fetcher::FetchError;
    use futures::executor::block_on;
    use serde_json::{json, Value};

    fn months_payload(months: usize) -> Value {
        let datasets: Vec<Value> = (0..months)
            .map(|m| json!({ "label": format!("{:02}-2024", m + 1), "data": [1.0, 2.0] }))
            .collect();
        json!({ "datas": ["1", "2"], "datasets": datasets })
    }

    struct Harness {
        controller: ComparativeMonthsController<StaticFetcher, FakeBackend>,
        fetcher: Rc<StaticFetcher>,
        backend: FakeBackend,
        seen: Rc<RefCell<Vec<usize>>>,
    }

    fn harness(response: Result<Value, FetchError>) -> Harness {
        let fetcher = Rc::new(StaticFetcher::new().respond(api::SALES_BY_MONTHS, response));
        let backend = FakeBackend::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let controller = ComparativeMonthsController::new(
            fetcher.clone(),
            Rc::new(ChartSlots::new(backend.clone())),
            move |periods: &PeriodList| sink.borrow_mut().push(periods.len()),
        );
        Harness {
            controller,
            fetcher,
            backend,
            seen,
        }
    }

    #[test]
    fn test_add_and_remove_periods() {
        let h = harness(Ok(months_payload(1)));
        block_on(async {
            h.controller.set_period(0, "2024-01").await;
            for _ in 0..3 {
                h.controller.add_period().await;
            }
        });
        assert_eq!(h.controller.periods().len(), 4);

        block_on(async {
            h.controller.remove_period().await;
            h.controller.remove_period().await;
        });
        assert_eq!(h.controller.periods().len(), 2);
        assert_eq!(h.controller.refreshes(), 6);
        // one fetch per change, since a month is selected throughout
        assert_eq!(h.fetcher.calls.borrow().len(), 6);
        assert_eq!(*h.seen.borrow(), vec![1, 2, 3, 4, 3, 2]);
    }

    #[test]
    fn test_remove_last_remaining_period_is_noop() {
        let h = harness(Ok(months_payload(1)));
        block_on(h.controller.set_period(0, "2024-01"));
        let calls = h.fetcher.calls.borrow().len();

        let outcome = block_on(h.controller.remove_period());

        assert_eq!(outcome, None);
        assert_eq!(h.controller.periods().len(), 1);
        assert_eq!(h.fetcher.calls.borrow().len(), calls);
        assert_eq!(h.controller.refreshes(), 1);
    }

    #[test]
    fn test_empty_selection_fetches_nothing() {
        let h = harness(Ok(months_payload(1)));

        let outcome = block_on(h.controller.add_period());

        assert_eq!(outcome, ComparisonRefresh::Skipped);
        assert!(h.fetcher.calls.borrow().is_empty());
        assert!(h.backend.state.alive_on(COMPARATIVE_CANVAS).is_empty());
    }

    #[test]
    fn test_selected_months_are_joined_in_order() {
        let h = harness(Ok(months_payload(2)));
        block_on(async {
            h.controller.add_period().await;
            h.controller.set_period(1, "2024-02").await;
            h.controller.set_period(0, "2024-01").await;
        });

        assert_eq!(
            h.fetcher.calls.borrow().last().map(String::as_str),
            Some("/data/vendas-meses?meses=2024-01%2C2024-02")
        );
        let alive = h.backend.state.alive_on(COMPARATIVE_CANVAS);
        assert_eq!(alive.len(), 1);
        assert_eq!(alive[0].config.dataset_count(), 2);
    }

    #[test]
    fn test_blank_slot_is_skipped_in_query() {
        let h = harness(Ok(months_payload(1)));
        block_on(async {
            h.controller.add_period().await;
            h.controller.set_period(1, "2024-03").await;
        });

        assert_eq!(
            h.fetcher.calls.borrow().as_slice(),
            &["/data/vendas-meses?meses=2024-03".to_string()]
        );
    }

    #[test]
    fn test_failed_fetch_keeps_chart() {
        let h = harness(Ok(months_payload(1)));
        block_on(h.controller.set_period(0, "2024-01"));
        let before = h.backend.state.alive_on(COMPARATIVE_CANVAS);

        let failing = ComparativeMonthsController::new(
            Rc::new(StaticFetcher::new()),
            h.controller.slots.clone(),
            |_: &PeriodList| {},
        );
        let outcome = block_on(failing.set_period(0, "2024-02"));

        assert!(matches!(outcome, Some(ComparisonRefresh::Failed(ChartError::Data(_)))));
        assert_eq!(h.backend.state.alive_on(COMPARATIVE_CANVAS), before);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let h = harness(Ok(months_payload(1)));
        assert_eq!(block_on(h.controller.set_period(5, "2024-01")), None);
        assert_eq!(h.controller.refreshes(), 0);
        assert!(h.seen.borrow().is_empty());
    }
}
