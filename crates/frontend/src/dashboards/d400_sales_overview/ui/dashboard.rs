use crate::dashboards::d400_sales_overview::charts::{
    CATEGORY_FUNNEL_CANVAS, GOALS_CANVAS, MONTHLY_TREND_CANVAS, PROFIT_MARGIN_CANVAS,
    SALES_BY_CATEGORY_CANVAS, SALES_BY_REGION_CANVAS, SALES_BY_SELLER_CANVAS, SALES_OVER_TIME_CANVAS,
    TOP_PRODUCTS_CANVAS,
};
use crate::dashboards::d400_sales_overview::{DashboardController, KpiDisplay, RefreshState};
use crate::dashboards::d401_comparative_months::ui::ComparativeMonthsPanel;
use crate::shared::chart::{ChartJs, ChartSlots};
use crate::shared::components::{DateInput, KpiCard};
use crate::shared::config::use_app_config;
use crate::shared::fetcher::HttpFetcher;
use crate::usecases::u501_upload_sales::{QuoteRefreshButton, UploadModal};
use contracts::shared::FilterState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

type Controller = DashboardController<HttpFetcher, ChartJs>;

/// Canvases of the chart grid with their card titles, in display order.
const CHART_CARDS: [(&str, &str); 9] = [
    (SALES_OVER_TIME_CANVAS, "Vendas ao longo do tempo"),
    (SALES_BY_CATEGORY_CANVAS, "Vendas por categoria"),
    (SALES_BY_REGION_CANVAS, "Vendas por região"),
    (TOP_PRODUCTS_CANVAS, "Top produtos"),
    (PROFIT_MARGIN_CANVAS, "Margem de lucro"),
    (GOALS_CANVAS, "Metas x realizado"),
    (MONTHLY_TREND_CANVAS, "Tendência mensal"),
    (SALES_BY_SELLER_CANVAS, "Vendas por vendedor"),
    (CATEGORY_FUNNEL_CANVAS, "Funil por categoria"),
];

#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let config = use_app_config();
    let (start, set_start) = signal(String::new());
    let (end, set_end) = signal(String::new());
    let (kpis, set_kpis) = signal(KpiDisplay::default());
    let (refreshing, set_refreshing) = signal(false);
    let (show_upload, set_show_upload) = signal(false);

    let controller: Rc<Controller> = Rc::new(DashboardController::new(
        Rc::new(HttpFetcher::new(config.clone())),
        Rc::new(ChartSlots::new(ChartJs)),
        config,
        move |display| set_kpis.set(display),
    ));
    let controller = StoredValue::new_local(controller);

    let refresh = move |filter: FilterState| {
        let controller = controller.get_value();
        set_refreshing.set(true);
        spawn_local(async move {
            let report = controller.refresh(filter).await;
            if !report.failed.is_empty() {
                log::warn!("{} charts not updated", report.failed.len());
            }
            set_refreshing.set(controller.state() == RefreshState::Refreshing);
        });
    };

    let apply_filters = move |_| {
        refresh(FilterState::from_inputs(&start.get_untracked(), &end.get_untracked()));
    };

    let clear_filters = move |_| {
        set_start.set(String::new());
        set_end.set(String::new());
        refresh(FilterState::default());
    };

    let on_uploaded = Callback::new(move |_| {
        refresh(FilterState::from_inputs(&start.get_untracked(), &end.get_untracked()));
    });
    let close_upload = Callback::new(move |_| set_show_upload.set(false));

    // Canvases exist once the view is mounted
    Effect::new(move |_| refresh(FilterState::default()));

    on_cleanup(move || {
        if let Some(controller) = controller.try_get_value() {
            controller.slots().release_all();
        }
    });

    let kpi_field = move |pick: fn(&KpiDisplay) -> String| Signal::derive(move || pick(&kpis.get()));

    view! {
        <div id="d400_sales_overview--dashboard" style="padding: 16px;">
            <div style="display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 16px;">
                <DateInput label="Data início" id="dataInicio" value=start on_change=move |v| set_start.set(v) />
                <DateInput label="Data fim" id="dataFim" value=end on_change=move |v| set_end.set(v) />
                <Button appearance=ButtonAppearance::Primary on_click=apply_filters>
                    "Aplicar filtros"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=clear_filters>
                    "Limpar filtros"
                </Button>
                {move || refreshing.get().then(|| view! { <Spinner /> })}
                <div style="margin-left: auto; display: flex; gap: 8px;">
                    <QuoteRefreshButton />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| set_show_upload.set(true)
                    >
                        "Upload de dados"
                    </Button>
                </div>
            </div>

            <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin-bottom: 16px;">
                <KpiCard label="Receita total" value_id="receitaTotal" value=kpi_field(|k| k.total_revenue.clone()) />
                <KpiCard label="Número de vendas" value_id="numVendas" value=kpi_field(|k| k.sales_count.clone()) />
                <KpiCard label="Ticket médio" value_id="ticketMedio" value=kpi_field(|k| k.average_ticket.clone()) />
            </div>

            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(420px, 1fr)); gap: 12px;">
                {CHART_CARDS
                    .iter()
                    .map(|(canvas_id, title)| {
                        view! {
                            <div class="card chart-card" style="padding: 12px;">
                                <h3 class="section-title">{*title}</h3>
                                <canvas id=*canvas_id></canvas>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <ComparativeMonthsPanel />

            <Show when=move || show_upload.get()>
                <UploadModal on_close=close_upload on_uploaded=on_uploaded />
            </Show>
        </div>
    }
}
