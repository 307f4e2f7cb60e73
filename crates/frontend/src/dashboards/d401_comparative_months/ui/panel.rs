use crate::dashboards::d401_comparative_months::chart::COMPARATIVE_CANVAS;
use crate::dashboards::d401_comparative_months::ComparativeMonthsController;
use crate::shared::chart::{ChartJs, ChartSlots};
use crate::shared::config::use_app_config;
use crate::shared::fetcher::HttpFetcher;
use contracts::shared::PeriodList;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

type Controller = ComparativeMonthsController<HttpFetcher, ChartJs>;

#[derive(Debug, Clone)]
enum PeriodAction {
    Add,
    Remove,
    Set(usize, String),
}

/// Month-over-month comparison: one `<input type="month">` per period and
/// a line chart of their daily totals.
#[component]
pub fn ComparativeMonthsPanel() -> impl IntoView {
    let config = use_app_config();
    let (periods, set_periods) = signal(PeriodList::default().slots().to_vec());

    let controller: Rc<Controller> = Rc::new(ComparativeMonthsController::new(
        Rc::new(HttpFetcher::new(config)),
        Rc::new(ChartSlots::new(ChartJs)),
        move |list: &PeriodList| set_periods.set(list.slots().to_vec()),
    ));
    let controller = StoredValue::new_local(controller);

    let dispatch = move |action: PeriodAction| {
        let controller = controller.get_value();
        spawn_local(async move {
            match action {
                PeriodAction::Add => {
                    controller.add_period().await;
                }
                PeriodAction::Remove => {
                    controller.remove_period().await;
                }
                PeriodAction::Set(index, value) => {
                    controller.set_period(index, &value).await;
                }
            }
        });
    };

    view! {
        <div class="card chart-card" style="margin-top: 16px; padding: 16px;">
            <div id="mesesComparativo" style="display: flex; flex-wrap: wrap; gap: 8px; align-items: center; margin-bottom: 12px;">
                <For
                    each=move || 0..periods.get().len()
                    key=|index| *index
                    let:index
                >
                    <input
                        type="month"
                        class="mesInput"
                        style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px;"
                        prop:value=move || periods.get().get(index).cloned().unwrap_or_default()
                        on:change=move |ev| dispatch(PeriodAction::Set(index, event_target_value(&ev)))
                    />
                </For>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| dispatch(PeriodAction::Add)
                >
                    "+ Mês"
                </Button>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || periods.get().len() <= 1)
                    on_click=move |_| dispatch(PeriodAction::Remove)
                >
                    "- Mês"
                </Button>
            </div>
            <canvas id=COMPARATIVE_CANVAS></canvas>
        </div>
    }
}
