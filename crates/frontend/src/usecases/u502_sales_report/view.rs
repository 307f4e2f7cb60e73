use super::controller::{ReportFormController, ReportOutcome, ReportView};
use crate::shared::components::{DateInput, RecordTableView};
use crate::shared::config::use_app_config;
use crate::shared::export::BrowserFileSaver;
use crate::shared::fetcher::HttpFetcher;
use crate::shared::notify::BrowserNotifier;
use crate::usecases::u501_upload_sales::UploadHistory;
use contracts::shared::FilterState;
use contracts::usecases::u502_sales_report::{ReportRequest, ReportType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

type Controller = ReportFormController<HttpFetcher, BrowserNotifier, BrowserFileSaver>;

#[component]
pub fn SalesReportPage() -> impl IntoView {
    let controller: Rc<Controller> = Rc::new(ReportFormController::new(
        HttpFetcher::new(use_app_config()),
        BrowserNotifier,
        BrowserFileSaver,
    ));
    let controller = StoredValue::new_local(controller);

    let (start, set_start) = signal(String::new());
    let (end, set_end) = signal(String::new());
    let (report_type, set_report_type) = signal(ReportType::default());
    let (export_pdf, set_export_pdf) = signal(false);
    let (generating, set_generating) = signal(false);
    let (result, set_result) = signal(None::<ReportView>);
    let (error, set_error) = signal(None::<String>);

    let submit = move |_| {
        let filter = FilterState::from_inputs(&start.get_untracked(), &end.get_untracked());
        let request = ReportRequest {
            start_date: filter.start_date,
            end_date: filter.end_date,
            report_type: report_type.get_untracked(),
            export_pdf: export_pdf.get_untracked(),
        };
        let controller = controller.get_value();
        set_generating.set(true);
        set_error.set(None);

        spawn_local(async move {
            match controller.submit(request).await {
                ReportOutcome::Table(view) => set_result.set(Some(view)),
                ReportOutcome::Downloaded { filename } => log::info!("Saved {}", filename),
                ReportOutcome::Declined => {}
                ReportOutcome::Failed(e) => {
                    if !e.is_application() {
                        set_error.set(Some(e.to_string()));
                    }
                }
                ReportOutcome::SaveFailed(e) => set_error.set(Some(e)),
            }
            set_generating.set(false);
        });
    };

    view! {
        <div class="page" style="padding: 16px;">
            <h1 class="page-header__title">"Relatórios"</h1>
            <div class="card" style="padding: 16px; display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end;">
                <DateInput label="Data início" id="dataInicio" value=start on_change=move |v| set_start.set(v) />
                <DateInput label="Data fim" id="dataFim" value=end on_change=move |v| set_end.set(v) />
                <label style="display: flex; flex-direction: column; gap: 4px; font-size: 0.875rem;">
                    "Tipo de relatório"
                    <select
                        id="tipoRelatorio"
                        class="form__input"
                        prop:value=move || report_type.get().code()
                        on:change=move |ev| {
                            if let Some(t) = ReportType::from_code(&event_target_value(&ev)) {
                                set_report_type.set(t);
                            }
                        }
                    >
                        {ReportType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.code()>{t.display_name()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form__checkbox-wrapper" style="display: flex; gap: 6px; align-items: center;">
                    <input
                        id="exportarPDF"
                        class="form__checkbox"
                        type="checkbox"
                        prop:checked=move || export_pdf.get()
                        on:change=move |ev| set_export_pdf.set(event_target_checked(&ev))
                    />
                    "Exportar PDF"
                </label>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || generating.get())
                    on_click=submit
                >
                    "Gerar relatório"
                </Button>
                {move || generating.get().then(|| view! { <Spinner /> })}
            </div>

            {move || error.get().map(|err| view! {
                <div class="warning-box warning-box--error" style="margin-top: 12px;">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{err}</span>
                </div>
            })}

            {move || result.get().map(|report| {
                let table = Signal::derive(move || report.table());
                view! {
                    <div id="resultadoRelatorio" class="card" style="padding: 16px; margin-top: 16px;">
                        <RecordTableView table=table />
                    </div>
                }
            })}

            <UploadHistory />
        </div>
    }
}
