use super::api;
use super::outcome::UploadOutcome;
use crate::shared::components::RecordTableView;
use crate::shared::config::use_app_config;
use crate::shared::fetcher::HttpFetcher;
use crate::shared::modal::Modal;
use crate::shared::notify::{BrowserNotifier, Notifier};
use crate::shared::record_table::RecordTable;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Data kinds the import endpoint accepts in `tipo`.
const UPLOAD_KINDS: [(&str, &str); 2] = [("csv", "CSV"), ("excel", "Excel")];

/// File picker posting to the import endpoint. `on_uploaded` runs after a
/// successful import, once the dialog is closed.
#[component]
pub fn UploadModal(on_close: Callback<()>, on_uploaded: Callback<()>) -> impl IntoView {
    let fetcher = HttpFetcher::new(use_app_config());
    let file_input = NodeRef::<html::Input>::new();
    let (kind, set_kind) = signal(UPLOAD_KINDS[0].0.to_string());
    let (uploading, set_uploading) = signal(false);

    let reset_form = move || {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
        set_kind.set(UPLOAD_KINDS[0].0.to_string());
    };

    let submit = move |_| {
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            BrowserNotifier.alert("Erro: Nenhum arquivo enviado");
            return;
        };
        let fetcher = fetcher.clone();
        let kind = kind.get_untracked();
        set_uploading.set(true);

        spawn_local(async move {
            let outcome = UploadOutcome::from_response(api::upload_file(&fetcher, &file, &kind).await);
            set_uploading.set(false);
            if outcome.is_success() {
                log::info!("Upload of {} ({}) done: {:?}", file.name(), kind, outcome);
            } else {
                log::error!("Upload of {} failed: {:?}", file.name(), outcome);
            }
            BrowserNotifier.alert(&outcome.message());
            if outcome.is_success() {
                reset_form();
                on_close.run(());
                on_uploaded.run(());
            }
        });
    };

    view! {
        <Modal title="Upload de Dados" on_close=on_close>
            <div style="display: flex; flex-direction: column; gap: 12px;">
                <label class="form__label">"Arquivo (CSV ou Excel)"</label>
                <input
                    class="form__input"
                    type="file"
                    accept=".csv,.xlsx,.xls"
                    node_ref=file_input
                />
                <label class="form__label">"Tipo de dados"</label>
                <select
                    class="form__input"
                    prop:value=move || kind.get()
                    on:change=move |ev| set_kind.set(event_target_value(&ev))
                >
                    {UPLOAD_KINDS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <div style="display: flex; gap: 8px; justify-content: flex-end;">
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || uploading.get())
                        on_click=submit
                    >
                        {move || if uploading.get() { "Enviando..." } else { "Enviar" }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}

/// Table of the most recent uploads.
#[component]
pub fn UploadHistory() -> impl IntoView {
    let fetcher = HttpFetcher::new(use_app_config());
    let (table, set_table) = signal(None::<RecordTable>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let load = move || {
        let fetcher = fetcher.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api::get_upload_history(&fetcher).await {
                Ok(history) => {
                    set_table.set(RecordTable::from_records(&history.uploads));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Erro ao carregar histórico de uploads: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };
    let reload = load.clone();

    Effect::new(move |_| load());

    view! {
        <div class="card" style="padding: 16px; margin-top: 16px;">
            <div style="display: flex; align-items: center; justify-content: space-between;">
                <h2 class="section-title">"Histórico de uploads"</h2>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| reload()
                >
                    "Atualizar"
                </Button>
            </div>
            {move || loading.get().then(|| view! { <Spinner /> })}
            {move || error.get().map(|err| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{err}</span>
                </div>
            })}
            <RecordTableView table=table />
        </div>
    }
}

/// Starts the background refresh of currency quotes.
#[component]
pub fn QuoteRefreshButton() -> impl IntoView {
    let fetcher = HttpFetcher::new(use_app_config());
    let (pending, set_pending) = signal(false);

    let trigger = move |_| {
        let fetcher = fetcher.clone();
        set_pending.set(true);
        spawn_local(async move {
            let message = match api::refresh_quotes(&fetcher).await {
                Ok(response) => {
                    log::info!("Quote refresh started: {:?}", response.task_id);
                    response.message
                }
                Err(e) => {
                    log::error!("Erro ao atualizar cotações: {}", e);
                    format!("Erro ao atualizar cotações: {}", e)
                }
            };
            set_pending.set(false);
            BrowserNotifier.alert(&message);
        });
    };

    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Subtle
            disabled=Signal::derive(move || pending.get())
            on_click=trigger
        >
            "Atualizar cotações"
        </Button>
    }
}
