use crate::shared::record_table::{RecordTable, NO_DATA_MESSAGE};
use leptos::prelude::*;

/// Striped table of [`RecordTable`] rows, or the no-data placeholder.
#[component]
pub fn RecordTableView(
    #[prop(into)] table: Signal<Option<RecordTable>>,
) -> impl IntoView {
    move || match table.get() {
        None => view! { <p class="text-muted">{NO_DATA_MESSAGE}</p> }.into_any(),
        Some(table) => {
            let RecordTable { headers, rows } = table;
            view! {
                <div style="overflow-x: auto;">
                    <table class="table table-striped" style="width: 100%; border-collapse: collapse;">
                        <thead>
                            <tr>
                                {headers
                                    .into_iter()
                                    .map(|h| view! { <th style="text-align: left; padding: 6px 8px;">{h}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            {row
                                                .into_iter()
                                                .map(|cell| view! { <td style="padding: 6px 8px;">{cell}</td> })
                                                .collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            }
            .into_any()
        }
    }
}
