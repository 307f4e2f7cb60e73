use leptos::prelude::*;

/// Labelled native date picker. The value is `yyyy-mm-dd`, or empty when
/// no date is chosen.
#[component]
pub fn DateInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: impl Fn(String) + 'static,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label style="display: flex; flex-direction: column; gap: 4px; font-size: 0.875rem;">
            {label}
            <input
                type="date"
                id=id
                prop:value=value
                on:input=move |ev| {
                    on_change(event_target_value(&ev));
                }
                style="padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 150px;"
            />
        </label>
    }
}
