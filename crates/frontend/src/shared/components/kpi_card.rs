use leptos::prelude::*;

/// One headline figure with its caption.
#[component]
pub fn KpiCard(
    /// Label displayed above the value
    label: &'static str,
    /// Already formatted value; empty while nothing has loaded
    #[prop(into)]
    value: Signal<String>,
    /// DOM id of the value element
    #[prop(optional)]
    value_id: Option<&'static str>,
) -> impl IntoView {
    let shown = move || {
        let v = value.get();
        if v.is_empty() {
            "\u{2014}".to_string()
        } else {
            v
        }
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value" id=value_id>{shown}</div>
            </div>
        </div>
    }
}
