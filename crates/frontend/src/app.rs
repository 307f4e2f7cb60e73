use crate::dashboards::d400_sales_overview::ui::SalesOverviewDashboard;
use crate::shared::config::AppConfig;
use crate::usecases::u502_sales_report::SalesReportPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // Provide the runtime settings to every page
    provide_context(AppConfig::from_document());

    view! {
        <Router>
            <header class="app-header" style="display: flex; gap: 16px; align-items: center; padding: 12px 16px;">
                <strong>"Dashboard de Vendas"</strong>
                <A href="/">"Dashboard"</A>
                <A href="/relatorios">"Relatórios"</A>
            </header>
            <main>
                <Routes fallback=|| view! { <p style="padding: 16px;">"Página não encontrada."</p> }>
                    <Route path=path!("/") view=SalesOverviewDashboard />
                    <Route path=path!("/relatorios") view=SalesReportPage />
                </Routes>
            </main>
        </Router>
    }
}
