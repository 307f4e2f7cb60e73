pub mod api;
pub mod charts;
pub mod controller;
pub mod ui;

pub use controller::{DashboardController, KpiDisplay, RefreshReport, RefreshState};
