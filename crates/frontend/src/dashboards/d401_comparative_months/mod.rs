pub mod api;
pub mod chart;
pub mod controller;
pub mod ui;

pub use controller::{ComparativeMonthsController, ComparisonRefresh};
