pub mod api;
pub mod controller;
pub mod view;

pub use controller::{ReportFormController, ReportOutcome, ReportView};
pub use view::SalesReportPage;
