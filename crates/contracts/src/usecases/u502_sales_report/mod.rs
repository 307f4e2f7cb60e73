pub mod request;
pub mod response;

pub use request::{ReportRequest, ReportType};
pub use response::ReportResponse;
