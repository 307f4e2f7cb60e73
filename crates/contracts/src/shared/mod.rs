pub mod filters;
pub mod records;

pub use filters::{FilterState, PeriodList};
pub use records::Record;
