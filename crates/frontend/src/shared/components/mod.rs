pub mod date_input;
pub mod kpi_card;
pub mod record_table;

pub use date_input::DateInput;
pub use kpi_card::KpiCard;
pub use record_table::RecordTableView;
