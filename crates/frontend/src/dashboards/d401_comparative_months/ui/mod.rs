pub mod panel;

pub use panel::ComparativeMonthsPanel;
