pub mod api_utils;
pub mod chart;
pub mod components;
pub mod config;
pub mod export;
pub mod fetcher;
pub mod modal;
pub mod notify;
pub mod number_format;
pub mod query;
pub mod record_table;
