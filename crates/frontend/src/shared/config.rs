use super::api_utils;
use leptos::prelude::*;

/// Number of products requested by the top products chart.
pub const DEFAULT_TOP_PRODUCTS_LIMIT: u32 = 10;

/// Runtime settings of the dashboard, provided once through Leptos context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the analytics backend, empty for same-origin requests
    pub api_base: String,
    /// `limite` sent to `/data/top-produtos`
    pub top_products_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            top_products_limit: DEFAULT_TOP_PRODUCTS_LIMIT,
        }
    }
}

impl AppConfig {
    /// Read the settings from the host page.
    pub fn from_document() -> Self {
        let config = Self {
            api_base: api_utils::api_base(),
            ..Self::default()
        };
        log::debug!("API base: {:?}", config.api_base);
        config
    }

    pub fn url(&self, path: &str) -> String {
        api_utils::join_url(&self.api_base, path)
    }
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig context not found")
}
