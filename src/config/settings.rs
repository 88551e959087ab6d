use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiSettings {
    /// Storefront API root, e.g. "http://localhost:5000/api"
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DashboardSettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_currency_symbol() -> String {
    "$".to_string()
}
