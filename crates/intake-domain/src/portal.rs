//! Public portal configuration served to the browser

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORE_NUMBER: &str = "1234";
pub const DEFAULT_STORE_NAME: &str = "Downtown LA";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalConfig {
    pub store_number: String,
    pub store_name: String,
    /// Embedded order form for marketing assets, if one is configured
    #[serde(default)]
    pub marketing_assets_form_url: Option<String>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            store_number: DEFAULT_STORE_NUMBER.to_string(),
            store_name: DEFAULT_STORE_NAME.to_string(),
            marketing_assets_form_url: None,
        }
    }
}
