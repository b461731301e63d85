//! Client configuration.
//!
//! The host page may override the defaults with a TOML block:
//!
//! ```html
//! <script id="client-config" type="text/plain">
//! [dashboard]
//! top_sellers_limit = 5
//! </script>
//! ```

use crate::shared::page_data::{read_element_text, PageDataError};
use serde::Deserialize;

/// Element id of the optional TOML override in the host page
pub const CONFIG_ELEMENT_ID: &str = "client-config";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UploadConfig {
    /// POST target for the multipart request
    pub endpoint: String,
    /// Where to go after a successful upload
    pub results_path: String,
    /// Multipart field name, repeated once per file
    pub field_name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page the server renders the dashboard on
    pub path: String,
    /// Bars in the top-sellers chart; values above 10 are capped
    pub top_sellers_limit: usize,
    pub page_size_options: Vec<usize>,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[upload]
endpoint = "/"
results_path = "/dashboard"
field_name = "files"

[dashboard]
path = "/dashboard"
top_sellers_limit = 10
page_size_options = [10, 30, 50, 100]
"#;

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "/".to_string(),
            results_path: "/dashboard".to_string(),
            field_name: "files".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            path: "/dashboard".to_string(),
            top_sellers_limit: 10,
            page_size_options: vec![10, 30, 50, 100],
        }
    }
}

impl ClientConfig {
    pub fn from_toml(source: &str) -> Result<Self, PageDataError> {
        toml::from_str(source).map_err(|e| PageDataError::Malformed {
            id: CONFIG_ELEMENT_ID.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Load configuration for this page.
///
/// Search order:
/// 1. `#client-config` element in the host page
/// 2. Falls back to embedded default config
pub fn load_config() -> ClientConfig {
    match read_element_text(CONFIG_ELEMENT_ID) {
        Ok(text) => match ClientConfig::from_toml(&text) {
            Ok(config) => {
                log::info!("Loaded client config from #{}", CONFIG_ELEMENT_ID);
                return config;
            }
            Err(e) => log::warn!("Ignoring client config override: {}", e),
        },
        Err(PageDataError::Missing(_)) => {}
        Err(e) => log::warn!("Ignoring client config override: {}", e),
    }

    log::info!("Using default embedded configuration");
    ClientConfig::from_toml(DEFAULT_CONFIG).unwrap_or_default()
}
