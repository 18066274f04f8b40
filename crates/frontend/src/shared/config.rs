//! Client configuration.
//!
//! Defaults are embedded in the binary. The host page may override them with
//! inline blocks:
//! - `<script id="app-config" type="application/json">` for [`AppConfig`]
//! - `<script id="service-catalog" type="text/toml">` for the service catalog

use chrono::NaiveDate;
use contracts::domain::a002_service::ServiceCatalog;
use contracts::system::profile::ProfileDto;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const APP_CONFIG_ID: &str = "app-config";
pub const SERVICE_CATALOG_ID: &str = "service-catalog";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Page-count analysis endpoint
    pub upload_url: String,
    /// Profile update endpoint
    pub profile_url: String,
    /// Where the order form posts (add to cart)
    pub order_url: String,
    pub phone_prefix: String,
    pub toast_visible_ms: u32,
    pub toast_fade_ms: u32,
    pub public_holidays: Vec<NaiveDate>,
    /// Profile as rendered by the server for this session
    pub profile: ProfileDto,
    /// Hidden fields echoed back with the profile form
    pub profile_form_extras: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_url: "/calculate-pages/".to_string(),
            profile_url: "/profile/edit/".to_string(),
            order_url: "/cart/add/".to_string(),
            phone_prefix: "+91 ".to_string(),
            toast_visible_ms: 3000,
            toast_fade_ms: 500,
            public_holidays: Vec::new(),
            profile: ProfileDto::default(),
            profile_form_extras: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Parse an override block; missing keys keep their defaults.
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

/// Text of an inline `<script>` block, if the host page rendered one
fn inline_block(id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(id)?.text_content()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Load configuration
///
/// Search order:
/// 1. Inline `#app-config` block in the host page
/// 2. Falls back to the embedded defaults
pub fn load_config() -> AppConfig {
    match inline_block(APP_CONFIG_ID) {
        Some(source) => match AppConfig::from_json_str(&source) {
            Ok(config) => {
                log::info!("Loaded config from #{}", APP_CONFIG_ID);
                config
            }
            Err(e) => {
                log::error!("Invalid #{} block, using defaults: {}", APP_CONFIG_ID, e);
                AppConfig::default()
            }
        },
        None => {
            log::info!("Using default embedded configuration");
            AppConfig::default()
        }
    }
}

/// Load the service catalog, preferring the host page's table.
pub fn load_catalog() -> ServiceCatalog {
    if let Some(source) = inline_block(SERVICE_CATALOG_ID) {
        match ServiceCatalog::from_toml_str(&source) {
            Ok(catalog) => {
                log::info!(
                    "Loaded service catalog from #{} ({} services)",
                    SERVICE_CATALOG_ID,
                    catalog.services.len()
                );
                return catalog;
            }
            Err(e) => log::error!("Invalid #{} block: {:#}", SERVICE_CATALOG_ID, e),
        }
    }
    ServiceCatalog::builtin().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.upload_url, "/calculate-pages/");
        assert_eq!(config.toast_visible_ms, 3000);
        assert_eq!(config.phone_prefix, "+91 ");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json_str(
            r#"{
                "upload_url": "/api/pages/",
                "public_holidays": ["2026-01-26", "2026-08-15"],
                "profile": {"name": "Asha", "mobile": "9876543210", "address": "Pune"}
            }"#,
        )
        .unwrap();
        assert_eq!(config.upload_url, "/api/pages/");
        assert_eq!(config.profile_url, "/profile/edit/");
        assert_eq!(config.public_holidays.len(), 2);
        assert_eq!(config.profile.name, "Asha");
    }

    #[test]
    fn test_invalid_override_is_error() {
        assert!(AppConfig::from_json_str(r#"{"toast_visible_ms": "soon"}"#).is_err());
    }
}
