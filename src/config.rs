//! Trigger Configuration
//!
//! Selector, route and message settings for the delete trigger.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub const DEFAULT_SELECTOR: &str = ".delete-venue-btn";
pub const DEFAULT_ID_KEY: &str = "id";
pub const DEFAULT_ROUTE_TEMPLATE: &str = "/venues/{id}";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_FAILURE_MESSAGE: &str =
    "Venue can not be deleted at the moment. Please try again later.";

/// Settings for one delete trigger.
///
/// Every field falls back to its default when missing, so a page only needs
/// to supply what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriggerConfig {
    /// CSS selector of the trigger element
    pub selector: String,
    /// Dataset key holding the venue identifier (`data-id` -> `id`)
    pub id_key: String,
    /// Request path; `{id}` is replaced with the identifier
    pub route_template: String,
    /// Where to go after a successful delete
    pub home_path: String,
    /// Alert text shown when the venue could not be deleted
    pub failure_message: String,
    /// Whether a click may start a request while another is still in flight
    pub allow_overlap: bool,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            id_key: DEFAULT_ID_KEY.to_string(),
            route_template: DEFAULT_ROUTE_TEMPLATE.to_string(),
            home_path: DEFAULT_HOME_PATH.to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
            allow_overlap: true,
        }
    }
}

impl TriggerConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Read config from a JS object; `undefined`/`null` yield the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_contract() {
        let config = TriggerConfig::default();
        assert_eq!(config.selector, ".delete-venue-btn");
        assert_eq!(config.id_key, "id");
        assert_eq!(config.route_template, "/venues/{id}");
        assert_eq!(config.home_path, "/");
        assert_eq!(
            config.failure_message,
            "Venue can not be deleted at the moment. Please try again later."
        );
        assert!(config.allow_overlap);
    }

    #[test]
    fn test_partial_json_merges_with_defaults() {
        let json = r#"{"homePath":"/venues","allowOverlap":false}"#;
        let config = TriggerConfig::from_json(json).unwrap();
        assert_eq!(config.home_path, "/venues");
        assert!(!config.allow_overlap);
        assert_eq!(config.selector, DEFAULT_SELECTOR);
        assert_eq!(config.route_template, DEFAULT_ROUTE_TEMPLATE);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(TriggerConfig::from_json(r#"{"allowOverlap":"nope"}"#).is_err());
    }
}
