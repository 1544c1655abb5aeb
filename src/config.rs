//! List Configuration
//!
//! Page text, mount target and the labels to render. The host page may
//! override any field with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="grocery-list-config">
//!   { "labels": ["Pollo", "Chorizo"] }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Id of the inline JSON config element
pub const CONFIG_ELEMENT_ID: &str = "grocery-list-config";

pub const DEFAULT_MOUNT_ID: &str = "app";

pub const DEFAULT_LABELS: &[&str] = &[
    "Carne Asada",
    "Al Pastor",
    "Carnitas",
    "Pollo",
    "Lengua",
    "Chorizo",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Id of the placeholder element the app mounts into
    pub mount_id: String,
    /// Page title (`<h1>`)
    pub title: String,
    /// List heading (`<h2>`)
    pub heading: String,
    /// Row labels, in display order
    pub labels: Vec<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
            title: "Hello World".to_string(),
            heading: "Grocery List".to_string(),
            labels: DEFAULT_LABELS.iter().map(|label| label.to_string()).collect(),
        }
    }
}

impl ListConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        if config.mount_id.trim().is_empty() {
            return Err(ConfigError::EmptyMountId);
        }
        Ok(config)
    }

    /// Config from the host page, or the defaults when there is none or it
    /// is unusable.
    pub fn load() -> Self {
        let Some(raw) = read_inline_config() else {
            return Self::default();
        };

        match Self::from_json(&raw) {
            Ok(config) => {
                web_sys::console::log_1(
                    &format!("[CONFIG] Loaded {} labels from #{}", config.labels.len(), CONFIG_ELEMENT_ID).into(),
                );
                config
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
                Self::default()
            }
        }
    }
}

fn read_inline_config() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ListConfig::default();
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.title, "Hello World");
        assert_eq!(config.heading, "Grocery List");
        assert_eq!(
            config.labels,
            vec!["Carne Asada", "Al Pastor", "Carnitas", "Pollo", "Lengua", "Chorizo"]
        );
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ListConfig::from_json(r#"{ "labels": ["A", "B", "A"] }"#).unwrap();
        assert_eq!(config.labels, vec!["A", "B", "A"]);
        assert_eq!(config.mount_id, "app");
        assert_eq!(config.heading, "Grocery List");
    }

    #[test]
    fn test_empty_labels_allowed() {
        let config = ListConfig::from_json(r#"{ "labels": [] }"#).unwrap();
        assert!(config.labels.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = ListConfig::from_json("{ labels: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_empty_mount_id_rejected() {
        let err = ListConfig::from_json(r#"{ "mount_id": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyMountId));
    }
}
