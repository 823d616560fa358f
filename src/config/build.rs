//! Static configuration handed to the external build tool.
//!
//! Nothing here is interpreted by this crate. The value only exists so the
//! surrounding pipeline can read the two options in the shape it expects.

use serde::{Deserialize, Serialize};

use crate::error::TypingsResult;

/// Stylesheet handling options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CssOptions {
    /// Write stylesheets to separate files instead of inlining them
    pub extract: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
    /// Run third-party dependencies through the same source transformation
    pub transpile_dependencies: bool,
    pub css: CssOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            transpile_dependencies: true,
            css: CssOptions::default(),
        }
    }
}

impl BuildConfig {
    pub fn to_json(&self) -> TypingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(source: &str) -> TypingsResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_default_values() {
        let config = BuildConfig::default();
        assert!(config.transpile_dependencies);
        assert!(!config.css.extract);
    }

    #[test]
    fn test_json_shape() {
        let rendered = BuildConfig::default().to_json().unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(
            value,
            json!({ "transpileDependencies": true, "css": { "extract": false } })
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = BuildConfig::from_json(r#"{ "css": {} }"#).unwrap();
        assert_eq!(config, BuildConfig::default());

        let config = BuildConfig::from_json(r#"{ "transpileDependencies": false }"#).unwrap();
        assert!(!config.transpile_dependencies);
        assert!(!config.css.extract);
    }

    #[test]
    fn test_invalid_json() {
        let err = BuildConfig::from_json("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Serialization error"));
    }
}
