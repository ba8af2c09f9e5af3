//! Page-level runtime configuration injected by the entry layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::probe::FieldScheme;

/// Logical width the dialog is designed for.
pub const DESIGN_WIDTH_PX: f64 = 360.0;
/// Upper bound on waiting for a `transitionend` that never fires.
pub const TRANSITION_FALLBACK_MS: u64 = 300;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Selector scheme for the rendered IP fields.
    pub field_scheme: FieldScheme,
    pub design_width: f64,
    /// Hostname substring identifying the dual-stack entry host.
    pub dual_stack_marker: String,
    /// Path the IP-version redirect lands on.
    pub redirect_path: String,
    /// Target of the cancel button.
    pub cancel_href: String,
    pub transition_fallback_ms: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            field_scheme: FieldScheme::default(),
            design_width: DESIGN_WIDTH_PX,
            dual_stack_marker: "ip.".to_string(),
            redirect_path: "/98".to_string(),
            cancel_href: "/".to_string(),
            transition_fallback_ms: TRANSITION_FALLBACK_MS,
        }
    }
}

impl RuntimeConfig {
    pub fn for_scheme(field_scheme: FieldScheme) -> Self {
        Self {
            field_scheme,
            ..Self::default()
        }
    }

    /// Applies a partial JSON object on top of `self`; omitted keys keep their current values.
    pub fn with_overrides(&self, raw: &str) -> Result<Self, ConfigError> {
        let overrides: Map<String, Value> = serde_json::from_str(raw)?;
        let mut merged = serde_json::to_value(self)?;
        if let Value::Object(fields) = &mut merged {
            fields.extend(overrides);
        }
        Ok(serde_json::from_value(merged)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn override_keeps_unmentioned_keys_including_scheme() {
        let config = RuntimeConfig::for_scheme(FieldScheme::Legacy)
            .with_overrides(r#"{"redirect_path":"/standard"}"#)
            .expect("parse");

        assert_eq!(config.field_scheme, FieldScheme::Legacy);
        assert_eq!(config.redirect_path, "/standard");
        assert_eq!(config.design_width, 360.0);
        assert_eq!(config.cancel_href, "/");
    }

    #[test]
    fn override_can_switch_scheme_explicitly() {
        let config = RuntimeConfig::default()
            .with_overrides(r#"{"field_scheme":"legacy","transition_fallback_ms":450}"#)
            .expect("parse");

        assert_eq!(config.field_scheme, FieldScheme::Legacy);
        assert_eq!(config.transition_fallback_ms, 450);
    }

    #[test]
    fn malformed_or_non_object_override_is_an_error() {
        let base = RuntimeConfig::default();

        let err = base.with_overrides("{not json").unwrap_err();
        assert!(err.to_string().starts_with("invalid runtime config"));
        assert!(base.with_overrides("[1, 2]").is_err());
        assert!(base.with_overrides(r#"{"design_width":"wide"}"#).is_err());
    }
}
