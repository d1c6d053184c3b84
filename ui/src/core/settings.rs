//! Demo widget settings: simulated latency, acknowledgement timing and the
//! initial language pair.
//!
//! Resolution order on native targets is defaults, then `translatepro.toml`
//! in the working directory, then `TRANSLATEPRO__*` environment variables.
//! The web target only uses the defaults.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const SETTINGS_FILE: &str = "translatepro.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub latency_ms: u64,
    pub copied_ack_ms: u64,
    pub default_source: String,
    pub default_target: String,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            copied_ack_ms: 2000,
            default_source: "en".into(),
            default_target: "es".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl DemoSettings {
    pub fn from_toml_str(raw: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn copied_ack(&self) -> Duration {
        Duration::from_millis(self.copied_ack_ms)
    }

    /// Apply `TRANSLATEPRO__*` overrides from `lookup`. Unparseable numbers are
    /// skipped with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TRANSLATEPRO__LATENCY_MS") {
            match v.trim().parse() {
                Ok(ms) => self.latency_ms = ms,
                Err(_) => tracing::warn!(value = %v, "ignoring invalid TRANSLATEPRO__LATENCY_MS"),
            }
        }
        if let Some(v) = lookup("TRANSLATEPRO__COPIED_ACK_MS") {
            match v.trim().parse() {
                Ok(ms) => self.copied_ack_ms = ms,
                Err(_) => {
                    tracing::warn!(value = %v, "ignoring invalid TRANSLATEPRO__COPIED_ACK_MS")
                }
            }
        }
        if let Some(v) = lookup("TRANSLATEPRO__DEFAULT_SOURCE") {
            self.default_source = v;
        }
        if let Some(v) = lookup("TRANSLATEPRO__DEFAULT_TARGET") {
            self.default_target = v;
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> DemoSettings {
    let mut settings = match std::fs::read_to_string(SETTINGS_FILE) {
        Ok(raw) => DemoSettings::from_toml_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(%err, file = SETTINGS_FILE, "falling back to default settings");
            DemoSettings::default()
        }),
        Err(_) => DemoSettings::default(),
    };
    settings.apply_overrides(|key| std::env::var(key).ok());
    settings
}

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> DemoSettings {
    DemoSettings::default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_match_reference_timing() {
        let s = DemoSettings::default();
        assert_eq!(s.latency(), Duration::from_millis(1500));
        assert_eq!(s.copied_ack(), Duration::from_millis(2000));
        assert_eq!((s.default_source.as_str(), s.default_target.as_str()), ("en", "es"));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let s = DemoSettings::from_toml_str("latency_ms = 250\ndefault_target = \"fr\"")
            .expect("parse");
        assert_eq!(s.latency_ms, 250);
        assert_eq!(s.default_target, "fr");
        assert_eq!(s.copied_ack_ms, 2000);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            DemoSettings::from_toml_str("latency_ms = \"soon\""),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn env_overrides_skip_invalid_numbers() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("TRANSLATEPRO__LATENCY_MS", "0"),
            ("TRANSLATEPRO__COPIED_ACK_MS", "later"),
            ("TRANSLATEPRO__DEFAULT_SOURCE", "de"),
        ]);
        let mut s = DemoSettings::default();
        s.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(s.latency_ms, 0);
        assert_eq!(s.copied_ack_ms, 2000);
        assert_eq!(s.default_source, "de");
        assert_eq!(s.default_target, "es");
    }
}
