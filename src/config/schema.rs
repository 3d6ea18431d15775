//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::lifecycle::{Signal, SignalSet};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Which signals trigger shutdown.
    pub listen: ListenConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Signal filter configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ListenConfig {
    /// Signals to wait for. Empty means any terminating signal.
    pub signals: Vec<Signal>,
}

impl ListenConfig {
    pub fn signal_set(&self) -> SignalSet {
        self.signals.iter().copied().collect()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level for this crate (trace, debug, info, warn, error, off).
    /// `RUST_LOG` overrides it with a full filter directive.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShutdownConfig::default();
        assert!(config.listen.signals.is_empty());
        assert!(config.listen.signal_set().is_any());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parse_toml() {
        let config: ShutdownConfig = toml::from_str(
            r#"
            [listen]
            signals = ["SIGINT", "term"]

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.listen.signals, vec![Signal::Interrupt, Signal::Terminate]);
        assert!(!config.listen.signal_set().matches(Signal::Quit));
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ShutdownConfig = toml::from_str("[observability]\nlog_level = \"warn\"\n").unwrap();
        assert!(config.listen.signals.is_empty());

        let config: ShutdownConfig = toml::from_str("").unwrap();
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_unknown_signal_rejected() {
        let result = toml::from_str::<ShutdownConfig>("[listen]\nsignals = [\"SIGKILL\"]\n");
        assert!(result.is_err());
    }
}
