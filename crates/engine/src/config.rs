use serde::{Deserialize, Serialize};

use crate::error::EquivError;

/// Default over-fetch tolerance: up to three mismatched (key, value) pairs
/// still count as equivalent.
pub const DEFAULT_TOLERANCE: usize = 3;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CompareConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Maximum total count of mismatched (key, value) pairs before the two
    /// documents are declared non-equivalent.
    #[serde(default = "default_tolerance")]
    pub tolerance: usize,
    #[serde(default)]
    pub scan: ScanMode,
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_name() -> String {
    "compare".into()
}

fn default_tolerance() -> usize {
    DEFAULT_TOLERANCE
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tolerance: DEFAULT_TOLERANCE,
            scan: ScanMode::default(),
            output: OutputConfig::default(),
        }
    }
}

impl CompareConfig {
    pub fn from_toml(input: &str) -> Result<Self, EquivError> {
        toml::from_str(input).map_err(|e| EquivError::ConfigParse(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Scan mode
// ---------------------------------------------------------------------------

/// Whether the comparator stops as soon as the running difference total
/// exceeds the tolerance, or always visits every key so the reported total
/// is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    ShortCircuit,
    Full,
}

impl Default for ScanMode {
    fn default() -> Self {
        Self::ShortCircuit
    }
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShortCircuit => write!(f, "short_circuit"),
            Self::Full => write!(f, "full"),
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Optional path for the JSON report.
    #[serde(default)]
    pub json: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = CompareConfig::from_toml("").unwrap();
        assert_eq!(config.name, "compare");
        assert_eq!(config.tolerance, 3);
        assert_eq!(config.scan, ScanMode::ShortCircuit);
        assert!(config.output.json.is_none());
    }

    #[test]
    fn parse_full_config() {
        let input = r#"
name = "checkout-api"
tolerance = 5
scan = "full"

[output]
json = "report.json"
"#;
        let config = CompareConfig::from_toml(input).unwrap();
        assert_eq!(config.name, "checkout-api");
        assert_eq!(config.tolerance, 5);
        assert_eq!(config.scan, ScanMode::Full);
        assert_eq!(config.output.json.as_deref(), Some("report.json"));
    }

    #[test]
    fn reject_unknown_scan_mode() {
        let err = CompareConfig::from_toml(r#"scan = "shortcircuit""#);
        assert!(err.is_err(), "typo in scan mode should fail deserialization");
    }

    #[test]
    fn reject_negative_tolerance() {
        let err = CompareConfig::from_toml("tolerance = -1").unwrap_err();
        assert!(err.to_string().contains("config parse error"));
    }
}
