//! Optional TOML configuration (`saju.toml`).
//!
//! Every table and key is optional; a missing file means defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "saju.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SajuConfig {
    pub output: OutputConfig,
    pub chart: ChartConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Fixed reference date for age; today when unset.
    pub as_of: Option<NaiveDate>,
    /// Major cycles to list after the chart (0 = none).
    pub daeun_cycles: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level for the saju crates, e.g. "debug"; `RUST_LOG` still wins.
    pub level: Option<String>,
}

impl SajuConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid saju configuration")
    }

    /// Load `explicit` if given (it must exist), else `saju.toml` if present,
    /// else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(SajuConfig::from_toml_str("").unwrap(), SajuConfig::default());
    }

    #[test]
    fn full_file() {
        let cfg = SajuConfig::from_toml_str(
            r#"
            [output]
            format = "json"
            pretty = true

            [chart]
            as_of = "2024-06-01"
            daeun_cycles = 8

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(cfg.output.pretty);
        assert_eq!(cfg.chart.as_of, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(cfg.chart.daeun_cycles, 8);
        assert_eq!(cfg.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let cfg = SajuConfig::from_toml_str("[output]\npretty = true\n").unwrap();
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert!(cfg.output.pretty);
        assert_eq!(cfg.chart, ChartConfig::default());
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(SajuConfig::from_toml_str("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let err = SajuConfig::load(Some(Path::new("/nonexistent/saju.toml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config"));
    }
}
