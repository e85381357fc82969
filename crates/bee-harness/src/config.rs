//! Harness configuration.
//!
//! Values come from defaults, then the environment, then command-line flags:
//! - `BEE_ALIGN_COLUMN`: column that failure and bench lines pad to (0..=255).
//! - `BEE_BENCH_ECHO_ONCE`: run each bench callable once more with output visible.
//! - `BEE_LOG`: path of a JSONL structured log for the run.

use std::path::PathBuf;

use crate::error::HarnessError;

pub const ENV_ALIGN_COLUMN: &str = "BEE_ALIGN_COLUMN";
pub const ENV_BENCH_ECHO_ONCE: &str = "BEE_BENCH_ECHO_ONCE";
pub const ENV_LOG: &str = "BEE_LOG";

/// Largest accepted align column; larger requests are clamped.
pub const MAX_ALIGN_COLUMN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Pad the left part of report lines with spaces up to this column.
    pub align_column: usize,
    /// After each timed bench loop, run the callable once with output visible.
    pub bench_echo_once: bool,
    /// Where to write the JSONL structured log, if anywhere.
    pub log_path: Option<PathBuf>,
    /// Print the `RUNNING ...` banner before each run.
    pub banner: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            align_column: 0,
            bench_echo_once: false,
            log_path: None,
            banner: true,
        }
    }
}

impl HarnessConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HarnessError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_ALIGN_COLUMN) {
            let column = raw
                .trim()
                .parse::<usize>()
                .map_err(|err| HarnessError::Config {
                    key: ENV_ALIGN_COLUMN,
                    value: raw.clone(),
                    reason: err.to_string(),
                })?;
            config = config.with_align_column(column);
        }

        if let Some(raw) = lookup(ENV_BENCH_ECHO_ONCE) {
            config.bench_echo_once = parse_bool_loose(&raw).unwrap_or(false);
        }

        if let Some(raw) = lookup(ENV_LOG)
            && !raw.trim().is_empty()
        {
            config.log_path = Some(PathBuf::from(raw));
        }

        Ok(config)
    }

    /// Set the align column, clamped to [`MAX_ALIGN_COLUMN`].
    #[must_use]
    pub fn with_align_column(mut self, column: usize) -> Self {
        self.align_column = column.min(MAX_ALIGN_COLUMN);
        self
    }

    #[must_use]
    pub fn with_bench_echo_once(mut self, enabled: bool) -> Self {
        self.bench_echo_once = enabled;
        self
    }

    #[must_use]
    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }
}

/// Parse a boolean flag (case-insensitive). Unknown text gives `None`.
#[must_use]
pub fn parse_bool_loose(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "enabled" => Some(true),
        "0" | "false" | "no" | "off" | "disabled" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = HarnessConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, HarnessConfig::default());
        assert!(config.banner);
    }

    #[test]
    fn reads_all_variables() {
        let config = HarnessConfig::from_lookup(lookup_from(&[
            (ENV_ALIGN_COLUMN, "42"),
            (ENV_BENCH_ECHO_ONCE, "Yes"),
            (ENV_LOG, "target/bee.jsonl"),
        ]))
        .unwrap();
        assert_eq!(config.align_column, 42);
        assert!(config.bench_echo_once);
        assert_eq!(config.log_path, Some(PathBuf::from("target/bee.jsonl")));
    }

    #[test]
    fn align_column_is_clamped() {
        let config = HarnessConfig::from_lookup(lookup_from(&[(ENV_ALIGN_COLUMN, "4096")])).unwrap();
        assert_eq!(config.align_column, MAX_ALIGN_COLUMN);
        assert_eq!(HarnessConfig::default().with_align_column(300).align_column, 255);
    }

    #[test]
    fn non_numeric_align_column_is_rejected() {
        let err = HarnessConfig::from_lookup(lookup_from(&[(ENV_ALIGN_COLUMN, "wide")])).unwrap_err();
        assert!(matches!(err, HarnessError::Config { key: ENV_ALIGN_COLUMN, .. }));
    }

    #[test]
    fn unknown_bool_falls_back_to_off() {
        let config =
            HarnessConfig::from_lookup(lookup_from(&[(ENV_BENCH_ECHO_ONCE, "maybe")])).unwrap();
        assert!(!config.bench_echo_once);
        assert_eq!(parse_bool_loose(" ON "), Some(true));
        assert_eq!(parse_bool_loose("0"), Some(false));
        assert_eq!(parse_bool_loose("maybe"), None);
    }

    #[test]
    fn blank_log_path_is_ignored() {
        let config = HarnessConfig::from_lookup(lookup_from(&[(ENV_LOG, "  ")])).unwrap();
        assert!(config.log_path.is_none());
    }
}
