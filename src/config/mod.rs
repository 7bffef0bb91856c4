use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level light-client configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteConfig {
    #[serde(default)]
    pub verifier: VerifierSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Verification policy knobs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierSection {
    /// Aggregate voting power above this is rejected so power arithmetic
    /// stays exact in double precision.
    #[serde(default = "default_max_total_voting_power")]
    pub max_total_voting_power: u64,
    /// Accept a validator-set change on the strength of the trusted
    /// header's `next_validators_hash` alone.
    #[serde(default = "default_true")]
    pub allow_trust_skip: bool,
    #[serde(default = "default_max_validators")]
    pub max_validators: usize,
}

/// Logging preferences for the host. The library only emits `tracing`
/// events; whoever installs the subscriber reads these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Comma-separated `target=level` overrides, e.g.
    /// `lite_client::verifier=debug`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_levels: Option<String>,
}

impl LoggingSection {
    /// Filter directive in `EnvFilter` syntax: the base level followed by
    /// the per-module overrides.
    pub fn filter_directive(&self) -> String {
        match self.module_levels.as_deref().map(str::trim) {
            Some(overrides) if !overrides.is_empty() => format!("{},{}", self.level, overrides),
            _ => self.level.clone(),
        }
    }
}

// Default value functions
fn default_max_total_voting_power() -> u64 { 1 << 52 }
fn default_true() -> bool { true }
fn default_max_validators() -> usize { 10_000 }
fn default_log_format() -> String { "json".to_string() }
fn default_log_level() -> String { "info".to_string() }

// Default impls
impl Default for VerifierSection {
    fn default() -> Self {
        Self {
            max_total_voting_power: default_max_total_voting_power(),
            allow_trust_skip: true,
            max_validators: default_max_validators(),
        }
    }
}
impl Default for LoggingSection {
    fn default() -> Self {
        Self { format: default_log_format(), level: default_log_level(), module_levels: None }
    }
}

impl LiteConfig {
    /// Load configuration from a TOML file. Falls back to defaults for missing fields.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: LiteConfig = toml::from_str(contents)?;
        if config.verifier.max_total_voting_power > crate::types::safe_int::MAX_SAFE_INTEGER {
            anyhow::bail!("verifier.max_total_voting_power must be below 2^53");
        }
        Ok(config)
    }

    /// Load from file if it exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(_) => Self::default(),
        }
    }

    /// Serialize to TOML string (useful for generating template configs).
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
