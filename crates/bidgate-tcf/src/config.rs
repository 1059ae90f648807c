//! Per-purpose enforcement configuration.
//!
//! Publishers tune enforcement per TCF purpose: which strategy runs, whether
//! the vendor-level signal is required, and which bidders are exempt from
//! enforcement for that purpose. The auction pipeline uses
//! `vendor_exceptions` to split its vendor entries into subject and exempt
//! sets before invoking the strategy; the config layer only carries the
//! names.

use crate::strategy::PurposeStrategy;
use bidgate_consent::PurposeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// TCF2 defines purposes 1 through 10.
pub const TCF_PURPOSE_IDS: std::ops::RangeInclusive<PurposeId> = 1..=10;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("unsupported config version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("purpose {purpose} is not a TCF purpose (expected 1..=10)")]
    UnknownPurpose { purpose: PurposeId },
}

/// Which strategy runs for a purpose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnforcementMode {
    No,
    Basic,
    #[default]
    Full,
}

impl EnforcementMode {
    pub fn strategy(&self) -> PurposeStrategy {
        match self {
            Self::No => PurposeStrategy::None,
            Self::Basic => PurposeStrategy::Basic,
            Self::Full => PurposeStrategy::Full,
        }
    }
}

/// Enforcement tuning for one purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurposeConfig {
    pub enforcement: EnforcementMode,
    pub enforce_vendors: bool,
    /// Bidder names exempt from enforcement for this purpose.
    pub vendor_exceptions: Vec<String>,
}

impl Default for PurposeConfig {
    fn default() -> Self {
        Self {
            enforcement: EnforcementMode::Full,
            enforce_vendors: true,
            vendor_exceptions: Vec::new(),
        }
    }
}

/// Enforcement configuration across all ten TCF purposes.
///
/// Purposes not mentioned in the source file fall back to full enforcement
/// with the vendor-level signal required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcfConfig {
    pub version: u32,
    #[serde(default)]
    pub purposes: BTreeMap<PurposeId, PurposeConfig>,
}

impl Default for TcfConfig {
    fn default() -> Self {
        let mut config = Self {
            version: SUPPORTED_CONFIG_VERSION,
            purposes: BTreeMap::new(),
        };
        config.fill_defaults();
        config
    }
}

impl TcfConfig {
    /// Validate and normalize: version gate, purpose-ID range check, then
    /// defaults for any purpose the file left out.
    pub fn finalize(mut self) -> Result<Self, ConfigError> {
        if self.version != SUPPORTED_CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_CONFIG_VERSION,
            });
        }
        if let Some(&purpose) = self
            .purposes
            .keys()
            .find(|purpose| !TCF_PURPOSE_IDS.contains(*purpose))
        {
            return Err(ConfigError::UnknownPurpose { purpose });
        }
        self.fill_defaults();
        Ok(self)
    }

    fn fill_defaults(&mut self) {
        for purpose in TCF_PURPOSE_IDS {
            self.purposes.entry(purpose).or_default();
        }
    }

    /// Config for `purpose`; `None` only for IDs outside the TCF range.
    pub fn purpose(&self, purpose: PurposeId) -> Option<&PurposeConfig> {
        self.purposes.get(&purpose)
    }
}

pub fn load_config(path: &Path) -> Result<TcfConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: TcfConfig = serde_yaml::from_str(&raw)?;
    config.finalize()
}
