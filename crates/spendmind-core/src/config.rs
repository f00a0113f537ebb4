//! Configuration for insights and reports
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/spendmind/config/spendmind.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Missing keys in an override file keep their default values.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/spendmind.toml");

/// Settings for the insight engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightConfig {
    /// Lower-cased category names treated as rent
    rent_aliases: BTreeSet<String>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self::with_rent_aliases(["rent", "arriendo"])
    }
}

impl InsightConfig {
    pub fn with_rent_aliases<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rent_aliases: aliases
                .into_iter()
                .map(|a| a.as_ref().trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    /// Whether a category name matches one of the rent aliases (case-insensitive)
    pub fn is_rent(&self, category: &str) -> bool {
        self.rent_aliases.contains(&category.to_lowercase())
    }

    pub fn rent_aliases(&self) -> impl Iterator<Item = &str> {
        self.rent_aliases.iter().map(String::as_str)
    }
}

/// Default number of days in the daily report
pub const DEFAULT_TOP_DAYS: usize = 10;

/// Settings for report queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    pub top_days: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_days: DEFAULT_TOP_DAYS,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub insights: InsightConfig,
    pub reports: ReportConfig,
}

impl Config {
    /// Load config from an explicit path, the data dir override, or the embedded default
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let override_path = path.map(Path::to_path_buf).or_else(default_config_path);

        let content = match override_path {
            Some(p) if p.exists() => {
                debug!(path = %p.display(), "Loading config override");
                fs::read_to_string(&p)
                    .map_err(|e| Error::Config(format!("Failed to read {}: {}", p.display(), e)))?
            }
            _ => DEFAULT_CONFIG.to_string(),
        };

        Self::parse(&content)
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Config::default();

        if let Some(insights) = raw.insights {
            if let Some(aliases) = insights.rent_aliases {
                config.insights = InsightConfig::with_rent_aliases(aliases);
            }
        }

        if let Some(reports) = raw.reports {
            if let Some(top_days) = reports.top_days {
                if top_days == 0 {
                    return Err(Error::Config("reports.top_days must be positive".into()));
                }
                config.reports.top_days = top_days;
            }
        }

        Ok(config)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("spendmind").join("config").join("spendmind.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    insights: Option<RawInsights>,
    reports: Option<RawReports>,
}

#[derive(Debug, Deserialize)]
struct RawInsights {
    rent_aliases: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RawReports {
    top_days: Option<usize>,
}
