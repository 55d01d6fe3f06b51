//! Shared settings file: `~/.config/dofus-linker/settings.toml`.
//!
//! Every field is optional. Environment variables take precedence over the
//! file, and a missing file means defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::LinkerError;
use crate::exceptions::ExceptionTable;
use crate::selector::{FixedPolicy, HeuristicPolicy, SelectorRules, VariantPolicy};
use crate::url::{DEFAULT_BASE_URL, Linker};

pub const BASE_URL_ENV: &str = "DOFUS_LINKER_BASE_URL";
pub const API_URL_ENV: &str = "DOFUS_LINKER_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.dofusdb.fr";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("dofus-linker").join("settings.toml")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub base_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

/// Which variant goes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Heuristic,
    Normalized,
    Entity,
}

impl std::str::FromStr for Priority {
    type Err = LinkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" => Ok(Priority::Heuristic),
            "normalized" => Ok(Priority::Normalized),
            "entity" => Ok(Priority::Entity),
            _ => Err(LinkerError::UnknownPriority(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSettings {
    pub priority: Priority,
    pub multi_accent_exceptions: Vec<String>,
    pub single_accent_exceptions: Vec<String>,
}

impl SelectorSettings {
    /// Build the configured policy. Fails on an invalid extra pattern.
    pub fn policy(&self) -> Result<Arc<dyn VariantPolicy>, LinkerError> {
        let policy: Arc<dyn VariantPolicy> = match self.priority {
            Priority::Normalized => Arc::new(FixedPolicy::Normalized),
            Priority::Entity => Arc::new(FixedPolicy::Entity),
            Priority::Heuristic => Arc::new(HeuristicPolicy::new(SelectorRules::with_exceptions(
                &self.multi_accent_exceptions,
                &self.single_accent_exceptions,
            )?)),
        };
        Ok(policy)
    }
}

/// Contents of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub site: SiteSettings,
    pub api: ApiSettings,
    pub selector: SelectorSettings,
    /// Extra name → slug entries layered over the builtin table.
    pub exceptions: BTreeMap<String, String>,
}

impl Settings {
    /// Load from the canonical path, then apply environment overrides.
    pub fn load() -> Result<Self, LinkerError> {
        let mut settings = Self::load_from(&settings_path())?;
        settings.apply_env(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Load a settings file without environment overrides. A missing file
    /// gives defaults.
    pub fn load_from(path: &Path) -> Result<Self, LinkerError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&contents)
            .map_err(|e| LinkerError::settings(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(contents: &str) -> Result<Self, LinkerError> {
        toml::from_str(contents).map_err(|e| LinkerError::settings(e.to_string()))
    }

    /// Override fields from environment variables, read through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            log::debug!("Site base URL from ${}", BASE_URL_ENV);
            self.site.base_url = url;
        }
        if let Some(url) = var(API_URL_ENV).filter(|v| !v.is_empty()) {
            log::debug!("API base URL from ${}", API_URL_ENV);
            self.api.base_url = url;
        }
    }

    /// Builtin exception table with the configured entries on top.
    pub fn exception_table(&self) -> ExceptionTable {
        ExceptionTable::builtin().with_overrides(&self.exceptions)
    }

    pub fn build_linker(&self) -> Result<Linker, LinkerError> {
        Ok(Linker::new(
            self.site.base_url.clone(),
            self.exception_table(),
            self.selector.policy()?,
        ))
    }

    /// Pretty TOML for display.
    pub fn to_toml(&self) -> Result<String, LinkerError> {
        toml::to_string_pretty(self).map_err(|e| LinkerError::settings(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
