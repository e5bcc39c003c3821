//! Configuration handling for the TUI
//!
//! Two sources: an optional JSON file in the platform config dir for UI
//! preferences, and the environment for the email provider credentials.

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Default base URL of the EmailJS REST API
pub const DEFAULT_API_BASE: &str = "https://api.emailjs.com";

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const API_BASE_VAR: &str = "EMAILJS_API_BASE";

static PROVIDER_CONFIG: OnceLock<ProviderConfig> = OnceLock::new();

/// Platform directories for config and log files
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "portfolio", "portfolio-tui")
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Override for the provider API base URL
    pub api_base: Option<String>,
    /// Section shown at startup (e.g. "contact")
    pub start_section: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }
}

/// Email provider credentials, fixed for the life of the process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub api_base: String,
}

impl ProviderConfig {
    /// Read credentials from the process environment
    pub fn from_env(file: &TuiConfig) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), file)
    }

    /// Build from an arbitrary variable lookup. Unset credentials become empty
    /// strings; the API base falls back to the file, then the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, file: &TuiConfig) -> Self {
        let api_base = lookup(API_BASE_VAR)
            .filter(|v| !v.is_empty())
            .or_else(|| file.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            service_id: lookup(SERVICE_ID_VAR).unwrap_or_default(),
            template_id: lookup(TEMPLATE_ID_VAR).unwrap_or_default(),
            public_key: lookup(PUBLIC_KEY_VAR).unwrap_or_default(),
            api_base,
        }
    }

    /// Names of credential variables that are empty
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (SERVICE_ID_VAR, &self.service_id),
            (TEMPLATE_ID_VAR, &self.template_id),
            (PUBLIC_KEY_VAR, &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Install the process-wide configuration. Fails if already initialized.
    pub fn init(config: ProviderConfig) -> Result<&'static ProviderConfig> {
        if PROVIDER_CONFIG.set(config).is_err() {
            bail!("provider configuration already initialized");
        }
        Self::get().ok_or_else(|| anyhow::anyhow!("provider configuration missing after init"))
    }

    /// The process-wide configuration, if initialized
    pub fn get() -> Option<&'static ProviderConfig> {
        PROVIDER_CONFIG.get()
    }
}
