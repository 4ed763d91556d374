use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Credential retry policy (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Automatic full restarts after the upload endpoint rejects the credential.
    pub max_credential_retries: u32,
    /// Keep re-prompting for credentials for as long as the server rejects them.
    #[serde(default)]
    pub reprompt_forever: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_credential_retries: 1,
            reprompt_forever: false,
        }
    }
}

/// Global configuration loaded from `~/.config/handin/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandinConfig {
    /// Endpoint that records data-processing consent.
    pub consent_url: String,
    /// Endpoint that receives the bundled exercise files.
    pub upload_url: String,
    /// Cached credential file. Relative paths resolve against the working directory.
    pub credential_file: PathBuf,
    /// Suffix appended to each required file name (e.g. ".java").
    pub source_suffix: String,
    /// Answer that counts as "yes" on the consent prompt (case-insensitive).
    pub affirmative: String,
    /// Optional connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional retry policy; if missing, built-in defaults are used.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for HandinConfig {
    fn default() -> Self {
        Self {
            consent_url: "http://dintprog-server.cs.au.dk/gdpr.php".to_string(),
            upload_url: "http://dintprog-server.cs.au.dk/upload.php".to_string(),
            credential_file: PathBuf::from("upload-data.dat"),
            source_suffix: ".java".to_string(),
            affirmative: "ja".to_string(),
            connect_timeout_secs: None,
            retry: None,
        }
    }
}

impl HandinConfig {
    /// Credential file location for a run in `work_dir`.
    pub fn credential_path(&self, work_dir: &Path) -> PathBuf {
        if self.credential_file.is_absolute() {
            self.credential_file.clone()
        } else {
            work_dir.join(&self.credential_file)
        }
    }

    pub fn retry_or_default(&self) -> RetryConfig {
        self.retry.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("handin")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HandinConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HandinConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<HandinConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: HandinConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
