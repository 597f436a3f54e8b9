use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::layout::StorageLayout;

fn default_storage_base() -> PathBuf {
    PathBuf::from("/storage")
}

fn default_max_unique_name_attempts() -> u32 {
    10_000
}

/// Global configuration loaded from `~/.config/dlguard/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DlguardConfig {
    /// Directory under which shared storage volumes are mounted.
    #[serde(default = "default_storage_base")]
    pub storage_base: PathBuf,
    /// Bound on `-1`, `-2`, ... counter suffixes tried before save-file
    /// resolution gives up.
    #[serde(default = "default_max_unique_name_attempts")]
    pub max_unique_name_attempts: u32,
}

impl Default for DlguardConfig {
    fn default() -> Self {
        Self {
            storage_base: default_storage_base(),
            max_unique_name_attempts: default_max_unique_name_attempts(),
        }
    }
}

impl DlguardConfig {
    pub fn storage_layout(&self) -> StorageLayout {
        StorageLayout::new(&self.storage_base)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dlguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DlguardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DlguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DlguardConfig = toml::from_str(&data)?;
    Ok(cfg)
}
