use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::playlist::DEFAULT_PLAYLIST_NAME;

/// HTTP fetch parameters (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// User-Agent sent with the share page request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 60,
            user_agent: concat!("ncpl/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/ncpl/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NcplConfig {
    /// Playlist filename used when none is given.
    pub default_output: String,
    /// Extension appended to manually entered names that lack a video extension.
    pub manual_default_extension: String,
    /// Write fetched HTML and found filenames under the state dir.
    #[serde(default)]
    pub debug_dump: bool,
    /// External command that prints the rendered share page for the URL
    /// appended as last argument (e.g. `["chromium", "--headless", "--dump-dom"]`).
    #[serde(default)]
    pub render_command: Option<Vec<String>>,
    /// HTTP fetch settings; built-in defaults when missing.
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Default for NcplConfig {
    fn default() -> Self {
        Self {
            default_output: DEFAULT_PLAYLIST_NAME.to_string(),
            manual_default_extension: "mkv".to_string(),
            debug_dump: false,
            render_command: None,
            fetch: FetchConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ncpl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Same location as [`config_path`], for messages; creates no directories.
pub fn config_location() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ncpl")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NcplConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NcplConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: NcplConfig = toml::from_str(&data)?;
    Ok(cfg)
}
