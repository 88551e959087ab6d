mod session;
mod settings;

pub use session::Session;
pub use settings::{ApiSettings, Config, DashboardSettings};

use crate::error::{DashboardError, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (XDG config dir, or ~/.vendor-dashboard/)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "vendor-dashboard") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    let home = std::env::var_os("HOME").map(PathBuf::from).ok_or_else(|| {
        DashboardError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".vendor-dashboard"))
}

/// Fail early with a hint to run `init` when the directory is missing
pub fn ensure_initialized(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        return Err(DashboardError::ConfigNotFound(config_dir.to_path_buf()));
    }
    Ok(())
}

/// Create the config directory with a template config.toml
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if config_dir.exists() {
        return Err(DashboardError::AlreadyInitialized(config_dir.to_path_buf()));
    }

    fs::create_dir_all(config_dir)?;
    fs::write(config_dir.join("config.toml"), CONFIG_TEMPLATE)?;
    Ok(())
}

/// Load the main config.toml
pub fn load_config(config_dir: &Path) -> Result<Config> {
    let path = config_dir.join("config.toml");
    if !path.exists() {
        return Err(DashboardError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| DashboardError::ConfigParse { path, source: e })
}

/// Load session.toml, if a vendor has been selected
pub fn load_session(config_dir: &Path) -> Result<Option<Session>> {
    let path = config_dir.join("session.toml");
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| DashboardError::ConfigParse { path, source: e })
}

/// Save session.toml
pub fn save_session(config_dir: &Path, session: &Session) -> Result<()> {
    let path = config_dir.join("session.toml");
    let content = toml::to_string_pretty(session).map_err(|e| {
        DashboardError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })?;
    fs::write(path, content)?;
    Ok(())
}

/// Remove session.toml. Returns whether there was a session to remove.
pub fn clear_session(config_dir: &Path) -> Result<bool> {
    let path = config_dir.join("session.toml");
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)?;
    Ok(true)
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[api]
base_url = "http://localhost:5000/api"  # storefront REST API root
timeout_secs = 10

[dashboard]
currency_symbol = "$"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses() {
        let config: Config = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.dashboard.currency_symbol, "$");
    }

    #[test]
    fn dashboard_section_is_optional() {
        let config: Config = toml::from_str("[api]\nbase_url = \"http://x\"\n").unwrap();
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.dashboard.currency_symbol, "$");
    }
}
