//! Unified path management for finchat configuration and data files.
//!
//! All finchat configuration, secrets, and account data live under the
//! platform's standard config and data directories, resolved via the `dirs`
//! crate. This ensures consistency across Linux, macOS and Windows.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for finchat.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/finchat/           # Config directory
/// ├── config.toml              # Application configuration (optional)
/// └── secret.json              # API keys
///
/// ~/.local/share/finchat/      # Data directory
/// └── accounts.json            # Account store
/// ```
pub struct FinchatPaths;

impl FinchatPaths {
    /// Returns the finchat configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/finchat/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("finchat"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the finchat data directory.
    ///
    /// This holds the account store, which outlives any single session.
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("finchat"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Returns the path to the account store file.
    pub fn accounts_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("accounts.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = FinchatPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("finchat"));
    }

    #[test]
    fn test_config_file() {
        let config_file = FinchatPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = FinchatPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_secret_file() {
        let secret_file = FinchatPaths::secret_file().unwrap();
        assert!(secret_file.ends_with("secret.json"));
        let config_dir = FinchatPaths::config_dir().unwrap();
        assert!(secret_file.starts_with(&config_dir));
    }

    #[test]
    fn test_accounts_file() {
        let accounts_file = FinchatPaths::accounts_file().unwrap();
        assert!(accounts_file.ends_with("accounts.json"));
        let data_dir = FinchatPaths::data_dir().unwrap();
        assert!(accounts_file.starts_with(&data_dir));
    }
}
