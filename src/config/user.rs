//! User configuration loading for wrapref.
//!
//! User config location: $XDG_CONFIG_HOME/wrapref/wrapref.toml
//! Fallback: the platform config directory reported by `dirs`.

use std::path::{Path, PathBuf};

use super::settings::SettingsFile;
use crate::error::HostResult;

const APP_DIR: &str = "wrapref";
const CONFIG_FILE: &str = "wrapref.toml";

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set: $XDG_CONFIG_HOME/wrapref/wrapref.toml
/// 2. Otherwise: `dirs::config_dir()`/wrapref/wrapref.toml
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return Some(PathBuf::from(xdg_config).join(APP_DIR).join(CONFIG_FILE));
    }

    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load settings from a TOML file. A missing file yields `Ok(None)`.
pub fn load_settings_file(path: &Path) -> HostResult<Option<SettingsFile>> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            log::debug!(target: "wrapref::config", "Loading settings from {}", path.display());
            Ok(Some(toml::from_str(&text)?))
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Load the user-wide settings file, if any.
pub fn load_user_settings() -> HostResult<Option<SettingsFile>> {
    match user_config_path() {
        Some(path) => load_settings_file(&path),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArrowParens;
    use serial_test::serial;
    use std::env;

    /// Run `f` with XDG_CONFIG_HOME set to `value`, restoring it afterwards.
    fn with_xdg_config_home<T>(value: &Path, f: impl FnOnce() -> T) -> T {
        let original = env::var("XDG_CONFIG_HOME").ok();
        // SAFETY: #[serial(xdg_env)] prevents concurrent modification of XDG_CONFIG_HOME
        unsafe {
            env::set_var("XDG_CONFIG_HOME", value);
        }

        let result = f();

        // SAFETY: #[serial(xdg_env)] prevents concurrent modification of XDG_CONFIG_HOME
        unsafe {
            match original {
                Some(val) => env::set_var("XDG_CONFIG_HOME", val),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
        }
        result
    }

    #[test]
    #[serial(xdg_env)]
    fn test_user_config_path_uses_xdg_config_home_when_set() {
        let path = with_xdg_config_home(Path::new("/custom/config"), user_config_path);
        assert_eq!(
            path,
            Some(PathBuf::from("/custom/config/wrapref/wrapref.toml")),
            "should use XDG_CONFIG_HOME/wrapref/wrapref.toml"
        );
    }

    #[test]
    #[serial(xdg_env)]
    fn test_load_user_settings_from_xdg_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("wrapref");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("wrapref.toml"), "enabled = false\n").unwrap();

        let loaded = with_xdg_config_home(dir.path(), load_user_settings)
            .unwrap()
            .unwrap();
        assert_eq!(loaded.enabled, Some(false));
    }

    #[test]
    #[serial(xdg_env)]
    fn test_load_user_settings_without_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = with_xdg_config_home(dir.path(), load_user_settings).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_settings_file_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_settings_file(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_settings_file_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrapref.toml");
        std::fs::write(&path, "strict_argument_position = false\narrow_parens = \"always\"\n")
            .unwrap();

        let loaded = load_settings_file(&path).unwrap().unwrap();
        assert_eq!(loaded.strict_argument_position, Some(false));
        assert_eq!(loaded.arrow_parens, Some(ArrowParens::Always));
        assert_eq!(loaded.enabled, None);
    }

    #[test]
    fn test_load_settings_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrapref.toml");
        std::fs::write(&path, "arrow_parens = \"sometimes\"\n").unwrap();

        let err = load_settings_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
