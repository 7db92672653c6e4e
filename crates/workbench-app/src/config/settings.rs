//! Settings parser for .workbench/config.toml

use super::types::Settings;
use std::path::{Path, PathBuf};
use workbench_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = ".workbench";

/// Default location of the config file for a working directory
pub fn default_config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `<base_dir>/.workbench/config.toml`.
///
/// Missing or malformed files fall back to defaults; the problem is logged.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = default_config_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match load_settings_from(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from an explicit path.
///
/// Unlike [`load_settings`], errors are returned so the caller can report a
/// bad `--config` argument instead of silently running with defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Create a commented default config file in `<base_dir>/.workbench/`.
///
/// Returns the path of the config file. An existing file is left untouched.
pub fn init_config_dir(base_dir: &Path) -> Result<PathBuf> {
    let dir = base_dir.join(CONFIG_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create {} dir: {}", CONFIG_DIR, e)))?;
    }

    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Workbench Configuration

[layout]
# app-builder | dev-environment | split-editor
preset = "app-builder"
# Columns used by a collapsed panel
collapsed_width = 3
# Share added/removed per resize keystroke
resize_step = 0.05

# Uncomment to replace the preset with an explicit arrangement
# [[layout.panels]]
# kind = "content"
# size = 0.6
# min_size = 0.3
#
# [[layout.panels]]
# kind = "assistant"
# size = 0.4

[assistant]
# Simulated reply latency in milliseconds
reply_delay_ms = 500
# Fail the reply after this many milliseconds (0 = never)
timeout_ms = 0

[editor]
line_numbers = true

[project]
name = "New Project"
framework = "react"

[[project.pages]]
name = "Home"
route = "/"
components = []
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutPreset;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file_uses_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());
        assert_eq!(settings.layout.preset, LayoutPreset::AppBuilder);
        assert_eq!(settings.assistant.reply_delay_ms, 500);
    }

    #[test]
    fn test_load_settings_reads_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(CONFIG_FILENAME),
            "[layout]\npreset = \"dev-environment\"\n[assistant]\nreply_delay_ms = 50\n",
        )
        .unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.layout.preset, LayoutPreset::DevEnvironment);
        assert_eq!(settings.assistant.reply_delay_ms, 50);
    }

    #[test]
    fn test_load_settings_malformed_falls_back() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), "[layout\npreset = ").unwrap();

        let settings = load_settings(temp.path());
        assert_eq!(settings.layout.preset, LayoutPreset::AppBuilder);
    }

    #[test]
    fn test_load_settings_from_missing_path_errors() {
        let temp = tempdir().unwrap();
        let err = load_settings_from(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_settings_from_malformed_errors() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "assistant = [").unwrap();
        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_init_config_dir_writes_parseable_template() {
        let temp = tempdir().unwrap();
        let path = init_config_dir(temp.path()).unwrap();
        assert!(path.exists());

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.layout.preset, LayoutPreset::AppBuilder);
        assert_eq!(settings.project.pages[0].name, "Home");
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), "# mine\n").unwrap();

        let path = init_config_dir(temp.path()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# mine\n");
    }
}
