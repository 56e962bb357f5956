//! Overlay configuration (overlay.toml)
//!
//! Hotkeys, the default memory query and which windows open on start.
//! Settings are stored in TOML format in the platform-specific config directory.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::memory::TypeQuery;

/// File name inside [`config_dir`]
pub const CONFIG_FILE: &str = "overlay.toml";

/// Overlay configuration.
///
/// Every section falls back to its defaults when missing from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OverlayConfig {
    /// Toggle hotkeys
    #[serde(default)]
    pub hotkeys: HotkeyConfig,
    /// Initial memory lister query
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Windows visible on start
    #[serde(default)]
    pub overlay: StartupConfig,
}

/// Hotkeys, named as egui key names (`"1"`, `"Backtick"`, `"F3"`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotkeyConfig {
    /// Toggle the hierarchy browser (default: 1)
    #[serde(default = "default_hierarchy_toggle")]
    pub hierarchy_toggle: String,
    /// Toggle the memory lister (default: Backtick)
    #[serde(default = "default_memory_toggle")]
    pub memory_toggle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Type queried on first open (default: Object)
    #[serde(default = "default_type_name")]
    pub default_type_name: String,
    /// Module the type is resolved in (default: Core)
    #[serde(default = "default_module_name")]
    pub default_module_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StartupConfig {
    #[serde(default)]
    pub show_hierarchy_on_start: bool,
    #[serde(default)]
    pub show_memory_on_start: bool,
}

fn default_hierarchy_toggle() -> String {
    "1".to_string()
}
fn default_memory_toggle() -> String {
    "Backtick".to_string()
}

fn default_type_name() -> String {
    "Object".to_string()
}
fn default_module_name() -> String {
    "Core".to_string()
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            hierarchy_toggle: default_hierarchy_toggle(),
            memory_toggle: default_memory_toggle(),
        }
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            default_type_name: default_type_name(),
            default_module_name: default_module_name(),
        }
    }
}

impl MemoryConfig {
    pub fn query(&self) -> TypeQuery {
        TypeQuery::new(&self.default_type_name, &self.default_module_name)
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Devscope\config`
/// On macOS: `~/Library/Application Support/io.devscope.Devscope`
/// On Linux: `~/.config/Devscope`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.devscope", "", "Devscope")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Read and parse a config file
pub fn load_from(path: &Path) -> Result<OverlayConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the configuration from disk.
///
/// Returns defaults if the file doesn't exist or cannot be parsed.
pub fn load() -> OverlayConfig {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE)) else {
        return OverlayConfig::default();
    };
    if !path.exists() {
        return OverlayConfig::default();
    }
    load_from(&path).unwrap_or_else(|e| {
        tracing::warn!("{}, using defaults", e);
        OverlayConfig::default()
    })
}

/// Write a config file, creating its parent directory
pub fn save_to(config: &OverlayConfig, path: &Path) -> Result<(), ConfigError> {
    let write_error = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(write_error)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_error)
}

/// Saves the configuration to the platform's configuration directory.
pub fn save(config: &OverlayConfig) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &dir.join(CONFIG_FILE))
}

/// Parse a key name as egui spells it; `"1"` and `"Num1"` are both accepted
pub fn parse_key(name: &str) -> Option<egui::Key> {
    egui::Key::from_name(name.trim())
}

/// Check every hotkey parses and no two share a key.
///
/// Returns a list of warning messages; an empty list means the bindings are usable.
pub fn validate_hotkeys(config: &HotkeyConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    let mut used: HashMap<egui::Key, &str> = HashMap::new();

    let bindings = [
        (&config.hierarchy_toggle, "hotkeys.hierarchy_toggle"),
        (&config.memory_toggle, "hotkeys.memory_toggle"),
    ];
    for (key, name) in bindings {
        let Some(parsed) = parse_key(key) else {
            warnings.push(format!("{} key '{}' is not a known key", name, key));
            continue;
        };
        if let Some(other) = used.insert(parsed, name) {
            warnings.push(format!("{} key '{}' conflicts with {}", name, key, other));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================================
    // Default value tests
    // =============================================================

    #[test]
    fn test_config_default() {
        let config = OverlayConfig::default();
        assert_eq!(config.hotkeys.hierarchy_toggle, "1");
        assert_eq!(config.hotkeys.memory_toggle, "Backtick");
        assert_eq!(config.memory.default_type_name, "Object");
        assert_eq!(config.memory.default_module_name, "Core");
        assert!(!config.overlay.show_hierarchy_on_start);
        assert!(!config.overlay.show_memory_on_start);
    }

    #[test]
    fn test_default_hotkeys_parse() {
        let config = HotkeyConfig::default();
        assert_eq!(parse_key(&config.hierarchy_toggle), Some(egui::Key::Num1));
        assert_eq!(parse_key(&config.memory_toggle), Some(egui::Key::Backtick));
        assert!(validate_hotkeys(&config).is_empty());
    }

    // =============================================================
    // TOML serialization tests
    // =============================================================

    #[test]
    fn test_config_deserialize_empty() {
        let config: OverlayConfig = toml::from_str("").unwrap();
        assert_eq!(config, OverlayConfig::default());
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml_str = r#"
[hotkeys]
memory_toggle = "F9"

[overlay]
show_memory_on_start = true
"#;
        let config: OverlayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.hotkeys.hierarchy_toggle, "1"); // default
        assert_eq!(config.hotkeys.memory_toggle, "F9");
        assert!(config.overlay.show_memory_on_start);
        assert!(!config.overlay.show_hierarchy_on_start);
        assert_eq!(config.memory, MemoryConfig::default());
    }

    #[test]
    fn test_memory_query_from_config() {
        let config = MemoryConfig {
            default_type_name: "Material".to_string(),
            default_module_name: "Core".to_string(),
        };
        assert_eq!(config.query(), TypeQuery::new("Material", "Core"));
    }

    // =============================================================
    // Hotkey validation tests
    // =============================================================

    #[test]
    fn test_unknown_key_reported() {
        let config = HotkeyConfig {
            hierarchy_toggle: "NotAKey".to_string(),
            ..Default::default()
        };
        let warnings = validate_hotkeys(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("hotkeys.hierarchy_toggle"));
    }

    #[test]
    fn test_conflicting_keys_reported() {
        let config = HotkeyConfig {
            hierarchy_toggle: "F3".to_string(),
            memory_toggle: "F3".to_string(),
        };
        let warnings = validate_hotkeys(&config);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("conflicts with hotkeys.hierarchy_toggle"));
    }

    // =============================================================
    // File tests
    // =============================================================

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = OverlayConfig::default();
        config.hotkeys.hierarchy_toggle = "F2".to_string();
        config.overlay.show_hierarchy_on_start = true;

        save_to(&config, &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_invalid_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[hotkeys\nbroken").unwrap();

        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
