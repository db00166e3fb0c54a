use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub defects: DefectsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default = "default_true")]
    pub show_info_panel: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefectsConfig {
    /// Optional explicit defect catalog file; searched first when set.
    pub config_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit each completed record as a JSON line on stdout.
    #[serde(default = "default_true")]
    pub echo_json: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            show_info_panel: true,
        }
    }
}

impl Default for DefectsConfig {
    fn default() -> Self {
        Self { config_file: None }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { echo_json: true }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            defects: DefectsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Get the path to the config file
pub fn config_path() -> PathBuf {
    let config_dir = directories::ProjectDirs::from("", "", "defect-logger")
        .expect("Failed to determine config directory")
        .config_dir()
        .to_path_buf();
    config_dir.join("config.toml")
}

/// Load configuration from file, or return default if file doesn't exist
pub fn load_config() -> AppConfig {
    let path = config_path();
    if path.exists() {
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse config file: {}. Using defaults.", e);
                    AppConfig::default()
                }
            },
            Err(e) => {
                eprintln!("Failed to read config file: {}. Using defaults.", e);
                AppConfig::default()
            }
        }
    } else {
        AppConfig::default()
    }
}

/// Save configuration to file
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    let path = config_path();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;
    }

    let toml = toml::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(&path, toml).map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}
