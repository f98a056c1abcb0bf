// BizDir - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::model::SortOption;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for BizDir configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/bizdir/ or %APPDATA%\BizDir\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[data]` section.
    pub data: DataSection,
    /// `[awards]` section.
    pub awards: AwardsSection,
    /// `[query]` section.
    pub query: QuerySection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[data]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Path of the business data file.
    pub path: Option<String>,
    /// Maximum accepted data file size in bytes.
    pub max_file_size_bytes: Option<u64>,
}

/// `[awards]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct AwardsSection {
    /// Replacement award winner list.
    pub winners: Option<Vec<String>>,
}

/// `[query]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct QuerySection {
    /// Initial sort option, by wire value.
    pub default_sort: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Business data file.
    pub data_path: PathBuf,
    /// Maximum accepted data file size in bytes.
    pub max_data_file_size: u64,
    /// Award winner display names.
    pub award_winners: Vec<String>,
    /// Sort applied before the user picks one.
    pub default_sort: SortOption,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(constants::DEFAULT_DATA_PATH),
            max_data_file_size: constants::DEFAULT_MAX_DATA_FILE_SIZE,
            award_winners: constants::DEFAULT_AWARD_WINNERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_sort: SortOption::Default,
            log_level: None,
        }
    }
}

/// Load and validate a config file.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with the error
/// as a warning so startup continues.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            tracing::warn!(error = %err, "Using default configuration");
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    match parse_config(&content) {
        Ok((config, field_warnings)) => {
            tracing::info!(path = %config_path.display(), "Loaded config.toml");
            warnings.extend(field_warnings);
            if !warnings.is_empty() {
                tracing::warn!(
                    count = warnings.len(),
                    "Config validation produced warnings"
                );
            }
            (config, warnings)
        }
        Err(source) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source,
            };
            tracing::warn!(error = %err, "Using default configuration");
            warnings.push(format!("{err}. Using defaults."));
            (AppConfig::default(), warnings)
        }
    }
}

/// Load a config file the user named explicitly.
///
/// Unlike `load_config`, a missing, unreadable or unparseable file is an
/// error. Per-field validation problems are still returned as warnings.
pub fn load_config_strict(config_path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;

    let loaded = parse_config(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    Ok(loaded)
}

/// Parse and validate config text, accumulating a warning per rejected field.
pub fn parse_config(content: &str) -> Result<(AppConfig, Vec<String>), toml::de::Error> {
    let raw: RawConfig = toml::from_str(content)?;
    let mut warnings = Vec::new();
    let mut config = AppConfig::default();

    // -- Data: path --
    if let Some(ref path) = raw.data.path {
        if path.trim().is_empty() {
            warnings.push(format!(
                "[data] path is empty. Using default ({}).",
                constants::DEFAULT_DATA_PATH
            ));
        } else {
            config.data_path = PathBuf::from(path);
        }
    }

    // -- Data: max_file_size_bytes --
    if let Some(size) = raw.data.max_file_size_bytes {
        if (constants::MIN_MAX_DATA_FILE_SIZE..=constants::ABSOLUTE_MAX_DATA_FILE_SIZE)
            .contains(&size)
        {
            config.max_data_file_size = size;
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[data] max_file_size_bytes".to_string(),
                    value: size.to_string(),
                    expected: format!(
                        "{}-{} (using default {})",
                        constants::MIN_MAX_DATA_FILE_SIZE,
                        constants::ABSOLUTE_MAX_DATA_FILE_SIZE,
                        constants::DEFAULT_MAX_DATA_FILE_SIZE,
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Awards: winners --
    if let Some(winners) = raw.awards.winners {
        let names: Vec<String> = winners
            .into_iter()
            .filter(|w| !w.trim().is_empty())
            .collect();
        if names.is_empty() {
            warnings.push(
                "[awards] winners is empty. Using the built-in award winner list.".to_string(),
            );
        } else if names.len() > constants::MAX_AWARD_WINNERS {
            warnings.push(format!(
                "[awards] winners has {} names, exceeds maximum of {}. \
                 Using the built-in award winner list.",
                names.len(),
                constants::MAX_AWARD_WINNERS
            ));
        } else {
            config.award_winners = names;
        }
    }

    // -- Query: default_sort --
    if let Some(ref sort) = raw.query.default_sort {
        match sort.parse::<SortOption>() {
            Ok(opt) => config.default_sort = opt,
            Err(e) => warnings.push(format!("[query] default_sort: {e}. Using default.")),
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    Ok((config, warnings))
}
