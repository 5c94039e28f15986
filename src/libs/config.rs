//! Configuration management for application settings.
//!
//! Handles the persistent settings that shape command behavior: the default
//! attorney applied when no `--attorney` flag is given, and the directory
//! that default-named export files are written into. Settings live in a JSON
//! file in the platform data directory and are edited through an interactive
//! setup wizard.
//!
//! ## Core Features
//!
//! - **Optional Modules**: each settings group can be configured independently
//! - **Interactive Setup**: guided wizard with existing values as defaults
//! - **Cross-Platform Persistence**: storage follows OS data-directory conventions
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use lextrack::libs::config::Config;
//!
//! fn run() -> anyhow::Result<()> {
//!     let config = Config::read()?;
//!     if let Some(attorney) = &config.attorney {
//!         println!("Default attorney: {}", attorney);
//!     }
//!     Ok(())
//! }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module in the setup wizard.
///
/// Each module has a unique key for internal routing and a human-readable
/// name shown in the selection list.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Export destination settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    /// Directory that default-named export files are written into.
    ///
    /// An explicit `--output` path on the export command bypasses this
    /// directory entirely.
    pub directory: String,
}

/// Main configuration container for the application.
///
/// Every field is optional so the application runs with an empty or missing
/// configuration file. The `skip_serializing_if` attributes keep unset
/// groups out of the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    /// Default attorney name applied when no `--attorney` flag is given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attorney: Option<String>,

    /// Export destination settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Default for Config {
    /// Creates a configuration with no defaults set.
    fn default() -> Self {
        Config { attorney: None, export: None }
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error; it yields the default configuration
    /// so commands work before `init` has ever run.
    ///
    /// ## File Location
    ///
    /// - **Windows**: `%LOCALAPPDATA%\juristools\lextrack\config.json`
    /// - **macOS**: `~/Library/Application Support/juristools/lextrack/config.json`
    /// - **Linux**: `~/.local/share/juristools/lextrack/config.json`
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lextrack::libs::config::{Config, ExportConfig};
    ///
    /// fn run() -> anyhow::Result<()> {
    ///     let mut config = Config::read()?;
    ///     config.export = Some(ExportConfig { directory: "exports".to_string() });
    ///     config.save()?;
    ///     Ok(())
    /// }
    /// ```
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if one exists.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration setup wizard.
    ///
    /// Presents a multi-select list of settings groups, then prompts for the
    /// values of each selected group with current values pre-filled. Entering
    /// an empty value clears the setting. The updated configuration is
    /// returned for the caller to save.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lextrack::libs::config::Config;
    ///
    /// fn run() -> anyhow::Result<()> {
    ///     let config = Config::init()?;
    ///     config.save()?;
    ///     Ok(())
    /// }
    /// ```
    pub fn init() -> Result<Self> {
        // Existing values become the wizard defaults
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![
            ConfigModule {
                key: "defaults".to_string(),
                name: "Defaults".to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: "Export".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "defaults" => {
                    msg_print!(Message::ConfigModuleDefaults);
                    let default = config.attorney.clone().unwrap_or_default();
                    let attorney: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultAttorney.to_string())
                        .default(default)
                        .allow_empty(true)
                        .interact_text()?;
                    config.attorney = if attorney.trim().is_empty() { None } else { Some(attorney.trim().to_string()) };
                }
                "export" => {
                    msg_print!(Message::ConfigModuleExport);
                    let default = config.export.clone().map(|export| export.directory).unwrap_or_default();
                    let directory: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExportDirectory.to_string())
                        .default(default)
                        .allow_empty(true)
                        .interact_text()?;
                    config.export = if directory.trim().is_empty() {
                        None
                    } else {
                        Some(ExportConfig {
                            directory: directory.trim().to_string(),
                        })
                    };
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
