//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/shelfmap/config.toml` or `$XDG_CONFIG_HOME/shelfmap/config.toml`)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::ShelfError;
use crate::layout::Layout;
use crate::shelf::{Pose, ShelfGeometry};

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Rows and slots per position.
    pub layout: Layout,
    /// Physical shelf dimensions used for pose output.
    pub geometry: ShelfGeometry,
    /// Text printed for an empty slot.
    pub empty_marker: String,
    /// Output one JSON object per slot.
    pub json_output: bool,
    /// Print the resolved work order after the grid.
    pub show_work_order: bool,
    /// Print bin poses after the grid.
    pub show_poses: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            layout: Layout::default(),
            geometry: ShelfGeometry::default(),
            empty_marker: "None".to_string(),
            json_output: false,
            show_work_order: false,
            show_poses: false,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, ShelfError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config file");
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config)?;
        } else if cli.config.is_some() {
            return Err(ShelfError::Config(format!(
                "config file {} does not exist",
                config_path.display()
            )));
        }

        // CLI overrides
        if let Some(color) = cli.color {
            config.color_mode = color;
        }
        if let Some(rows) = cli.rows {
            config.layout.rows = rows;
        }
        if let Some(slots) = cli.slots {
            config.layout.slots = slots;
        }
        if let Some(ref marker) = cli.empty_marker {
            config.empty_marker.clone_from(marker);
        }

        config.json_output = cli.json;
        config.show_work_order = cli.work_order;
        config.show_poses = cli.poses;

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/shelfmap/config.toml` or `~/.config/shelfmap/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("shelfmap").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("shelfmap")
                .join("config.toml")
        } else {
            PathBuf::from(".config/shelfmap/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) -> Result<(), ShelfError> {
        if let Some(color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(rows) = file.rows {
            if rows == 0 {
                return Err(ShelfError::Config("rows must be at least 1".to_string()));
            }
            self.layout.rows = rows;
        }

        if let Some(slots) = file.slots {
            if slots == 0 {
                return Err(ShelfError::Config("slots must be at least 1".to_string()));
            }
            self.layout.slots = slots;
        }

        if let Some(marker) = file.empty_marker {
            self.empty_marker = marker;
        }

        if let Some(shelf) = file.shelf {
            if let Some(origin) = shelf.origin {
                self.geometry.origin = Pose::from_array(origin);
            }
            if let Some(width) = shelf.bin_width {
                self.geometry.bin_width = width;
            }
            if let Some(height) = shelf.bin_height {
                self.geometry.bin_height = height;
            }
            if let Some(depth) = shelf.bin_depth {
                self.geometry.bin_depth = depth;
            }
            if let Some(distance) = shelf.security_distance {
                self.geometry.security_distance = distance;
            }
        }

        Ok(())
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    color: Option<String>,
    rows: Option<usize>,
    slots: Option<usize>,
    empty_marker: Option<String>,
    shelf: Option<ShelfConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ShelfConfig {
    origin: Option<[f64; 6]>,
    bin_width: Option<f64>,
    bin_height: Option<f64>,
    bin_depth: Option<f64>,
    security_distance: Option<f64>,
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self, ShelfError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ShelfError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
