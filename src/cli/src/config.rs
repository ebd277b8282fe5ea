use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use cube_sim::PuzzleType;
use log::{debug, info};
use serde::{Deserialize, Serialize};

const CONFIG_DIR: &str = "cubetime";
const CONFIG_FILE: &str = "config.toml";

/// User settings, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Puzzle used when a command doesn't name one.
    pub default_puzzle: PuzzleType,
    /// Draw stickers with terminal colors instead of letters.
    pub color: bool,
    /// Average sizes shown by `stats`.
    pub averages: Vec<usize>,
    /// Overrides the default scramble length of every puzzle.
    pub scramble_length: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_puzzle: PuzzleType::Cube3,
            color: true,
            averages: vec![5, 12, 100],
            scramble_length: None,
        }
    }
}

impl Config {
    /// Load `explicit` if given, otherwise the file in the user's config
    /// directory if there is one, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            return Config::from_file(path);
        }

        match default_path() {
            Some(path) if path.is_file() => Config::from_file(&path),
            _ => {
                debug!(target: "config", "No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Config> {
        info!(target: "config", "Reading configuration from {}", path.display());
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
