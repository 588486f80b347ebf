use std::path::{Path, PathBuf};

use log::debug;

use crate::snapshot::SNAPSHOT_KEY;

const DEFAULT_STORAGE_DIR: &str = ".todolist";
const DEFAULT_CONFIG_NAME: &str = ".todolist.json";
const CONFIG_ENV: &str = "TODOLIST_CONFIG";

#[derive(Debug)]
pub enum ConfigError {
  NoHome,
  Io(std::io::Error),
  Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ConfigError::NoHome => write!(f, "HOME is not set and {} is not given", CONFIG_ENV),
      ConfigError::Io(err) => write!(f, "config io error: {err}"),
      ConfigError::Json(err) => write!(f, "config json error: {err}"),
    }
  }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
  fn from(value: std::io::Error) -> Self {
    ConfigError::Io(value)
  }
}

impl From<serde_json::Error> for ConfigError {
  fn from(value: serde_json::Error) -> Self {
    ConfigError::Json(value)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Config {
  pub storage_dir_path: PathBuf,
  #[serde(default = "default_snapshot_key")]
  pub snapshot_key: String,
}

fn default_snapshot_key() -> String {
  SNAPSHOT_KEY.to_owned()
}

impl Config {
  pub fn with_home(home: &Path) -> Self {
    Self {
      storage_dir_path: home.join(DEFAULT_STORAGE_DIR),
      snapshot_key: default_snapshot_key(),
    }
  }

  /// Reads `$TODOLIST_CONFIG`, falling back to `$HOME/.todolist.json`.
  pub fn load() -> Result<Self, ConfigError> {
    let home = std::env::var_os("HOME").map(PathBuf::from);

    let config_file_path = match std::env::var_os(CONFIG_ENV) {
      Some(file_path) => PathBuf::from(file_path),
      None => home.as_ref().ok_or(ConfigError::NoHome)?.join(DEFAULT_CONFIG_NAME),
    };

    let defaults_root = match &home {
      Some(home) => home.clone(),
      None => config_file_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default(),
    };
    return Self::load_from(&config_file_path, &defaults_root);
  }

  /// Reads the config at `path`, writing defaults rooted at `home` first if
  /// the file does not exist yet.
  pub fn load_from(path: &Path, home: &Path) -> Result<Self, ConfigError> {
    if !path.exists() {
      let config = Self::with_home(home);
      if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
      }
      serde_json::to_writer_pretty(std::fs::File::create(path)?, &config)?;
      debug!("wrote default config to: {}", path.display());
      return Ok(config);
    }

    let config = serde_json::from_reader(std::fs::File::open(path)?)?;
    debug!("loaded config from: {}", path.display());
    return Ok(config);
  }
}
