use crate::core::ReconcilePolicy;
use crate::errors::{AppError, AppResult};
use crate::export::CsvQuoting;
use crate::provider::upload::DEFAULT_MAX_UPLOAD_MB;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Read captured answers from `<upload>.json` sidecar files.
    #[default]
    Replay,
    /// Run `provider_command` with `provider_args`.
    Command,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub provider_command: Option<String>,
    #[serde(default)]
    pub provider_args: Vec<String>,
    #[serde(default)]
    pub replay_dir: Option<String>,
    #[serde(default = "default_break_minutes")]
    pub default_break_minutes: u32,
    /// `None` → fixed Mon–Fri week, `Some(n)` → n days from the start date.
    #[serde(default)]
    pub period_days: Option<u8>,
    #[serde(default)]
    pub csv_quoting: CsvQuoting,
    #[serde(default = "default_low_confidence")]
    pub low_confidence: f64,
    #[serde(default = "default_medium_confidence")]
    pub medium_confidence: f64,
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,
}

fn default_break_minutes() -> u32 {
    30
}
fn default_low_confidence() -> f64 {
    0.5
}
fn default_medium_confidence() -> f64 {
    0.8
}
fn default_max_upload_mb() -> u64 {
    DEFAULT_MAX_UPLOAD_MB
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    fn with_database(database: String) -> Self {
        Self {
            database,
            provider: ProviderKind::default(),
            provider_command: None,
            provider_args: Vec::new(),
            replay_dir: None,
            default_break_minutes: default_break_minutes(),
            period_days: None,
            csv_quoting: CsvQuoting::default(),
            low_confidence: default_low_confidence(),
            medium_confidence: default_medium_confidence(),
            max_upload_mb: default_max_upload_mb(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn reconcile_policy(&self) -> ReconcilePolicy {
        ReconcilePolicy {
            default_break_minutes: self.default_break_minutes,
        }
    }

    /// Initialize configuration and database files.
    ///
    /// In test mode the configuration file is left untouched.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = PathBuf::from(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path.to_string_lossy().to_string());

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
