use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_report_dir")]
    pub report_dir: String,
    #[serde(default = "default_weekly_target")]
    pub weekly_target_hours: f64,
}

fn default_log_file() -> String {
    Config::log_file_default().to_string_lossy().to_string()
}
fn default_report_dir() -> String {
    ".".to_string()
}
fn default_weekly_target() -> f64 {
    40.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            report_dir: default_report_dir(),
            weekly_target_hours: default_weekly_target(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("worklog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".worklog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("worklog.conf")
    }

    /// Default location of the JSON work log
    pub fn log_file_default() -> PathBuf {
        Self::config_dir().join("work_log.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?cfg, "configuration loaded");
        Ok(cfg)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    pub fn report_path(&self) -> PathBuf {
        expand_tilde(&self.report_dir)
    }

    /// Initialize the configuration directory, the config file and an empty log.
    ///
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_log: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Log file: user provided (relative to the working directory, like
        // every other command's --log) or default
        let log_path = match custom_log {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { env::current_dir()?.join(p) }
            }
            None => Self::log_file_default(),
        };

        let config = Config {
            log_file: log_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(config)
    }
}
