use crate::error::CompilerError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: ReportFormat,
    /// Program checked when no path is given on the command line.
    #[serde(default)]
    pub sample_path: Option<PathBuf>,
}

fn default_log_level() -> String {
    String::from("warn")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_log_level(),
            format: ReportFormat::default(),
            sample_path: None,
        }
    }
}

impl Config {
    /// Load the config file for the current environment, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self, CompilerError> {
        Self::load_from(&Self::get_config_path())
    }

    /// Apply a `CMINI_FORMAT` style override. Unknown values leave the
    /// format untouched and come back as the error.
    pub fn apply_format_override(&mut self, value: &str) -> Result<ReportFormat, String> {
        let format = ReportFormat::from_str(value.trim(), true)?;
        self.format = format;
        Ok(format)
    }

    pub fn load_from(path: &Path) -> Result<Self, CompilerError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(CompilerError::IO(e)),
        };

        serde_json::from_str(&contents).map_err(|source| CompilerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), CompilerError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(|source| CompilerError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn env_name() -> String {
        env::var("CMINI_ENV").unwrap_or_else(|_| String::from("default"))
    }

    pub fn get_config_path() -> PathBuf {
        let home = if cfg!(windows) {
            env::var("USERPROFILE")
        } else {
            env::var("HOME")
        };
        Self::resolve_config_path(env::var("CMINI_CONFIG").ok(), &Self::env_name(), home.ok())
    }

    /// `custom` wins outright; otherwise `<home>/.cmini/<env_name>/config.json`.
    pub fn resolve_config_path(custom: Option<String>, env_name: &str, home: Option<String>) -> PathBuf {
        if let Some(custom_path) = custom {
            return PathBuf::from(custom_path);
        }

        PathBuf::from(home.unwrap_or_else(|| String::from(".")))
            .join(".cmini")
            .join(env_name)
            .join("config.json")
    }
}
