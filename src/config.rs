use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    /// Package clause of the generated file
    pub pkg_name: String,
    /// Struct tag key mapping fields back to column names. Empty disables tags.
    pub tag_label: String,
    /// Full `mysql://` URL, takes precedence over host/port/credentials
    pub connection_string: Option<String>,
}

/// The part of [`Config`] the code generator itself reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub package_name: String,
    pub tag_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            db_user: "db_user".to_string(),
            db_password: "db_pw".to_string(),
            db_name: "bd_name".to_string(),
            pkg_name: "DbStructs".to_string(),
            tag_label: "db".to_string(),
            connection_string: None,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Config::default().generation()
    }
}

impl Config {
    /// Load a config file. `.toml` files are parsed as TOML, anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_err = |message: String| Error::Config {
            path: path.to_path_buf(),
            message,
        };

        let src = fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => toml::from_str(&src).map_err(|e| config_err(e.to_string()))?,
            _ => serde_json::from_str(&src).map_err(|e| config_err(e.to_string()))?,
        };

        log::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    pub fn generation(&self) -> GenerationConfig {
        GenerationConfig {
            package_name: self.pkg_name.clone(),
            tag_label: self.tag_label.clone(),
        }
    }
}
