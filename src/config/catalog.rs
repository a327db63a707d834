//! Catalog seeding configuration from config.toml.
//!
//! The categories defined in config.toml are used to seed the database on
//! first run or when categories are missing. Parents must be listed before
//! their children so they can be resolved by name.

use crate::errors::{Error, Result};
use crate::entities::enums::ProductKind;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of categories to seed
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

/// Configuration for a single category
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    /// Name of the category
    pub name: String,
    /// Which product table the category targets
    pub kind: ProductKind,
    /// Parent category name, absent for top-level entries
    pub parent: Option<String>,
}

/// Loads catalog configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML syntax is
/// invalid, or required fields are missing.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads catalog configuration from the default location (./config.toml).
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
