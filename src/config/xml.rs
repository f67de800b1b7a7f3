//! XML configuration support.
//! - Loads settings from config.xml (quick_xml).
//! - A missing file means defaults; malformed files and unknown fields are errors.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};
use crate::namegen::NamerKind;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "naming")]
    naming: Option<String>,
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
}

// Map XmlConfig -> Config; bad enum values are rejected rather than ignored.
fn xml_to_config(parsed: XmlConfig, path: &Path) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.naming.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        match NamerKind::parse(s) {
            Some(kind) => cfg.naming = kind,
            None => bail!("invalid <naming> '{s}' in '{}'; expected count or uuid", path.display()),
        }
    }
    if let Some(s) = parsed.log_level.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        match LogLevel::parse(s) {
            Some(level) => cfg.log_level = level,
            None => bail!(
                "invalid <log_level> '{s}' in '{}'; expected quiet, normal, info or debug",
                path.display()
            ),
        }
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let trimmed = s.trim();
        if !trimmed.is_empty() {
            cfg.log_file = Some(PathBuf::from(trimmed));
        }
    }

    Ok(cfg)
}

/// Load a Config from a specific XML file path (quick_xml).
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_config(parsed, path)
}

/// Load the config in use (see [`default_config_path`]); defaults if the file is absent.
pub fn load_config() -> Result<Config> {
    let Some(path) = default_config_path() else {
        debug!("No config location could be determined; using defaults");
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_from_xml_path(&path)
}
