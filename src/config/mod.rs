//! Config module.
//! Provides configuration types, default paths and XML loading.
//! The temporary base directory is fixed and deliberately absent from `Config`.

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{CONFIG_ENV, default_config_path, path_has_symlink_ancestor};
pub use types::{Config, LogLevel};
pub use xml::{load_config, load_config_from_xml_path};
