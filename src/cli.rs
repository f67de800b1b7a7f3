//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - `--number`/`--uuid` and `--file`/`--directory` are mutually exclusive pairs.
//! - `-d` means `--directory`; debug logging is `--debug` (long form only).

use clap::{ArgGroup, Parser};

use crate::config::types::{Config, LogLevel};
use crate::namegen::NamerKind;
use crate::tmpgen::ObjectKind;

/// A utility to create temporary files and/or directories.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "A utility to create temporary files and/or directories"
)]
#[command(group(ArgGroup::new("naming").args(["number", "uuid"])))]
#[command(group(ArgGroup::new("object").args(["file", "directory"])))]
pub struct Args {
    /// Use a deterministic, numerically increasing value as the temporary object's name.
    #[arg(short = 'n', long)]
    pub number: bool,

    /// Use a non-deterministic universally-unique identifier as the temporary object's name.
    #[arg(short = 'u', long)]
    pub uuid: bool,

    /// Create a temporary file; a single buffer of text.
    #[arg(short = 'f', long)]
    pub file: bool,

    /// Create a temporary directory; a folder which may hold a dynamic number of files.
    #[arg(short = 'd', long)]
    pub directory: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(long, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where tmpgen will look for the config file (or TMPGEN_CONFIG if set), then exit.
    #[arg(long, help = "Print the config file location used by tmpgen and exit")]
    pub print_config: bool,
}

impl Args {
    /// Naming strategy explicitly requested on the command line, if any.
    pub fn namer_kind(&self) -> Option<NamerKind> {
        if self.number {
            Some(NamerKind::Count)
        } else if self.uuid {
            Some(NamerKind::Uuid)
        } else {
            None
        }
    }

    /// Object type to create; files unless `--directory` was given.
    pub fn object_kind(&self) -> ObjectKind {
        if self.directory {
            ObjectKind::Directory
        } else {
            ObjectKind::File
        }
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(kind) = self.namer_kind() {
            cfg.naming = kind;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.json {
            cfg.json = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
