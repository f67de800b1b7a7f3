//! Core library for `tmpgen`.
//!
//! Creates uniquely named temporary files and directories under the system
//! temporary folder. Naming is pluggable through the [`NameGen`] trait; the
//! [`TmpGen`] allocator retries names until one is free, then creates it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod namegen;
pub mod output;
pub mod tmpgen;

pub use config::{Config, LogLevel, default_config_path, path_has_symlink_ancestor};
pub use errors::TmpGenError;
pub use namegen::{CountNameGen, NameGen, NamerKind, UuidNameGen};
pub use tmpgen::{ObjectKind, SYSTEM_TMP_HOME, TmpGen, tmp_dir, tmp_file};

/// Prelude with the types most callers need.
pub mod prelude {
    pub use crate::errors::TmpGenError;
    pub use crate::namegen::{CountNameGen, NameGen, NamerKind, UuidNameGen};
    pub use crate::tmpgen::{ObjectKind, TmpGen};
}
