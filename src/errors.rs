//! Typed error definitions for tmpgen.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmpGenError {
    #[error("Temporary path was claimed before it could be created: {0}")]
    CreationConflict(PathBuf),

    #[error("Permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },

    #[error("Temporary base directory does not exist: {0}")]
    MissingParent(PathBuf),

    #[error("Failed to {op} '{}': {source}{hint}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        hint: &'static str,
        #[source]
        source: io::Error,
    },
}

impl TmpGenError {
    /// Classify an I/O error raised while creating `path` (a child of `base`).
    pub fn from_io(op: &'static str, path: &Path, base: &Path, e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::AlreadyExists => TmpGenError::CreationConflict(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => TmpGenError::PermissionDenied {
                path: base.to_path_buf(),
                context: format!("cannot {op} '{}'; check ownership and write permissions", path.display()),
            },
            io::ErrorKind::NotFound => TmpGenError::MissingParent(base.to_path_buf()),
            kind => TmpGenError::Io {
                op,
                path: path.to_path_buf(),
                hint: hint_for(kind),
                source: e,
            },
        }
    }

    /// Stable numeric code for scripts and structured logs.
    pub fn code(&self) -> i32 {
        match self {
            TmpGenError::CreationConflict(_) => 17,
            TmpGenError::PermissionDenied { .. } => 13,
            TmpGenError::MissingParent(_) => 2,
            TmpGenError::Io { source, .. } => source.raw_os_error().unwrap_or(1),
        }
    }

    /// Short machine-friendly label used as the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            TmpGenError::CreationConflict(_) => "creation_conflict",
            TmpGenError::PermissionDenied { .. } => "permission_denied",
            TmpGenError::MissingParent(_) => "missing_parent",
            TmpGenError::Io { .. } => "io",
        }
    }
}

fn hint_for(kind: io::ErrorKind) -> &'static str {
    match kind {
        io::ErrorKind::NotADirectory => " (base path is not a directory)",
        io::ErrorKind::ReadOnlyFilesystem => " (read-only filesystem; cannot write here)",
        io::ErrorKind::StorageFull => " (insufficient space on device)",
        _ => "",
    }
}
