//! Unique temporary path allocation.
//!
//! `TmpGen` pairs a [`NameGen`] with the base directory and keeps asking for
//! names until one does not collide with an existing entry. The result can be
//! returned as a bare path or materialized as an empty file or directory.
//!
//! Notes:
//! - Only candidate selection is retried. A collision discovered at creation
//!   time (another actor created the path after our existence check) surfaces as
//!   [`TmpGenError::CreationConflict`] and is not retried.
//! - Nothing here coordinates with other processes; the check-then-create
//!   window is an accepted limitation.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

use crate::errors::TmpGenError;
use crate::namegen::{NameGen, NamerKind, UuidNameGen};

/// The global (system-wide) temporary folder.
pub const SYSTEM_TMP_HOME: &str = "/tmp";

/// What kind of filesystem object to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectKind {
    #[default]
    File,
    Directory,
}

/// Temporary file/directory generator.
pub struct TmpGen {
    namer: Box<dyn NameGen>,
    base: PathBuf,
}

impl Default for TmpGen {
    fn default() -> Self {
        Self::new(Box::new(UuidNameGen::new()))
    }
}

impl fmt::Debug for TmpGen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmpGen").field("base", &self.base).finish_non_exhaustive()
    }
}

impl TmpGen {
    /// Allocator under [`SYSTEM_TMP_HOME`] using the given naming strategy.
    pub fn new(namer: Box<dyn NameGen>) -> Self {
        Self::with_base(namer, SYSTEM_TMP_HOME)
    }

    /// Allocator under [`SYSTEM_TMP_HOME`] using a freshly built strategy.
    pub fn from_kind(kind: NamerKind) -> Self {
        Self::new(kind.build())
    }

    /// Allocator rooted at an explicit directory instead of the system one.
    /// Used by tests to exercise failure modes against a scratch directory.
    pub fn with_base(namer: Box<dyn NameGen>, base: impl Into<PathBuf>) -> Self {
        Self {
            namer,
            base: base.into(),
        }
    }

    /// Directory under which every temporary object is allocated.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Return a child path of the base that does not currently exist.
    ///
    /// Does not create anything. Loops until the generator yields a free name.
    pub fn unique_path(&mut self) -> PathBuf {
        let mut collisions = 0u64;
        loop {
            let candidate = self.base.join(self.namer.name());
            // symlink_metadata so a dangling symlink still counts as taken
            if fs::symlink_metadata(&candidate).is_err() {
                if collisions > 0 {
                    debug!(collisions, path = %candidate.display(), "tmpgen: found free name after collisions");
                }
                return candidate;
            }
            collisions = collisions.saturating_add(1);
            trace!(path = %candidate.display(), "tmpgen: candidate exists, trying another name");
        }
    }

    /// Create a new empty temporary file and return its path.
    pub fn tmp_file(&mut self) -> Result<PathBuf, TmpGenError> {
        self.make(ObjectKind::File)
    }

    /// Create a new empty temporary directory and return its path.
    pub fn tmp_dir(&mut self) -> Result<PathBuf, TmpGenError> {
        self.make(ObjectKind::Directory)
    }

    /// Allocate a unique path and materialize it as `kind`.
    pub fn make(&mut self, kind: ObjectKind) -> Result<PathBuf, TmpGenError> {
        let target = self.unique_path();
        match kind {
            ObjectKind::File => {
                // create_new: never truncate something that appeared after the check
                OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&target)
                    .map_err(|e| TmpGenError::from_io("create file", &target, &self.base, e))?;
                info!(path = %target.display(), "Created temporary file");
            }
            ObjectKind::Directory => {
                fs::create_dir(&target)
                    .map_err(|e| TmpGenError::from_io("create directory", &target, &self.base, e))?;
                info!(path = %target.display(), "Created temporary directory");
            }
        }
        Ok(target)
    }
}

/// Easy-access getter for a temporary file under the system temp folder.
pub fn tmp_file() -> Result<PathBuf, TmpGenError> {
    TmpGen::default().tmp_file()
}

/// Easy-access getter for a temporary directory under the system temp folder.
pub fn tmp_dir() -> Result<PathBuf, TmpGenError> {
    TmpGen::default().tmp_dir()
}
