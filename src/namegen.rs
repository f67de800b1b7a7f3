//! Name generation strategies for temporary objects.
//!
//! A `NameGen` yields a fresh candidate file name on every call. Uniqueness on
//! disk is not the generator's job; the allocator in `tmpgen` checks each
//! candidate against the filesystem and asks again on collision.

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Something that can produce a dynamically-changing file name string.
pub trait NameGen {
    /// Produce the next candidate name. Never fails.
    fn name(&mut self) -> String;
}

/// Progressively increasing decimal names: `1`, `2`, `3`, ...
#[derive(Debug, Default, Clone)]
pub struct CountNameGen {
    count: u64,
}

impl CountNameGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NameGen for CountNameGen {
    fn name(&mut self) -> String {
        self.count = self.count.saturating_add(1);
        self.count.to_string()
    }
}

/// Random 32-character lowercase hex names (UUID v4, simple form).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidNameGen;

impl UuidNameGen {
    pub fn new() -> Self {
        Self
    }
}

impl NameGen for UuidNameGen {
    fn name(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// User-facing selector for a naming strategy (CLI flags and config file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamerKind {
    /// Sequential counter starting at 1
    Count,
    /// Random unique identifier (default)
    #[default]
    Uuid,
}

impl NamerKind {
    /// Parse common names case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" | "number" | "sequential" => Some(NamerKind::Count),
            "uuid" | "random" => Some(NamerKind::Uuid),
            _ => None,
        }
    }

    /// Build a fresh generator for this strategy.
    pub fn build(self) -> Box<dyn NameGen> {
        match self {
            NamerKind::Count => Box::new(CountNameGen::new()),
            NamerKind::Uuid => Box::new(UuidNameGen::new()),
        }
    }
}

impl fmt::Display for NamerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NamerKind::Count => "count",
            NamerKind::Uuid => "uuid",
        };
        f.write_str(s)
    }
}

impl FromStr for NamerKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid naming strategy: '{s}'"))
    }
}
