// Source Root
//
// Resolves a map's `sourceRoot` against the artifact it belongs to.

use crate::file_system::{dirname, realpath, resolve, AbsoluteFsPath};
use once_cell::sync::OnceCell;

/// Canonical directory `source_root` refers to, relative to the directory of
/// `file`, with symbolic links resolved.
///
/// `None` when the root is empty, does not exist, or cannot be accessed.
pub fn compute_source_root(source_root: Option<&str>, file: &str) -> Option<AbsoluteFsPath> {
    let root = source_root.filter(|root| !root.is_empty())?;
    let target = resolve(&dirname(file), &[root]);
    match realpath(&target) {
        Ok(real) => Some(real),
        Err(err) => {
            tracing::trace!(target: "devmap::sourcemap", "source root {} unavailable: {}", target, err);
            None
        }
    }
}

/// A source root computed on first demand and shared by every requester.
///
/// Concurrent callers block until the single resolution finishes and all
/// observe the same outcome.
pub struct LazySourceRoot<'a> {
    source_root: Option<&'a str>,
    file: &'a str,
    resolved: OnceCell<Option<AbsoluteFsPath>>,
}

impl<'a> LazySourceRoot<'a> {
    pub fn new(source_root: Option<&'a str>, file: &'a str) -> Self {
        Self {
            source_root,
            file,
            resolved: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Option<&AbsoluteFsPath> {
        self.resolved
            .get_or_init(|| compute_source_root(self.source_root, self.file))
            .as_ref()
    }

    /// Whether a requester has already forced the resolution.
    pub fn is_computed(&self) -> bool {
        self.resolved.get().is_some()
    }
}
