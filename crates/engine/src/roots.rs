// crates/engine/src/roots.rs
//! Root directory normalization.
//!
//! Paths are compared as given (component-wise `Path` equality). Nothing is
//! canonicalized, so `src` and `./src/../src` are distinct roots.

use hashbrown::HashSet;
use std::path::{Path, PathBuf};

use crate::config::{Config, Resource};

/// Deduplicate the source directory and resource directories, keeping the
/// first occurrence of each path.
#[must_use]
pub fn normalize(source: Option<&Path>, resources: &[Resource]) -> Vec<PathBuf> {
    let mut seen: HashSet<&Path> = HashSet::new();
    source
        .into_iter()
        .chain(resources.iter().map(|r| r.directory.as_path()))
        .filter(|path| seen.insert(*path))
        .map(Path::to_path_buf)
        .collect()
}

/// Roots a run over `config` will traverse.
#[must_use]
pub fn roots_for(config: &Config) -> Vec<PathBuf> {
    let source = config
        .count_source
        .then_some(config.source_directory.as_path());
    normalize(source, &config.resources)
}
