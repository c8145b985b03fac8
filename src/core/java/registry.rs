use std::collections::btree_map;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::paths::Platform;
use super::probe::JavaProbe;

/// Java executables found on this machine, grouped by major version.
///
/// Each version keeps its executables in discovery order, without
/// duplicates. The same executable may appear under two versions if two
/// probes disagreed about it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct JavaInstallations {
    by_major: BTreeMap<u32, Vec<PathBuf>>,
}

impl JavaInstallations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probes `<dir>/java[.exe]` and records it if it answers with a version.
    pub fn test(&mut self, dir: &Path, platform: Platform, probe: &dyn JavaProbe) {
        let candidate = dir.join(platform.java_exe());
        let Some(major) = probe.probe(&candidate) else {
            return;
        };

        debug!("Found Java {} at {:?}", major, candidate);
        self.add(candidate, major);
    }

    pub fn add(&mut self, path: PathBuf, major: u32) {
        match self.by_major.entry(major) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(vec![path]);
            }
            btree_map::Entry::Occupied(mut entry) => {
                let found = entry.get_mut();
                if !found.contains(&path) {
                    found.push(path);
                }
            }
        }
    }

    pub fn get(&self, major: u32) -> Option<&[PathBuf]> {
        self.by_major.get(&major).map(Vec::as_slice)
    }

    /// Major versions found, ascending.
    pub fn versions(&self) -> impl Iterator<Item = u32> + '_ {
        self.by_major.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[PathBuf])> {
        self.by_major
            .iter()
            .map(|(major, paths)| (*major, paths.as_slice()))
    }

    /// Number of distinct major versions.
    pub fn len(&self) -> usize {
        self.by_major.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_major.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<u32, Vec<PathBuf>> {
        self.by_major
    }
}

impl IntoIterator for JavaInstallations {
    type Item = (u32, Vec<PathBuf>);
    type IntoIter = btree_map::IntoIter<u32, Vec<PathBuf>>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_major.into_iter()
    }
}
