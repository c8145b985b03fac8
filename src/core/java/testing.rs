//! Test doubles shared by the discovery tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::probe::JavaProbe;

/// Serializes tests that write and then exec scripts. A fork from another
/// test thread can inherit the script's write fd and make exec fail with
/// ETXTBSY.
pub fn script_lock() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shell line printing a JVM banner on stderr.
pub fn banner_script(version: &str) -> String {
    format!("echo 'openjdk version \"{version}\" 2022-01-18' >&2")
}

/// Writes an executable `java` shell script into `dir` and returns its path.
#[cfg(unix)]
pub fn write_fake_java(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(dir).unwrap();
    let java = dir.join("java");
    std::fs::write(&java, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755)).unwrap();
    java
}

/// Answers from a fixed table and records every candidate it was asked about.
#[derive(Debug, Default)]
pub struct FakeProbe {
    versions: HashMap<PathBuf, u32>,
    calls: RefCell<Vec<PathBuf>>,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, candidate: impl Into<PathBuf>, major: u32) -> Self {
        self.versions.insert(candidate.into(), major);
        self
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl JavaProbe for FakeProbe {
    fn probe(&self, candidate: &Path) -> Option<u32> {
        self.calls.borrow_mut().push(candidate.to_path_buf());
        self.versions.get(candidate).copied()
    }
}
