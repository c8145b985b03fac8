use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

pub const PATH_VAR: &str = "PATH";
pub const JAVA_HOME_VAR: &str = "JAVA_HOME";
pub const LOCAL_APP_DATA_VAR: &str = "LOCALAPPDATA";

/// Read-only view of environment variables used by the discovery sources.
pub trait Environment {
    fn var_os(&self, key: &str) -> Option<OsString>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed set of variables, for embedders that sandbox discovery and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, OsString>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl AsRef<OsStr>) -> Self {
        self.vars.insert(key.into(), value.as_ref().to_os_string());
        self
    }
}

impl Environment for StaticEnvironment {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
